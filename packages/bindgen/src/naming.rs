//! Identifier conventions for generated code

use std::collections::HashSet;

/// Rust keywords (strict and reserved) that cannot be used as plain identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Names taken by the generated facade types themselves.
const FACADE_METHODS: &[&str] = &[
    "new", "address", "bound", "from_bound", "fallback", "receive",
];

/// `transferFrom` -> `transfer_from`, `_wad` -> `wad`, `ERC20Name` -> `erc20_name`.
pub fn snake_case(name: &str) -> String {
    let trimmed = name.trim_start_matches('_');
    let chars: Vec<char> = trimmed.chars().collect();
    let mut out = String::with_capacity(trimmed.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `delayed_weth` / `delayedWeth` -> `DelayedWeth`; existing capitals are kept.
pub fn pascal_case(name: &str) -> String {
    name.trim_start_matches('_')
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// `DelayedWETH` -> `DELAYED_WETH`.
pub fn upper_snake_case(name: &str) -> String {
    snake_case(name).to_ascii_uppercase()
}

/// A parameter or field identifier; unnamed entries become `arg{position}`.
pub fn param_ident(name: &str, position: usize) -> String {
    let snake = snake_case(name);
    if snake.is_empty() {
        return format!("arg{position}");
    }
    escape(snake)
}

/// A method identifier on a generated facade.
pub fn method_ident(name: &str) -> String {
    let snake = snake_case(name);
    if FACADE_METHODS.contains(&snake.as_str()) {
        return format!("{snake}_");
    }
    escape(snake)
}

/// Identifiers already handed out within one scope.
///
/// Snake-casing is lossy (`setX` and `set_x` both become `set_x`), so every
/// generated name is claimed here; a repeat gets the first free numeric suffix,
/// the same scheme the descriptor uses for overload keys.
#[derive(Debug, Default)]
pub struct IdentSet {
    taken: HashSet<String>,
}

impl IdentSet {
    /// Claim `ident`, or `{ident}{n}` for the smallest free `n` when it is taken.
    pub fn claim(&mut self, ident: String) -> String {
        if self.taken.insert(ident.clone()) {
            return ident;
        }
        let mut n = 0;
        loop {
            let candidate = format!("{ident}{n}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

fn escape(ident: String) -> String {
    if KEYWORDS.contains(&ident.as_str()) {
        format!("{ident}_")
    } else {
        ident
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("transferFrom"), "transfer_from");
        assert_eq!(snake_case("balanceOf"), "balance_of");
        assert_eq!(snake_case("_wad"), "wad");
        assert_eq!(snake_case("DelayedWETH"), "delayed_weth");
        assert_eq!(snake_case("ERC20Name"), "erc20_name");
        assert_eq!(snake_case("withdraw0"), "withdraw0");
        assert_eq!(snake_case("vetoer_"), "vetoer_");
        assert_eq!(snake_case("callHash"), "call_hash");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("withdrawals"), "Withdrawals");
        assert_eq!(pascal_case("ownership_transferred"), "OwnershipTransferred");
        assert_eq!(pascal_case("balanceOf"), "BalanceOf");
    }

    #[test]
    fn test_upper_snake_case() {
        assert_eq!(upper_snake_case("DelayedWETH"), "DELAYED_WETH");
        assert_eq!(upper_snake_case("DelayedVetoable"), "DELAYED_VETOABLE");
    }

    #[test]
    fn test_idents_are_escaped() {
        assert_eq!(param_ident("type", 0), "type_");
        assert_eq!(param_ident("", 2), "arg2");
        assert_eq!(param_ident("_", 1), "arg1");
        assert_eq!(method_ident("new"), "new_");
        assert_eq!(method_ident("receive"), "receive_");
        assert_eq!(method_ident("transferOwnership"), "transfer_ownership");
    }

    #[test]
    fn test_colliding_idents_get_suffixes() {
        let mut set = IdentSet::default();
        assert_eq!(set.claim(method_ident("setX")), "set_x");
        assert_eq!(set.claim(method_ident("set_x")), "set_x0");
        assert_eq!(set.claim(method_ident("set_x0")), "set_x00");
        assert_eq!(set.claim(method_ident("_setX")), "set_x1");
        assert_eq!(set.claim(method_ident("setY")), "set_y");
    }
}
