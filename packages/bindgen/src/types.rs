//! Solidity to Rust type mapping for generated signatures

use alloy::dyn_abi::DynSolType;

/// Widest tuple with native conversions; wider ones stay dynamic.
const MAX_TUPLE: usize = 6;

/// The Rust type a generated binding uses for `ty`.
///
/// Integers up to 64 bits use the next native width; wider ones use
/// `U256`/`I256`. Arrays map to `Vec`/arrays and tuples to Rust tuples.
pub fn rust_type(ty: &DynSolType) -> String {
    match ty {
        DynSolType::Address => "Address".into(),
        DynSolType::Bool => "bool".into(),
        DynSolType::String => "String".into(),
        DynSolType::Bytes => "Bytes".into(),
        DynSolType::FixedBytes(size) => format!("FixedBytes<{size}>"),
        DynSolType::Uint(bits) => match native_width(*bits) {
            Some(width) => format!("u{width}"),
            None => "U256".into(),
        },
        DynSolType::Int(bits) => match native_width(*bits) {
            Some(width) => format!("i{width}"),
            None => "I256".into(),
        },
        DynSolType::Array(inner) => format!("Vec<{}>", rust_type(inner)),
        DynSolType::FixedArray(inner, len) => format!("[{}; {len}]", rust_type(inner)),
        DynSolType::Tuple(members) if members.len() > MAX_TUPLE => "DynSolValue".into(),
        DynSolType::Tuple(members) if members.len() == 1 => format!("({},)", rust_type(&members[0])),
        DynSolType::Tuple(members) => {
            let members: Vec<String> = members.iter().map(rust_type).collect();
            format!("({})", members.join(", "))
        }
        DynSolType::Function => "FixedBytes<24>".into(),
        #[allow(unreachable_patterns)]
        _ => "DynSolValue".into(),
    }
}

/// The Rust type of an event field as decoded from a log.
///
/// Indexed fields of dynamic types only carry their keccak256 hash.
pub fn event_field_type(ty: &DynSolType, indexed: bool) -> String {
    if indexed && is_hashed(ty) {
        "B256".into()
    } else {
        rust_type(ty)
    }
}

pub fn is_hashed(ty: &DynSolType) -> bool {
    matches!(
        ty,
        DynSolType::String
            | DynSolType::Bytes
            | DynSolType::Array(_)
            | DynSolType::FixedArray(..)
            | DynSolType::Tuple(_)
    )
}

fn native_width(bits: usize) -> Option<usize> {
    [8, 16, 32, 64].into_iter().find(|width| bits <= *width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(s: &str) -> DynSolType {
        s.parse().unwrap()
    }

    #[test]
    fn test_scalar_mapping() {
        assert_eq!(rust_type(&ty("address")), "Address");
        assert_eq!(rust_type(&ty("uint8")), "u8");
        assert_eq!(rust_type(&ty("uint24")), "u32");
        assert_eq!(rust_type(&ty("uint64")), "u64");
        assert_eq!(rust_type(&ty("uint96")), "U256");
        assert_eq!(rust_type(&ty("int40")), "i64");
        assert_eq!(rust_type(&ty("int256")), "I256");
        assert_eq!(rust_type(&ty("bytes32")), "FixedBytes<32>");
    }

    #[test]
    fn test_container_mapping() {
        assert_eq!(rust_type(&ty("address[]")), "Vec<Address>");
        assert_eq!(rust_type(&ty("uint256[3]")), "[U256; 3]");
        assert_eq!(rust_type(&ty("(address,uint16)")), "(Address, u16)");
        assert_eq!(rust_type(&ty("(bool)[]")), "Vec<(bool,)>");
        assert_eq!(
            rust_type(&ty("(bool,bool,bool,bool,bool,bool,bool)")),
            "DynSolValue"
        );
    }

    #[test]
    fn test_indexed_dynamic_fields_are_hashes() {
        assert_eq!(event_field_type(&ty("string"), true), "B256");
        assert_eq!(event_field_type(&ty("string"), false), "String");
        assert_eq!(event_field_type(&ty("bytes32"), true), "FixedBytes<32>");
    }
}
