//! Binding module rendering
//!
//! Each contract becomes one module holding its ABI, bytecode and storage
//! layout constants, a deploy function, the capability-split facade (`X`, `XCaller`,
//! `XTransactor`, `XFilterer`), the session wrappers and one struct per event.
//! All typed entry points delegate to a [`BoundContract`] by the overload key
//! the descriptor assigned, so the generated code never re-derives selectors.
//!
//! [`BoundContract`]: contract_bind::BoundContract

use contract_bind::{AbiDescriptor, EventEntry, MethodEntry, Mutability, ParamEntry};
use eyre::{Result, WrapErr};
use tracing::warn;

use crate::artifact::Artifact;
use crate::naming::{
    method_ident, param_ident, pascal_case, snake_case, upper_snake_case, IdentSet,
};
use crate::types::{event_field_type, rust_type};

/// Lines longer than this are split, as rustfmt would.
const MAX_LINE: usize = 100;

/// rustfmt's default `chain_width`, `fn_call_width` and `array_width`.
const SHORT_WIDTH: usize = 60;

/// Argument names the generated signatures already use.
const RESERVED_ARGS: &[&str] = &["opts", "sink", "caps"];

/// A rendered source file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub source: String,
}

// =============================================================================
// Output buffer
// =============================================================================

#[derive(Default)]
struct Code {
    out: String,
}

impl Code {
    fn line(&mut self, indent: usize, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..indent {
                self.out.push_str("    ");
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    /// `{head}({params}) -> {ret} {`, split when too long.
    fn signature(&mut self, indent: usize, head: &str, params: &[String], ret: &str) {
        let one = format!("{head}({}) -> {ret} {{", params.join(", "));
        if indent * 4 + one.len() <= MAX_LINE {
            self.line(indent, one);
            return;
        }
        self.line(indent, format!("{head}("));
        for param in params {
            self.line(indent + 1, format!("{param},"));
        }
        self.line(indent, format!(") -> {ret} {{"));
    }

    /// `{prefix}{piece}{suffix}`, with list items one per line when too wide.
    fn piece(&mut self, indent: usize, prefix: &str, piece: &Piece, suffix: &str) {
        let flat = format!("{prefix}{}{suffix}", piece.flat());
        if piece.fits_flat() && indent * 4 + flat.len() <= MAX_LINE {
            self.line(indent, flat);
            return;
        }
        match piece {
            Piece::Atom(text) => self.line(indent, format!("{prefix}{text}{suffix}")),
            Piece::List { open, items, close } => {
                self.line(indent, format!("{prefix}{open}"));
                for item in items {
                    self.piece(indent + 1, "", item, ",");
                }
                self.line(indent, format!("{close}{suffix}"));
            }
        }
    }

    /// `{head}{parent}{links..}{suffix}`, one link per line when too wide.
    fn chain(&mut self, indent: usize, head: &str, parent: &str, links: &[Piece], suffix: &str) {
        let chain: String = std::iter::once(parent.to_string())
            .chain(links.iter().map(Piece::flat))
            .collect();
        let width = indent * 4 + head.len() + chain.len() + suffix.len();
        if chain.len() <= SHORT_WIDTH && links.iter().all(Piece::fits_flat) && width <= MAX_LINE {
            self.line(indent, format!("{head}{chain}{suffix}"));
            return;
        }
        // a parent no wider than the indent keeps its first field
        let (first, rest) = match links.split_first() {
            Some((Piece::Atom(field), rest)) if head.is_empty() && parent.len() <= 4 => {
                (format!("{parent}{field}"), rest)
            }
            _ => (parent.to_string(), links),
        };
        self.line(indent, format!("{head}{first}"));
        for (i, link) in rest.iter().enumerate() {
            let end = if i + 1 == rest.len() { suffix } else { "" };
            self.piece(indent + 1, "", link, end);
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

/// An expression laid out either on one line or with its items one per line.
enum Piece {
    Atom(String),
    List {
        open: String,
        items: Vec<Piece>,
        close: &'static str,
    },
}

impl Piece {
    fn atom(text: impl Into<String>) -> Self {
        Piece::Atom(text.into())
    }

    /// `{open}a, b)`; `open` ends with the opening parenthesis.
    fn call(open: impl Into<String>, items: Vec<Piece>) -> Self {
        Piece::List {
            open: open.into(),
            items,
            close: ")",
        }
    }

    fn vec(items: Vec<Piece>) -> Self {
        Piece::List {
            open: "vec![".into(),
            items,
            close: "]",
        }
    }

    fn slice(items: Vec<Piece>) -> Self {
        Piece::List {
            open: "&[".into(),
            items,
            close: "]",
        }
    }

    fn flat(&self) -> String {
        match self {
            Piece::Atom(text) => text.clone(),
            Piece::List { open, items, close } => format!("{open}{}{close}", Self::joined(items)),
        }
    }

    fn joined(items: &[Piece]) -> String {
        items.iter().map(Piece::flat).collect::<Vec<_>>().join(", ")
    }

    fn fits_flat(&self) -> bool {
        match self {
            Piece::Atom(_) => true,
            Piece::List { items, .. } => {
                Self::joined(items).len() <= SHORT_WIDTH && items.iter().all(Piece::fits_flat)
            }
        }
    }
}

// =============================================================================
// Plans
// =============================================================================

/// Names shared by every item of one contract module.
struct ContractNames {
    /// Contract name as written in the manifest
    name: String,
    /// Type prefix, e.g. `DelayedWETH`
    ty: String,
    /// Module and function suffix, e.g. `delayed_weth`
    module: String,
    /// Constant prefix, e.g. `DELAYED_WETH`
    konst: String,
}

impl ContractNames {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: pascal_case(name),
            module: snake_case(name),
            konst: upper_snake_case(name),
        }
    }

    fn metadata(&self) -> String {
        format!("{}_METADATA", self.konst)
    }
}

#[derive(Clone)]
struct Arg {
    ident: String,
    ty: String,
}

impl Arg {
    fn decl(&self) -> String {
        format!("{}: {}", self.ident, self.ty)
    }
}

fn input_args(params: &[ParamEntry]) -> Vec<Arg> {
    let mut idents = IdentSet::default();
    params
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let mut ident = param_ident(&p.name, i);
            if RESERVED_ARGS.contains(&ident.as_str()) {
                ident.push('_');
            }
            Arg {
                ident: idents.claim(ident),
                ty: rust_type(&p.ty),
            }
        })
        .collect()
}

/// `vec![a.into_sol_value(), ..]`
fn values(args: &[Arg]) -> Piece {
    Piece::vec(
        args.iter()
            .map(|a| Piece::atom(format!("{}.into_sol_value()", a.ident)))
            .collect(),
    )
}

/// Type-name stem for a generated identifier: the key as written unless the
/// identifier had to be renamed.
fn type_stem(key: &str, ident: &str) -> String {
    if ident.trim_end_matches('_') == snake_case(key) {
        pascal_case(key)
    } else {
        pascal_case(ident)
    }
}

struct MethodPlan {
    key: String,
    ident: String,
    /// Type-name stem, e.g. `Withdrawals`
    stem: String,
    signature: String,
    mutability: Mutability,
    inputs: Vec<Arg>,
    outputs: Vec<Arg>,
}

impl MethodPlan {
    fn new(entry: &MethodEntry, ident: String) -> Self {
        let mut idents = IdentSet::default();
        let outputs = entry
            .outputs
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let ident = if p.name.trim_start_matches('_').is_empty() {
                    format!("output{i}")
                } else {
                    param_ident(&p.name, i)
                };
                Arg {
                    ident: idents.claim(ident),
                    ty: rust_type(&p.ty),
                }
            })
            .collect();
        Self {
            key: entry.key.clone(),
            stem: type_stem(&entry.key, &ident),
            ident,
            signature: entry.signature.clone(),
            mutability: entry.mutability,
            inputs: input_args(&entry.inputs),
            outputs,
        }
    }

    fn output_struct(&self, names: &ContractNames) -> String {
        format!("{}{}Output", names.ty, self.stem)
    }

    fn call_return(&self, names: &ContractNames) -> String {
        match self.outputs.len() {
            0 => "()".to_string(),
            1 => self.outputs[0].ty.clone(),
            _ => self.output_struct(names),
        }
    }
}

struct EventPlan {
    key: String,
    signature: String,
    /// `Struct` name
    ty: String,
    /// Method suffix, e.g. `ownership_transferred`
    suffix: String,
    fields: Vec<Arg>,
    indexed: Vec<Arg>,
}

impl EventPlan {
    fn new(names: &ContractNames, entry: &EventEntry, suffix: String) -> Self {
        let mut idents = IdentSet::default();
        let mut fields = Vec::with_capacity(entry.fields.len());
        let mut indexed = Vec::new();
        for (i, field) in entry.fields.iter().enumerate() {
            let mut ident = param_ident(&field.name, i);
            if ident == "raw" || RESERVED_ARGS.contains(&ident.as_str()) {
                ident.push('_');
            }
            let arg = Arg {
                ident: idents.claim(ident),
                ty: event_field_type(&field.ty, field.indexed),
            };
            if field.indexed {
                indexed.push(arg.clone());
            }
            fields.push(arg);
        }
        Self {
            key: entry.key.clone(),
            signature: entry.signature.clone(),
            ty: format!("{}{}", names.ty, type_stem(&entry.key, &suffix)),
            suffix,
            fields,
            indexed,
        }
    }

    fn filter_params(&self) -> Vec<String> {
        self.indexed
            .iter()
            .map(|a| format!("{}: &[{}]", a.ident, a.ty))
            .collect()
    }

    fn topic_list(&self) -> Piece {
        Piece::slice(
            self.indexed
                .iter()
                .map(|a| Piece::atom(format!("topic_values({})", a.ident)))
                .collect(),
        )
    }
}

// =============================================================================
// Contract module
// =============================================================================

/// Render the binding module of one contract.
pub fn render_contract(artifact: &Artifact, crate_path: &str) -> Result<GeneratedFile> {
    let abi = AbiDescriptor::parse(&artifact.abi)
        .wrap_err_with(|| format!("Invalid ABI for {}", artifact.name))?;
    let names = ContractNames::new(&artifact.name);

    let mut idents = IdentSet::default();
    let methods: Vec<MethodPlan> = abi
        .methods()
        .iter()
        .map(|m| {
            let ident = claim(&mut idents, &names, &m.key, method_ident(&m.key));
            MethodPlan::new(m, ident)
        })
        .collect();
    let (views, mutating): (Vec<&MethodPlan>, Vec<&MethodPlan>) =
        methods.iter().partition(|m| m.mutability.is_view());
    let mut suffixes = IdentSet::default();
    let events: Vec<EventPlan> = abi
        .events()
        .iter()
        .map(|e| {
            let suffix = claim(&mut suffixes, &names, &e.key, snake_case(&e.key));
            EventPlan::new(&names, e, suffix)
        })
        .collect();
    let fallback = abi.fallback().is_some();
    let receive = abi.has_receive();
    let deployable = artifact.bytecode.len() > 2;

    let mut code = Code::default();
    render_header(&mut code, &names, crate_path);
    render_constants(&mut code, &names, artifact);
    if deployable {
        let ctor = abi
            .constructor()
            .map(|c| input_args(&c.inputs))
            .unwrap_or_default();
        render_deploy(&mut code, &names, &ctor);
    }
    render_facade(&mut code, &names);
    render_caller(&mut code, &names, &views);
    render_transactor(&mut code, &names, &mutating, fallback, receive);
    render_filterer(&mut code, &names, &events);
    render_sessions(&mut code, &names, &views, &mutating, fallback, receive);
    for method in views.iter().filter(|m| m.outputs.len() > 1) {
        render_output_struct(&mut code, &names, method);
    }
    for event in &events {
        render_event(&mut code, event);
    }

    let mut source = code.finish();
    while source.ends_with("\n\n") {
        source.pop();
    }
    Ok(GeneratedFile {
        file_name: format!("{}.rs", names.module),
        source,
    })
}

fn claim(idents: &mut IdentSet, names: &ContractNames, key: &str, ident: String) -> String {
    let claimed = idents.claim(ident.clone());
    if claimed != ident {
        warn!(
            contract = %names.name,
            key = %key,
            ident = %claimed,
            "Generated name collides with an earlier entry; renamed"
        );
    }
    claimed
}

fn render_header(code: &mut Code, names: &ContractNames, crate_path: &str) {
    code.line(0, format!("//! Typed bindings for the `{}` contract.", names.name));
    code.line(0, "//!");
    code.line(0, "//! Generated by `bindgen`; do not edit. Regenerate with `bindgen generate`.");
    code.blank();
    code.line(0, "#![allow(unused_imports, clippy::too_many_arguments)]");
    code.blank();
    code.line(0, "use std::sync::Arc;");
    code.blank();
    code.line(0, format!("use {crate_path}::alloy::dyn_abi::DynSolValue;"));
    code.line(
        0,
        format!("use {crate_path}::alloy::primitives::{{Address, Bytes, FixedBytes, B256, I256, U256}};"),
    );
    code.line(0, format!("use {crate_path}::alloy::rpc::types::Log;"));
    code.line(0, format!("use {crate_path}::{{"));
    code.line(
        1,
        "deploy_contract, topic_values, BoundContract, CallOpts, Caller, Capabilities, ContractEvent,",
    );
    code.line(
        1,
        "ContractMetadata, EventIterator, EventRecord, FieldReader, FilterOpts, Filterer, IntoSolValue,",
    );
    code.line(1, "Result, Subscription, TransactOpts, Transactor, TxHandle, WatchOpts,");
    code.line(0, "};");
    code.line(0, "use tokio::sync::mpsc;");
    code.blank();
}

fn raw_string(text: &str) -> String {
    let mut longest = 0;
    let mut run: Option<usize> = None;
    for c in text.chars() {
        run = match (c, run) {
            ('"', _) => Some(0),
            ('#', Some(n)) => Some(n + 1),
            _ => None,
        };
        if let Some(n) = run {
            longest = longest.max(n);
        }
    }
    let hashes = "#".repeat(longest + 1);
    format!("r{hashes}\"{text}\"{hashes}")
}

fn render_constants(code: &mut Code, names: &ContractNames, artifact: &Artifact) {
    let konst = &names.konst;
    let layout = if artifact.storage_layout.is_empty() {
        "\"\"".to_string()
    } else {
        raw_string(&artifact.storage_layout)
    };
    code.line(0, format!("/// ABI of `{}`.", names.name));
    code.line(0, format!("pub const {konst}_ABI: &str = {};", raw_string(&artifact.abi)));
    code.blank();
    code.line(0, format!("/// Creation bytecode of `{}`.", names.name));
    code.line(0, format!("pub const {konst}_BIN: &str = \"{}\";", artifact.bytecode));
    code.blank();
    code.line(0, format!("/// Runtime bytecode of `{}`, immutables zero-filled.", names.name));
    code.line(
        0,
        format!("pub const {konst}_DEPLOYED_BIN: &str = \"{}\";", artifact.deployed_bytecode),
    );
    code.blank();
    code.line(0, format!("/// solc storage layout of `{}`.", names.name));
    code.line(0, format!("pub const {konst}_STORAGE_LAYOUT: &str = {layout};"));
    code.blank();
    code.line(0, format!("/// Metadata used to deploy and bind `{}`.", names.name));
    let metadata = Piece::call(
        "ContractMetadata::with_runtime(",
        vec![
            Piece::atom(format!("\"{}\"", names.name)),
            Piece::atom(format!("{konst}_ABI")),
            Piece::atom(format!("{konst}_BIN")),
            Piece::atom(format!("{konst}_DEPLOYED_BIN")),
            Piece::atom(format!("{konst}_STORAGE_LAYOUT")),
        ],
    );
    code.piece(
        0,
        &format!("pub static {}: ContractMetadata = ", names.metadata()),
        &metadata,
        ";",
    );
    code.blank();
}

fn render_deploy(code: &mut Code, names: &ContractNames, ctor: &[Arg]) {
    let mut params = vec!["opts: &TransactOpts".to_string(), "caps: Capabilities".to_string()];
    params.extend(ctor.iter().map(Arg::decl));

    code.line(0, format!("/// Deploy a new `{}` and bind it.", names.name));
    code.signature(
        0,
        &format!("pub async fn deploy_{}", names.module),
        &params,
        &format!("Result<(Address, TxHandle, {})>", names.ty),
    );
    let deploy = Piece::call(
        "deploy_contract(",
        vec![
            Piece::atom("opts"),
            Piece::atom(format!("&{}", names.metadata())),
            Piece::atom("caps"),
            values(ctor),
        ],
    );
    let head = "let (address, tx, contract) = ";
    let flat = format!("{head}{}.await?;", deploy.flat());
    if deploy.fits_flat() && 4 + flat.len() <= MAX_LINE {
        code.line(1, flat);
    } else {
        code.piece(1, head, &deploy, "");
        code.line(1, ".await?;");
    }
    code.line(1, format!("Ok((address, tx, {}::from_bound(contract)))", names.ty));
    code.line(0, "}");
    code.blank();
}

fn render_facade(code: &mut Code, names: &ContractNames) {
    let ty = &names.ty;
    code.line(0, "// =============================================================================");
    code.line(0, "// Facade");
    code.line(0, "// =============================================================================");
    code.blank();
    code.line(0, format!("/// Binding to a deployed `{}`, split by capability.", names.name));
    code.line(0, "#[derive(Clone)]");
    code.line(0, format!("pub struct {ty} {{"));
    code.line(1, format!("pub caller: {ty}Caller,"));
    code.line(1, format!("pub transactor: {ty}Transactor,"));
    code.line(1, format!("pub filterer: {ty}Filterer,"));
    code.line(0, "}");
    code.blank();
    code.line(0, format!("impl {ty} {{"));
    code.line(1, "/// Bind every capability present in `caps` at `address`.");
    code.line(1, "pub fn new(address: Address, caps: Capabilities) -> Result<Self> {");
    code.line(2, format!("let contract = {}.bind(address, caps)?;", names.metadata()));
    code.line(2, "Ok(Self::from_bound(contract))");
    code.line(1, "}");
    code.blank();
    code.line(1, "pub fn from_bound(contract: BoundContract) -> Self {");
    code.line(2, "Self {");
    code.line(3, format!("caller: {ty}Caller {{"));
    code.line(4, "contract: contract.clone(),");
    code.line(3, "},");
    code.line(3, format!("transactor: {ty}Transactor {{"));
    code.line(4, "contract: contract.clone(),");
    code.line(3, "},");
    code.line(3, format!("filterer: {ty}Filterer {{ contract }},"));
    code.line(2, "}");
    code.line(1, "}");
    code.blank();
    code.line(1, "pub fn address(&self) -> Address {");
    code.line(2, "self.caller.contract.address()");
    code.line(1, "}");
    code.blank();
    code.line(1, "/// The untyped contract all entry points delegate to.");
    code.line(1, "pub fn bound(&self) -> &BoundContract {");
    code.line(2, "&self.caller.contract");
    code.line(1, "}");
    code.line(0, "}");
    code.blank();
}

fn render_constructor(code: &mut Code, names: &ContractNames, capability: &str) {
    code.line(
        1,
        format!(
            "pub fn new(address: Address, {capability}: Arc<dyn {}>) -> Result<Self> {{",
            pascal_case(capability)
        ),
    );
    code.line(2, format!("let caps = Capabilities::new().with_{capability}({capability});"));
    code.line(2, "Ok(Self {");
    code.line(3, format!("contract: {}.bind(address, caps)?,", names.metadata()));
    code.line(2, "})");
    code.line(1, "}");
}

fn call_params(method: &MethodPlan, opts: &str) -> Vec<String> {
    let mut params = vec!["&self".to_string()];
    if !opts.is_empty() {
        params.push(format!("opts: &{opts}"));
    }
    params.extend(method.inputs.iter().map(Arg::decl));
    params
}

fn render_caller(code: &mut Code, names: &ContractNames, views: &[&MethodPlan]) {
    let ty = &names.ty;
    code.line(0, format!("/// Read-only binding to `{}`.", names.name));
    code.line(0, "#[derive(Clone)]");
    code.line(0, format!("pub struct {ty}Caller {{"));
    code.line(1, "contract: BoundContract,");
    code.line(0, "}");
    code.blank();
    code.line(0, format!("impl {ty}Caller {{"));
    render_constructor(code, names, "caller");
    for method in views {
        code.blank();
        code.line(1, format!("/// Calls `{}`.", method.signature));
        code.signature(
            1,
            &format!("pub async fn {}", method.ident),
            &call_params(method, "CallOpts"),
            &format!("Result<{}>", method.call_return(names)),
        );
        let call = |open: &str| {
            Piece::call(
                open,
                vec![
                    Piece::atom("opts"),
                    Piece::atom(format!("\"{}\"", method.key)),
                    values(&method.inputs),
                ],
            )
        };
        match method.outputs.len() {
            0 => {
                let links = [Piece::atom(".contract"), call(".call("), Piece::atom(".await?")];
                code.chain(2, "", "self", &links, ";");
                code.line(2, "Ok(())");
            }
            1 => {
                let links = [Piece::atom(".contract"), call(".call_single("), Piece::atom(".await")];
                code.chain(2, "", "self", &links, "");
            }
            _ => {
                let links = [Piece::atom(".contract"), call(".call("), Piece::atom(".await?")];
                code.chain(2, "let values = ", "self", &links, ";");
                code.line(
                    2,
                    format!("let mut reader = FieldReader::returns(\"{}\", values);", method.key),
                );
                code.line(2, format!("Ok({} {{", method.output_struct(names)));
                for output in &method.outputs {
                    code.line(3, format!("{0}: reader.next(\"{0}\")?,", output.ident));
                }
                code.line(2, "})");
            }
        }
        code.line(1, "}");
    }
    code.line(0, "}");
    code.blank();
}

fn render_transactor(
    code: &mut Code,
    names: &ContractNames,
    mutating: &[&MethodPlan],
    fallback: bool,
    receive: bool,
) {
    let ty = &names.ty;
    code.line(0, format!("/// Write-only binding to `{}`.", names.name));
    code.line(0, "#[derive(Clone)]");
    code.line(0, format!("pub struct {ty}Transactor {{"));
    code.line(1, "contract: BoundContract,");
    code.line(0, "}");
    code.blank();
    code.line(0, format!("impl {ty}Transactor {{"));
    render_constructor(code, names, "transactor");
    for method in mutating {
        code.blank();
        code.line(1, format!("/// Transacts `{}`.", method.signature));
        if method.mutability == Mutability::Payable {
            code.line(1, "///");
            code.line(1, "/// Payable: `opts.value` is sent along.");
        }
        code.signature(
            1,
            &format!("pub async fn {}", method.ident),
            &call_params(method, "TransactOpts"),
            "Result<TxHandle>",
        );
        let transact = Piece::call(
            ".transact(",
            vec![
                Piece::atom("opts"),
                Piece::atom(format!("\"{}\"", method.key)),
                values(&method.inputs),
            ],
        );
        let links = [Piece::atom(".contract"), transact, Piece::atom(".await")];
        code.chain(2, "", "self", &links, "");
        code.line(1, "}");
    }
    if fallback {
        code.blank();
        code.line(1, "/// Sends `calldata` to the fallback function.");
        code.line(
            1,
            "pub async fn fallback(&self, opts: &TransactOpts, calldata: Bytes) -> Result<TxHandle> {",
        );
        code.line(2, "self.contract.raw_transact(opts, calldata).await");
        code.line(1, "}");
    }
    if receive {
        code.blank();
        code.line(1, "/// Sends `opts.value` with empty calldata to the receive function.");
        code.line(1, "pub async fn receive(&self, opts: &TransactOpts) -> Result<TxHandle> {");
        code.line(2, "self.contract.transfer(opts).await");
        code.line(1, "}");
    }
    code.line(0, "}");
    code.blank();
}

fn render_filterer(code: &mut Code, names: &ContractNames, events: &[EventPlan]) {
    let ty = &names.ty;
    code.line(0, format!("/// Log filtering binding to `{}`.", names.name));
    code.line(0, "#[derive(Clone)]");
    code.line(0, format!("pub struct {ty}Filterer {{"));
    code.line(1, "contract: BoundContract,");
    code.line(0, "}");
    code.blank();
    code.line(0, format!("impl {ty}Filterer {{"));
    render_constructor(code, names, "filterer");
    for event in events {
        let iterator = format!("{}Iterator", event.ty);
        let query = |open: &str, sink: bool| {
            let mut args = vec![Piece::atom("opts")];
            if sink {
                args.push(Piece::atom("sink"));
            }
            args.push(event.topic_list());
            [Piece::atom(".contract"), Piece::call(open, args), Piece::atom(".await")]
        };

        code.blank();
        code.line(1, format!("/// Historical `{}` events; an empty slice matches any value.", event.key));
        let mut params = vec!["&self".to_string(), "opts: &FilterOpts".to_string()];
        params.extend(event.filter_params());
        code.signature(
            1,
            &format!("pub async fn filter_{}", event.suffix),
            &params,
            &format!("Result<{iterator}>"),
        );
        code.chain(2, "", "self", &query(".filter_events(", false), "");
        code.line(1, "}");

        code.blank();
        code.line(1, format!("/// Push live `{}` events into `sink` until unsubscribed.", event.key));
        let mut params = vec![
            "&self".to_string(),
            "opts: &WatchOpts".to_string(),
            format!("sink: mpsc::Sender<{}>", event.ty),
        ];
        params.extend(event.filter_params());
        code.signature(
            1,
            &format!("pub async fn watch_{}", event.suffix),
            &params,
            "Result<Subscription>",
        );
        code.chain(2, "", "self", &query(".watch_with(", true), "");
        code.line(1, "}");

        code.blank();
        code.line(1, format!("/// Live `{}` events as an iterator.", event.key));
        let mut params = vec!["&self".to_string(), "opts: &WatchOpts".to_string()];
        params.extend(event.filter_params());
        code.signature(
            1,
            &format!("pub async fn subscribe_{}", event.suffix),
            &params,
            &format!("Result<{iterator}>"),
        );
        code.chain(2, "", "self", &query(".watch_events(", false), "");
        code.line(1, "}");

        code.blank();
        code.line(1, format!("/// Decode one `{}` log.", event.key));
        code.signature(
            1,
            &format!("pub fn parse_{}", event.suffix),
            &["&self".to_string(), "log: &Log".to_string()],
            &format!("Result<{}>", event.ty),
        );
        let links = [
            Piece::atom(".contract"),
            Piece::call(
                ".unpack_log(",
                vec![Piece::atom(format!("{}::NAME", event.ty)), Piece::atom("log")],
            ),
            Piece::call(
                ".and_then(",
                vec![Piece::atom(format!("{}::from_record", event.ty))],
            ),
        ];
        code.chain(2, "", "self", &links, "");
        code.line(1, "}");
    }
    code.line(0, "}");
    code.blank();
}

fn render_sessions(
    code: &mut Code,
    names: &ContractNames,
    views: &[&MethodPlan],
    mutating: &[&MethodPlan],
    fallback: bool,
    receive: bool,
) {
    let ty = &names.ty;
    code.line(0, "// =============================================================================");
    code.line(0, "// Sessions");
    code.line(0, "// =============================================================================");
    code.blank();

    // `target` is a field path below `self`, e.g. `.contract.caller`
    let forward = |code: &mut Code, target: &str, ident: &str, args: Vec<Piece>| {
        let mut links: Vec<Piece> = target
            .split('.')
            .filter(|field| !field.is_empty())
            .map(|field| Piece::atom(format!(".{field}")))
            .collect();
        links.push(Piece::call(format!(".{ident}("), args));
        links.push(Piece::atom(".await"));
        code.chain(2, "", "self", &links, "");
    };
    let view_fn = |code: &mut Code, method: &MethodPlan, target: &str| {
        code.blank();
        code.signature(
            1,
            &format!("pub async fn {}", method.ident),
            &call_params(method, ""),
            &format!("Result<{}>", method.call_return(names)),
        );
        let mut args = vec![Piece::atom("&self.call_opts")];
        args.extend(method.inputs.iter().map(|a| Piece::atom(a.ident.as_str())));
        forward(code, target, &method.ident, args);
        code.line(1, "}");
    };
    let mutating_fn = |code: &mut Code, method: &MethodPlan, target: &str| {
        code.blank();
        code.signature(
            1,
            &format!("pub async fn {}", method.ident),
            &call_params(method, ""),
            "Result<TxHandle>",
        );
        let mut args = vec![Piece::atom("&self.transact_opts")];
        args.extend(method.inputs.iter().map(|a| Piece::atom(a.ident.as_str())));
        forward(code, target, &method.ident, args);
        code.line(1, "}");
    };
    let entry_fns = |code: &mut Code, target: &str| {
        if fallback {
            code.blank();
            code.line(1, "pub async fn fallback(&self, calldata: Bytes) -> Result<TxHandle> {");
            let args = vec![Piece::atom("&self.transact_opts"), Piece::atom("calldata")];
            forward(code, target, "fallback", args);
            code.line(1, "}");
        }
        if receive {
            code.blank();
            code.line(1, "pub async fn receive(&self) -> Result<TxHandle> {");
            forward(code, target, "receive", vec![Piece::atom("&self.transact_opts")]);
            code.line(1, "}");
        }
    };

    code.line(0, format!("/// `{}` with call and transact options fixed.", names.name));
    code.line(0, "#[derive(Clone)]");
    code.line(0, format!("pub struct {ty}Session {{"));
    code.line(1, format!("pub contract: {ty},"));
    code.line(1, "pub call_opts: CallOpts,");
    code.line(1, "pub transact_opts: TransactOpts,");
    code.line(0, "}");
    code.blank();
    code.line(0, format!("impl {ty}Session {{"));
    code.signature(
        1,
        "pub fn new",
        &[
            format!("contract: {ty}"),
            "call_opts: CallOpts".to_string(),
            "transact_opts: TransactOpts".to_string(),
        ],
        "Self",
    );
    code.line(2, "Self {");
    code.line(3, "contract,");
    code.line(3, "call_opts,");
    code.line(3, "transact_opts,");
    code.line(2, "}");
    code.line(1, "}");
    for method in views {
        view_fn(code, method, ".contract.caller");
    }
    for method in mutating {
        mutating_fn(code, method, ".contract.transactor");
    }
    entry_fns(code, ".contract.transactor");
    code.line(0, "}");
    code.blank();

    code.line(0, format!("/// `{}Caller` with call options fixed.", ty));
    code.line(0, "#[derive(Clone)]");
    code.line(0, format!("pub struct {ty}CallerSession {{"));
    code.line(1, format!("pub contract: {ty}Caller,"));
    code.line(1, "pub call_opts: CallOpts,");
    code.line(0, "}");
    code.blank();
    code.line(0, format!("impl {ty}CallerSession {{"));
    code.signature(
        1,
        "pub fn new",
        &[format!("contract: {ty}Caller"), "call_opts: CallOpts".to_string()],
        "Self",
    );
    code.line(2, "Self {");
    code.line(3, "contract,");
    code.line(3, "call_opts,");
    code.line(2, "}");
    code.line(1, "}");
    for method in views {
        view_fn(code, method, ".contract");
    }
    code.line(0, "}");
    code.blank();

    code.line(0, format!("/// `{}Transactor` with transact options fixed.", ty));
    code.line(0, "#[derive(Clone)]");
    code.line(0, format!("pub struct {ty}TransactorSession {{"));
    code.line(1, format!("pub contract: {ty}Transactor,"));
    code.line(1, "pub transact_opts: TransactOpts,");
    code.line(0, "}");
    code.blank();
    code.line(0, format!("impl {ty}TransactorSession {{"));
    code.signature(
        1,
        "pub fn new",
        &[format!("contract: {ty}Transactor"), "transact_opts: TransactOpts".to_string()],
        "Self",
    );
    code.line(2, "Self {");
    code.line(3, "contract,");
    code.line(3, "transact_opts,");
    code.line(2, "}");
    code.line(1, "}");
    for method in mutating {
        mutating_fn(code, method, ".contract");
    }
    entry_fns(code, ".contract");
    code.line(0, "}");
    code.blank();
}

fn render_output_struct(code: &mut Code, names: &ContractNames, method: &MethodPlan) {
    code.line(0, format!("/// Outputs of `{}`.", method.signature));
    code.line(0, "#[derive(Debug, Clone, PartialEq)]");
    code.line(0, format!("pub struct {} {{", method.output_struct(names)));
    for output in &method.outputs {
        code.line(1, format!("pub {},", output.decl()));
    }
    code.line(0, "}");
    code.blank();
}

fn render_event(code: &mut Code, event: &EventPlan) {
    code.line(0, "// =============================================================================");
    code.line(0, format!("// {}", event.key));
    code.line(0, "// =============================================================================");
    code.blank();
    code.line(0, format!("/// `{}`", event.signature));
    code.line(0, "#[derive(Debug, Clone, PartialEq)]");
    code.line(0, format!("pub struct {} {{", event.ty));
    for field in &event.fields {
        code.line(1, format!("pub {},", field.decl()));
    }
    code.line(1, "/// The log this event was decoded from");
    code.line(1, "pub raw: Log,");
    code.line(0, "}");
    code.blank();
    code.line(0, format!("impl ContractEvent for {} {{", event.ty));
    code.line(1, format!("const NAME: &'static str = \"{}\";", event.key));
    code.blank();
    code.line(1, "fn from_record(record: EventRecord) -> Result<Self> {");
    if event.fields.is_empty() {
        code.line(2, "let (_, raw) = record.into_reader();");
        code.line(2, "Ok(Self { raw })");
    } else {
        code.line(2, "let (mut reader, raw) = record.into_reader();");
        code.line(2, "Ok(Self {");
        for field in &event.fields {
            code.line(3, format!("{0}: reader.next(\"{0}\")?,", field.ident));
        }
        code.line(3, "raw,");
        code.line(2, "})");
    }
    code.line(1, "}");
    code.line(0, "}");
    code.blank();
    code.line(0, format!("/// Iterator over `{}` events.", event.key));
    code.line(0, format!("pub type {0}Iterator = EventIterator<{0}>;", event.ty));
    code.blank();
}

// =============================================================================
// Module index and registry
// =============================================================================

/// `mod.rs` declaring and re-exporting every contract module.
pub fn render_mod(names: &[String]) -> GeneratedFile {
    let mut modules: Vec<String> = names.iter().map(|n| snake_case(n)).collect();
    modules.sort();

    let mut code = Code::default();
    code.line(0, "//! Generated contract bindings");
    code.line(0, "//!");
    code.line(0, "//! Generated by `bindgen`; do not edit. Regenerate with `bindgen generate`.");
    code.blank();
    for module in &modules {
        code.line(0, format!("pub mod {module};"));
    }
    code.line(0, "pub mod registry;");
    code.blank();
    for module in &modules {
        code.line(0, format!("pub use {module}::*;"));
    }
    GeneratedFile {
        file_name: "mod.rs".to_string(),
        source: code.finish(),
    }
}

/// `registry.rs` listing the metadata of every generated contract.
pub fn render_registry(names: &[String], crate_path: &str) -> GeneratedFile {
    let mut sorted: Vec<ContractNames> = names.iter().map(|n| ContractNames::new(n)).collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut code = Code::default();
    code.line(0, "//! Metadata of every generated contract, by name");
    code.line(0, "//!");
    code.line(0, "//! Generated by `bindgen`; do not edit. Regenerate with `bindgen generate`.");
    code.blank();
    code.line(0, "use std::sync::Arc;");
    code.blank();
    code.line(
        0,
        format!("use {crate_path}::{{BindError, ContractMetadata, Result, StorageLayout}};"),
    );
    code.blank();
    code.line(0, "/// Every generated contract, sorted by name.");
    code.line(0, "pub fn all() -> Vec<&'static ContractMetadata> {");
    code.line(1, "vec![");
    for contract in &sorted {
        code.line(2, format!("&super::{}::{},", contract.module, contract.metadata()));
    }
    code.line(1, "]");
    code.line(0, "}");
    code.blank();
    code.line(0, "/// Metadata of the contract called `name`.");
    code.line(0, "pub fn get_metadata(name: &str) -> Option<&'static ContractMetadata> {");
    code.line(1, "all().into_iter().find(|metadata| metadata.name == name)");
    code.line(0, "}");
    code.blank();
    code.line(0, "/// Runtime bytecode of the contract called `name`.");
    code.line(0, "pub fn get_deployed_bytecode(name: &str) -> Result<Vec<u8>> {");
    code.line(1, "lookup(name)?.deployed_bytecode()");
    code.line(0, "}");
    code.blank();
    code.line(0, "/// Storage layout of the contract called `name`.");
    code.line(0, "pub fn get_storage_layout(name: &str) -> Result<Arc<StorageLayout>> {");
    code.line(1, "lookup(name)?.storage_layout()");
    code.line(0, "}");
    code.blank();
    code.line(0, "fn lookup(name: &str) -> Result<&'static ContractMetadata> {");
    code.line(1, "get_metadata(name).ok_or_else(|| BindError::UnknownContract(name.to_string()))");
    code.line(0, "}");
    GeneratedFile {
        file_name: "registry.rs".to_string(),
        source: code.finish(),
    }
}

/// Render every contract plus the module index and registry.
pub fn render_all(artifacts: &[Artifact], crate_path: &str) -> Result<Vec<GeneratedFile>> {
    let mut files = artifacts
        .iter()
        .map(|artifact| render_contract(artifact, crate_path))
        .collect::<Result<Vec<_>>>()?;
    let names: Vec<String> = artifacts.iter().map(|a| a.name.clone()).collect();
    files.push(render_mod(&names));
    files.push(render_registry(&names, crate_path));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_string_hashes() {
        assert_eq!(raw_string("[]"), "r#\"[]\"#");
        assert_eq!(raw_string("a\"#b"), "r##\"a\"#b\"##");
    }

    #[test]
    fn test_long_signatures_are_split() {
        let mut code = Code::default();
        let params: Vec<String> = (0..6).map(|i| format!("argument{i}: U256")).collect();
        code.signature(1, "pub async fn f", &params, "Result<()>");
        let out = code.finish();
        assert!(out.starts_with("    pub async fn f(\n"));
        assert!(out.contains("        argument5: U256,\n"));
        assert!(out.ends_with("    ) -> Result<()> {\n"));
    }

    #[test]
    fn test_registry_is_sorted() {
        let file = render_registry(&["Zeta".into(), "Alpha".into()], "contract_bind");
        let alpha = file.source.find("ALPHA_METADATA").unwrap();
        let zeta = file.source.find("ZETA_METADATA").unwrap();
        assert!(alpha < zeta);
        assert!(file
            .source
            .contains("use contract_bind::{BindError, ContractMetadata, Result, StorageLayout};"));
        assert!(file
            .source
            .contains("pub fn get_storage_layout(name: &str) -> Result<Arc<StorageLayout>> {"));
    }

    fn render(code: impl FnOnce(&mut Code)) -> String {
        let mut out = Code::default();
        code(&mut out);
        out.finish()
    }

    #[test]
    fn test_short_chains_stay_on_one_line() {
        let out = render(|code| {
            let links = [
                Piece::atom(".contract"),
                Piece::call(".call_single(", vec![Piece::atom("opts"), Piece::vec(vec![])]),
                Piece::atom(".await"),
            ];
            code.chain(2, "", "self", &links, "");
        });
        assert_eq!(out, "        self.contract.call_single(opts, vec![]).await\n");
    }

    #[test]
    fn test_long_chains_break_per_link() {
        let topics = Piece::slice(vec![
            Piece::atom("topic_values(previous_owner)"),
            Piece::atom("topic_values(new_owner)"),
        ]);
        let out = render(|code| {
            let links = [
                Piece::atom(".contract"),
                Piece::call(".filter_events(", vec![Piece::atom("opts"), topics]),
                Piece::atom(".await"),
            ];
            code.chain(2, "", "self", &links, "");
        });
        assert_eq!(
            out,
            "        self.contract\n\
             \x20           .filter_events(\n\
             \x20               opts,\n\
             \x20               &[topic_values(previous_owner), topic_values(new_owner)],\n\
             \x20           )\n\
             \x20           .await\n"
        );
        assert!(out.lines().all(|line| line.len() <= MAX_LINE));
    }

    #[test]
    fn test_let_chains_keep_the_parent_alone() {
        let out = render(|code| {
            let links = [
                Piece::atom(".contract"),
                Piece::call(
                    ".call(",
                    vec![
                        Piece::atom("opts"),
                        Piece::atom("\"withdrawals\""),
                        Piece::vec(vec![
                            Piece::atom("arg0.into_sol_value()"),
                            Piece::atom("arg1.into_sol_value()"),
                        ]),
                    ],
                ),
                Piece::atom(".await?"),
            ];
            code.chain(2, "let values = ", "self", &links, ";");
        });
        assert!(out.starts_with("        let values = self\n            .contract\n"));
        assert!(out.ends_with("            .await?;\n"));
    }

    #[test]
    fn test_wide_vec_goes_vertical() {
        let items = ["src", "dst", "wad"]
            .iter()
            .map(|a| Piece::atom(format!("{a}.into_sol_value()")))
            .collect();
        let out = render(|code| code.piece(3, "", &Piece::vec(items), ","));
        assert_eq!(
            out,
            "            vec![\n                src.into_sol_value(),\n                \
             dst.into_sol_value(),\n                wad.into_sol_value(),\n            ],\n"
        );
    }
}
