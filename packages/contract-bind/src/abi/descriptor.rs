//! Parsed contract interface
//!
//! An [`AbiDescriptor`] is built once from ABI JSON and never mutated afterwards.
//! Overloaded methods, events and errors get stable, disambiguated keys at parse
//! time: the first declaration keeps its name, later ones are suffixed `0`, `1`, ...
//! skipping any key that is already taken.

use std::collections::HashMap;
use std::str::FromStr;

use alloy::dyn_abi::{DynSolType, DynSolValue, Specifier};
use alloy::json_abi::{
    Constructor, Error as JsonError, Event, EventParam, Fallback, Function, Param, Receive,
    StateMutability,
};
use alloy::primitives::{Bytes, LogData, Selector, B256};
use serde_json::Value;

use crate::abi::coerce::{coerce, coerce_all, describe};
use crate::abi::revert;
use crate::error::{BindError, Result, Revert};
use crate::event::EventField;

/// Maximum indexed fields of a non-anonymous event (topic-0 is the signature).
pub const MAX_INDEXED: usize = 3;

/// Method mutability, collapsed to what matters for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    /// `view` or `pure`: executed with `eth_call`
    View,
    NonPayable,
    Payable,
}

impl Mutability {
    pub fn is_view(self) -> bool {
        self == Mutability::View
    }
}

impl From<StateMutability> for Mutability {
    fn from(value: StateMutability) -> Self {
        match value {
            StateMutability::Pure | StateMutability::View => Mutability::View,
            StateMutability::NonPayable => Mutability::NonPayable,
            StateMutability::Payable => Mutability::Payable,
        }
    }
}

/// One parameter with its resolved type.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamEntry {
    pub name: String,
    /// Canonical type string, as used in signatures
    pub canonical: String,
    pub ty: DynSolType,
    /// Only meaningful for event fields
    pub indexed: bool,
}

impl ParamEntry {
    fn from_param(param: &Param) -> Result<Self> {
        let ty = param
            .resolve()
            .map_err(|e| BindError::MalformedAbi(format!("parameter `{}`: {e}", param.name)))?;
        Ok(Self {
            name: param.name.clone(),
            canonical: param.selector_type().into_owned(),
            ty,
            indexed: false,
        })
    }

    fn from_event_param(param: &EventParam) -> Result<Self> {
        let ty = param
            .resolve()
            .map_err(|e| BindError::MalformedAbi(format!("event field `{}`: {e}", param.name)))?;
        Ok(Self {
            name: param.name.clone(),
            canonical: param.selector_type().into_owned(),
            ty,
            indexed: param.indexed,
        })
    }

    /// Whether an indexed value of this type is stored as its keccak256 hash.
    pub fn is_hashed_topic(&self) -> bool {
        is_hashed(&self.ty)
    }

    /// Name used in error messages; falls back to the position.
    fn label(&self, position: usize) -> String {
        if self.name.is_empty() {
            format!("arg{position}")
        } else {
            self.name.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodEntry {
    /// Disambiguated key (`withdraw`, `withdraw0`, ...)
    pub key: String,
    /// Name as declared in the ABI
    pub name: String,
    pub signature: String,
    pub selector: Selector,
    pub mutability: Mutability,
    pub inputs: Vec<ParamEntry>,
    pub outputs: Vec<ParamEntry>,
}

impl MethodEntry {
    fn input_types(&self) -> DynSolType {
        DynSolType::Tuple(self.inputs.iter().map(|p| p.ty.clone()).collect())
    }

    fn output_types(&self) -> DynSolType {
        DynSolType::Tuple(self.outputs.iter().map(|p| p.ty.clone()).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventEntry {
    pub key: String,
    pub name: String,
    pub signature: String,
    /// keccak256 of the signature
    pub topic0: B256,
    pub anonymous: bool,
    pub fields: Vec<ParamEntry>,
}

impl EventEntry {
    pub fn indexed(&self) -> impl Iterator<Item = &ParamEntry> {
        self.fields.iter().filter(|f| f.indexed)
    }

    pub fn non_indexed(&self) -> impl Iterator<Item = &ParamEntry> {
        self.fields.iter().filter(|f| !f.indexed)
    }

    fn malformed(&self, detail: impl Into<String>) -> BindError {
        BindError::MalformedLog {
            event: self.key.clone(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEntry {
    pub key: String,
    pub name: String,
    pub signature: String,
    pub selector: Selector,
    pub inputs: Vec<ParamEntry>,
}

impl ErrorEntry {
    /// Decode the arguments following the selector.
    pub fn decode_args(&self, body: &[u8]) -> Result<Vec<DynSolValue>> {
        let types = DynSolType::Tuple(self.inputs.iter().map(|p| p.ty.clone()).collect());
        decode_tuple(&types, body).map_err(|detail| BindError::MalformedReturn {
            method: self.key.clone(),
            detail,
        })
    }

    /// Encode a revert payload for this error.
    pub fn encode(&self, args: Vec<DynSolValue>) -> Result<Bytes> {
        let args = coerce_params(&self.inputs, args, &self.key)?;
        let mut data = self.selector.to_vec();
        data.extend(DynSolValue::Tuple(args).abi_encode_params());
        Ok(data.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorEntry {
    pub inputs: Vec<ParamEntry>,
    pub mutability: Mutability,
}

/// Immutable description of one contract interface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbiDescriptor {
    methods: Vec<MethodEntry>,
    method_keys: HashMap<String, usize>,
    events: Vec<EventEntry>,
    event_keys: HashMap<String, usize>,
    errors: Vec<ErrorEntry>,
    error_keys: HashMap<String, usize>,
    constructor: Option<ConstructorEntry>,
    fallback: Option<Mutability>,
    receive: bool,
}

impl FromStr for AbiDescriptor {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AbiDescriptor {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Parse ABI JSON, resolving every type and checking interface invariants.
    pub fn parse(json: &str) -> Result<Self> {
        let items: Vec<Value> =
            serde_json::from_str(json).map_err(|e| BindError::MalformedAbi(e.to_string()))?;

        let mut abi = AbiDescriptor::default();
        let mut selectors: HashMap<Selector, String> = HashMap::new();
        let mut topics: HashMap<B256, String> = HashMap::new();

        for (position, mut item) in items.into_iter().enumerate() {
            let Some(object) = item.as_object_mut() else {
                return Err(BindError::MalformedAbi(format!(
                    "element {position} is not an object"
                )));
            };
            let kind = match object.get("type") {
                None => "function".to_string(),
                Some(Value::String(kind)) => kind.clone(),
                Some(other) => {
                    return Err(BindError::MalformedAbi(format!(
                        "element {position} has a non-string type {other}"
                    )))
                }
            };
            object.insert("type".into(), Value::String(kind.clone()));
            let raw = item.to_string();

            match kind.as_str() {
                "function" => {
                    let function: Function = from_item(&raw, position)?;
                    let entry = abi.push_method(&function)?;
                    if let Some(previous) = selectors.insert(entry.selector, entry.signature.clone())
                    {
                        return Err(BindError::MalformedAbi(format!(
                            "selector {} of {} collides with {previous}",
                            entry.selector, entry.signature
                        )));
                    }
                }
                "event" => {
                    let event: Event = from_item(&raw, position)?;
                    let entry = abi.push_event(&event)?;
                    if !entry.anonymous {
                        if let Some(previous) =
                            topics.insert(entry.topic0, entry.signature.clone())
                        {
                            return Err(BindError::MalformedAbi(format!(
                                "event {} collides with {previous}",
                                entry.signature
                            )));
                        }
                    }
                }
                "error" => {
                    let error: JsonError = from_item(&raw, position)?;
                    abi.push_error(&error)?;
                }
                "constructor" => {
                    let constructor: Constructor = from_item(&raw, position)?;
                    if abi.constructor.is_some() {
                        return Err(BindError::MalformedAbi("duplicate constructor".into()));
                    }
                    abi.constructor = Some(ConstructorEntry {
                        inputs: constructor
                            .inputs
                            .iter()
                            .map(ParamEntry::from_param)
                            .collect::<Result<_>>()?,
                        mutability: constructor.state_mutability.into(),
                    });
                }
                "fallback" => {
                    let fallback: Fallback = from_item(&raw, position)?;
                    if abi.fallback.is_some() {
                        return Err(BindError::MalformedAbi("duplicate fallback".into()));
                    }
                    abi.fallback = Some(fallback.state_mutability.into());
                }
                "receive" => {
                    let _receive: Receive = from_item(&raw, position)?;
                    if abi.receive {
                        return Err(BindError::MalformedAbi("duplicate receive".into()));
                    }
                    abi.receive = true;
                }
                other => {
                    return Err(BindError::MalformedAbi(format!(
                        "element {position} has unknown type `{other}`"
                    )))
                }
            }
        }

        Ok(abi)
    }

    fn push_method(&mut self, function: &Function) -> Result<&MethodEntry> {
        let key = disambiguate(&function.name, &self.method_keys);
        let entry = MethodEntry {
            key: key.clone(),
            name: function.name.clone(),
            signature: function.signature(),
            selector: function.selector(),
            mutability: function.state_mutability.into(),
            inputs: function
                .inputs
                .iter()
                .map(ParamEntry::from_param)
                .collect::<Result<_>>()?,
            outputs: function
                .outputs
                .iter()
                .map(ParamEntry::from_param)
                .collect::<Result<_>>()?,
        };
        self.method_keys.insert(key, self.methods.len());
        self.methods.push(entry);
        Ok(&self.methods[self.methods.len() - 1])
    }

    fn push_event(&mut self, event: &Event) -> Result<&EventEntry> {
        let fields = event
            .inputs
            .iter()
            .map(ParamEntry::from_event_param)
            .collect::<Result<Vec<_>>>()?;
        let indexed = fields.iter().filter(|f| f.indexed).count();
        let limit = if event.anonymous {
            MAX_INDEXED + 1
        } else {
            MAX_INDEXED
        };
        if indexed > limit {
            return Err(BindError::MalformedAbi(format!(
                "event {} has {indexed} indexed fields, at most {limit} allowed",
                event.name
            )));
        }

        let key = disambiguate(&event.name, &self.event_keys);
        let entry = EventEntry {
            key: key.clone(),
            name: event.name.clone(),
            signature: event.signature(),
            topic0: event.selector(),
            anonymous: event.anonymous,
            fields,
        };
        self.event_keys.insert(key, self.events.len());
        self.events.push(entry);
        Ok(&self.events[self.events.len() - 1])
    }

    fn push_error(&mut self, error: &JsonError) -> Result<()> {
        let key = disambiguate(&error.name, &self.error_keys);
        let entry = ErrorEntry {
            key: key.clone(),
            name: error.name.clone(),
            signature: error.signature(),
            selector: error.selector(),
            inputs: error
                .inputs
                .iter()
                .map(ParamEntry::from_param)
                .collect::<Result<_>>()?,
        };
        self.error_keys.insert(key, self.errors.len());
        self.errors.push(entry);
        Ok(())
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Look up a method by its disambiguated key.
    pub fn method(&self, key: &str) -> Result<&MethodEntry> {
        self.method_keys
            .get(key)
            .map(|&i| &self.methods[i])
            .ok_or_else(|| BindError::UnknownMethod(key.to_string()))
    }

    /// Look up an event by its disambiguated key.
    pub fn event(&self, key: &str) -> Result<&EventEntry> {
        self.event_keys
            .get(key)
            .map(|&i| &self.events[i])
            .ok_or_else(|| BindError::UnknownEvent(key.to_string()))
    }

    pub fn error(&self, key: &str) -> Option<&ErrorEntry> {
        self.error_keys.get(key).map(|&i| &self.errors[i])
    }

    pub fn method_by_selector(&self, selector: Selector) -> Option<&MethodEntry> {
        self.methods.iter().find(|m| m.selector == selector)
    }

    pub fn event_by_topic(&self, topic0: B256) -> Option<&EventEntry> {
        self.events
            .iter()
            .find(|e| !e.anonymous && e.topic0 == topic0)
    }

    pub fn error_by_selector(&self, selector: Selector) -> Option<&ErrorEntry> {
        self.errors.iter().find(|e| e.selector == selector)
    }

    /// Methods in declaration order.
    pub fn methods(&self) -> &[MethodEntry] {
        &self.methods
    }

    /// Events in declaration order.
    pub fn events(&self) -> &[EventEntry] {
        &self.events
    }

    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    pub fn constructor(&self) -> Option<&ConstructorEntry> {
        self.constructor.as_ref()
    }

    pub fn fallback(&self) -> Option<Mutability> {
        self.fallback
    }

    pub fn has_receive(&self) -> bool {
        self.receive
    }

    // =========================================================================
    // Calldata
    // =========================================================================

    /// Encode `selector ‖ args` for a method call.
    pub fn encode_call(&self, method: &str, args: Vec<DynSolValue>) -> Result<Bytes> {
        let entry = self.method(method)?;
        let args = coerce_params(&entry.inputs, args, &entry.key)?;
        let mut data = entry.selector.to_vec();
        data.extend(DynSolValue::Tuple(args).abi_encode_params());
        Ok(data.into())
    }

    /// Encode constructor arguments, to be appended to creation bytecode.
    pub fn encode_constructor(&self, args: Vec<DynSolValue>) -> Result<Vec<u8>> {
        match &self.constructor {
            Some(constructor) => {
                let args = coerce_params(&constructor.inputs, args, "constructor")?;
                Ok(DynSolValue::Tuple(args).abi_encode_params())
            }
            None if args.is_empty() => Ok(Vec::new()),
            None => Err(BindError::type_mismatch(
                "constructor",
                "no arguments",
                format!("got {}", args.len()),
            )),
        }
    }

    /// Decode calldata back into the method it targets and its arguments.
    pub fn decode_input(&self, calldata: &[u8]) -> Result<(&MethodEntry, Vec<DynSolValue>)> {
        if calldata.len() < 4 {
            return Err(BindError::UnknownMethod(format!(
                "calldata of {} bytes has no selector",
                calldata.len()
            )));
        }
        let selector = Selector::from_slice(&calldata[..4]);
        let entry = self
            .method_by_selector(selector)
            .ok_or_else(|| BindError::UnknownMethod(selector.to_string()))?;
        let args = decode_tuple(&entry.input_types(), &calldata[4..]).map_err(|detail| {
            BindError::type_mismatch(&entry.key, &entry.signature, detail)
        })?;
        Ok((entry, args))
    }

    /// Decode the return data of a method into its outputs, in order.
    pub fn decode_returns(&self, method: &str, data: &[u8]) -> Result<Vec<DynSolValue>> {
        let entry = self.method(method)?;
        if entry.outputs.is_empty() {
            return Ok(Vec::new());
        }
        decode_tuple(&entry.output_types(), data).map_err(|detail| BindError::MalformedReturn {
            method: entry.key.clone(),
            detail,
        })
    }

    /// Encode method outputs as return data.
    pub fn encode_returns(&self, method: &str, values: Vec<DynSolValue>) -> Result<Bytes> {
        let entry = self.method(method)?;
        let values = coerce_params(&entry.outputs, values, &entry.key)?;
        Ok(DynSolValue::Tuple(values).abi_encode_params().into())
    }

    /// Decode a revert payload against the errors declared in this interface.
    pub fn decode_revert(&self, data: Bytes) -> Revert {
        revert::decode_revert(data, Some(self))
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Decode a log into fields in declaration order.
    ///
    /// Indexed fields come from topics 1..k, the rest from the data section.
    /// Indexed fields of hashed types are returned as the raw 32-byte topic.
    pub fn decode_log(&self, event: &str, log: &LogData) -> Result<Vec<EventField>> {
        let entry = self.event(event)?;
        let topics = log.topics();

        let indexed_topics = if entry.anonymous {
            topics
        } else {
            match topics.first() {
                Some(topic0) if *topic0 == entry.topic0 => &topics[1..],
                Some(topic0) => {
                    return Err(entry.malformed(format!("topic-0 {topic0} does not match")))
                }
                None => return Err(entry.malformed("log has no topics")),
            }
        };

        let expected = entry.indexed().count();
        if indexed_topics.len() != expected {
            return Err(entry.malformed(format!(
                "expected {expected} indexed topics, got {}",
                indexed_topics.len()
            )));
        }

        let data_types =
            DynSolType::Tuple(entry.non_indexed().map(|f| f.ty.clone()).collect());
        let data_values = if expected == entry.fields.len() {
            Vec::new()
        } else {
            decode_tuple(&data_types, &log.data).map_err(|detail| entry.malformed(detail))?
        };
        let mut data_values = data_values.into_iter();
        let mut topic_values = indexed_topics.iter();

        let mut fields = Vec::with_capacity(entry.fields.len());
        for (position, field) in entry.fields.iter().enumerate() {
            let value = if field.indexed {
                let topic = topic_values
                    .next()
                    .ok_or_else(|| entry.malformed("missing indexed topic"))?;
                decode_topic(&field.ty, *topic).map_err(|detail| {
                    entry.malformed(format!("field {}: {detail}", field.label(position)))
                })?
            } else {
                data_values
                    .next()
                    .ok_or_else(|| entry.malformed("missing data field"))?
            };
            fields.push(EventField {
                name: field.name.clone(),
                value,
                indexed: field.indexed,
            });
        }
        Ok(fields)
    }

    /// Build the log an emitting contract would produce for these field values.
    ///
    /// Indexed fields of hashed types may be given as the value itself or as the
    /// pre-computed 32-byte hash.
    pub fn encode_event(&self, event: &str, values: Vec<DynSolValue>) -> Result<LogData> {
        let entry = self.event(event)?;
        if values.len() != entry.fields.len() {
            return Err(BindError::type_mismatch(
                &entry.key,
                format!("{} fields", entry.fields.len()),
                format!("got {}", values.len()),
            ));
        }

        let mut topics = Vec::with_capacity(MAX_INDEXED + 1);
        if !entry.anonymous {
            topics.push(entry.topic0);
        }
        let mut data = Vec::new();
        for (position, (field, value)) in entry.fields.iter().zip(values).enumerate() {
            let label = field.label(position);
            if field.indexed {
                topics.push(topic_for(&label, field, value)?);
            } else {
                data.push(coerce(&label, &field.ty, value)?);
            }
        }
        Ok(LogData::new_unchecked(
            topics,
            DynSolValue::Tuple(data).abi_encode_params().into(),
        ))
    }

    /// Translate per-indexed-field filter values into topic sets.
    ///
    /// `filters[i]` restricts the i-th indexed field; an empty list matches
    /// anything. The returned sets start with topic-0 unless the event is
    /// anonymous.
    pub fn topic_filter(&self, event: &str, filters: &[Vec<DynSolValue>]) -> Result<Vec<Vec<B256>>> {
        let entry = self.event(event)?;
        let indexed: Vec<&ParamEntry> = entry.indexed().collect();
        if filters.len() > indexed.len() {
            return Err(BindError::type_mismatch(
                &entry.key,
                format!("at most {} indexed filters", indexed.len()),
                format!("got {}", filters.len()),
            ));
        }

        let mut topics = Vec::with_capacity(indexed.len() + 1);
        if !entry.anonymous {
            topics.push(vec![entry.topic0]);
        }
        for (position, (field, values)) in indexed.iter().zip(filters).enumerate() {
            let label = field.label(position);
            let set = values
                .iter()
                .map(|value| topic_for(&label, field, value.clone()))
                .collect::<Result<Vec<_>>>()?;
            topics.push(set);
        }
        while topics.last().is_some_and(Vec::is_empty) {
            topics.pop();
        }
        Ok(topics)
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn from_item<T: serde::de::DeserializeOwned>(raw: &str, position: usize) -> Result<T> {
    serde_json::from_str(raw)
        .map_err(|e| BindError::MalformedAbi(format!("element {position}: {e}")))
}

fn disambiguate(name: &str, taken: &HashMap<String, usize>) -> String {
    if !taken.contains_key(name) {
        return name.to_string();
    }
    (0..)
        .map(|i| format!("{name}{i}"))
        .find(|candidate| !taken.contains_key(candidate))
        .unwrap_or_else(|| name.to_string())
}

fn coerce_params(
    params: &[ParamEntry],
    args: Vec<DynSolValue>,
    context: &str,
) -> Result<Vec<DynSolValue>> {
    let labels: Vec<String> = params
        .iter()
        .enumerate()
        .map(|(i, p)| p.label(i))
        .collect();
    coerce_all(
        labels.iter().map(String::as_str).zip(params.iter().map(|p| &p.ty)),
        args,
        context,
    )
}

fn decode_tuple(types: &DynSolType, data: &[u8]) -> std::result::Result<Vec<DynSolValue>, String> {
    match types.abi_decode_params(data) {
        Ok(DynSolValue::Tuple(values)) => Ok(values),
        Ok(other) => Ok(vec![other]),
        Err(e) => Err(e.to_string()),
    }
}

fn is_hashed(ty: &DynSolType) -> bool {
    matches!(
        ty,
        DynSolType::String
            | DynSolType::Bytes
            | DynSolType::Array(_)
            | DynSolType::FixedArray(..)
            | DynSolType::Tuple(_)
    ) || ty.sol_type_name().starts_with('(')
}

fn decode_topic(ty: &DynSolType, topic: B256) -> std::result::Result<DynSolValue, String> {
    if is_hashed(ty) {
        return Ok(DynSolValue::FixedBytes(topic, 32));
    }
    ty.abi_decode(topic.as_slice()).map_err(|e| e.to_string())
}

fn topic_for(label: &str, field: &ParamEntry, value: DynSolValue) -> Result<B256> {
    if field.is_hashed_topic() {
        return match value {
            DynSolValue::String(s) => Ok(alloy::primitives::keccak256(s.as_bytes())),
            DynSolValue::Bytes(b) if matches!(field.ty, DynSolType::Bytes) => {
                Ok(alloy::primitives::keccak256(b))
            }
            DynSolValue::FixedBytes(hash, 32) => Ok(hash),
            other => Err(BindError::type_mismatch(
                label,
                format!("{} or its 32-byte hash", field.canonical),
                format!("got {}", describe(&other)),
            )),
        };
    }
    let value = coerce(label, &field.ty, value)?;
    value.as_word().ok_or_else(|| {
        BindError::type_mismatch(label, &field.canonical, "value has no topic encoding")
    })
}
