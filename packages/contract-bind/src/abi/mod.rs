//! ABI metadata: parsing, argument coercion, and revert decoding

pub mod coerce;
pub mod descriptor;
pub mod revert;

pub use descriptor::{
    AbiDescriptor, ConstructorEntry, ErrorEntry, EventEntry, MethodEntry, Mutability, ParamEntry,
    MAX_INDEXED,
};
pub use revert::{decode_revert, encode_error_string, ERROR_STRING_SELECTOR, PANIC_SELECTOR};
