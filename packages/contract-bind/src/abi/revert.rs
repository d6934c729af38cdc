//! Revert payload decoding
//!
//! Solidity reports failures as ABI-encoded errors: `Error(string)` for
//! `require`/`revert` messages, `Panic(uint256)` for compiler checks, and
//! custom errors declared in the contract.

use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::primitives::{Bytes, Selector};

use crate::abi::AbiDescriptor;
use crate::error::{Revert, RevertReason};

/// `bytes4(keccak256("Error(string)"))`
pub const ERROR_STRING_SELECTOR: Selector = Selector::new([0x08, 0xc3, 0x79, 0xa0]);

/// `bytes4(keccak256("Panic(uint256)"))`
pub const PANIC_SELECTOR: Selector = Selector::new([0x4e, 0x48, 0x7b, 0x71]);

/// Decode a revert payload. Unknown payloads are kept as raw data.
pub fn decode_revert(data: Bytes, abi: Option<&AbiDescriptor>) -> Revert {
    let reason = decode_reason(&data, abi);
    Revert { data, reason }
}

fn decode_reason(data: &[u8], abi: Option<&AbiDescriptor>) -> Option<RevertReason> {
    if data.len() < 4 {
        return None;
    }
    let selector = Selector::from_slice(&data[..4]);
    let body = &data[4..];

    if selector == ERROR_STRING_SELECTOR {
        return match single(DynSolType::String, body)? {
            DynSolValue::String(message) => Some(RevertReason::Message(message)),
            _ => None,
        };
    }
    if selector == PANIC_SELECTOR {
        return match single(DynSolType::Uint(256), body)? {
            DynSolValue::Uint(code, _) => Some(RevertReason::Panic(code)),
            _ => None,
        };
    }

    let error = abi?.error_by_selector(selector)?;
    let args = error.decode_args(body).ok()?;
    Some(RevertReason::Custom {
        name: error.name.clone(),
        args,
    })
}

fn single(ty: DynSolType, body: &[u8]) -> Option<DynSolValue> {
    match DynSolType::Tuple(vec![ty]).abi_decode_params(body).ok()? {
        DynSolValue::Tuple(mut values) if values.len() == 1 => values.pop(),
        _ => None,
    }
}

/// ABI-encode an `Error(string)` revert payload.
pub fn encode_error_string(message: &str) -> Bytes {
    let mut data = ERROR_STRING_SELECTOR.to_vec();
    data.extend(
        DynSolValue::Tuple(vec![DynSolValue::String(message.to_string())]).abi_encode_params(),
    );
    data.into()
}
