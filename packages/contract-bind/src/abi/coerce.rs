//! Argument coercion against resolved ABI types
//!
//! Values handed to the encoder are checked recursively against the declared
//! parameter type before any bytes are produced. Numeric values are narrowed to
//! the declared width, short byte strings are right-padded into `bytesN`, and
//! anything that cannot be represented is rejected.

use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::primitives::{B256, I256, U256};

use crate::error::{BindError, Result};

/// Check `value` against `ty`, returning the value re-tagged with the declared
/// widths and sizes.
pub fn coerce(argument: &str, ty: &DynSolType, value: DynSolValue) -> Result<DynSolValue> {
    match (ty, value) {
        (DynSolType::Bool, value @ DynSolValue::Bool(_)) => Ok(value),
        (DynSolType::Address, value @ DynSolValue::Address(_)) => Ok(value),
        (DynSolType::String, value @ DynSolValue::String(_)) => Ok(value),
        (DynSolType::Bytes, value @ DynSolValue::Bytes(_)) => Ok(value),
        (DynSolType::Bytes, DynSolValue::FixedBytes(word, size)) => {
            Ok(DynSolValue::Bytes(word[..size].to_vec()))
        }
        (DynSolType::Function, value @ DynSolValue::Function(_)) => Ok(value),

        (DynSolType::Uint(bits), DynSolValue::Uint(v, _)) => uint(argument, *bits, v),
        (DynSolType::Uint(bits), DynSolValue::Int(v, _)) => {
            if v.is_negative() {
                return Err(overflow(argument, ty));
            }
            uint(argument, *bits, v.into_raw())
        }
        (DynSolType::Int(bits), DynSolValue::Int(v, _)) => int(argument, *bits, v),
        (DynSolType::Int(bits), DynSolValue::Uint(v, _)) => {
            // Anything with the top bit set is not a non-negative I256.
            if v.bit_len() >= 256 {
                return Err(overflow(argument, ty));
            }
            int(argument, *bits, I256::from_raw(v))
        }

        (DynSolType::FixedBytes(size), DynSolValue::FixedBytes(word, given)) => {
            if given > *size {
                return Err(overflow(argument, ty));
            }
            Ok(DynSolValue::FixedBytes(word, *size))
        }
        (DynSolType::FixedBytes(size), DynSolValue::Bytes(bytes)) => {
            if bytes.len() > *size {
                return Err(overflow(argument, ty));
            }
            let mut word = B256::ZERO;
            word[..bytes.len()].copy_from_slice(&bytes);
            Ok(DynSolValue::FixedBytes(word, *size))
        }

        (DynSolType::Array(inner), DynSolValue::Array(values)) => {
            Ok(DynSolValue::Array(elements(argument, inner, values)?))
        }
        (DynSolType::FixedArray(inner, len), DynSolValue::FixedArray(values))
        | (DynSolType::FixedArray(inner, len), DynSolValue::Array(values)) => {
            if values.len() != *len {
                return Err(BindError::type_mismatch(
                    argument,
                    ty.sol_type_name(),
                    format!("got {} elements", values.len()),
                ));
            }
            Ok(DynSolValue::FixedArray(elements(argument, inner, values)?))
        }
        (DynSolType::Tuple(types), DynSolValue::Tuple(values)) => {
            if values.len() != types.len() {
                return Err(BindError::type_mismatch(
                    argument,
                    ty.sol_type_name(),
                    format!("got {} components", values.len()),
                ));
            }
            let coerced = types
                .iter()
                .zip(values)
                .enumerate()
                .map(|(i, (ty, value))| coerce(&format!("{argument}.{i}"), ty, value))
                .collect::<Result<Vec<_>>>()?;
            Ok(DynSolValue::Tuple(coerced))
        }

        (ty, value) => Err(BindError::type_mismatch(
            argument,
            ty.sol_type_name(),
            format!("got {}", describe(&value)),
        )),
    }
}

/// Coerce a positional argument list against a parameter list.
pub fn coerce_all<'a>(
    params: impl ExactSizeIterator<Item = (&'a str, &'a DynSolType)>,
    values: Vec<DynSolValue>,
    context: &str,
) -> Result<Vec<DynSolValue>> {
    if params.len() != values.len() {
        return Err(BindError::type_mismatch(
            context,
            format!("{} arguments", params.len()),
            format!("got {}", values.len()),
        ));
    }
    params
        .zip(values)
        .map(|((name, ty), value)| coerce(name, ty, value))
        .collect()
}

/// Human-readable Solidity type of a value, for error messages.
pub fn describe(value: &DynSolValue) -> String {
    value
        .as_type()
        .map(|ty| ty.sol_type_name().to_string())
        .unwrap_or_else(|| "an untyped value".to_string())
}

fn elements(
    argument: &str,
    inner: &DynSolType,
    values: Vec<DynSolValue>,
) -> Result<Vec<DynSolValue>> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| coerce(&format!("{argument}[{i}]"), inner, value))
        .collect()
}

fn uint(argument: &str, bits: usize, value: U256) -> Result<DynSolValue> {
    if value.bit_len() > bits {
        return Err(overflow(argument, &DynSolType::Uint(bits)));
    }
    Ok(DynSolValue::Uint(value, bits))
}

fn int(argument: &str, bits: usize, value: I256) -> Result<DynSolValue> {
    if bits < 256 {
        let (sign, abs) = value.into_sign_and_abs();
        let limit = U256::from(1) << (bits - 1);
        let fits = if sign.is_negative() {
            abs <= limit
        } else {
            abs < limit
        };
        if !fits {
            return Err(overflow(argument, &DynSolType::Int(bits)));
        }
    }
    Ok(DynSolValue::Int(value, bits))
}

fn overflow(argument: &str, ty: &DynSolType) -> BindError {
    BindError::OverflowArgument {
        argument: argument.to_string(),
        expected: ty.sol_type_name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::Address;

    #[test]
    fn test_uint_width_is_enforced() {
        let ok = coerce("wad", &DynSolType::Uint(8), DynSolValue::Uint(U256::from(255), 256));
        assert_eq!(ok.unwrap(), DynSolValue::Uint(U256::from(255), 8));

        let err = coerce("wad", &DynSolType::Uint(8), DynSolValue::Uint(U256::from(256), 256))
            .unwrap_err();
        assert!(matches!(err, BindError::OverflowArgument { .. }));
    }

    #[test]
    fn test_int_bounds() {
        let min = I256::try_from(-128i64).unwrap();
        assert!(coerce("x", &DynSolType::Int(8), DynSolValue::Int(min, 256)).is_ok());

        let below = I256::try_from(-129i64).unwrap();
        assert!(coerce("x", &DynSolType::Int(8), DynSolValue::Int(below, 256)).is_err());

        let max = I256::try_from(127i64).unwrap();
        assert!(coerce("x", &DynSolType::Int(8), DynSolValue::Int(max, 256)).is_ok());

        let above = I256::try_from(128i64).unwrap();
        assert!(coerce("x", &DynSolType::Int(8), DynSolValue::Int(above, 256)).is_err());
    }

    #[test]
    fn test_negative_into_uint_overflows() {
        let neg = I256::try_from(-1i64).unwrap();
        let err = coerce("x", &DynSolType::Uint(256), DynSolValue::Int(neg, 256)).unwrap_err();
        assert!(matches!(err, BindError::OverflowArgument { .. }));
    }

    #[test]
    fn test_fixed_bytes_padding_and_overflow() {
        let padded = coerce(
            "tag",
            &DynSolType::FixedBytes(4),
            DynSolValue::Bytes(vec![0xaa, 0xbb]),
        )
        .unwrap();
        let mut word = B256::ZERO;
        word[0] = 0xaa;
        word[1] = 0xbb;
        assert_eq!(padded, DynSolValue::FixedBytes(word, 4));

        let err = coerce(
            "tag",
            &DynSolType::FixedBytes(4),
            DynSolValue::Bytes(vec![1, 2, 3, 4, 5]),
        )
        .unwrap_err();
        assert!(matches!(err, BindError::OverflowArgument { .. }));
    }

    #[test]
    fn test_fixed_array_length_mismatch() {
        let ty = DynSolType::FixedArray(Box::new(DynSolType::Address), 2);
        let err = coerce(
            "owners",
            &ty,
            DynSolValue::Array(vec![DynSolValue::Address(Address::ZERO)]),
        )
        .unwrap_err();
        assert!(matches!(err, BindError::TypeMismatch { .. }));
    }

    #[test]
    fn test_kind_mismatch_names_argument() {
        let err = coerce("guy", &DynSolType::Address, DynSolValue::Bool(true)).unwrap_err();
        match err {
            BindError::TypeMismatch {
                argument, expected, ..
            } => {
                assert_eq!(argument, "guy");
                assert_eq!(expected, "address");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_arity_mismatch() {
        let types = [DynSolType::Address, DynSolType::Uint(256)];
        let params = ["guy", "wad"].into_iter().zip(types.iter());
        let err = coerce_all(params, vec![DynSolValue::Address(Address::ZERO)], "approve")
            .unwrap_err();
        assert!(matches!(err, BindError::TypeMismatch { .. }));
    }
}
