//! Conversions between native Rust types and dynamic ABI values
//!
//! Generated bindings convert their typed arguments with [`IntoSolValue`] and
//! read decoded outputs and event fields back with [`FieldReader`].

use std::vec;

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, Bytes, FixedBytes, I256, U256};

use crate::error::{BindError, Result};

/// Conversion of a native value into an ABI value.
pub trait IntoSolValue {
    fn into_sol_value(self) -> DynSolValue;
}

/// Conversion of a decoded ABI value into a native value.
///
/// Returns `None` when the value is of a different kind or out of range.
pub trait FromSolValue: Sized {
    fn from_sol_value(value: DynSolValue) -> Option<Self>;
}

// =============================================================================
// Scalars
// =============================================================================

impl IntoSolValue for DynSolValue {
    fn into_sol_value(self) -> DynSolValue {
        self
    }
}

impl FromSolValue for DynSolValue {
    fn from_sol_value(value: DynSolValue) -> Option<Self> {
        Some(value)
    }
}

impl IntoSolValue for bool {
    fn into_sol_value(self) -> DynSolValue {
        DynSolValue::Bool(self)
    }
}

impl FromSolValue for bool {
    fn from_sol_value(value: DynSolValue) -> Option<Self> {
        value.as_bool()
    }
}

impl IntoSolValue for Address {
    fn into_sol_value(self) -> DynSolValue {
        DynSolValue::Address(self)
    }
}

impl FromSolValue for Address {
    fn from_sol_value(value: DynSolValue) -> Option<Self> {
        value.as_address()
    }
}

impl IntoSolValue for String {
    fn into_sol_value(self) -> DynSolValue {
        DynSolValue::String(self)
    }
}

impl IntoSolValue for &str {
    fn into_sol_value(self) -> DynSolValue {
        DynSolValue::String(self.to_string())
    }
}

impl FromSolValue for String {
    fn from_sol_value(value: DynSolValue) -> Option<Self> {
        match value {
            DynSolValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl IntoSolValue for Bytes {
    fn into_sol_value(self) -> DynSolValue {
        DynSolValue::Bytes(self.to_vec())
    }
}

impl FromSolValue for Bytes {
    fn from_sol_value(value: DynSolValue) -> Option<Self> {
        match value {
            DynSolValue::Bytes(b) => Some(b.into()),
            _ => None,
        }
    }
}

impl<const N: usize> IntoSolValue for FixedBytes<N> {
    fn into_sol_value(self) -> DynSolValue {
        let size = N.min(32);
        let mut word = FixedBytes::<32>::ZERO;
        word[..size].copy_from_slice(&self[..size]);
        DynSolValue::FixedBytes(word, size)
    }
}

impl<const N: usize> FromSolValue for FixedBytes<N> {
    fn from_sol_value(value: DynSolValue) -> Option<Self> {
        match value {
            DynSolValue::FixedBytes(word, size) if size == N && N <= 32 => {
                Some(FixedBytes::from_slice(&word[..N]))
            }
            _ => None,
        }
    }
}

impl IntoSolValue for U256 {
    fn into_sol_value(self) -> DynSolValue {
        DynSolValue::Uint(self, 256)
    }
}

impl FromSolValue for U256 {
    fn from_sol_value(value: DynSolValue) -> Option<Self> {
        match value {
            DynSolValue::Uint(v, _) => Some(v),
            _ => None,
        }
    }
}

impl IntoSolValue for I256 {
    fn into_sol_value(self) -> DynSolValue {
        DynSolValue::Int(self, 256)
    }
}

impl FromSolValue for I256 {
    fn from_sol_value(value: DynSolValue) -> Option<Self> {
        match value {
            DynSolValue::Int(v, _) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_uint {
    ($($t:ty => $bits:expr),* $(,)?) => {$(
        impl IntoSolValue for $t {
            fn into_sol_value(self) -> DynSolValue {
                DynSolValue::Uint(U256::from(self), $bits)
            }
        }

        impl FromSolValue for $t {
            fn from_sol_value(value: DynSolValue) -> Option<Self> {
                match value {
                    DynSolValue::Uint(v, _) => <$t>::try_from(v).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

impl_uint!(u8 => 8, u16 => 16, u32 => 32, u64 => 64, u128 => 128);

macro_rules! impl_int {
    ($($t:ty => $bits:expr),* $(,)?) => {$(
        impl IntoSolValue for $t {
            fn into_sol_value(self) -> DynSolValue {
                DynSolValue::Int(i256_from_i128(self as i128), $bits)
            }
        }

        impl FromSolValue for $t {
            fn from_sol_value(value: DynSolValue) -> Option<Self> {
                match value {
                    DynSolValue::Int(v, _) => <$t>::try_from(i128_from_i256(v)?).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

impl_int!(i8 => 8, i16 => 16, i32 => 32, i64 => 64, i128 => 128);

fn i256_from_i128(value: i128) -> I256 {
    let magnitude = I256::from_raw(U256::from(value.unsigned_abs()));
    if value < 0 {
        -magnitude
    } else {
        magnitude
    }
}

fn i128_from_i256(value: I256) -> Option<i128> {
    let (sign, abs) = value.into_sign_and_abs();
    let abs = u128::try_from(abs).ok()?;
    if sign.is_negative() {
        if abs == 1u128 << 127 {
            Some(i128::MIN)
        } else {
            i128::try_from(abs).ok().map(|v| -v)
        }
    } else {
        i128::try_from(abs).ok()
    }
}

// =============================================================================
// Containers
// =============================================================================

impl<T: IntoSolValue> IntoSolValue for Vec<T> {
    fn into_sol_value(self) -> DynSolValue {
        DynSolValue::Array(self.into_iter().map(IntoSolValue::into_sol_value).collect())
    }
}

impl<T: FromSolValue> FromSolValue for Vec<T> {
    fn from_sol_value(value: DynSolValue) -> Option<Self> {
        match value {
            DynSolValue::Array(values) | DynSolValue::FixedArray(values) => {
                values.into_iter().map(T::from_sol_value).collect()
            }
            _ => None,
        }
    }
}

impl<T: IntoSolValue, const K: usize> IntoSolValue for [T; K] {
    fn into_sol_value(self) -> DynSolValue {
        DynSolValue::FixedArray(self.into_iter().map(IntoSolValue::into_sol_value).collect())
    }
}

impl<T: FromSolValue, const K: usize> FromSolValue for [T; K] {
    fn from_sol_value(value: DynSolValue) -> Option<Self> {
        match value {
            DynSolValue::FixedArray(values) if values.len() == K => values
                .into_iter()
                .map(T::from_sol_value)
                .collect::<Option<Vec<T>>>()?
                .try_into()
                .ok(),
            _ => None,
        }
    }
}

macro_rules! impl_tuple {
    ($(($($name:ident),+)),* $(,)?) => {$(
        impl<$($name: IntoSolValue),+> IntoSolValue for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_sol_value(self) -> DynSolValue {
                let ($($name,)+) = self;
                DynSolValue::Tuple(vec![$($name.into_sol_value()),+])
            }
        }

        impl<$($name: FromSolValue),+> FromSolValue for ($($name,)+) {
            fn from_sol_value(value: DynSolValue) -> Option<Self> {
                let DynSolValue::Tuple(values) = value else {
                    return None;
                };
                let mut values = values.into_iter();
                let tuple = ($($name::from_sol_value(values.next()?)?,)+);
                values.next().is_none().then_some(tuple)
            }
        }
    )*};
}

impl_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
);

/// Filter values for one indexed event field; an empty slice matches any value.
pub fn topic_values<T: IntoSolValue + Clone>(values: &[T]) -> Vec<DynSolValue> {
    values.iter().cloned().map(IntoSolValue::into_sol_value).collect()
}

// =============================================================================
// Shaping decoded values
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Returns,
    Log,
}

/// Positional reader over decoded values that names the failing field.
#[derive(Debug)]
pub struct FieldReader {
    source: Source,
    context: String,
    values: vec::IntoIter<DynSolValue>,
}

impl FieldReader {
    /// Reader over the outputs of `method`; failures are `MalformedReturn`.
    pub fn returns(method: &str, values: Vec<DynSolValue>) -> Self {
        Self {
            source: Source::Returns,
            context: method.to_string(),
            values: values.into_iter(),
        }
    }

    /// Reader over the fields of `event`; failures are `MalformedLog`.
    pub fn log(event: &str, values: Vec<DynSolValue>) -> Self {
        Self {
            source: Source::Log,
            context: event.to_string(),
            values: values.into_iter(),
        }
    }

    /// Take the next value as `T`.
    pub fn next<T: FromSolValue>(&mut self, name: &str) -> Result<T> {
        let value = self
            .values
            .next()
            .ok_or_else(|| self.error(format!("missing field `{name}`")))?;
        let described = crate::abi::coerce::describe(&value);
        T::from_sol_value(value).ok_or_else(|| {
            self.error(format!(
                "field `{name}` of type {described} does not convert to {}",
                std::any::type_name::<T>()
            ))
        })
    }

    fn error(&self, detail: String) -> BindError {
        match self.source {
            Source::Returns => BindError::MalformedReturn {
                method: self.context.clone(),
                detail,
            },
            Source::Log => BindError::MalformedLog {
                event: self.context.clone(),
                detail,
            },
        }
    }
}
