use serde_json::Value;

use super::{array, index_path, Decode, WireContract};
use crate::errors::DecodeError;

/// Decode every element of a JSON array, in order.
///
/// Fails on the first invalid element; no partial collection is returned.
pub fn decode_all<T: Decode>(
    value: &Value,
    path: &str,
    contract: WireContract,
) -> Result<Vec<T>, DecodeError> {
    decode_slice(array(value, path)?, path, contract)
}

pub fn decode_slice<T: Decode>(
    items: &[Value],
    path: &str,
    contract: WireContract,
) -> Result<Vec<T>, DecodeError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| T::decode(item, &index_path(path, i), contract))
        .collect()
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(value: &Value, path: &str, contract: WireContract) -> Result<Self, DecodeError> {
        decode_all(value, path, contract)
    }
}
