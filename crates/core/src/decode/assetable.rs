use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{string, Decode, Fields};
use crate::errors::{DecodeError, DecodeErrorKind};
use crate::models::assetable::{AssetKind, Assetable};

/// Which wire encodings of [`Assetable`] a decoder accepts.
///
/// - `Canonical`: only the explicit-tag form `{"type": "Etf", "data": "IVVB11"}`.
/// - `Migration`: the explicit-tag form first, then the short-tag form
///   `{"t": "Etf", "c": "IVVB11"}` when the first attempt fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireContract {
    #[default]
    Canonical,
    Migration,
}

struct TagLayout {
    tag: &'static str,
    payload: &'static str,
}

const EXPLICIT: TagLayout = TagLayout {
    tag: "type",
    payload: "data",
};

const SHORT: TagLayout = TagLayout {
    tag: "t",
    payload: "c",
};

fn decode_with(value: &Value, path: &str, layout: &TagLayout) -> Result<Assetable, DecodeError> {
    let fields = Fields::new(value, path)?;

    let kind = fields.with(layout.tag, |tag, tag_path| {
        let tag = string(tag, tag_path)?;
        AssetKind::from_tag(tag).ok_or_else(|| {
            DecodeError::new(
                tag_path,
                DecodeErrorKind::UnrecognizedVariant {
                    found: tag.to_string(),
                    expected: AssetKind::TAGS,
                },
            )
        })
    })?;

    // Both variants carry a plain string payload.
    let code = fields.string(layout.payload)?;

    Ok(Assetable::new(kind, code))
}

/// Decode an assetable according to `contract`.
///
/// Under `Migration` the short form is only attempted after the explicit
/// form fails; if both fail the explicit form's error is reported.
pub fn decode_assetable(
    value: &Value,
    path: &str,
    contract: WireContract,
) -> Result<Assetable, DecodeError> {
    match decode_with(value, path, &EXPLICIT) {
        Ok(assetable) => Ok(assetable),
        Err(err) => match contract {
            WireContract::Canonical => Err(err),
            WireContract::Migration => decode_with(value, path, &SHORT).map_err(|_| err),
        },
    }
}

impl Decode for Assetable {
    fn decode(value: &Value, path: &str, contract: WireContract) -> Result<Self, DecodeError> {
        decode_assetable(value, path, contract)
    }
}
