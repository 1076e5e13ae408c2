use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The category of a held asset, used as the "type" filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// Brazilian treasury bond (LFT / Tesouro SELIC)
    Treasury,
    /// Exchange-traded fund
    Etf,
}

impl AssetKind {
    /// Wire tags, in declaration order.
    pub const TAGS: &'static [&'static str] = &["Treasury", "Etf"];

    pub fn tag(&self) -> &'static str {
        match self {
            AssetKind::Treasury => "Treasury",
            AssetKind::Etf => "Etf",
        }
    }

    /// Exact, case-sensitive match against the wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Treasury" => Some(AssetKind::Treasury),
            "Etf" => Some(AssetKind::Etf),
            _ => None,
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for AssetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetKind::from_tag(s).ok_or_else(|| format!("unknown asset kind: {s}"))
    }
}

/// A held asset. Closed union: a treasury bond identified by its code
/// (maturity date on the wire) or an ETF identified by its ticker.
///
/// Serializes in the canonical explicit-tag form `{"type": ..., "data": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Assetable {
    Treasury(String),
    Etf(String),
}

impl Assetable {
    pub fn new(kind: AssetKind, code: impl Into<String>) -> Self {
        match kind {
            AssetKind::Treasury => Assetable::Treasury(code.into()),
            AssetKind::Etf => Assetable::Etf(code.into()),
        }
    }

    pub fn kind(&self) -> AssetKind {
        match self {
            Assetable::Treasury(_) => AssetKind::Treasury,
            Assetable::Etf(_) => AssetKind::Etf,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Assetable::Treasury(code) | Assetable::Etf(code) => code,
        }
    }
}
