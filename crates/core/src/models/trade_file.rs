/// A trades file picked by the user for import (CSV contents plus its name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl TradeFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}
