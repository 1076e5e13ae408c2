use std::fmt;

/// Opaque session credential (the raw `Cookie` header value).
///
/// Passed through to the server unmodified; never parsed or validated here.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// `None` for an absent or empty header value.
    pub fn from_header(raw: Option<&str>) -> Option<Self> {
        raw.filter(|value| !value.is_empty()).map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep credentials out of logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}
