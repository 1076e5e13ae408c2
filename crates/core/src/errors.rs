use thiserror::Error;

/// Unified error type for the portfolio client core.
/// Every public function that talks to the server returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Decoding ────────────────────────────────────────────────────
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    // ── Transport ───────────────────────────────────────────────────
    #[error("Bad status from {endpoint}: {status}")]
    BadStatus { endpoint: String, status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    // ── Session ─────────────────────────────────────────────────────
    #[error("Missing session — no portfolio cookie available")]
    MissingSession,

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CoreError {
    /// True for failures produced by the HTTP layer (status or network).
    pub fn is_transport(&self) -> bool {
        matches!(self, CoreError::BadStatus { .. } | CoreError::Network(_))
    }
}

/// A response body that did not match the expected shape.
///
/// `path` points at the offending value using `$` for the document root,
/// `[i]` for array elements and `.name` for object fields.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at {path}")]
pub struct DecodeError {
    pub path: String,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn new(path: impl Into<String>, kind: DecodeErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn is_invalid_date(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::InvalidDate(_))
    }

    pub fn is_unrecognized_variant(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::UnrecognizedVariant { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing field `{0}`")]
    MissingField(String),

    #[error("invalid date {0:?}")]
    InvalidDate(String),

    #[error("unrecognized variant {found:?}, expected one of {expected:?}")]
    UnrecognizedVariant {
        found: String,
        expected: &'static [&'static str],
    },

    #[error("expected {expected} elements, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("malformed JSON: {0}")]
    MalformedJson(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::new("$", DecodeErrorKind::MalformedJson(e.to_string()))
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Decode(e.into())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Strip query parameters from URLs; reqwest errors carry the full URL.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
