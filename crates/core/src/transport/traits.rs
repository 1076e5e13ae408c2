use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::session::SessionToken;

/// Trait abstraction over the HTTP layer.
///
/// The API service only needs "GET these bytes" and "POST this body";
/// everything else (TLS, timeouts, cookies on the wire) lives behind it.
/// Implementations must not retry.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Transport: Send + Sync {
    /// Human-readable name of this transport (for logs).
    fn name(&self) -> &str;

    /// GET `path` and return the raw body of a 2xx response.
    async fn get(&self, path: &str, session: &SessionToken) -> Result<Vec<u8>, CoreError>;

    /// POST `body` to `path`. Success is any 2xx status; the response body is ignored.
    async fn post(
        &self,
        path: &str,
        body: Vec<u8>,
        session: Option<&SessionToken>,
    ) -> Result<(), CoreError>;
}
