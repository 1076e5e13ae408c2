use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::COOKIE;
use reqwest::{Client, RequestBuilder, Response};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::Transport;
use crate::errors::CoreError;
use crate::models::session::SessionToken;
use crate::models::settings::ClientSettings;

/// `reqwest`-backed transport talking to the portfolio server.
pub struct HttpTransport {
    client: Client,
    settings: ClientSettings,
}

impl HttpTransport {
    pub fn new(settings: ClientSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
        let client = builder.build()?;
        Ok(Self { client, settings })
    }

    fn with_session(request: RequestBuilder, session: Option<&SessionToken>) -> RequestBuilder {
        match session {
            Some(token) => request.header(COOKIE, token.as_str()),
            None => request,
        }
    }

    fn check_status(path: &str, response: Response) -> Result<Response, CoreError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            warn!("{path} answered with status {status}");
            Err(CoreError::BadStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Transport for HttpTransport {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn get(&self, path: &str, session: &SessionToken) -> Result<Vec<u8>, CoreError> {
        let url = self.settings.endpoint_url(path);
        debug!("GET {url}");

        let request = Self::with_session(self.client.get(&url), Some(session));
        let response = Self::check_status(path, request.send().await?)?;
        let body = response.bytes().await?;

        debug!("GET {url} -> {} bytes", body.len());
        Ok(body.to_vec())
    }

    async fn post(
        &self,
        path: &str,
        body: Vec<u8>,
        session: Option<&SessionToken>,
    ) -> Result<(), CoreError> {
        let url = self.settings.endpoint_url(path);
        debug!("POST {url} ({} bytes)", body.len());

        let request = Self::with_session(self.client.post(&url).body(body), session);
        Self::check_status(path, request.send().await?)?;
        Ok(())
    }
}
