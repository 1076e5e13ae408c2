pub mod decode;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;
pub mod transport;
pub mod views;

use models::{
    amount::PortfolioAmount, position::PortfolioPosition, session::SessionToken,
    settings::ClientSettings, trade_file::TradeFile, transaction::Transaction,
};
use services::api_service::ApiService;
use transport::{http::HttpTransport, traits::Transport};
use views::{
    import::{run_import_command, ImportCommand},
    navigation::{menu_routes, Navigator, Route},
    transactions::TransactionsView,
};

use errors::CoreError;

/// Main entry point for the portfolio client core.
/// Holds the settings, the session token and the API service used by every view.
#[must_use]
pub struct PortfolioClient {
    settings: ClientSettings,
    api: ApiService,
    session: Option<SessionToken>,
}

impl std::fmt::Debug for PortfolioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioClient")
            .field("settings", &self.settings)
            .field("has_session", &self.session.is_some())
            .finish()
    }
}

impl PortfolioClient {
    /// Create a client talking HTTP to `settings.server_url`.
    pub fn new(settings: ClientSettings) -> Result<Self, CoreError> {
        let transport = HttpTransport::new(settings.clone())?;
        Ok(Self::with_transport(settings, Box::new(transport)))
    }

    /// Create a client configured from `PORTFOLIO_*` environment variables.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::new(ClientSettings::from_env()?)
    }

    /// Create a client over any transport (used by tests and alternative runtimes).
    pub fn with_transport(settings: ClientSettings, transport: Box<dyn Transport>) -> Self {
        let api = ApiService::new(transport, settings.wire_contract);
        Self {
            settings,
            api,
            session: None,
        }
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Attach the opaque session (cookie header) forwarded on every request.
    pub fn with_session(mut self, session: SessionToken) -> Self {
        self.session = Some(session);
        self
    }

    pub fn set_session(&mut self, session: Option<SessionToken>) {
        self.session = session;
    }

    #[must_use]
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Menu entries for the home page.
    #[must_use]
    pub fn menu(&self) -> Vec<Route> {
        menu_routes(self.has_session())
    }

    #[must_use]
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    // ── Views ───────────────────────────────────────────────────────

    /// All trades of the portfolio. Fails with `MissingSession` without a session.
    pub async fn transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        self.api.transactions(self.session.as_ref()).await
    }

    /// Fetch trades and wrap them in an unfiltered listing view.
    pub async fn transactions_view(&self) -> Result<TransactionsView, CoreError> {
        Ok(TransactionsView::new(self.transactions().await?))
    }

    pub async fn portfolio_position(&self) -> Result<PortfolioPosition, CoreError> {
        self.api.portfolio_position(self.session.as_ref()).await
    }

    /// Valuation history for the history chart.
    pub async fn portfolio_amounts(&self) -> Result<Vec<PortfolioAmount>, CoreError> {
        self.api.portfolio_amounts(self.session.as_ref()).await
    }

    // ── Import ──────────────────────────────────────────────────────

    pub async fn import_trades(&self, file: &TradeFile) -> Result<(), CoreError> {
        self.api.import_trades(file, self.session.as_ref()).await
    }

    /// Run a command emitted by the import flow: upload, then navigate.
    pub async fn run_import(
        &self,
        command: ImportCommand,
        navigator: &mut dyn Navigator,
    ) -> Result<(), CoreError> {
        run_import_command(command, &self.api, self.session.as_ref(), navigator).await
    }
}
