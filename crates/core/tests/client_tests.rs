// ═══════════════════════════════════════════════════════════════════
// Client Tests — PortfolioClient / ApiService over a mock transport
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use portfolio_client_core::decode::WireContract;
use portfolio_client_core::errors::{CoreError, DecodeErrorKind};
use portfolio_client_core::models::assetable::{AssetKind, Assetable};
use portfolio_client_core::models::session::SessionToken;
use portfolio_client_core::models::settings::ClientSettings;
use portfolio_client_core::models::trade_file::TradeFile;
use portfolio_client_core::services::api_service::{
    IMPORT_TRADES_PATH, PORTFOLIO_AMOUNTS_PATH, PORTFOLIO_POSITION_PATH, TRANSACTIONS_PATH,
};
use portfolio_client_core::transport::traits::Transport;
use portfolio_client_core::views::import::{ImportAction, ImportFlow, ImportState};
use portfolio_client_core::views::navigation::{Navigator, Route};
use portfolio_client_core::views::transactions::FilterAction;
use portfolio_client_core::PortfolioClient;

// ═══════════════════════════════════════════════════════════════════
// Test Helpers — Mock Transport & Navigator
// ═══════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
struct Request {
    method: &'static str,
    path: String,
    body: Vec<u8>,
    cookie: Option<String>,
}

/// Serves canned bodies per path; unknown paths answer 404.
#[derive(Default)]
struct MockTransport {
    bodies: HashMap<String, Vec<u8>>,
    statuses: HashMap<String, u16>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl MockTransport {
    fn new() -> Self {
        Self::default()
    }

    fn with_json(mut self, path: &str, body: serde_json::Value) -> Self {
        self.bodies.insert(path.to_string(), serde_json::to_vec(&body).unwrap());
        self
    }

    fn with_raw(mut self, path: &str, body: &[u8]) -> Self {
        self.bodies.insert(path.to_string(), body.to_vec());
        self
    }

    fn with_status(mut self, path: &str, status: u16) -> Self {
        self.statuses.insert(path.to_string(), status);
        self
    }

    fn requests(&self) -> Arc<Mutex<Vec<Request>>> {
        Arc::clone(&self.requests)
    }

    fn status_for(&self, path: &str) -> Result<(), CoreError> {
        match self.statuses.get(path) {
            Some(status) if !(200..300).contains(status) => Err(CoreError::BadStatus {
                endpoint: path.to_string(),
                status: *status,
            }),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn get(&self, path: &str, session: &SessionToken) -> Result<Vec<u8>, CoreError> {
        self.requests.lock().unwrap().push(Request {
            method: "GET",
            path: path.to_string(),
            body: Vec::new(),
            cookie: Some(session.as_str().to_string()),
        });
        self.status_for(path)?;
        self.bodies.get(path).cloned().ok_or(CoreError::BadStatus {
            endpoint: path.to_string(),
            status: 404,
        })
    }

    async fn post(
        &self,
        path: &str,
        body: Vec<u8>,
        session: Option<&SessionToken>,
    ) -> Result<(), CoreError> {
        self.requests.lock().unwrap().push(Request {
            method: "POST",
            path: path.to_string(),
            body,
            cookie: session.map(|s| s.as_str().to_string()),
        });
        self.status_for(path)
    }
}

/// A transport whose every call fails at the network level.
struct OfflineTransport;

#[async_trait]
impl Transport for OfflineTransport {
    fn name(&self) -> &str {
        "Offline"
    }

    async fn get(&self, _path: &str, _session: &SessionToken) -> Result<Vec<u8>, CoreError> {
        Err(CoreError::Network("connection refused".into()))
    }

    async fn post(
        &self,
        _path: &str,
        _body: Vec<u8>,
        _session: Option<&SessionToken>,
    ) -> Result<(), CoreError> {
        Err(CoreError::Network("connection refused".into()))
    }
}

#[derive(Default)]
struct RecordingNavigator {
    visited: Vec<Route>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: Route) {
        self.visited.push(route);
    }
}

const COOKIE: &str = "portfolio-id=42";

fn client(transport: MockTransport) -> PortfolioClient {
    PortfolioClient::with_transport(ClientSettings::default(), Box::new(transport))
        .with_session(SessionToken::new(COOKIE))
}

fn transactions_body() -> serde_json::Value {
    json!([
        { "assetable": {"type": "Etf", "data": "IVVB11"}, "date": "2021-03-01", "price": 100, "quantity": 10, "amount": 1000 },
        { "assetable": {"type": "Treasury", "data": "2025-03-01"}, "date": "2020-05-04", "price": 10000.5, "quantity": 0.1, "amount": 1000.05 },
        { "assetable": {"type": "Etf", "data": "BOVA11"}, "date": "2021-08-10", "price": 110, "quantity": 2, "amount": 220 }
    ])
}

// ═══════════════════════════════════════════════════════════════════
//  Fetching views
// ═══════════════════════════════════════════════════════════════════

mod fetch {
    use super::*;

    #[tokio::test]
    async fn transactions_decode_in_order() {
        let client = client(MockTransport::new().with_json(TRANSACTIONS_PATH, transactions_body()));
        let txs = client.transactions().await.unwrap();
        assert_eq!(txs.len(), 3);
        assert_eq!(txs[0].assetable, Assetable::Etf("IVVB11".into()));
        assert_eq!(txs[1].kind(), AssetKind::Treasury);
        assert_eq!(txs[2].amount, 220.0);
    }

    #[tokio::test]
    async fn session_cookie_is_forwarded_verbatim() {
        let transport = MockTransport::new().with_json(TRANSACTIONS_PATH, json!([]));
        let requests = transport.requests();
        let client = client(transport);

        client.transactions().await.unwrap();

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, TRANSACTIONS_PATH);
        assert_eq!(requests[0].cookie.as_deref(), Some(COOKIE));
    }

    #[tokio::test]
    async fn transactions_view_starts_unfiltered() {
        let client = client(MockTransport::new().with_json(TRANSACTIONS_PATH, transactions_body()));
        let mut view = client.transactions_view().await.unwrap();
        assert_eq!(view.visible().len(), 3);
        assert_eq!(view.year_options(), vec![2021, 2020]);

        view.dispatch(FilterAction::SelectYear(2021));
        view.dispatch(FilterAction::SelectType(AssetKind::Treasury));
        assert_eq!(view.visible().len(), 1);
    }

    #[tokio::test]
    async fn portfolio_position() {
        let client = client(MockTransport::new().with_json(
            PORTFOLIO_POSITION_PATH,
            json!({
                "assets": [
                    { "assetable": {"type": "Etf", "data": "IVVB11"}, "quantity": 10, "amount": 2500, "price": 250 }
                ],
                "amount": 2500
            }),
        ));
        let position = client.portfolio_position().await.unwrap();
        assert_eq!(position.amount, 2500.0);
        assert_eq!(position.assets[0].price, 250.0);
    }

    #[tokio::test]
    async fn portfolio_amounts() {
        let client = client(MockTransport::new().with_json(
            PORTFOLIO_AMOUNTS_PATH,
            json!([["2021-03-01", 1000, 1000], ["2021-03-02", 1000, 1012.5]]),
        ));
        let amounts = client.portfolio_amounts().await.unwrap();
        assert_eq!(amounts.len(), 2);
        assert_eq!(amounts[1].gross_total, 1012.5);
        assert_eq!(amounts[1].invested, 1000.0);
    }

    #[tokio::test]
    async fn migration_contract_accepts_short_tags() {
        let settings = ClientSettings {
            wire_contract: WireContract::Migration,
            ..ClientSettings::default()
        };
        let transport = MockTransport::new().with_json(
            PORTFOLIO_POSITION_PATH,
            json!({
                "assets": [
                    { "assetable": {"t": "Treasury", "c": "2025-03-01"}, "quantity": 1, "amount": 10000, "price": 10000 }
                ],
                "amount": 10000
            }),
        );
        let client = PortfolioClient::with_transport(settings, Box::new(transport))
            .with_session(SessionToken::new(COOKIE));

        let position = client.portfolio_position().await.unwrap();
        assert_eq!(position.assets[0].assetable, Assetable::Treasury("2025-03-01".into()));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Failures
// ═══════════════════════════════════════════════════════════════════

mod failures {
    use super::*;

    #[tokio::test]
    async fn missing_session_is_fatal_and_sends_nothing() {
        let transport = MockTransport::new().with_json(TRANSACTIONS_PATH, transactions_body());
        let requests = transport.requests();
        let client = PortfolioClient::with_transport(ClientSettings::default(), Box::new(transport));

        assert!(!client.has_session());
        assert!(matches!(client.transactions().await, Err(CoreError::MissingSession)));
        assert!(matches!(client.portfolio_position().await, Err(CoreError::MissingSession)));
        assert!(matches!(client.portfolio_amounts().await, Err(CoreError::MissingSession)));
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn bad_status_propagates_unchanged() {
        let client = client(
            MockTransport::new()
                .with_json(TRANSACTIONS_PATH, transactions_body())
                .with_status(TRANSACTIONS_PATH, 500),
        );
        match client.transactions().await {
            Err(CoreError::BadStatus { endpoint, status }) => {
                assert_eq!(endpoint, TRANSACTIONS_PATH);
                assert_eq!(status, 500);
            }
            other => panic!("expected BadStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn network_failure_is_transport_error() {
        let client =
            PortfolioClient::with_transport(ClientSettings::default(), Box::new(OfflineTransport))
                .with_session(SessionToken::new(COOKIE));
        let err = client.portfolio_amounts().await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn one_bad_record_fails_the_whole_fetch() {
        let mut body = transactions_body();
        body[2]["assetable"]["type"] = json!("Stock");
        let client = client(MockTransport::new().with_json(TRANSACTIONS_PATH, body));

        match client.transactions().await {
            Err(CoreError::Decode(e)) => {
                assert!(e.is_unrecognized_variant());
                assert_eq!(e.path, "$[2].assetable.type");
            }
            other => panic!("expected decode failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_date_fails_the_fetch() {
        let mut body = transactions_body();
        body[0]["date"] = json!("Invalid Date");
        let client = client(MockTransport::new().with_json(TRANSACTIONS_PATH, body));

        let err = client.transactions().await.unwrap_err();
        assert!(matches!(err, CoreError::Decode(ref e) if e.is_invalid_date()));
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let client = client(MockTransport::new().with_raw(PORTFOLIO_POSITION_PATH, b"<html>oops</html>"));
        match client.portfolio_position().await {
            Err(CoreError::Decode(e)) => assert!(matches!(e.kind, DecodeErrorKind::MalformedJson(_))),
            other => panic!("expected malformed JSON, got {other:?}"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Import flow end to end
// ═══════════════════════════════════════════════════════════════════

mod import {
    use super::*;

    fn trades() -> TradeFile {
        TradeFile::new(
            "trades.csv",
            "Data,Preço,Quantidade,TipoAtivo,DadoAtivo\n2021-03-01,100,10,ETF,IVVB11\n",
        )
    }

    #[tokio::test]
    async fn send_uploads_once_then_navigates_to_position() {
        let transport = MockTransport::new();
        let requests = transport.requests();
        let client = PortfolioClient::with_transport(ClientSettings::default(), Box::new(transport));
        let mut navigator = RecordingNavigator::default();
        let mut flow = ImportFlow::new();

        flow.dispatch(ImportAction::SelectFile(trades()));
        let command = flow.dispatch(ImportAction::Send).unwrap();
        assert!(flow.dispatch(ImportAction::Send).is_none());

        client.run_import(command, &mut navigator).await.unwrap();

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, IMPORT_TRADES_PATH);
        assert_eq!(requests[0].body, trades().bytes);
        assert_eq!(requests[0].cookie, None);
        assert_eq!(navigator.visited, vec![Route::Position]);
        assert_eq!(flow.state(), &ImportState::Sent);
    }

    #[tokio::test]
    async fn upload_forwards_existing_session() {
        let transport = MockTransport::new();
        let requests = transport.requests();
        let client = client(transport);
        let mut navigator = RecordingNavigator::default();

        let mut flow = ImportFlow::new();
        flow.dispatch(ImportAction::SelectFile(trades()));
        let command = flow.dispatch(ImportAction::Send).unwrap();
        client.run_import(command, &mut navigator).await.unwrap();

        assert_eq!(requests.lock().unwrap()[0].cookie.as_deref(), Some(COOKIE));
    }

    #[tokio::test]
    async fn upload_failure_is_returned_and_does_not_navigate() {
        let transport = MockTransport::new().with_status(IMPORT_TRADES_PATH, 500);
        let client = PortfolioClient::with_transport(ClientSettings::default(), Box::new(transport));
        let mut navigator = RecordingNavigator::default();
        let mut flow = ImportFlow::new();

        flow.dispatch(ImportAction::SelectFile(trades()));
        let command = flow.dispatch(ImportAction::Send).unwrap();
        let err = client.run_import(command, &mut navigator).await.unwrap_err();

        assert!(matches!(err, CoreError::BadStatus { status: 500, .. }));
        assert!(navigator.visited.is_empty());
        assert_eq!(flow.state(), &ImportState::Sent);
    }

    #[tokio::test]
    async fn direct_import_does_not_need_session() {
        let transport = MockTransport::new();
        let requests = transport.requests();
        let client = PortfolioClient::with_transport(ClientSettings::default(), Box::new(transport));

        client.import_trades(&trades()).await.unwrap();
        assert_eq!(requests.lock().unwrap().len(), 1);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Facade
// ═══════════════════════════════════════════════════════════════════

mod facade {
    use super::*;

    #[test]
    fn menu_follows_session() {
        let mut client =
            PortfolioClient::with_transport(ClientSettings::default(), Box::new(MockTransport::new()));
        assert_eq!(client.menu(), vec![Route::Import]);

        client.set_session(SessionToken::from_header(Some(COOKIE)));
        assert_eq!(
            client.menu(),
            vec![Route::Position, Route::History, Route::Transactions]
        );

        client.set_session(SessionToken::from_header(Some("")));
        assert!(!client.has_session());
    }

    #[test]
    fn debug_hides_session() {
        let client = client(MockTransport::new());
        let debug = format!("{client:?}");
        assert!(debug.contains("has_session: true"));
        assert!(!debug.contains(COOKIE));
    }

    #[test]
    fn http_client_rejects_invalid_settings() {
        let settings = ClientSettings {
            server_url: "localhost:8000".into(),
            ..ClientSettings::default()
        };
        assert!(matches!(PortfolioClient::new(settings), Err(CoreError::Config(_))));
    }

    #[test]
    fn http_client_builds_with_defaults() {
        let client = PortfolioClient::new(ClientSettings::default()).unwrap();
        assert_eq!(client.settings().server_url, "http://localhost:8000");
    }
}
