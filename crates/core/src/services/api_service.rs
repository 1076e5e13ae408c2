use log::{debug, warn};

use crate::decode::{decode_bytes, Decode, WireContract};
use crate::errors::CoreError;
use crate::models::amount::PortfolioAmount;
use crate::models::position::PortfolioPosition;
use crate::models::session::SessionToken;
use crate::models::trade_file::TradeFile;
use crate::models::transaction::Transaction;
use crate::transport::traits::Transport;

pub const TRANSACTIONS_PATH: &str = "/transactions";
pub const PORTFOLIO_POSITION_PATH: &str = "/portfolio-position";
pub const PORTFOLIO_AMOUNTS_PATH: &str = "/portfolio-amounts";
pub const IMPORT_TRADES_PATH: &str = "/import-trades";

/// Fetches server resources and decodes them into domain values.
///
/// Any transport or decode failure aborts the whole request; callers never
/// see a partially decoded collection.
pub struct ApiService {
    transport: Box<dyn Transport>,
    contract: WireContract,
}

impl ApiService {
    pub fn new(transport: Box<dyn Transport>, contract: WireContract) -> Self {
        Self {
            transport,
            contract,
        }
    }

    pub fn contract(&self) -> WireContract {
        self.contract
    }

    async fn fetch<T: Decode>(
        &self,
        path: &str,
        session: Option<&SessionToken>,
    ) -> Result<T, CoreError> {
        let session = session.ok_or(CoreError::MissingSession)?;
        let body = self.transport.get(path, session).await?;

        decode_bytes(&body, self.contract).map_err(|e| {
            warn!("Failed to decode {path} via {}: {e}", self.transport.name());
            CoreError::Decode(e)
        })
    }

    /// All trades of the session's portfolio, in server order.
    pub async fn transactions(
        &self,
        session: Option<&SessionToken>,
    ) -> Result<Vec<Transaction>, CoreError> {
        let transactions: Vec<Transaction> = self.fetch(TRANSACTIONS_PATH, session).await?;
        debug!("Decoded {} transactions", transactions.len());
        Ok(transactions)
    }

    pub async fn portfolio_position(
        &self,
        session: Option<&SessionToken>,
    ) -> Result<PortfolioPosition, CoreError> {
        let position: PortfolioPosition = self.fetch(PORTFOLIO_POSITION_PATH, session).await?;
        debug!("Decoded position with {} assets", position.assets.len());
        Ok(position)
    }

    /// Daily valuation history.
    pub async fn portfolio_amounts(
        &self,
        session: Option<&SessionToken>,
    ) -> Result<Vec<PortfolioAmount>, CoreError> {
        let amounts: Vec<PortfolioAmount> = self.fetch(PORTFOLIO_AMOUNTS_PATH, session).await?;
        debug!("Decoded {} portfolio amounts", amounts.len());
        Ok(amounts)
    }

    /// Upload a trades file. No session is required: the server answers a
    /// successful import with a fresh portfolio cookie.
    pub async fn import_trades(
        &self,
        file: &TradeFile,
        session: Option<&SessionToken>,
    ) -> Result<(), CoreError> {
        debug!("Uploading {} ({} bytes)", file.name, file.bytes.len());
        self.transport
            .post(IMPORT_TRADES_PATH, file.bytes.clone(), session)
            .await
    }
}
