use log::{debug, warn};

use super::navigation::{Navigator, Route};
use crate::errors::CoreError;
use crate::models::session::SessionToken;
use crate::models::trade_file::TradeFile;
use crate::services::api_service::ApiService;

/// Lifecycle of the trades import page: `Waiting -> Selected -> Sent`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImportState {
    #[default]
    Waiting,
    Selected(TradeFile),
    Sent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportAction {
    SelectFile(TradeFile),
    Send,
}

/// Deferred effect emitted on `Selected -> Sent`: upload `file`, then go to `then`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportCommand {
    pub file: TradeFile,
    pub then: Route,
}

/// Pure transition function.
///
/// `SelectFile` always wins and drops any earlier selection. `Send` only
/// moves forward from `Selected`; anywhere else it returns the state
/// unchanged and emits nothing.
pub fn reduce(state: ImportState, action: ImportAction) -> (ImportState, Option<ImportCommand>) {
    match (state, action) {
        (_, ImportAction::SelectFile(file)) => (ImportState::Selected(file), None),
        (ImportState::Selected(file), ImportAction::Send) => (
            ImportState::Sent,
            Some(ImportCommand {
                file,
                then: Route::Position,
            }),
        ),
        (state, ImportAction::Send) => (state, None),
    }
}

impl ImportState {
    pub fn can_send(&self) -> bool {
        matches!(self, ImportState::Selected(_))
    }

    /// The file picker is disabled once the upload went out.
    pub fn can_select(&self) -> bool {
        !matches!(self, ImportState::Sent)
    }

    pub fn selected(&self) -> Option<&TradeFile> {
        match self {
            ImportState::Selected(file) => Some(file),
            _ => None,
        }
    }
}

/// Holds the import page state between user actions.
///
/// `dispatch` hands the emitted command to the caller by value, so a
/// command exists exactly once per `Send` transition and reading the
/// state afterwards can never re-issue it.
#[derive(Debug, Default)]
pub struct ImportFlow {
    state: ImportState,
}

impl ImportFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ImportState {
        &self.state
    }

    pub fn dispatch(&mut self, action: ImportAction) -> Option<ImportCommand> {
        let (next, command) = reduce(std::mem::take(&mut self.state), action);
        self.state = next;
        command
    }
}

/// Execute an import command: upload, then navigate.
///
/// An upload failure is returned unchanged and no navigation happens.
/// The flow that produced the command stays in `Sent`.
pub async fn run_import_command(
    command: ImportCommand,
    api: &ApiService,
    session: Option<&SessionToken>,
    navigator: &mut dyn Navigator,
) -> Result<(), CoreError> {
    if let Err(e) = api.import_trades(&command.file, session).await {
        warn!("Import of {} failed: {e}", command.file.name);
        return Err(e);
    }

    debug!("Import of {} done, navigating to {}", command.file.name, command.then);
    navigator.navigate(command.then);
    Ok(())
}
