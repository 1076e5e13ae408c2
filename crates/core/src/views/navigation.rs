/// Client pages reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Position,
    History,
    Transactions,
    Import,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Position => "/position",
            Route::History => "/history",
            Route::Transactions => "/transactions",
            Route::Import => "/import",
        }
    }

    /// Views that fetch portfolio data and therefore need a session.
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Position | Route::History | Route::Transactions)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Home menu entries: portfolio views with a session, otherwise only import.
pub fn menu_routes(has_session: bool) -> Vec<Route> {
    if has_session {
        vec![Route::Position, Route::History, Route::Transactions]
    } else {
        vec![Route::Import]
    }
}

/// Capability to move the user to another page.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}
