//! Navigation port and the views it can reach.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionId;

/// A navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "view", content = "id", rename_all = "snake_case")]
pub enum Route {
    Home,
    Login,
    Register,
    Sessions,
    SessionDetail(SessionId),
    SessionCreate,
    SessionUpdate(SessionId),
    Account,
}

impl Route {
    /// The client-side path of this view.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Sessions => "/sessions".to_string(),
            Route::SessionDetail(id) => format!("/sessions/detail/{}", id),
            Route::SessionCreate => "/sessions/create".to_string(),
            Route::SessionUpdate(id) => format!("/sessions/update/{}", id),
            Route::Account => "/me".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Moves the user to another view.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
