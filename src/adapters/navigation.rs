//! Navigation adapter keeping the visited views in memory.

use std::sync::{Mutex, PoisonError};

use crate::ports::{Navigator, Route};

#[derive(Debug, Default)]
pub struct InMemoryNavigator {
    history: Mutex<Vec<Route>>,
}

impl InMemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The view last navigated to.
    pub fn current(&self) -> Option<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .copied()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for InMemoryNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(path = %route, "Navigating");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;

    #[test]
    fn tracks_current_view() {
        let navigator = InMemoryNavigator::new();
        assert_eq!(navigator.current(), None);

        navigator.navigate(Route::Sessions);
        navigator.navigate(Route::SessionDetail(SessionId::new(1)));

        assert_eq!(navigator.current(), Some(Route::SessionDetail(SessionId::new(1))));
        assert_eq!(navigator.history().len(), 2);
    }
}
