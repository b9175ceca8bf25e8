//! Role-based gate evaluated at flow entry.
//!
//! Pure functions of the current identity. A `Redirect` means the flow must
//! not issue any repository call.

use crate::domain::foundation::Identity;
use crate::ports::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed(Identity),
    Redirect(Route),
}

/// Any signed-in identity. Otherwise back to the login view.
pub fn require_login(identity: Option<Identity>) -> AccessDecision {
    match identity {
        Some(identity) => AccessDecision::Allowed(identity),
        None => AccessDecision::Redirect(Route::Login),
    }
}

/// Admins only. Everyone else, signed in or not, goes back to the sessions
/// list; its own gate sends anonymous users on to login.
pub fn require_admin(identity: Option<Identity>) -> AccessDecision {
    match identity {
        Some(identity) if identity.admin => AccessDecision::Allowed(identity),
        _ => AccessDecision::Redirect(Route::Sessions),
    }
}

/// Result of a flow that may be redirected before it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome<T> {
    Completed(T),
    Redirected(Route),
}

impl<T> FlowOutcome<T> {
    pub fn completed(self) -> Option<T> {
        match self {
            FlowOutcome::Completed(value) => Some(value),
            FlowOutcome::Redirected(_) => None,
        }
    }

    pub fn redirect(&self) -> Option<Route> {
        match self {
            FlowOutcome::Completed(_) => None,
            FlowOutcome::Redirected(route) => Some(*route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[test]
    fn anonymous_is_sent_to_login_or_list() {
        assert_eq!(require_login(None), AccessDecision::Redirect(Route::Login));
        assert_eq!(require_admin(None), AccessDecision::Redirect(Route::Sessions));
    }

    #[test]
    fn user_passes_login_gate_only() {
        let user = Identity::user(UserId::new(1));
        assert_eq!(require_login(Some(user)), AccessDecision::Allowed(user));
        assert_eq!(
            require_admin(Some(user)),
            AccessDecision::Redirect(Route::Sessions)
        );
    }

    #[test]
    fn admin_passes_both_gates() {
        let admin = Identity::admin(UserId::new(2));
        assert_eq!(require_login(Some(admin)), AccessDecision::Allowed(admin));
        assert_eq!(require_admin(Some(admin)), AccessDecision::Allowed(admin));
    }

    #[test]
    fn flow_outcome_accessors() {
        let done: FlowOutcome<u8> = FlowOutcome::Completed(3);
        assert_eq!(done.redirect(), None);
        assert_eq!(done.completed(), Some(3));

        let redirected: FlowOutcome<u8> = FlowOutcome::Redirected(Route::Login);
        assert_eq!(redirected.redirect(), Some(Route::Login));
        assert_eq!(redirected.completed(), None);
    }
}
