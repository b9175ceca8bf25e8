//! Derived participation state for a session detail view.

use serde::{Deserialize, Serialize};

use super::BookingSession;
use crate::domain::foundation::UserId;

/// Whether the viewing user attends a booking session.
///
/// Always derived from the session's participant set, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipationState {
    Participating,
    NotParticipating,
}

impl ParticipationState {
    /// Label of the toggle affordance shown for this state.
    pub fn affordance_label(&self) -> &'static str {
        match self {
            ParticipationState::Participating => "Do not participate",
            ParticipationState::NotParticipating => "Participate",
        }
    }

    pub fn is_participating(&self) -> bool {
        matches!(self, ParticipationState::Participating)
    }
}

/// Computes the participation state of `user_id` in `session`.
pub fn participation_state(session: &BookingSession, user_id: UserId) -> ParticipationState {
    if session.is_participant(user_id) {
        ParticipationState::Participating
    } else {
        ParticipationState::NotParticipating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SessionId, TeacherId};
    use crate::domain::session::SessionInput;
    use chrono::NaiveDate;

    fn session() -> BookingSession {
        let input = SessionInput::new(
            "Yoga",
            "d",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            TeacherId::new(1),
        )
        .unwrap();
        BookingSession::new(SessionId::new(1), input)
    }

    #[test]
    fn non_member_is_not_participating() {
        let state = participation_state(&session(), UserId::new(1));
        assert_eq!(state, ParticipationState::NotParticipating);
        assert_eq!(state.affordance_label(), "Participate");
    }

    #[test]
    fn member_is_participating() {
        let mut session = session();
        session.add_participant(UserId::new(1)).unwrap();

        let state = participation_state(&session, UserId::new(1));
        assert!(state.is_participating());
        assert_eq!(state.affordance_label(), "Do not participate");
    }

    #[test]
    fn state_is_per_user() {
        let mut session = session();
        session.add_participant(UserId::new(2)).unwrap();
        assert_eq!(
            participation_state(&session, UserId::new(1)),
            ParticipationState::NotParticipating
        );
    }
}
