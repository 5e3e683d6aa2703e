use stalker_common::models::presence::PresenceStatus;
use stalker_common::models::settings::NotificationPreferences;

use super::StatusTransition;

/// Outcome of running a transition through the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Emit,
    Suppress,
}

/// Decides whether a status transition is worth a notification.
///
/// The conditions are independent: any matching enabled flag lets the
/// transition through, and several matches still mean a single notification.
pub struct StatusGate {
    preferences: NotificationPreferences,
}

impl StatusGate {
    pub fn new(preferences: NotificationPreferences) -> Self {
        Self { preferences }
    }

    pub fn apply(&self, transition: &StatusTransition) -> GateDecision {
        if transition.previous == transition.current {
            return GateDecision::Suppress;
        }

        let prefs = &self.preferences;
        let coming_online = transition.previous == PresenceStatus::Offline && prefs.notify_go_online;
        let by_status = match transition.current {
            PresenceStatus::Dnd => prefs.notify_dnd,
            PresenceStatus::Idle => prefs.notify_idle,
            PresenceStatus::Online => prefs.notify_online,
            PresenceStatus::Offline => prefs.notify_offline,
        };

        if coming_online || by_status {
            GateDecision::Emit
        } else {
            GateDecision::Suppress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stalker_common::models::presence::PresenceStatus::*;

    fn transition(previous: PresenceStatus, current: PresenceStatus) -> StatusTransition {
        StatusTransition {
            user_id: "1".into(),
            previous,
            current,
        }
    }

    #[test]
    fn test_no_flags_suppresses_everything() {
        let gate = StatusGate::new(NotificationPreferences::default());
        for (from, to) in [(Offline, Online), (Online, Dnd), (Dnd, Idle), (Idle, Offline)] {
            assert_eq!(gate.apply(&transition(from, to)), GateDecision::Suppress);
        }
    }

    #[test]
    fn test_go_online_fires_from_offline_regardless_of_target_flag() {
        let gate = StatusGate::new(NotificationPreferences {
            notify_go_online: true,
            ..Default::default()
        });
        assert_eq!(gate.apply(&transition(Offline, Idle)), GateDecision::Emit);
        assert_eq!(gate.apply(&transition(Offline, Dnd)), GateDecision::Emit);
        assert_eq!(gate.apply(&transition(Online, Idle)), GateDecision::Suppress);
    }

    #[test]
    fn test_target_status_flags() {
        let gate = StatusGate::new(NotificationPreferences {
            notify_dnd: true,
            notify_offline: true,
            ..Default::default()
        });
        assert_eq!(gate.apply(&transition(Online, Dnd)), GateDecision::Emit);
        assert_eq!(gate.apply(&transition(Dnd, Offline)), GateDecision::Emit);
        assert_eq!(gate.apply(&transition(Dnd, Online)), GateDecision::Suppress);
        assert_eq!(gate.apply(&transition(Online, Idle)), GateDecision::Suppress);
    }

    #[test]
    fn test_unchanged_status_never_emits() {
        let gate = StatusGate::new(NotificationPreferences::all());
        assert_eq!(gate.apply(&transition(Offline, Offline)), GateDecision::Suppress);
        assert_eq!(gate.apply(&transition(Dnd, Dnd)), GateDecision::Suppress);
    }
}
