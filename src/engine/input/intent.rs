// Edge-triggered intents handed to the simulation each tick

use super::action::Action;

/// A discrete input edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    MoveLeftPressed,
    MoveLeftReleased,
    MoveRightPressed,
    MoveRightReleased,
    JumpPressed,
    MutePressed,
}

impl Intent {
    /// The intent produced when `action` is pressed or released, if any
    ///
    /// Only movement keys report releases. Pausing belongs to the driver,
    /// not the simulation, so it never becomes an intent.
    pub fn from_action(action: Action, pressed: bool) -> Option<Self> {
        match (action, pressed) {
            (Action::MoveLeft, true) => Some(Self::MoveLeftPressed),
            (Action::MoveLeft, false) => Some(Self::MoveLeftReleased),
            (Action::MoveRight, true) => Some(Self::MoveRightPressed),
            (Action::MoveRight, false) => Some(Self::MoveRightReleased),
            (Action::Jump, true) => Some(Self::JumpPressed),
            (Action::Mute, true) => Some(Self::MutePressed),
            (Action::Jump | Action::Mute, false) | (Action::Pause, _) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_reports_both_edges() {
        assert_eq!(Intent::from_action(Action::MoveLeft, true), Some(Intent::MoveLeftPressed));
        assert_eq!(
            Intent::from_action(Action::MoveRight, false),
            Some(Intent::MoveRightReleased)
        );
    }

    #[test]
    fn test_jump_and_mute_only_press() {
        assert_eq!(Intent::from_action(Action::Jump, true), Some(Intent::JumpPressed));
        assert_eq!(Intent::from_action(Action::Jump, false), None);
        assert_eq!(Intent::from_action(Action::Mute, false), None);
        assert_eq!(Intent::from_action(Action::Pause, true), None);
    }
}
