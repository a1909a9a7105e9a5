// Key binding configuration

use std::collections::HashMap;

use winit::keyboard::KeyCode;

use super::action::{default_bindings, Action, InputSource};

/// Maps physical keys to actions
///
/// A key drives at most one action; an action may have several keys.
#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Create a configuration from a list of bindings
    ///
    /// A source listed twice keeps its last action.
    pub fn from_bindings(bindings: impl IntoIterator<Item = (InputSource, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    /// Get the action bound to an input source
    pub fn action_for(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Get the action bound to a physical key
    pub fn action_for_key(&self, code: KeyCode) -> Option<Action> {
        self.action_for(InputSource::key(code))
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InputConfig::default();
        assert_eq!(config.action_for_key(KeyCode::KeyA), Some(Action::MoveLeft));
        assert_eq!(config.action_for_key(KeyCode::ArrowRight), Some(Action::MoveRight));
        assert_eq!(config.action_for_key(KeyCode::Space), Some(Action::Jump));
        assert_eq!(config.action_for_key(KeyCode::KeyM), Some(Action::Mute));
        assert_eq!(config.action_for_key(KeyCode::KeyS), None);
    }

    #[test]
    fn test_pause_keys() {
        let config = InputConfig::default();
        assert_eq!(config.action_for_key(KeyCode::KeyP), Some(Action::Pause));
        assert_eq!(config.action_for_key(KeyCode::Escape), Some(Action::Pause));
    }

    #[test]
    fn test_later_binding_wins() {
        let source = InputSource::key(KeyCode::KeyA);
        let config = InputConfig::from_bindings([
            (source, Action::MoveLeft),
            (source, Action::MoveRight),
        ]);
        assert_eq!(config.action_for(source), Some(Action::MoveRight));
        assert_eq!(config.action_for_key(KeyCode::KeyD), None);
    }
}
