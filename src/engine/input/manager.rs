// Input manager - turns window keyboard events into simulation intents

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::action::Action;
use super::config::InputConfig;
use super::intent::Intent;

/// Collects intents between simulation ticks
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    /// Actions currently held down
    held: HashSet<Action>,
    pending: Vec<Intent>,
    pause_requested: bool,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            held: HashSet::new(),
            pending: Vec::new(),
            pause_requested: false,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key codes
        if let PhysicalKey::Code(code) = event.physical_key {
            self.process_key(code, event.state, event.repeat);
        }
    }

    /// Record the intent for one key edge
    ///
    /// OS key repeats are ignored, and an action bound to two keys only
    /// produces one press and one release.
    pub fn process_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) {
        if repeat {
            return;
        }
        let Some(action) = self.config.action_for_key(code) else {
            return;
        };

        let pressed = state == ElementState::Pressed;
        let edge = if pressed {
            self.held.insert(action)
        } else {
            self.held.remove(&action)
        };
        if !edge {
            return;
        }

        if action == Action::Pause {
            self.pause_requested |= pressed;
            return;
        }
        if let Some(intent) = Intent::from_action(action, pressed) {
            self.pending.push(intent);
        }
    }

    /// Check if an action is held down
    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Take every intent recorded since the last call, oldest first
    pub fn drain_intents(&mut self) -> Vec<Intent> {
        std::mem::take(&mut self.pending)
    }

    /// Forget held keys, e.g. when the window loses focus
    ///
    /// Queues a release for each held movement key so the character stops.
    pub fn release_all(&mut self) {
        let mut held: Vec<Action> = self.held.drain().collect();
        held.sort_by_key(|action| *action as u8);
        self.pending
            .extend(held.into_iter().filter_map(|action| Intent::from_action(action, false)));
    }

    /// Whether the pause key went down since the last call
    pub fn take_pause_request(&mut self) -> bool {
        std::mem::take(&mut self.pause_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(manager: &mut InputManager, code: KeyCode) {
        manager.process_key(code, ElementState::Pressed, false);
    }

    fn release(manager: &mut InputManager, code: KeyCode) {
        manager.process_key(code, ElementState::Released, false);
    }

    #[test]
    fn test_press_and_release_produce_intents() {
        let mut manager = InputManager::default();
        press(&mut manager, KeyCode::KeyD);
        press(&mut manager, KeyCode::Space);
        release(&mut manager, KeyCode::KeyD);
        release(&mut manager, KeyCode::Space);

        assert_eq!(
            manager.drain_intents(),
            vec![
                Intent::MoveRightPressed,
                Intent::JumpPressed,
                Intent::MoveRightReleased,
            ]
        );
        assert!(manager.drain_intents().is_empty());
    }

    #[test]
    fn test_repeats_are_ignored() {
        let mut manager = InputManager::default();
        press(&mut manager, KeyCode::KeyA);
        manager.process_key(KeyCode::KeyA, ElementState::Pressed, true);
        assert_eq!(manager.drain_intents(), vec![Intent::MoveLeftPressed]);
        assert!(manager.is_held(Action::MoveLeft));
    }

    #[test]
    fn test_two_keys_one_action() {
        let mut manager = InputManager::default();
        press(&mut manager, KeyCode::KeyA);
        press(&mut manager, KeyCode::ArrowLeft);
        release(&mut manager, KeyCode::ArrowLeft);
        release(&mut manager, KeyCode::KeyA);

        assert_eq!(
            manager.drain_intents(),
            vec![Intent::MoveLeftPressed, Intent::MoveLeftReleased]
        );
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        let mut manager = InputManager::default();
        press(&mut manager, KeyCode::KeyQ);
        assert!(manager.drain_intents().is_empty());
    }

    #[test]
    fn test_pause_is_not_an_intent() {
        let mut manager = InputManager::default();
        press(&mut manager, KeyCode::KeyP);
        release(&mut manager, KeyCode::KeyP);
        press(&mut manager, KeyCode::KeyD);

        assert!(manager.take_pause_request());
        assert!(!manager.take_pause_request());
        assert_eq!(manager.drain_intents(), vec![Intent::MoveRightPressed]);
    }

    #[test]
    fn test_release_all() {
        let mut manager = InputManager::default();
        press(&mut manager, KeyCode::KeyD);
        press(&mut manager, KeyCode::KeyA);
        press(&mut manager, KeyCode::KeyM);
        manager.drain_intents();

        manager.release_all();
        assert_eq!(
            manager.drain_intents(),
            vec![Intent::MoveLeftReleased, Intent::MoveRightReleased]
        );
        assert!(!manager.is_held(Action::MoveRight));
    }
}
