use std::collections::{HashSet, VecDeque};

use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Window input reduced to what the demos react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Pressed(Button),
    Released(Button),
    CursorMoved { x: f32, y: f32 },
    FocusLost,
}

impl InputEvent {
    /// Translate a winit event; returns None for events the demos ignore
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return None;
                };
                let button = Self::keycode_to_button(keycode)?;
                Some(Self::from_state(event.state, button))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = Self::mouse_button_to_button(*button)?;
                Some(Self::from_state(*state, button))
            }
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }

    fn from_state(state: ElementState, button: Button) -> Self {
        match state {
            ElementState::Pressed => Self::Pressed(button),
            ElementState::Released => Self::Released(button),
        }
    }

    /// Map Winit KeyCode to Button
    pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    pub fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

/// FIFO of events collected by window callbacks, drained once per frame
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Button and cursor state the render loop hands to the scene step
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Last known cursor position (relative to window)
    cursor_position: Option<(f32, f32)>,
    /// Cursor movement since last reset
    cursor_delta: (f32, f32),
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pressed(button) => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                }
            }
            InputEvent::Released(button) => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
            InputEvent::CursorMoved { x, y } => {
                if let Some((old_x, old_y)) = self.cursor_position {
                    self.cursor_delta.0 += x - old_x;
                    self.cursor_delta.1 += y - old_y;
                }
                self.cursor_position = Some((x, y));
            }
            InputEvent::FocusLost => {
                self.pressed_keys.clear();
                self.pressed_vec.clear();
                self.cursor_position = None;
            }
        }
    }

    /// Drain a queue into this state in arrival order
    pub fn apply_all(&mut self, queue: &mut InputQueue) {
        for event in queue.drain() {
            self.apply(event);
        }
    }

    /// Reset per-frame state (cursor delta)
    /// Call this at the end of each frame after the scene has consumed input
    pub fn reset_deltas(&mut self) {
        self.cursor_delta = (0.0, 0.0);
    }

    pub fn cursor_delta(&self) -> (f32, f32) {
        self.cursor_delta
    }
}

impl Controller for InputState {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_empty() {
        let state = InputState::new();
        assert!(!state.is_down(Button::KeyW));
        assert_eq!(state.get_down_keys().len(), 0);
        assert_eq!(state.cursor_position, None);
        assert_eq!(state.cursor_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_repeat_press_is_recorded_once() {
        let mut state = InputState::new();
        state.apply(InputEvent::Pressed(Button::KeyW));
        state.apply(InputEvent::Pressed(Button::KeyW));
        assert_eq!(state.get_down_keys(), &[Button::KeyW]);

        state.apply(InputEvent::Released(Button::KeyW));
        assert!(state.get_down_keys().is_empty());
    }

    #[test]
    fn test_first_cursor_move_has_no_delta() {
        let mut state = InputState::new();
        state.apply(InputEvent::CursorMoved { x: 100.0, y: 50.0 });
        assert_eq!(state.cursor_delta(), (0.0, 0.0));

        state.apply(InputEvent::CursorMoved { x: 110.0, y: 45.0 });
        state.apply(InputEvent::CursorMoved { x: 115.0, y: 40.0 });
        assert_eq!(state.cursor_delta(), (15.0, -10.0));
    }

    #[test]
    fn test_delta_reset_keeps_position() {
        let mut state = InputState::new();
        state.apply(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        state.apply(InputEvent::CursorMoved { x: 10.0, y: 5.0 });

        state.reset_deltas();
        assert_eq!(state.cursor_delta(), (0.0, 0.0));
        assert_eq!(state.cursor_position, Some((10.0, 5.0)));
    }

    #[test]
    fn test_focus_lost_releases_everything() {
        let mut state = InputState::new();
        state.apply(InputEvent::Pressed(Button::KeyA));
        state.apply(InputEvent::Pressed(Button::MouseRight));
        state.apply(InputEvent::CursorMoved { x: 1.0, y: 1.0 });

        state.apply(InputEvent::FocusLost);
        assert!(state.get_down_keys().is_empty());
        assert!(!state.is_down(Button::MouseRight));
        assert_eq!(state.cursor_position, None);
    }

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(InputEvent::keycode_to_button(KeyCode::KeyW), Some(Button::KeyW));
        assert_eq!(InputEvent::keycode_to_button(KeyCode::Escape), Some(Button::Escape));
        assert_eq!(InputEvent::keycode_to_button(KeyCode::KeyZ), None);
        assert_eq!(
            InputEvent::mouse_button_to_button(MouseButton::Right),
            Some(Button::MouseRight)
        );
        assert_eq!(InputEvent::mouse_button_to_button(MouseButton::Left), None);
    }
}
