use blue_planet::camera::FlyCamera;
use blue_planet::core::{Button, Controller, InputEvent, InputQueue, InputState};
use blue_planet::scenes::apply_fly_input;
use glam::Vec3;

fn state_from(events: &[InputEvent]) -> InputState {
    let mut queue = InputQueue::new();
    for &event in events {
        queue.push(event);
    }
    let mut state = InputState::new();
    state.apply_all(&mut queue);
    state
}

#[cfg(test)]
mod input_tests {
    use super::*;

    #[test]
    fn test_queue_drains_in_arrival_order() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::Pressed(Button::KeyW));
        queue.push(InputEvent::CursorMoved { x: 1.0, y: 2.0 });
        queue.push(InputEvent::Released(Button::KeyW));
        assert_eq!(queue.len(), 3);

        let drained: Vec<InputEvent> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                InputEvent::Pressed(Button::KeyW),
                InputEvent::CursorMoved { x: 1.0, y: 2.0 },
                InputEvent::Released(Button::KeyW),
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_press_then_release_in_one_frame_ends_up() {
        let state = state_from(&[
            InputEvent::Pressed(Button::KeyD),
            InputEvent::Released(Button::KeyD),
        ]);
        assert!(!state.is_down(Button::KeyD));
    }

    #[test]
    fn test_axis_from_opposing_keys() {
        let state = state_from(&[InputEvent::Pressed(Button::KeyW)]);
        assert_eq!(state.axis(Button::KeyW, Button::KeyS), 1.0);

        let state = state_from(&[InputEvent::Pressed(Button::KeyS)]);
        assert_eq!(state.axis(Button::KeyW, Button::KeyS), -1.0);

        let state = state_from(&[
            InputEvent::Pressed(Button::KeyW),
            InputEvent::Pressed(Button::KeyS),
        ]);
        assert_eq!(state.axis(Button::KeyW, Button::KeyS), 0.0);
    }

    #[test]
    fn test_no_input_leaves_camera_alone() {
        let mut camera = FlyCamera::default();
        apply_fly_input(&mut camera, &InputState::new(), 0.016, false);
        assert_eq!(camera, FlyCamera::default());
    }

    #[test]
    fn test_w_moves_forward_at_speed_per_second() {
        let mut camera = FlyCamera::default();
        let state = state_from(&[InputEvent::Pressed(Button::KeyW)]);

        apply_fly_input(&mut camera, &state, 0.5, false);
        assert!((camera.position - Vec3::new(0.0, 0.0, 7.5)).length() < 1e-5);
    }

    #[test]
    fn test_a_strafes_left() {
        let mut camera = FlyCamera::default();
        let state = state_from(&[InputEvent::Pressed(Button::KeyA)]);

        apply_fly_input(&mut camera, &state, 1.0, false);
        assert!((camera.position - Vec3::new(-5.0, 0.0, 10.0)).length() < 1e-5);
    }

    #[test]
    fn test_cursor_ignored_without_right_button() {
        let mut camera = FlyCamera::default();
        let state = state_from(&[
            InputEvent::CursorMoved { x: 0.0, y: 0.0 },
            InputEvent::CursorMoved { x: 50.0, y: 20.0 },
        ]);

        apply_fly_input(&mut camera, &state, 0.016, false);
        assert_eq!(camera.direction, Vec3::NEG_Z);
    }

    #[test]
    fn test_right_drag_turns_camera() {
        let mut camera = FlyCamera::default();
        camera.sensitivity = 1.0;
        let state = state_from(&[
            InputEvent::Pressed(Button::MouseRight),
            InputEvent::CursorMoved { x: 0.0, y: 0.0 },
            InputEvent::CursorMoved { x: 90.0, y: 0.0 },
        ]);

        // dragging right turns the view right, towards +X
        apply_fly_input(&mut camera, &state, 0.016, false);
        assert!((camera.direction - Vec3::X).length() < 1e-5);
        assert!((camera.up - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_renormalize_repairs_basis() {
        let mut camera = FlyCamera::default();
        camera.direction = Vec3::new(0.0, 0.1, -3.0);
        camera.up = Vec3::new(0.0, 2.0, 0.2);

        apply_fly_input(&mut camera, &InputState::new(), 0.016, true);
        assert!((camera.direction.length() - 1.0).abs() < 1e-5);
        assert!(camera.direction.dot(camera.up).abs() < 1e-5);
    }
}
