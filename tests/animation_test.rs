use std::time::Duration;

use motif_gallery::animation::idle_rotation;

use crate::common::test_utils::{RecordingOverlay, assert_close, gallery, tile_centre};

mod common;

const AMPLITUDE: f32 = 0.02;
const SPEED: f32 = 1.0;

#[test]
fn should_keep_the_idle_sway_within_its_amplitude() {
    for index in 0..6 {
        for step in 0..1000 {
            let seconds = step as f64 * 0.037;
            let rotation = idle_rotation(index, seconds, AMPLITUDE, SPEED);
            assert!(rotation.0.abs() <= AMPLITUDE + f32::EPSILON);
        }
    }
}

#[test]
fn should_shift_the_sway_phase_per_tile() {
    let first = idle_rotation(0, 2.0, AMPLITUDE, SPEED);
    let second = idle_rotation(1, 2.0, AMPLITUDE, SPEED);
    assert!((first.0 - second.0).abs() > 1e-4);
    assert_close(first.0, (2.0f32).sin() * AMPLITUDE);
    assert_close(second.0, (3.0f32).sin() * AMPLITUDE);
}

#[test]
fn should_rotate_every_tile_on_tick() {
    let mut gallery = gallery(6);
    gallery.tick(Duration::from_millis(1500));
    for (index, tile) in gallery.tiles().iter().enumerate() {
        assert_close(
            tile.rotation.0,
            idle_rotation(index, 1.5, AMPLITUDE, SPEED).0,
        );
    }
}

#[test]
fn should_not_move_a_resting_camera_on_tick() {
    let mut gallery = gallery(6);
    let before = gallery.camera().position;
    assert!(!gallery.tick(Duration::from_millis(16)));
    assert_eq!(gallery.camera().position, before);
}

#[test]
fn should_ease_the_camera_on_tick_until_it_arrives() {
    let mut gallery = gallery(6);
    let mut overlay = RecordingOverlay::new();
    gallery.clicked(tile_centre(&gallery, 4), &mut overlay);

    gallery.tick(Duration::from_millis(16));
    assert_close(gallery.camera().position.z, 7.6);

    let mut frames = 1;
    while !gallery.tick(Duration::from_millis(16 * frames)) {
        frames += 1;
        assert!(frames < 100, "camera never arrived");
    }
    let camera = gallery.camera();
    assert!(!camera.easing);
    assert!((camera.position.z - 4.0).abs() < 0.01);
    assert!((camera.position.y + 1.5).abs() < 0.05);
}
