//! Per-frame animation: camera easing and the idle tile sway.

use cgmath::Rad;
use instant::Duration;

use crate::gallery::Gallery;

/// Idle rotation of tile `index` at `seconds` since start.
///
/// Each tile is phase-shifted by its index so neighbours never sway in sync.
pub fn idle_rotation(index: usize, seconds: f64, amplitude: f32, speed: f32) -> Rad<f32> {
    let phase = seconds * f64::from(speed) + index as f64;
    Rad(phase.sin() as f32 * amplitude)
}

impl Gallery {
    /// Advance all animation state to `elapsed` since the gallery started.
    ///
    /// This is the only place that moves the camera or rotates tiles. Returns
    /// `true` on the frame the camera arrives at its target.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.clock = elapsed;
        let arrived = self.camera.ease(
            self.config.easing_factor,
            self.config.arrival_tolerance,
            self.config.arrival_check,
        );
        if arrived {
            log::debug!("Camera arrived at {:?}", self.camera.target);
        }

        let seconds = elapsed.as_secs_f64();
        let (amplitude, speed) = (self.config.idle_amplitude, self.config.idle_speed);
        self.tiles
            .iter_mut()
            .enumerate()
            .for_each(|(index, tile)| {
                tile.rotation = idle_rotation(index, seconds, amplitude, speed);
            });
        arrived
    }
}
