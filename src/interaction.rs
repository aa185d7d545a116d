//! Pointer handling: hover highlight and click-to-zoom.
//!
//! Both handlers cast a fresh ray on every event and run against the current
//! tile transforms. Hover state is not diffed; every move resets all tiles
//! before highlighting the one under the pointer.

use cgmath::{Point3, Vector2};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    window::CursorIcon,
};

use crate::{
    gallery::Gallery,
    overlay::Overlay,
    pick::{Hit, nearest_hit},
};

/// Convert a cursor position in pixels into normalized device coordinates.
pub fn ndc(position: PhysicalPosition<f64>, size: PhysicalSize<u32>) -> Vector2<f32> {
    let width = f64::from(size.width.max(1));
    let height = f64::from(size.height.max(1));
    Vector2::new(
        ((position.x / width) * 2.0 - 1.0) as f32,
        (-(position.y / height) * 2.0 + 1.0) as f32,
    )
}

/// Result of a pointer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hover {
    pub tile: Option<usize>,
}

impl Hover {
    pub fn cursor(&self) -> CursorIcon {
        match self.tile {
            Some(_) => CursorIcon::Pointer,
            None => CursorIcon::Default,
        }
    }
}

/// Result of a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Tile(usize),
    Nothing,
}

impl Gallery {
    /// Nearest tile under the pointer.
    pub fn hit_test(&self, ndc: Vector2<f32>) -> Option<Hit> {
        let ray = self
            .camera
            .cast_ray(ndc, &self.projection, self.config.focal_plane)?;
        nearest_hit(&ray, &self.tiles, self.config.tile_size / 2.0)
    }

    /// Highlight the tile under the pointer, if any.
    pub fn pointer_moved(&mut self, ndc: Vector2<f32>) -> Hover {
        let hit = self.hit_test(ndc);
        self.tiles.iter_mut().for_each(|tile| tile.scale = 1.0);
        let hovered = hit.map(|hit| hit.index);
        if let Some(tile) = hovered.and_then(|index| self.tiles.get_mut(index)) {
            tile.scale = self.config.hover_scale;
        }
        self.hovered = hovered;
        Hover { tile: hovered }
    }

    /// Zoom onto the clicked tile, or back to the overview on a miss.
    pub fn clicked(&mut self, ndc: Vector2<f32>, overlay: &mut dyn Overlay) -> Selection {
        match self.hit_test(ndc) {
            Some(hit) => {
                let tile = &self.tiles[hit.index];
                let target = Point3::new(
                    tile.position.x,
                    tile.position.y,
                    self.config.close_up_depth,
                );
                if let Some(motif) = self.motifs.get(tile.motif) {
                    log::debug!("Selected motif {} ({})", tile.motif, motif.name);
                    overlay.show_description(motif);
                }
                self.selection = Some(tile.motif);
                self.camera.zoom_to(target);
                Selection::Tile(hit.index)
            }
            None => {
                overlay.hide_description();
                self.selection = None;
                self.camera
                    .zoom_to((0.0, 0.0, self.config.overview_depth));
                Selection::Nothing
            }
        }
    }
}
