#![allow(dead_code)]

use cgmath::{EuclideanSpace, Point3, Vector2};
use motif_gallery::{GalleryConfig, Motif, gallery::Gallery, overlay::Overlay};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;

/// One call made on an [`Overlay`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayCall {
    Progress(usize, usize),
    HideLoading,
    ShowDescription(String),
    HideDescription,
}

/// Overlay that remembers every call in order.
#[derive(Debug, Default)]
pub struct RecordingOverlay {
    pub calls: Vec<OverlayCall>,
}

impl RecordingOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, call: &OverlayCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn last(&self) -> Option<&OverlayCall> {
        self.calls.last()
    }
}

impl Overlay for RecordingOverlay {
    fn show_progress(&mut self, loaded: usize, total: usize) {
        self.calls.push(OverlayCall::Progress(loaded, total));
    }

    fn hide_loading(&mut self) {
        self.calls.push(OverlayCall::HideLoading);
    }

    fn show_description(&mut self, motif: &Motif) {
        self.calls.push(OverlayCall::ShowDescription(motif.name.clone()));
    }

    fn hide_description(&mut self) {
        self.calls.push(OverlayCall::HideDescription);
    }
}

pub fn motifs(amount: usize) -> Vec<Motif> {
    (0..amount)
        .map(|i| {
            Motif::new(
                format!("Motif {}", i),
                format!("Description of motif {}", i),
                "#8b4513",
                format!("images/motif_{}.png", i),
            )
        })
        .collect()
}

/// The default gallery with `amount` motifs.
pub fn gallery(amount: usize) -> Gallery {
    Gallery::new(GalleryConfig::default(), motifs(amount), WIDTH, HEIGHT)
}

/// Normalized device coordinates at which `point` currently appears.
pub fn ndc_of(gallery: &Gallery, point: Point3<f32>) -> Vector2<f32> {
    let view_proj = gallery.projection().calc_matrix()
        * gallery.camera().calc_matrix(gallery.config().focal_plane);
    let clip = view_proj * point.to_homogeneous();
    Vector2::new(clip.x / clip.w, clip.y / clip.w)
}

/// Screen position of the centre of tile `index`.
pub fn tile_centre(gallery: &Gallery, index: usize) -> Vector2<f32> {
    let position = gallery.tiles()[index].position;
    ndc_of(gallery, Point3::from_vec(position))
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {} but got {}",
        expected,
        actual
    );
}
