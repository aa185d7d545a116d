//! Gallery data model.
//!
//! A [`Gallery`] owns everything the frame loop and the input handlers mutate:
//! the tiles, the camera, the current selection and the texture load counter.
//! It holds no GPU state, so all behaviour here is testable headless.
//!
//! Input handling lives in [`crate::interaction`], per-frame animation in
//! [`crate::animation`].

use cgmath::{Deg, Matrix4, Quaternion, Rad, Rotation3, Vector3};
use instant::Duration;

use crate::{
    camera::{Camera, Projection},
    config::GalleryConfig,
    data_structures::instance::Instance,
    loading::{LoadProgress, Progress, Settled},
    overlay::Overlay,
};

/// One displayed artwork and its metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Motif {
    pub name: String,
    pub description: String,
    /// CSS colour value, e.g. `#8b4513`.
    pub color: String,
    pub image_url: String,
}

impl Motif {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            color: color.into(),
            image_url: image_url.into(),
        }
    }
}

/// Grid placement rules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub columns: u32,
    pub rows: u32,
    pub spacing: f32,
}

impl Layout {
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self {
            columns: config.columns.max(1),
            rows: config.rows.max(1),
            spacing: config.spacing,
        }
    }

    /// `(column, row)` of the motif at `index`.
    pub fn cell(&self, index: usize) -> (u32, u32) {
        let columns = self.columns.max(1) as usize;
        ((index % columns) as u32, (index / columns) as u32)
    }

    /// World position of a cell, centred on the origin.
    pub fn position(&self, column: u32, row: u32) -> Vector3<f32> {
        let centre_column = self.columns.saturating_sub(1) as f32 / 2.0;
        let centre_row = self.rows.saturating_sub(1) as f32 / 2.0;
        Vector3::new(
            (column as f32 - centre_column) * self.spacing,
            (centre_row - row as f32) * self.spacing,
            0.0,
        )
    }
}

/// The in-scene representation of one motif.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub motif: usize,
    pub column: u32,
    pub row: u32,
    pub position: Vector3<f32>,
    /// Uniform highlight scale, `1.0` when not hovered.
    pub scale: f32,
    /// Decorative rotation about the view axis.
    pub rotation: Rad<f32>,
}

impl Tile {
    pub fn new(motif: usize, layout: &Layout) -> Self {
        let (column, row) = layout.cell(motif);
        Self {
            motif,
            column,
            row,
            position: layout.position(column, row),
            scale: 1.0,
            rotation: Rad(0.0),
        }
    }

    pub fn world_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_z(self.rotation)
            * Matrix4::from_scale(self.scale)
    }

    pub fn instance(&self) -> Instance {
        Instance {
            position: self.position,
            rotation: Quaternion::from_angle_z(self.rotation),
            scale: Vector3::new(self.scale, self.scale, self.scale),
        }
    }

    /// Placement of the frame behind this tile. Frames neither scale nor rotate.
    pub fn frame_instance(&self, offset: f32) -> Instance {
        Instance::from(Vector3::new(self.position.x, self.position.y, self.position.z + offset))
    }
}

/// Application state shared by the input handlers and the frame loop.
#[derive(Debug)]
pub struct Gallery {
    pub(crate) config: GalleryConfig,
    pub(crate) motifs: Vec<Motif>,
    pub(crate) tiles: Vec<Tile>,
    pub(crate) camera: Camera,
    pub(crate) projection: Projection,
    pub(crate) selection: Option<usize>,
    pub(crate) hovered: Option<usize>,
    pub(crate) progress: LoadProgress,
    /// Time of the last tick since start.
    pub(crate) clock: Duration,
    /// When the loading indicator has to disappear, once loading is complete.
    pub(crate) hide_due: Option<Duration>,
}

impl Gallery {
    /// Lay out one tile per motif and place the camera at the overview.
    pub fn new(config: GalleryConfig, motifs: Vec<Motif>, width: u32, height: u32) -> Self {
        let layout = Layout::from_config(&config);
        let capacity = (layout.columns * layout.rows) as usize;
        if motifs.len() > capacity {
            log::warn!(
                "{} motifs exceed the {}x{} grid; extra rows continue below",
                motifs.len(),
                layout.columns,
                layout.rows
            );
        }
        let tiles = (0..motifs.len()).map(|i| Tile::new(i, &layout)).collect();
        let camera = Camera::new((0.0, 0.0, config.overview_depth));
        let projection = Projection::new(
            width,
            height,
            Deg(config.fovy),
            config.znear,
            config.zfar,
        );
        let progress = LoadProgress::new(motifs.len());
        Self {
            config,
            motifs,
            tiles,
            camera,
            projection,
            selection: None,
            hovered: None,
            progress,
            clock: Duration::ZERO,
            hide_due: None,
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn motifs(&self) -> &[Motif] {
        &self.motifs
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Index of the motif whose description is shown.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn progress(&self) -> &LoadProgress {
        &self.progress
    }

    /// Recompute the aspect ratio. Zero-sized surfaces are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    /// Show the initial progress, or hide the indicator right away when there
    /// is nothing to load.
    pub fn begin_loading(&mut self, overlay: &mut dyn Overlay) {
        let progress = self.progress.begin();
        progress.apply(overlay);
    }

    /// Count a settled texture load and update the indicator.
    pub fn record_settlement(&mut self, settled: &Settled, overlay: &mut dyn Overlay) -> Progress {
        match &settled.outcome {
            Ok(_) => log::info!(
                "Loaded texture for motif {} ({})",
                settled.index,
                self.motif_url(settled.index)
            ),
            Err(e) => log::error!(
                "Error loading texture {}: {:#}",
                self.motif_url(settled.index),
                e
            ),
        }
        let progress = self.progress.record();
        match progress {
            Progress::Complete { total }
                if settled.is_ok() && !self.config.hide_delay.is_zero() =>
            {
                overlay.show_progress(total, total);
                self.hide_due = Some(self.clock + self.config.hide_delay);
            }
            _ => progress.apply(overlay),
        }
        progress
    }

    /// Hide the loading indicator once its delay has run out. Returns `true` on
    /// the one call that hides it.
    pub fn hide_loading_when_due(&mut self, overlay: &mut dyn Overlay) -> bool {
        match self.hide_due {
            Some(due) if self.clock >= due => {
                self.hide_due = None;
                overlay.hide_loading();
                true
            }
            _ => false,
        }
    }

    fn motif_url(&self, index: usize) -> &str {
        self.motifs
            .get(index)
            .map(|m| m.image_url.as_str())
            .unwrap_or("<unknown>")
    }
}
