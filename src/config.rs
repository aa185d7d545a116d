//! Gallery configuration.
//!
//! [`GalleryConfig`] bundles every tunable of the gallery: grid layout, tile and
//! frame geometry, camera behaviour, lighting and the loading indicator. The
//! [`Default`] implementation is the canonical gallery; override single fields
//! with struct update syntax:
//!
//! ```
//! use motif_gallery::config::GalleryConfig;
//!
//! let config = GalleryConfig {
//!     spacing: 3.5,
//!     ..Default::default()
//! };
//! assert_eq!(config.columns, 3);
//! ```

use instant::Duration;

/// Which axes must settle before the camera stops easing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArrivalCheck {
    /// Stop as soon as the depth axis is within tolerance. The x/y axes may
    /// still lag behind by a fraction of the tolerance-scaled distance.
    #[default]
    DepthOnly,
    /// Stop only once all three axes are within tolerance.
    AllAxes,
}

/// A point light in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: [f32; 3],
    pub colour: [f32; 3],
    pub intensity: f32,
}

/// Scene lighting: a uniform ambient term plus two point lights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient_colour: [f32; 3],
    pub ambient_intensity: f32,
    pub points: [PointLight; 2],
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient_colour: [1.0, 1.0, 1.0],
            ambient_intensity: 0.6,
            points: [
                PointLight {
                    position: [5.0, 5.0, 5.0],
                    colour: [1.0, 1.0, 1.0],
                    intensity: 0.8,
                },
                PointLight {
                    position: [-5.0, -5.0, 5.0],
                    colour: [1.0, 1.0, 1.0],
                    intensity: 0.4,
                },
            ],
        }
    }
}

#[derive(Clone, Debug)]
pub struct GalleryConfig {
    /// Tiles per row.
    pub columns: u32,
    /// Rows the grid is centred for. Motifs beyond `columns * rows` continue
    /// downwards.
    pub rows: u32,
    /// Distance between neighbouring tile centres.
    pub spacing: f32,
    /// Edge length of the square image plane.
    pub tile_size: f32,
    /// Edge length of the frame behind each tile.
    pub frame_size: f32,
    /// Thickness of the frame.
    pub frame_depth: f32,
    /// z coordinate of the frame centre relative to its tile.
    pub frame_offset: f32,
    /// sRGB frame colour.
    pub frame_colour: [u8; 4],
    /// Placeholder shown while a tile's image is missing.
    pub placeholder_colour: [u8; 4],
    /// Scale applied to the hovered tile.
    pub hover_scale: f32,
    /// Camera depth when zoomed onto a tile.
    pub close_up_depth: f32,
    /// Camera depth of the overview.
    pub overview_depth: f32,
    /// z coordinate of the plane the camera looks at.
    pub focal_plane: f32,
    /// Fraction of the remaining distance covered per frame.
    pub easing_factor: f32,
    /// Distance below which the camera counts as arrived.
    pub arrival_tolerance: f32,
    pub arrival_check: ArrivalCheck,
    /// Peak idle rotation in radians.
    pub idle_amplitude: f32,
    /// Idle oscillation speed in radians per second.
    pub idle_speed: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
    pub clear_colour: wgpu::Color,
    /// Multisample count for antialiasing. Falls back to `1` when the surface
    /// format cannot be multisampled this often.
    pub sample_count: u32,
    pub lighting: Lighting,
    /// Prefix of the progress text, followed by `<current>/<total>`.
    pub loading_label: String,
    /// How long the full `total/total` count stays up when the last load
    /// succeeded. A failed last load hides the indicator at once.
    pub hide_delay: Duration,
    /// Directory (native) or path below the page URL (web) holding the images.
    pub asset_dir: String,
    /// Id of the canvas element the gallery draws into on the web.
    pub canvas_id: String,
    pub window_title: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            rows: 2,
            spacing: 3.0,
            tile_size: 2.0,
            frame_size: 2.2,
            frame_depth: 0.1,
            frame_offset: -0.1,
            frame_colour: [0x8b, 0x73, 0x55, 0xff],
            placeholder_colour: [0x3a, 0x3a, 0x4e, 0xff],
            hover_scale: 1.1,
            close_up_depth: 4.0,
            overview_depth: 8.0,
            focal_plane: 0.0,
            easing_factor: 0.1,
            arrival_tolerance: 0.01,
            arrival_check: ArrivalCheck::DepthOnly,
            idle_amplitude: 0.02,
            idle_speed: 1.0,
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            clear_colour: srgb_colour([0x1a, 0x1a, 0x2e]),
            sample_count: 4,
            lighting: Lighting::default(),
            loading_label: "Loading gallery...".to_string(),
            hide_delay: Duration::from_millis(300),
            asset_dir: "assets".to_string(),
            canvas_id: "gallery-canvas".to_string(),
            window_title: "Motif Gallery".to_string(),
        }
    }
}

/// Convert an sRGB byte triple into the linear colour wgpu expects for clears
/// on an sRGB surface.
pub fn srgb_colour(rgb: [u8; 3]) -> wgpu::Color {
    let linear = |c: u8| {
        let c = f64::from(c) / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    wgpu::Color {
        r: linear(rgb[0]),
        g: linear(rgb[1]),
        b: linear(rgb[2]),
        a: 1.0,
    }
}
