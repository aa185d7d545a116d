//! motif-gallery
//!
//! An interactive 3D gallery of image motifs. Six framed tiles float on a grid
//! in front of a perspective camera; hovering enlarges a tile, clicking zooms
//! the camera onto it and opens its description, clicking empty space returns
//! to the overview. Runs natively and in the browser through WASM.
//!
//! High-level modules
//! - `gallery`: motifs, grid layout, tiles and the [`Gallery`] state
//! - `interaction`: pointer hover and click handling
//! - `animation`: the per-frame tick (camera easing, idle sway)
//! - `loading`: asynchronous texture requests and the completion counter
//! - `overlay`: loading indicator and description panel (DOM or window title)
//! - `camera`: look-at camera, projection and picking rays
//! - `pick`: ray/tile intersection
//! - `config`: [`GalleryConfig`] with every tunable constant
//! - `context`, `pipelines`, `render`, `data_structures`: the wgpu side
//! - `resources`: asset fetching and image decoding
//! - `flow`: the winit event loop and [`run`]
//!

pub mod animation;
pub mod camera;
pub mod catalogue;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod gallery;
pub mod interaction;
pub mod loading;
pub mod overlay;
pub mod pick;
pub mod pipelines;
pub mod render;
pub mod resources;

pub use config::GalleryConfig;
pub use flow::run;
pub use gallery::{Gallery, Motif};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Browser entry point: runs the bundled catalogue on `#gallery-canvas`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    run(GalleryConfig::default(), catalogue::motifs())
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}
