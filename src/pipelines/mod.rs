//! Render pipelines and the uniforms they bind.
//!
//! - `basic` builds the lit, textured pipelines for tiles and frames
//! - `light` owns the light uniform buffer and its bind group

pub mod basic;
pub mod light;
