//! GPU-facing data structures: meshes, instances, textures.
//!
//! - `model` contains vertex layout, generated geometry, meshes and materials
//! - `texture` contains GPU texture wrapper and creation utilities
//! - `instance` holds per-instance transformation data

pub mod instance;
pub mod model;
pub mod texture;
