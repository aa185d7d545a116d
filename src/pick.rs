//! Ray picking against gallery tiles.
//!
//! Tiles are flat squares, so picking is done on the CPU instead of through an
//! offscreen ID buffer:
//! 1. Bring the ray into the tile's local space with the inverse world matrix
//!    (so hover scale and idle rotation are honoured)
//! 2. Intersect it with the local `z = 0` plane
//! 3. Accept the hit if it lies inside the square `[-h, h]²`
//!
//! Both faces are hittable. Since the transform is affine the ray parameter is
//! preserved, which makes it the world-space distance for unit directions.

use cgmath::{EuclideanSpace, Point3, SquareMatrix, Transform};

use crate::{camera::Ray, gallery::Tile};

/// A ray hit on a tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Index of the tile in the gallery.
    pub index: usize,
    pub distance: f32,
    pub point: Point3<f32>,
}

/// Distance along `ray` at which it crosses `tile`, if it does.
///
/// `half_extent` is half the unscaled edge length of the tile.
pub fn intersect_tile(ray: &Ray, tile: &Tile, half_extent: f32) -> Option<f32> {
    let inverse = tile.world_matrix().invert()?;
    let origin = inverse.transform_point(ray.origin);
    let direction = inverse.transform_vector(ray.direction);
    if direction.z.abs() <= f32::EPSILON {
        return None;
    }
    let distance = -origin.z / direction.z;
    if distance < 0.0 {
        return None;
    }
    let local = origin.to_vec() + direction * distance;
    if local.x.abs() <= half_extent && local.y.abs() <= half_extent {
        Some(distance)
    } else {
        None
    }
}

/// The closest tile along `ray`. Ties go to the lower index.
pub fn nearest_hit(ray: &Ray, tiles: &[Tile], half_extent: f32) -> Option<Hit> {
    tiles
        .iter()
        .enumerate()
        .filter_map(|(index, tile)| {
            intersect_tile(ray, tile, half_extent).map(|distance| Hit {
                index,
                distance,
                point: ray.at(distance),
            })
        })
        .fold(None, |nearest: Option<Hit>, hit| match nearest {
            Some(best) if best.distance <= hit.distance => Some(best),
            _ => Some(hit),
        })
}
