use cgmath::{Deg, InnerSpace, Point3, Vector2};
use motif_gallery::{
    camera::{Camera, Projection},
    config::ArrivalCheck,
};

use crate::common::test_utils::assert_close;

mod common;

const FACTOR: f32 = 0.1;
const TOLERANCE: f32 = 0.01;

#[test]
fn should_rest_until_given_a_target() {
    let mut camera = Camera::new((0.0, 0.0, 8.0));
    assert!(!camera.ease(FACTOR, TOLERANCE, ArrivalCheck::DepthOnly));
    assert_eq!(camera.position, Point3::new(0.0, 0.0, 8.0));
}

#[test]
fn should_cover_a_tenth_of_the_distance_per_frame() {
    let mut camera = Camera::new((0.0, 0.0, 8.0));
    camera.zoom_to((3.0, 1.5, 4.0));
    camera.ease(FACTOR, TOLERANCE, ArrivalCheck::DepthOnly);
    assert_close(camera.position.x, 0.3);
    assert_close(camera.position.y, 0.15);
    assert_close(camera.position.z, 7.6);
}

#[test]
fn should_converge_monotonically_without_overshooting() {
    let mut camera = Camera::new((0.0, 0.0, 8.0));
    let target = Point3::new(-3.0, 1.5, 4.0);
    camera.zoom_to(target);

    let mut previous = target - camera.position;
    let mut frames = 0;
    while camera.easing {
        let arrived = camera.ease(FACTOR, TOLERANCE, ArrivalCheck::DepthOnly);
        frames += 1;
        let left = target - camera.position;
        for axis in 0..3 {
            assert!(left[axis].abs() <= previous[axis].abs());
            assert!(left[axis] * previous[axis] >= 0.0, "overshot on axis {}", axis);
        }
        if arrived {
            assert!(left.z.abs() < TOLERANCE);
            assert!(previous.z.abs() >= TOLERANCE);
        }
        previous = left;
        assert!(frames < 100, "camera never arrived");
    }
    // 4 * 0.9^n < 0.01
    assert!((55..=60).contains(&frames), "arrived after {} frames", frames);
}

#[test]
fn should_arrive_on_depth_alone_by_default() {
    let mut camera = Camera::new((0.0, 0.0, 4.0));
    camera.zoom_to((5.0, 0.0, 4.0));

    assert!(camera.ease(FACTOR, TOLERANCE, ArrivalCheck::DepthOnly));
    assert!(!camera.easing);
    assert_close(camera.position.x, 0.5);

    // Resting now, even though x is far off
    assert!(!camera.ease(FACTOR, TOLERANCE, ArrivalCheck::DepthOnly));
    assert_close(camera.position.x, 0.5);
}

#[test]
fn should_wait_for_every_axis_when_asked_to() {
    let mut camera = Camera::new((0.0, 0.0, 4.0));
    camera.zoom_to((5.0, 0.0, 4.0));

    assert!(!camera.ease(FACTOR, TOLERANCE, ArrivalCheck::AllAxes));
    assert!(camera.easing);
    let mut frames = 1;
    while !camera.ease(FACTOR, TOLERANCE, ArrivalCheck::AllAxes) {
        frames += 1;
        assert!(frames < 200);
    }
    assert!((5.0 - camera.position.x).abs() < TOLERANCE);
}

#[test]
fn should_replace_the_target_of_a_running_ease() {
    let mut camera = Camera::new((0.0, 0.0, 8.0));
    camera.zoom_to((3.0, 1.5, 4.0));
    camera.ease(FACTOR, TOLERANCE, ArrivalCheck::DepthOnly);
    camera.zoom_to((0.0, 0.0, 8.0));
    assert_eq!(camera.target, Point3::new(0.0, 0.0, 8.0));
    assert!(camera.easing);
}

#[test]
fn should_look_at_the_focal_plane_below_the_target() {
    let mut camera = Camera::new((0.0, 0.0, 8.0));
    camera.zoom_to((3.0, -1.5, 4.0));
    assert_eq!(camera.look_at_point(0.0), Point3::new(3.0, -1.5, 0.0));
}

#[test]
fn should_cast_the_centre_ray_straight_ahead() {
    let camera = Camera::new((0.0, 0.0, 8.0));
    let projection = Projection::new(800, 600, Deg(75.0), 0.1, 1000.0);
    let ray = camera
        .cast_ray(Vector2::new(0.0, 0.0), &projection, 0.0)
        .expect("ray");

    assert_eq!(ray.origin, camera.position);
    assert_close(ray.direction.magnitude(), 1.0);
    assert!(ray.direction.x.abs() < 1e-3);
    assert!(ray.direction.y.abs() < 1e-3);
    assert!((ray.direction.z + 1.0).abs() < 1e-3);
}

#[test]
fn should_cast_rays_through_the_frustum_edges() {
    let camera = Camera::new((0.0, 0.0, 8.0));
    let projection = Projection::new(600, 600, Deg(90.0), 0.1, 1000.0);
    // A 90 degree frustum reaches x = 8 at z = 0 from 8 units away
    let ray = camera
        .cast_ray(Vector2::new(1.0, 0.0), &projection, 0.0)
        .expect("ray");
    let hit = ray.at(8.0 / -ray.direction.z);
    assert!((hit.x - 8.0).abs() < 1e-2);
    assert!(hit.y.abs() < 1e-2);
}

#[test]
fn should_keep_the_aspect_on_zero_sized_resizes() {
    let mut projection = Projection::new(800, 400, Deg(75.0), 0.1, 1000.0);
    projection.resize(0, 0);
    assert_close(projection.aspect(), 2.0);
    projection.resize(300, 600);
    assert_close(projection.aspect(), 0.5);
}
