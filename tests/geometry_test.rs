use motif_gallery::data_structures::{instance::Instance, model::Geometry};

mod common;

use crate::common::test_utils::assert_close;

#[test]
fn should_build_a_plane_facing_the_camera() {
    let plane = Geometry::plane(2.0);
    assert_eq!(plane.vertices.len(), 4);
    assert_eq!(plane.indices.len(), 6);
    for vertex in &plane.vertices {
        assert_eq!(vertex.normal, [0.0, 0.0, 1.0]);
        assert_eq!(vertex.position[2], 0.0);
        assert_close(vertex.position[0].abs(), 1.0);
        assert_close(vertex.position[1].abs(), 1.0);
    }
    assert!(plane.indices.iter().all(|&i| (i as usize) < plane.vertices.len()));
}

#[test]
fn should_map_the_whole_image_onto_the_plane() {
    let plane = Geometry::plane(2.0);
    let top_left = plane
        .vertices
        .iter()
        .find(|v| v.position[0] < 0.0 && v.position[1] > 0.0)
        .expect("top left corner");
    assert_eq!(top_left.tex_coords, [0.0, 0.0]);
    let bottom_right = plane
        .vertices
        .iter()
        .find(|v| v.position[0] > 0.0 && v.position[1] < 0.0)
        .expect("bottom right corner");
    assert_eq!(bottom_right.tex_coords, [1.0, 1.0]);
}

#[test]
fn should_build_a_closed_frame_box() {
    let frame = Geometry::cuboid(2.2, 2.2, 0.1);
    assert_eq!(frame.vertices.len(), 24);
    assert_eq!(frame.indices.len(), 36);
    assert!(frame.indices.iter().all(|&i| (i as usize) < frame.vertices.len()));
    for vertex in &frame.vertices {
        let outward: f32 = (0..3).map(|i| vertex.position[i] * vertex.normal[i]).sum();
        assert!(outward > 0.0, "normal {:?} points inwards", vertex.normal);
    }
}

#[test]
fn should_wind_box_faces_counter_clockwise_from_outside() {
    let frame = Geometry::cuboid(2.0, 2.0, 2.0);
    for triangle in frame.indices.chunks(3) {
        let [a, b, c] = [0, 1, 2].map(|i| frame.vertices[triangle[i] as usize].position);
        let ab = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let ac = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        let cross = [
            ab[1] * ac[2] - ab[2] * ac[1],
            ab[2] * ac[0] - ab[0] * ac[2],
            ab[0] * ac[1] - ab[1] * ac[0],
        ];
        let normal = frame.vertices[triangle[0] as usize].normal;
        let facing: f32 = (0..3).map(|i| cross[i] * normal[i]).sum();
        assert!(facing > 0.0);
    }
}

#[test]
fn should_pack_instances_for_the_gpu() {
    let instance = Instance::from(cgmath::Vector3::new(3.0, -1.5, -0.1));
    let raw = instance.to_raw();
    let bytes: &[u8] = bytemuck::bytes_of(&raw);
    assert_eq!(bytes.len(), (16 + 9) * 4);
}
