use cgmath::Vector3;
use motif_gallery::{
    GalleryConfig,
    gallery::{Gallery, Layout, Tile},
};

use crate::common::test_utils::{HEIGHT, WIDTH, assert_close, gallery, motifs};

mod common;

fn assert_position(tile: &Tile, expected: Vector3<f32>) {
    assert_close(tile.position.x, expected.x);
    assert_close(tile.position.y, expected.y);
    assert_close(tile.position.z, expected.z);
}

#[test]
fn should_lay_out_six_motifs_on_a_centred_grid() {
    let gallery = gallery(6);
    let tiles = gallery.tiles();
    assert_eq!(tiles.len(), 6);

    assert_position(&tiles[0], Vector3::new(-3.0, 1.5, 0.0));
    assert_position(&tiles[1], Vector3::new(0.0, 1.5, 0.0));
    assert_position(&tiles[2], Vector3::new(3.0, 1.5, 0.0));
    assert_position(&tiles[3], Vector3::new(-3.0, -1.5, 0.0));
    assert_position(&tiles[4], Vector3::new(0.0, -1.5, 0.0));
    assert_position(&tiles[5], Vector3::new(3.0, -1.5, 0.0));
}

#[test]
fn should_fill_rows_left_to_right() {
    let layout = Layout::from_config(&GalleryConfig::default());
    assert_eq!(layout.cell(0), (0, 0));
    assert_eq!(layout.cell(2), (2, 0));
    assert_eq!(layout.cell(3), (0, 1));
    assert_eq!(layout.cell(5), (2, 1));
}

#[test]
fn should_continue_below_the_grid_when_there_are_more_motifs() {
    let gallery = gallery(7);
    assert_eq!(gallery.tiles().len(), 7);
    assert_eq!((gallery.tiles()[6].column, gallery.tiles()[6].row), (0, 2));
    assert_position(&gallery.tiles()[6], Vector3::new(-3.0, -4.5, 0.0));
}

#[test]
fn should_start_with_neutral_tiles() {
    let gallery = gallery(6);
    for (i, tile) in gallery.tiles().iter().enumerate() {
        assert_eq!(tile.motif, i);
        assert_eq!(tile.scale, 1.0);
        assert_eq!(tile.rotation.0, 0.0);
    }
    assert_eq!(gallery.selection(), None);
    assert_eq!(gallery.hovered(), None);
}

#[test]
fn should_place_frames_behind_their_tiles() {
    let gallery = gallery(6);
    let offset = gallery.config().frame_offset;
    assert_close(offset, -0.1);
    for tile in gallery.tiles() {
        let frame = tile.frame_instance(offset);
        assert_close(frame.position.x, tile.position.x);
        assert_close(frame.position.y, tile.position.y);
        assert_close(frame.position.z, -0.1);
        assert_eq!(frame.scale, Vector3::new(1.0, 1.0, 1.0));
    }
}

#[test]
fn should_start_the_camera_at_the_overview() {
    let gallery = gallery(6);
    let camera = gallery.camera();
    assert_close(camera.position.x, 0.0);
    assert_close(camera.position.y, 0.0);
    assert_close(camera.position.z, 8.0);
    assert!(!camera.easing);
    assert_close(gallery.projection().aspect(), WIDTH as f32 / HEIGHT as f32);
}

#[test]
fn should_honour_a_custom_grid() {
    let config = GalleryConfig {
        columns: 2,
        rows: 1,
        spacing: 4.0,
        ..Default::default()
    };
    let gallery = Gallery::new(config, motifs(2), WIDTH, HEIGHT);
    assert_position(&gallery.tiles()[0], Vector3::new(-2.0, 0.0, 0.0));
    assert_position(&gallery.tiles()[1], Vector3::new(2.0, 0.0, 0.0));
}

#[test]
fn should_not_divide_by_an_empty_grid() {
    let config = GalleryConfig {
        columns: 0,
        rows: 0,
        ..Default::default()
    };
    let gallery = Gallery::new(config, motifs(2), WIDTH, HEIGHT);
    assert_eq!(gallery.tiles()[1].row, 1);
}

#[test]
fn should_ignore_zero_sized_resizes() {
    let mut gallery = gallery(6);
    gallery.resize(1000, 500);
    assert_close(gallery.projection().aspect(), 2.0);
    gallery.resize(0, 500);
    assert_close(gallery.projection().aspect(), 2.0);
}
