use std::time::Duration;

use futures::StreamExt;
use motif_gallery::{
    GalleryConfig,
    gallery::Gallery,
    loading::{LoadProgress, Progress, Settled, load_motif, settle_all},
    resources::texture::decode_image,
};

use crate::common::test_utils::{
    HEIGHT, OverlayCall, RecordingOverlay, WIDTH, gallery, motifs,
};

mod common;

fn success(index: usize) -> Settled {
    Settled {
        index,
        outcome: Ok(image::RgbaImage::new(1, 1)),
    }
}

fn failure(index: usize) -> Settled {
    Settled {
        index,
        outcome: Err(anyhow::anyhow!("404 Not Found")),
    }
}

#[test]
fn should_count_every_settlement() {
    let mut progress = LoadProgress::new(3);
    assert_eq!(progress.begin(), Progress::Loading { loaded: 0, total: 3 });
    assert_eq!(progress.record(), Progress::Loading { loaded: 1, total: 3 });
    assert_eq!(progress.record(), Progress::Loading { loaded: 2, total: 3 });
    assert!(!progress.is_complete());
    assert_eq!(progress.record(), Progress::Complete { total: 3 });
    assert!(progress.is_complete());
    assert_eq!(progress.loaded(), 3);
}

#[test]
fn should_complete_only_once() {
    let mut progress = LoadProgress::new(1);
    assert_eq!(progress.record(), Progress::Complete { total: 1 });
    assert_eq!(progress.record(), Progress::AlreadyComplete);
    assert_eq!(progress.loaded(), 1);
}

#[test]
fn should_complete_an_empty_gallery_immediately() {
    let mut gallery = gallery(0);
    let mut overlay = RecordingOverlay::new();
    gallery.begin_loading(&mut overlay);
    assert_eq!(
        overlay.calls,
        vec![OverlayCall::Progress(0, 0), OverlayCall::HideLoading]
    );
    assert!(gallery.progress().is_complete());
}

#[test]
fn should_hide_the_indicator_after_the_last_of_mixed_settlements() {
    let mut gallery = gallery(6);
    let mut overlay = RecordingOverlay::new();
    gallery.begin_loading(&mut overlay);
    assert_eq!(overlay.calls, vec![OverlayCall::Progress(0, 6)]);

    let settlements = [
        success(3),
        failure(0),
        success(5),
        failure(1),
        failure(4),
        success(2),
    ];
    let last = settlements.len() - 1;
    for (n, settled) in settlements.iter().enumerate() {
        let progress = gallery.record_settlement(settled, &mut overlay);
        if n < last {
            assert_eq!(progress, Progress::Loading { loaded: n + 1, total: 6 });
            assert_eq!(overlay.count(&OverlayCall::HideLoading), 0);
        } else {
            assert_eq!(progress, Progress::Complete { total: 6 });
        }
    }
    assert_eq!(overlay.count(&OverlayCall::Progress(6, 6)), 1);
    // The last load succeeded, so the full count stays up for a moment
    assert_eq!(overlay.count(&OverlayCall::HideLoading), 0);

    gallery.tick(Duration::from_millis(299));
    assert!(!gallery.hide_loading_when_due(&mut overlay));
    gallery.tick(Duration::from_millis(300));
    assert!(gallery.hide_loading_when_due(&mut overlay));
    assert_eq!(overlay.last(), Some(&OverlayCall::HideLoading));

    gallery.tick(Duration::from_millis(600));
    assert!(!gallery.hide_loading_when_due(&mut overlay));
    assert_eq!(overlay.count(&OverlayCall::HideLoading), 1);
}

#[test]
fn should_measure_the_hide_delay_from_the_last_settlement() {
    let mut gallery = gallery(1);
    let mut overlay = RecordingOverlay::new();
    gallery.begin_loading(&mut overlay);
    gallery.tick(Duration::from_secs(2));

    gallery.record_settlement(&success(0), &mut overlay);
    gallery.tick(Duration::from_millis(2200));
    assert!(!gallery.hide_loading_when_due(&mut overlay));
    gallery.tick(Duration::from_millis(2300));
    assert!(gallery.hide_loading_when_due(&mut overlay));
    assert_eq!(overlay.count(&OverlayCall::HideLoading), 1);
}

#[test]
fn should_hide_at_once_without_a_delay() {
    let config = GalleryConfig {
        hide_delay: Duration::ZERO,
        ..Default::default()
    };
    let mut gallery = Gallery::new(config, motifs(1), WIDTH, HEIGHT);
    let mut overlay = RecordingOverlay::new();
    gallery.begin_loading(&mut overlay);
    gallery.record_settlement(&success(0), &mut overlay);

    assert_eq!(overlay.last(), Some(&OverlayCall::HideLoading));
    assert!(!gallery.hide_loading_when_due(&mut overlay));
    assert_eq!(overlay.count(&OverlayCall::HideLoading), 1);
}

#[test]
fn should_hide_the_indicator_when_every_load_fails() {
    let mut gallery = gallery(2);
    let mut overlay = RecordingOverlay::new();
    gallery.begin_loading(&mut overlay);
    gallery.record_settlement(&failure(0), &mut overlay);
    gallery.record_settlement(&failure(1), &mut overlay);
    // A failed last load does not wait
    assert_eq!(overlay.count(&OverlayCall::HideLoading), 1);
    assert!(!gallery.hide_loading_when_due(&mut overlay));

    // A stray settlement changes nothing
    let progress = gallery.record_settlement(&failure(1), &mut overlay);
    assert_eq!(progress, Progress::AlreadyComplete);
    assert_eq!(overlay.count(&OverlayCall::HideLoading), 1);
}

#[test]
fn should_report_undecodable_images() {
    let error = decode_image(b"definitely not an image", "broken.png").unwrap_err();
    assert!(format!("{:#}", error).contains("broken.png"));
}

#[tokio::test]
async fn should_settle_each_request_exactly_once() {
    let requests = [
        "images/parang.png",
        "images/does_not_exist.png",
        "images/kawung.png",
    ];
    let loads = settle_all(
        requests
            .iter()
            .enumerate()
            .map(|(index, url)| load_motif(index, url.to_string(), "assets".to_string())),
    );
    let mut settled: Vec<Settled> = loads.collect().await;
    settled.sort_by_key(|s| s.index);

    assert_eq!(settled.len(), 3);
    assert_eq!(
        settled.iter().map(|s| s.index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    let image = settled[0].outcome.as_ref().expect("bundled image");
    assert_eq!(image.dimensions(), (128, 128));
    assert!(!settled[1].is_ok());
    assert!(settled[2].is_ok());
}

#[tokio::test]
async fn should_end_immediately_without_requests() {
    let loads = settle_all(
        Vec::<(usize, String)>::new()
            .into_iter()
            .map(|(index, url)| load_motif(index, url, "assets".to_string())),
    );
    let settled: Vec<Settled> = loads.collect().await;
    assert!(settled.is_empty());
}
