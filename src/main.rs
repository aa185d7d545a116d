use motif_gallery::{GalleryConfig, catalogue};

fn main() -> anyhow::Result<()> {
    let mut config = GalleryConfig::default();
    // Fall back to the copy made at build time when not run from the crate root
    if !std::path::Path::new(&config.asset_dir).is_dir() {
        config.asset_dir = env!("MOTIF_GALLERY_ASSETS").to_string();
    }
    motif_gallery::run(config, catalogue::motifs())
}
