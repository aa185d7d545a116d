use anyhow::*;
use fs_extra::copy_items;
use fs_extra::dir::CopyOptions;
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    // This tells Cargo to rerun this script if something in /assets/ changes.
    println!("cargo:rerun-if-changed=assets");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let assets_src = manifest_dir.join("assets");

    // The binary falls back to this copy of the motif images
    let assets_out = out_dir.join("assets");
    println!("cargo:rustc-env=MOTIF_GALLERY_ASSETS={}", assets_out.display());

    if assets_src.is_dir() {
        let mut copy_options = CopyOptions::new();
        copy_options.overwrite = true;
        copy_items(&[&assets_src], &out_dir, &copy_options)
            .with_context(|| format!("Could not copy {}", assets_src.display()))?;
    }

    Ok(())
}
