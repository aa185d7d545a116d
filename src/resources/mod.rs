/**
 * This module contains all logic for loading images from external files.
 */
pub mod texture;

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str, asset_dir: &str) -> anyhow::Result<reqwest::Url> {
    use anyhow::anyhow;

    let window = web_sys::window().ok_or_else(|| anyhow!("No window available"))?;
    let href = window
        .location()
        .href()
        .map_err(|e| anyhow!("Could not read the page URL: {:?}", e))?;
    let page = reqwest::Url::parse(&href)?;
    let base = page.join(&format!("{}/", asset_dir.trim_end_matches('/')))?;
    Ok(base.join(file_name)?)
}

/// Path of an asset on disk. Absolute file names are kept as they are.
#[cfg(not(target_arch = "wasm32"))]
pub fn asset_path(file_name: &str, asset_dir: &str) -> std::path::PathBuf {
    let path = std::path::Path::new(file_name);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::path::Path::new(asset_dir).join(path)
    }
}

pub async fn load_binary(file_name: &str, asset_dir: &str) -> anyhow::Result<Vec<u8>> {
    use anyhow::Context as _;

    #[cfg(target_arch = "wasm32")]
    let data = {
        let url = format_url(file_name, asset_dir)?;
        reqwest::get(url.clone())
            .await
            .with_context(|| format!("Request for {} failed", url))?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec()
    };
    #[cfg(not(target_arch = "wasm32"))]
    let data = {
        let path = asset_path(file_name, asset_dir);
        tokio::fs::read(&path)
            .await
            .with_context(|| format!("Could not read {}", path.display()))?
    };

    Ok(data)
}
