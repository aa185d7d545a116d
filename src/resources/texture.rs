use anyhow::Context as _;

use crate::resources::load_binary;

/// Bind group layout of a [`crate::data_structures::model::Material`]: one
/// filterable 2D texture and its sampler.
pub fn diffuse_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
        label: Some("Motif texture_bind_group_layout"),
    })
}

/// Decode image file contents, guessing the format from the data.
pub fn decode_image(bytes: &[u8], label: &str) -> anyhow::Result<image::RgbaImage> {
    let img = image::load_from_memory(bytes)
        .with_context(|| format!("Could not decode image {}", label))?;
    Ok(img.to_rgba8())
}

/// Fetch and decode a motif image.
pub async fn load_image(file_name: &str, asset_dir: &str) -> anyhow::Result<image::RgbaImage> {
    let data = load_binary(file_name, asset_dir).await?;
    decode_image(&data, file_name)
}
