//! GPU resources of the gallery scene and the draw calls that use them.
//!
//! All tiles share one plane mesh and all frames one box mesh. Every tile has
//! its own [`Material`] because each shows a different image, so tiles are
//! drawn one instance at a time from a shared instance buffer while the
//! frames go out in a single instanced draw.

use wgpu::util::DeviceExt;

use crate::{
    context::Context,
    data_structures::{
        instance::InstanceRaw,
        model::{DrawModel, Geometry, Material, Mesh},
        texture::Texture,
    },
    gallery::Gallery,
};

#[derive(Debug)]
pub struct GalleryScene {
    tile_mesh: Mesh,
    frame_mesh: Mesh,
    frame_material: Material,
    /// One per tile. Starts as the placeholder colour.
    tile_materials: Vec<Material>,
    tile_instances: wgpu::Buffer,
    frame_instances: wgpu::Buffer,
    count: u32,
}

impl GalleryScene {
    pub fn new(ctx: &Context, gallery: &Gallery) -> Self {
        let config = gallery.config();
        let tile_mesh = Mesh::new(&ctx.device, "tile", &Geometry::plane(config.tile_size));
        let frame_mesh = Mesh::new(
            &ctx.device,
            "frame",
            &Geometry::cuboid(config.frame_size, config.frame_size, config.frame_depth),
        );

        let frame_texture =
            Texture::solid_colour(config.frame_colour, "frame", &ctx.device, &ctx.queue);
        let frame_material = Material::new(
            &ctx.device,
            "frame",
            frame_texture,
            &ctx.texture_bind_group_layout,
        );

        let tile_materials = gallery
            .motifs()
            .iter()
            .map(|motif| {
                let placeholder = Texture::solid_colour(
                    config.placeholder_colour,
                    &motif.name,
                    &ctx.device,
                    &ctx.queue,
                );
                Material::new(
                    &ctx.device,
                    &motif.name,
                    placeholder,
                    &ctx.texture_bind_group_layout,
                )
            })
            .collect();

        let (tiles, frames) = instance_data(gallery);
        let tile_instances = mk_instance_buffer(&ctx.device, "Tile Instance Buffer", &tiles);
        let frame_instances = mk_instance_buffer(&ctx.device, "Frame Instance Buffer", &frames);

        Self {
            tile_mesh,
            frame_mesh,
            frame_material,
            tile_materials,
            tile_instances,
            frame_instances,
            count: gallery.tiles().len() as u32,
        }
    }

    /// Swap the placeholder of tile `index` for its decoded image.
    pub fn set_tile_texture(
        &mut self,
        ctx: &Context,
        index: usize,
        img: &image::RgbaImage,
    ) -> anyhow::Result<()> {
        let material = self
            .tile_materials
            .get_mut(index)
            .ok_or_else(|| anyhow::anyhow!("No tile with index {}", index))?;
        let texture =
            Texture::try_from_image(&ctx.device, &ctx.queue, img, Some(material.name.as_str()))?;
        *material = Material::new(
            &ctx.device,
            &material.name,
            texture,
            &ctx.texture_bind_group_layout,
        );
        Ok(())
    }

    /// Upload the current tile transforms.
    pub fn write_to_buffer(&self, ctx: &Context, gallery: &Gallery) {
        let (tiles, frames) = instance_data(gallery);
        ctx.queue
            .write_buffer(&self.tile_instances, 0, bytemuck::cast_slice(&tiles));
        ctx.queue
            .write_buffer(&self.frame_instances, 0, bytemuck::cast_slice(&frames));
    }

    pub fn draw<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>, ctx: &'a Context) {
        if self.count == 0 {
            return;
        }

        pass.set_pipeline(&ctx.pipelines.frame);
        pass.set_vertex_buffer(1, self.frame_instances.slice(..));
        pass.draw_mesh_instanced(
            &self.frame_mesh,
            &self.frame_material,
            0..self.count,
            &ctx.camera.bind_group,
            &ctx.light.bind_group,
        );

        pass.set_pipeline(&ctx.pipelines.tile);
        pass.set_vertex_buffer(1, self.tile_instances.slice(..));
        for (i, material) in self.tile_materials.iter().enumerate() {
            let i = i as u32;
            pass.draw_mesh_instanced(
                &self.tile_mesh,
                material,
                i..i + 1,
                &ctx.camera.bind_group,
                &ctx.light.bind_group,
            );
        }
    }
}

fn instance_data(gallery: &Gallery) -> (Vec<InstanceRaw>, Vec<InstanceRaw>) {
    let offset = gallery.config().frame_offset;
    gallery
        .tiles()
        .iter()
        .map(|tile| (tile.instance().to_raw(), tile.frame_instance(offset).to_raw()))
        .unzip()
}

fn mk_instance_buffer(device: &wgpu::Device, label: &str, data: &[InstanceRaw]) -> wgpu::Buffer {
    // wgpu rejects zero sized vertex buffers
    let contents: &[u8] = if data.is_empty() {
        &[0; std::mem::size_of::<InstanceRaw>()]
    } else {
        bytemuck::cast_slice(data)
    };
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    })
}
