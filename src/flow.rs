//! Application event loop.
//!
//! [`run`] opens the window, brings up the GPU [`Context`] and hands control to
//! winit. From then on every state change happens on the event loop thread:
//!
//! 1. pointer events are turned into hover and click updates on the [`Gallery`]
//! 2. texture requests run in the background and come back as
//!    [`GalleryEvent::TextureSettled`] through the event loop proxy
//! 3. each redraw calls [`Gallery::tick`], uploads the uniforms and renders

use std::{iter, sync::Arc};

use futures::StreamExt;
use instant::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::Window,
};

use crate::{
    config::GalleryConfig,
    context::Context,
    gallery::{Gallery, Motif},
    interaction::{self, Selection},
    loading::{Settled, load_motif, settle_all},
    overlay::Overlay,
    render::GalleryScene,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Events sent to the loop from outside of it.
pub enum GalleryEvent {
    /// The asynchronous wasm setup finished.
    #[cfg(target_arch = "wasm32")]
    Initialized(Box<anyhow::Result<AppState>>),
    TextureSettled(Settled),
}

impl std::fmt::Debug for GalleryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(target_arch = "wasm32")]
            Self::Initialized(_) => f.write_str("Initialized"),
            Self::TextureSettled(settled) => f
                .debug_struct("TextureSettled")
                .field("index", &settled.index)
                .field("ok", &settled.is_ok())
                .finish(),
        }
    }
}

/// Everything that exists once the window is up.
pub struct AppState {
    pub(crate) ctx: Context,
    pub(crate) gallery: Gallery,
    scene: GalleryScene,
    overlay: Box<dyn Overlay>,
    is_surface_configured: bool,
}

impl AppState {
    async fn new(
        window: Arc<Window>,
        config: GalleryConfig,
        motifs: Vec<Motif>,
    ) -> anyhow::Result<Self> {
        let ctx = Context::new(window.clone(), &config).await?;
        let gallery = Gallery::new(config, motifs, ctx.config.width, ctx.config.height);
        let scene = GalleryScene::new(&ctx, &gallery);
        let overlay = mk_overlay(window, gallery.config())?;
        Ok(Self {
            ctx,
            gallery,
            scene,
            overlay,
            is_surface_configured: false,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.ctx.resize(width, height) {
            self.gallery.resize(width, height);
            self.is_surface_configured = true;
        }
    }

    fn pointer_moved(&mut self, position: PhysicalPosition<f64>) {
        let ndc = interaction::ndc(position, self.ctx.window.inner_size());
        let hover = self.gallery.pointer_moved(ndc);
        self.ctx.window.set_cursor(hover.cursor());
    }

    fn clicked(&mut self, position: PhysicalPosition<f64>) {
        let ndc = interaction::ndc(position, self.ctx.window.inner_size());
        if let Selection::Tile(index) = self.gallery.clicked(ndc, self.overlay.as_mut()) {
            log::debug!("Zooming to tile {}", index);
        }
    }

    fn texture_settled(&mut self, settled: Settled) {
        if let Ok(img) = &settled.outcome {
            if let Err(e) = self.scene.set_tile_texture(&self.ctx, settled.index, img) {
                log::error!("Could not upload texture {}: {:#}", settled.index, e);
            }
        }
        self.gallery
            .record_settlement(&settled, self.overlay.as_mut());
    }

    fn update(&mut self, started: Instant) {
        self.gallery.tick(started.elapsed());
        self.gallery.hide_loading_when_due(self.overlay.as_mut());
        let focal_plane = self.gallery.config().focal_plane;
        self.ctx.write_camera(
            self.gallery.camera(),
            self.gallery.projection(),
            focal_plane,
        );
        self.scene.write_to_buffer(&self.ctx, &self.gallery);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.ctx.window.request_redraw();

        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        // With antialiasing the pass draws into the multisampled target and
        // resolves into the surface
        let (target, resolve_target) = match &self.ctx.multisample_view {
            Some(multisampled) => (multisampled, Some(&view)),
            None => (&view, None),
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            self.scene.draw(&mut render_pass, &self.ctx);
        }

        self.ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn mk_overlay(window: Arc<Window>, config: &GalleryConfig) -> anyhow::Result<Box<dyn Overlay>> {
    Ok(Box::new(crate::overlay::WindowOverlay::new(
        window,
        config.window_title.clone(),
        config.loading_label.clone(),
    )))
}

#[cfg(target_arch = "wasm32")]
fn mk_overlay(_window: Arc<Window>, config: &GalleryConfig) -> anyhow::Result<Box<dyn Overlay>> {
    Ok(Box::new(crate::overlay::DomOverlay::from_document(
        config.loading_label.clone(),
    )?))
}

pub struct App {
    #[cfg(not(target_arch = "wasm32"))]
    async_runtime: tokio::runtime::Runtime,
    proxy: EventLoopProxy<GalleryEvent>,
    state: Option<AppState>,
    // Taken on the first `resumed`
    setup: Option<(GalleryConfig, Vec<Motif>)>,
    cursor: PhysicalPosition<f64>,
    started: Instant,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(
        event_loop: &EventLoop<GalleryEvent>,
        config: GalleryConfig,
        motifs: Vec<Motif>,
    ) -> anyhow::Result<Self> {
        let proxy = event_loop.create_proxy();
        #[cfg(not(target_arch = "wasm32"))]
        let async_runtime = tokio::runtime::Runtime::new()?;
        Ok(Self {
            #[cfg(not(target_arch = "wasm32"))]
            async_runtime,
            proxy,
            state: None,
            setup: Some((config, motifs)),
            cursor: PhysicalPosition::new(0.0, 0.0),
            started: Instant::now(),
            error: None,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    /// Start the gallery once its state exists: size the surface, show the
    /// loading indicator and request every texture.
    fn start(&mut self, mut state: AppState) {
        let size = state.ctx.window.inner_size();
        state.resize(size.width, size.height);
        state.gallery.begin_loading(state.overlay.as_mut());
        self.spawn_loads(&state.gallery);
        self.started = Instant::now();
        state.ctx.window.request_redraw();
        self.state = Some(state);
    }

    fn spawn_loads(&self, gallery: &Gallery) {
        let asset_dir = gallery.config().asset_dir.clone();
        let mut loads = settle_all(
            gallery
                .motifs()
                .iter()
                .enumerate()
                .map(|(index, motif)| load_motif(index, motif.image_url.clone(), asset_dir.clone())),
        );
        log::info!("Requesting {} textures", loads.len());

        let proxy = self.proxy.clone();
        let task = async move {
            while let Some(settled) = loads.next().await {
                if proxy.send_event(GalleryEvent::TextureSettled(settled)).is_err() {
                    log::warn!("Event loop closed before all textures settled");
                    break;
                }
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        self.async_runtime.spawn(task);
        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task);
    }
}

impl ApplicationHandler<GalleryEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let (config, motifs) = match self.setup.take() {
            Some(setup) => setup,
            // Resumed again after a suspend; the state is still there
            None => return,
        };

        #[allow(unused_mut)]
        let mut window_attributes =
            Window::default_attributes().with_title(config.window_title.clone());

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::WindowAttributesExtWebSys;

            match find_canvas(&config.canvas_id) {
                Ok(canvas) => window_attributes = window_attributes.with_canvas(Some(canvas)),
                Err(e) => return self.fail(event_loop, e),
            }
        }

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };
        log::info!("Window created, initializing {} motifs", motifs.len());

        let init_future = AppState::new(window, config, motifs);

        #[cfg(not(target_arch = "wasm32"))]
        {
            match self.async_runtime.block_on(init_future) {
                Ok(state) => self.start(state),
                Err(e) => self.fail(event_loop, e),
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            let proxy = self.proxy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let state = init_future.await;
                if proxy
                    .send_event(GalleryEvent::Initialized(Box::new(state)))
                    .is_err()
                {
                    log::error!("Event loop closed during initialization");
                }
            });
        }
    }

    #[allow(unused_variables)]
    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: GalleryEvent) {
        match event {
            #[cfg(target_arch = "wasm32")]
            GalleryEvent::Initialized(state) => match *state {
                Ok(state) => self.start(state),
                Err(e) => self.fail(event_loop, e),
            },
            GalleryEvent::TextureSettled(settled) => {
                match &mut self.state {
                    Some(state) => state.texture_settled(settled),
                    None => log::warn!("Texture {} settled before startup", settled.index),
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;
                state.pointer_moved(position);
            }
            // Clicks fire on release like a DOM click
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => state.clicked(self.cursor),
            WindowEvent::RedrawRequested => {
                state.update(self.started);
                match state.render() {
                    Ok(()) => {}
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn find_canvas(id: &str) -> anyhow::Result<web_sys::HtmlCanvasElement> {
    use anyhow::anyhow;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("No document available"))?;
    let canvas = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("Canvas #{} not found", id))?;
    canvas
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| anyhow!("#{} is not a canvas", id))
}

/// Run the gallery until its window closes.
pub fn run(config: GalleryConfig, motifs: Vec<Motif>) -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(
                &format!("Warning: Could not initialize logger: {}", e).into(),
            );
        }
    }

    let event_loop: EventLoop<GalleryEvent> = EventLoop::with_user_event().build()?;
    let mut app = App::new(&event_loop, config, motifs)?;

    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
