pub mod instance;
pub mod pipeline;
pub mod texture;

use std::sync::Arc;
use winit::window::Window;

use self::instance::SpriteInstance;
use self::pipeline::SpritePipeline;
use self::texture::{SheetImage, SpriteTexture};

/// Core GPU state — device, queue, surface, pipeline.
pub struct GpuState {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub sprite_pipeline: SpritePipeline,
}

impl GpuState {
    /// Initialize wgpu, upload the sprite sheet, and build the pipeline.
    pub fn new(window: Arc<Window>, sheet: &SheetImage) -> Self {
        let size = window.inner_size();

        // DX12 only — Vulkan WSI on Windows doesn't support transparent composition.
        // Use DirectComposition presentation for per-pixel alpha transparency.
        #[cfg(windows)]
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::DX12,
            backend_options: wgpu::BackendOptions {
                dx12: wgpu::Dx12BackendOptions {
                    presentation_system: wgpu_types::Dx12SwapchainKind::DxgiFromVisual,
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        });
        #[cfg(not(windows))]
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let surface = instance
            .create_surface(window)
            .expect("failed to create wgpu surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("no suitable GPU adapter found");

        log::info!(
            "GPU adapter: {:?} ({:?})",
            adapter.get_info().name,
            adapter.get_info().backend
        );

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("deskcat_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            },
        ))
        .expect("failed to create wgpu device");

        let surface_caps = surface.get_capabilities(&adapter);

        let format = surface_caps
            .formats
            .iter()
            .find(|f| **f == wgpu::TextureFormat::Bgra8UnormSrgb)
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        log::info!("Available alpha modes: {:?}", surface_caps.alpha_modes);

        let alpha_mode = if surface_caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else if surface_caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PostMultiplied)
        {
            wgpu::CompositeAlphaMode::PostMultiplied
        } else {
            wgpu::CompositeAlphaMode::Auto
        };

        // Fifo is plenty — the sim only ticks every 100ms and one quad is cheap.
        let present_mode = wgpu::PresentMode::Fifo;

        log::info!(
            "Surface: format={:?}, alpha_mode={:?}",
            format,
            alpha_mode,
        );

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        // Sprite sheet + pipeline
        let sheet_texture = SpriteTexture::upload(&device, &queue, sheet);
        let sprite_pipeline = SpritePipeline::new(&device, format, &sheet_texture);

        // Set initial screen size uniform
        sprite_pipeline.update_screen_size(
            &queue,
            surface_config.width as f32,
            surface_config.height as f32,
        );

        Self {
            device,
            queue,
            surface,
            surface_config,
            sprite_pipeline,
        }
    }

    /// Resize the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
        self.sprite_pipeline
            .update_screen_size(&self.queue, width as f32, height as f32);
    }

    /// Upload this frame's cat instance.
    pub fn update_instance(&self, instance: &SpriteInstance) {
        self.sprite_pipeline.update_instance(&self.queue, instance);
    }

    /// Render one frame: clear to transparent, draw the cat, present.
    pub fn render_frame(&self) {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                return;
            }
            Err(e) => {
                log::warn!("Surface error: {e:?}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sprite_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.0,
                            g: 0.0,
                            b: 0.0,
                            a: 0.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let p = &self.sprite_pipeline;
            render_pass.set_pipeline(&p.pipeline);
            render_pass.set_bind_group(0, &p.screen_bind_group, &[]);
            render_pass.set_bind_group(1, &p.sheet_bind_group, &[]);
            render_pass.set_vertex_buffer(0, p.vertex_buffer.slice(..));
            render_pass.set_vertex_buffer(1, p.instance_buffer.slice(..));
            render_pass.set_index_buffer(p.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..6, 0, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}
