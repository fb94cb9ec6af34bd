use std::sync::Arc;

use glam::Vec2;
use instant::Instant;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId, WindowLevel};

use crate::cat::{Animator, TickOutput};
use crate::config::Config;
use crate::platform;
use crate::render::instance::SpriteInstance;
use crate::render::texture::SheetImage;
use crate::render::GpuState;

/// Animation tick cadence (seconds per tick). The display refreshes much
/// faster; ticks are frame-skipped against it via the accumulator.
const TICK_RATE: f64 = 0.1;
/// Max accumulated time before we clamp (prevents spiral of death).
const MAX_ACCUMULATOR: f64 = 0.25;
/// How often to log FPS (seconds).
const FPS_LOG_INTERVAL: f64 = 5.0;

// ---------------------------------------------------------------------------
// Frame timing
// ---------------------------------------------------------------------------

struct FrameStats {
    last_log_time: Instant,
    frame_time_sum: f64,
    frames_since_log: u32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            last_log_time: Instant::now(),
            frame_time_sum: 0.0,
            frames_since_log: 0,
        }
    }

    fn record_frame(&mut self, dt: f64) {
        self.frames_since_log += 1;
        self.frame_time_sum += dt;

        let elapsed = self.last_log_time.elapsed().as_secs_f64();
        if elapsed >= FPS_LOG_INTERVAL {
            let avg_ms = (self.frame_time_sum / self.frames_since_log as f64) * 1000.0;
            let fps = self.frames_since_log as f64 / elapsed;
            log::debug!("FPS: {:.0} | avg: {:.2}ms", fps, avg_ms);
            self.last_log_time = Instant::now();
            self.frame_time_sum = 0.0;
            self.frames_since_log = 0;
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Top-level application state.
struct App {
    config: Config,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,

    // The cat
    animator: Animator,
    last_output: Option<TickOutput>,

    // Last observed pointer position — written by input, read by the tick
    target: Vec2,

    // RNG for idle animation choice
    rng: fastrand::Rng,

    // Fixed timestep
    last_frame_time: Option<Instant>,
    accumulator: f64,

    // Frame timing
    frame_stats: FrameStats,

    // Screen dimensions
    screen_w: u32,
    screen_h: u32,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            config,
            window: None,
            gpu: None,
            animator: Animator::new(),
            last_output: None,
            target: Vec2::ZERO,
            rng: fastrand::Rng::new(),
            last_frame_time: None,
            accumulator: 0.0,
            frame_stats: FrameStats::new(),
            screen_w: 0,
            screen_h: 0,
        }
    }

    /// Run fixed-timestep animation ticks.
    fn run_fixed_update(&mut self, dt: f64) {
        self.accumulator += dt;

        if self.accumulator > MAX_ACCUMULATOR {
            self.accumulator = MAX_ACCUMULATOR;
        }

        // The overlay is click-through, so CursorMoved never fires here —
        // poll the global cursor once per frame instead.
        #[cfg(windows)]
        {
            let (x, y) = platform::win32::get_mouse_pos();
            self.target = Vec2::new(x, y);
        }

        let viewport = Vec2::new(self.screen_w as f32, self.screen_h as f32);

        while self.accumulator >= TICK_RATE {
            let out = self.animator.tick(self.target, viewport, &mut self.rng);
            self.last_output = Some(out);
            self.accumulator -= TICK_RATE;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        // Create fullscreen-sized borderless transparent window
        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next())
            .expect("no monitor found");
        let screen_size = monitor.size();

        // No with_transparent(true) — that sets WS_EX_LAYERED which creates
        // a GDI backing surface that conflicts with DirectComposition.
        // Transparency comes from wgpu's DxgiFromVisual + PreMultiplied alpha.
        // Start hidden so DWM doesn't cache stale frame state before our
        // overlay style changes take effect.
        let attrs = WindowAttributes::default()
            .with_title("deskcat")
            .with_decorations(false)
            .with_visible(false)
            .with_window_level(WindowLevel::AlwaysOnTop)
            .with_inner_size(screen_size)
            .with_position(winit::dpi::PhysicalPosition::new(0, 0));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("failed to create window"),
        );

        #[cfg(windows)]
        platform::win32::setup_overlay(&window);
        #[cfg(not(windows))]
        platform::fallback::setup_overlay(&window);

        let size = window.inner_size();
        self.screen_w = size.width;
        self.screen_h = size.height;

        log::info!(
            "Overlay window created: {}x{} on {:?}",
            size.width,
            size.height,
            monitor.name().unwrap_or_default()
        );

        // Decode the sprite sheet, then initialize wgpu + pipeline
        let sheet = SheetImage::load(self.config.sprite_path.as_deref());
        let gpu = GpuState::new(window.clone(), &sheet);
        self.gpu = Some(gpu);
        log::info!("wgpu + sprite pipeline initialized");

        // Continuous render loop
        event_loop.set_control_flow(ControlFlow::Poll);

        // Show window now that all styles and GPU resources are ready.
        // This prevents DWM from caching stale frame state (the "white box").
        window.set_visible(true);

        self.window = Some(window);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Poll ESC key (window is click-through so can't receive keyboard events)
        #[cfg(windows)]
        if platform::win32::is_escape_pressed() {
            log::info!("ESC pressed, exiting");
            event_loop.exit();
            return;
        }

        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size.width, new_size.height);
                    self.screen_w = new_size.width;
                    self.screen_h = new_size.height;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                // Only reachable where the window still hit-tests (non-Windows
                // fallback); the Windows path polls the cursor each frame.
                self.target = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::RedrawRequested => {
                // --- Timing ---
                let now = Instant::now();
                if let Some(last) = self.last_frame_time {
                    let dt = now.duration_since(last).as_secs_f64();

                    // Frame stats
                    self.frame_stats.record_frame(dt);

                    // Fixed timestep animation
                    self.run_fixed_update(dt);
                }
                self.last_frame_time = Some(now);

                // --- Render the last tick's output ---
                if let (Some(gpu), Some(out)) = (&self.gpu, &self.last_output) {
                    gpu.update_instance(&SpriteInstance::from_output(out));
                    gpu.render_frame();
                }
            }
            _ => {}
        }
    }
}

/// Entry point — honor the reduced-motion preference, then run the loop.
pub fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(windows)]
    let reduced_motion = platform::win32::reduced_motion_enabled();
    #[cfg(not(windows))]
    let reduced_motion = platform::fallback::reduced_motion_enabled();

    if reduced_motion && !config.force_motion {
        // Nothing is created at all — no window, no GPU, no animator loop.
        log::info!("Reduced motion preference is set; not starting");
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
