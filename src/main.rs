//! Particle Portfolio
//!
//! Single-page portfolio drawn with egui over a pointer-reactive particle field.

mod config;
mod content;
mod error;
mod gui;
mod input;
mod page;

use config::{AppConfig, ConfigSource};
use error::{AppError, GpuError};
use gui::Gui;
use input::{PointerInput, PointerRouter};
use page::PageState;
use particle_field::{Animator, ParticleField, ParticleInstance, SystemClock, Viewport};
use particle_renderer::ParticleRenderer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

type PortfolioAnimator = Animator<StdRng, SystemClock>;

const STATS_LOG_INTERVAL: Duration = Duration::from_secs(1);

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    renderer: ParticleRenderer,
    instances: Vec<ParticleInstance>,

    gui: Gui,
    page: PageState,

    frame_times: VecDeque<f32>,
    last_frame_time: Instant,
}

impl GpuState {
    async fn new(window: Arc<Window>) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("✓ Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(GpuError::NoSurfaceFormat)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = ParticleRenderer::new(&device, config.format);
        log::info!("✓ Particle renderer initialized");

        let gui = Gui::new(&device, config.format, &window);
        log::info!("✓ GUI initialized");

        Ok(Self {
            surface,
            device,
            queue,
            config,
            renderer,
            instances: Vec::new(),
            gui,
            page: PageState::default(),
            frame_times: VecDeque::with_capacity(100),
            last_frame_time: Instant::now(),
        })
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Returns (fps, average frame time in ms).
    fn render(
        &mut self,
        window: &Window,
        animator: Option<&PortfolioAnimator>,
    ) -> Result<(f32, f32), wgpu::SurfaceError> {
        let now = Instant::now();
        let frame_time = (now - self.last_frame_time).as_secs_f32() * 1000.0;
        self.last_frame_time = now;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > 100 {
            self.frame_times.pop_front();
        }
        let avg_frame_time = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        let fps = if avg_frame_time > 0.0 {
            1000.0 / avg_frame_time
        } else {
            0.0
        };

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.instances.clear();
        let viewport = match animator {
            Some(animator) => {
                self.instances.extend(animator.field().instances());
                animator.field().viewport()
            }
            None => logical_viewport(window),
        };
        self.renderer
            .prepare(&self.device, &self.queue, viewport, &self.instances);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        self.renderer.render(&mut encoder, &view);
        self.gui.render(
            &self.device,
            &self.queue,
            &mut encoder,
            window,
            &view,
            &mut self.page,
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok((fps, avg_frame_time))
    }
}

fn logical_viewport(window: &Window) -> Viewport {
    let size: LogicalSize<f32> = window.inner_size().to_logical(window.scale_factor());
    Viewport::new(size.width, size.height)
}

struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    animator: Option<PortfolioAnimator>,

    pointer: PointerRouter,

    last_stats_log: Instant,
    error: Option<AppError>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            window: None,
            gpu_state: None,
            animator: None,
            pointer: PointerRouter::new(),
            last_stats_log: Instant::now(),
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window = match &self.window {
            Some(window) => window.clone(),
            None => {
                let window_attributes = Window::default_attributes()
                    .with_title(self.config.window.title.clone())
                    .with_inner_size(LogicalSize::new(
                        self.config.window.width,
                        self.config.window.height,
                    ));
                let window = Arc::new(event_loop.create_window(window_attributes)?);
                self.window = Some(window.clone());
                window
            }
        };

        if self.gpu_state.is_none() {
            self.gpu_state = Some(pollster::block_on(GpuState::new(window.clone()))?);
        }

        let rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let field = ParticleField::new(
            self.config.field.clone(),
            logical_viewport(&window),
            rng,
            SystemClock::new(),
        );
        let mut animator = Animator::new(field);
        animator.start();
        self.animator = Some(animator);
        log::info!("✓ Particle animator running");

        Ok(())
    }

    /// Stop the tick clock and pointer delivery. Runs on every exit path.
    fn teardown(&mut self) {
        if let Some(mut animator) = self.animator.take() {
            animator.stop();
        }
        self.pointer.reset();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        log::error!("{err}");
        self.error = Some(err);
        self.teardown();
        event_loop.exit();
    }

    fn log_stats(&mut self) {
        if self.last_stats_log.elapsed() < STATS_LOG_INTERVAL {
            return;
        }
        self.last_stats_log = Instant::now();
        if let Some(animator) = &self.animator {
            let stats = animator.field().stats();
            log::debug!(
                "particles: {} live, {} spawned, {} faded, {} off-screen, {} ticks ({} skipped)",
                animator.field().len(),
                stats.spawned,
                stats.faded,
                stats.offscreen,
                stats.ticks,
                animator.ticker().skipped()
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.animator.is_some() {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // Pointer input reaches the particle field even over GUI widgets
        let input = self.pointer.route(&event, window.scale_factor());
        if let (Some(input), Some(animator)) = (input, &mut self.animator) {
            match input {
                PointerInput::Move { x, y } => animator.pointer_moved(x, y),
                PointerInput::Click { x, y } => animator.pointer_clicked(x, y),
            };
        }

        if let Some(gpu_state) = &mut self.gpu_state {
            if gpu_state.gui.handle_event(&window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                self.teardown();
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                if let Some(animator) = &mut self.animator {
                    let viewport = logical_viewport(&window);
                    animator.resize(viewport.width, viewport.height);
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(animator) = &mut self.animator {
                    let viewport = logical_viewport(&window);
                    animator.resize(viewport.width, viewport.height);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(animator) = &mut self.animator {
                    animator.update();
                }

                let Some(gpu_state) = &mut self.gpu_state else {
                    return;
                };
                match gpu_state.render(&window, self.animator.as_ref()) {
                    Ok((fps, _frame_time)) => {
                        let live = self.animator.as_ref().map_or(0, |a| a.field().len());
                        window.set_title(&format!(
                            "{} - {:.0} FPS - {} particles",
                            self.config.window.title, fps, live
                        ));
                    }
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        gpu_state.resize(window.inner_size())
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("GPU out of memory");
                        self.teardown();
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
                self.log_stats();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}

fn main() -> Result<(), AppError> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, source) = AppConfig::resolve(std::env::args_os().nth(1).map(Into::into))?;
    match &source {
        ConfigSource::File(path) => log::info!("✓ Loaded config from {}", path.display()),
        ConfigSource::Defaults => log::info!("✓ Using default config"),
    }

    log::info!("Starting particle portfolio...");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    let result = event_loop.run_app(&mut app);
    app.teardown();

    if let Some(err) = app.error.take() {
        return Err(err);
    }
    result?;
    Ok(())
}
