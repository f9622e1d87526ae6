use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version };
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{ Surface, SurfaceAttributesBuilder, WindowSurface };
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use std::ffi::CString;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ ActiveEventLoop, EventLoop };
use winit::keyboard::PhysicalKey;
use winit::window::{ Fullscreen, Window, WindowId };

use phone_charging_scene::engine::config::{ AppConfig, CONFIG_FILE_NAME };
use phone_charging_scene::engine::error::{ EngineError, EngineResult };
use phone_charging_scene::engine::rendering::RenderContext;
use phone_charging_scene::engine::systems::frame_clock::FrameClock;
use phone_charging_scene::engine::systems::keyboard_input_system::KeyboardInputSystem;
use phone_charging_scene::engine::systems::loop_state::LoopState;
use phone_charging_scene::game::scene::Scene;
use phone_charging_scene::game::systems::render_system::RenderSystem;

// Field order is drop order: GL objects go before the context that owns them.
struct GpuState {
    scene: Scene<glow::Context>,
    gl: Rc<glow::Context>,
    render_context: RenderContext,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

struct App {
    config: AppConfig,
    gpu: Option<GpuState>,
    input: KeyboardInputSystem,
    clock: FrameClock,
    state: LoopState,
    init_error: Option<EngineError>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            gpu: None,
            input: KeyboardInputSystem::new(),
            clock: FrameClock::new(),
            state: LoopState::default(),
            init_error: None,
        }
    }

    fn init(&self, event_loop: &ActiveEventLoop) -> EngineResult<GpuState> {
        let window_config = &self.config.window;
        let mut attributes = Window::default_attributes()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(window_config.width, window_config.height));
        if window_config.fullscreen {
            attributes = attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        let window = event_loop
            .create_window(attributes)
            .map_err(|e| EngineError::Window(e.to_string()))?;

        let (_, gl_config) = DisplayBuilder::new()
            .build(event_loop, ConfigTemplateBuilder::new().with_depth_size(24), |mut configs| {
                // glutin returns an error from `build` when no config matches, so the
                // picker always receives at least one.
                configs.next().expect("display offered no GL configs")
            })
            .map_err(|e| EngineError::Context(e.to_string()))?;

        let raw_handle = window
            .window_handle()
            .map_err(|e| EngineError::Window(e.to_string()))?
            .as_raw();
        let display = gl_config.display();
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_handle));
        let not_current = unsafe { display.create_context(&gl_config, &context_attributes) }.map_err(|e|
            EngineError::Context(e.to_string())
        )?;

        let size = window.inner_size();
        let surface_attributes = SurfaceAttributesBuilder::<WindowSurface>
            ::new()
            .build(raw_handle, non_zero(size.width), non_zero(size.height));
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attributes) }.map_err(|e|
            EngineError::Context(e.to_string())
        )?;
        let context = not_current.make_current(&surface).map_err(|e| EngineError::Context(e.to_string()))?;

        let gl = Rc::new(unsafe {
            glow::Context::from_loader_function(|s| {
                CString::new(s)
                    .map(|name| display.get_proc_address(&name) as *const _)
                    .unwrap_or(std::ptr::null())
            })
        });
        log::info!("OpenGL context ready ({}x{})", size.width, size.height);

        RenderSystem::init(&*gl, self.config.clear_color);
        let render_context = RenderContext::new(size.width, size.height);
        let scene = Scene::new(gl.clone(), &self.config)?;

        window.request_redraw();
        Ok(GpuState { scene, gl, render_context, surface, context, window })
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.state.on_close_requested();
        event_loop.exit();
    }

    fn redraw(&mut self) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };
        let dt = self.clock.frame_delta();
        gpu.scene.update(&self.input, dt);
        gpu.scene.render(&gpu.render_context, self.clock.elapsed());

        if let Err(e) = gpu.surface.swap_buffers(&gpu.context) {
            log::error!("Failed to swap buffers: {}", e);
        }
        gpu.window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() || self.state.is_closing() {
            return;
        }
        match self.init(event_loop) {
            Ok(gpu) => {
                // Startup time is not part of the first frame or of u_time.
                self.clock.reset();
                self.gpu = Some(gpu);
            }
            Err(e) => {
                log::error!("Initialization failed: {}", e);
                self.init_error = Some(e);
                self.close(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.close(event_loop),

            WindowEvent::RedrawRequested => {
                if self.state.should_render() {
                    self.redraw();
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.render_context.resize(&*gpu.gl, size.width, size.height);
                    if size.width > 0 && size.height > 0 {
                        gpu.surface.resize(&gpu.context, non_zero(size.width), non_zero(size.height));
                    }
                    gpu.window.request_redraw();
                }
            }

            WindowEvent::Focused(false) => self.input.release_all(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    self.state.on_key(key_code, event.state);
                }
                if self.state.is_closing() {
                    event_loop.exit();
                } else {
                    self.input.receive_key_event(&event);
                }
            }

            _ => {}
        }
    }
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

fn run(config: AppConfig) -> EngineResult<()> {
    let event_loop = EventLoop::new().map_err(|e| EngineError::Window(e.to_string()))?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app).map_err(|e| EngineError::Window(e.to_string()))?;
    match app.init_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load_or_default(CONFIG_FILE_NAME);
    let code = match run(config) {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{}", e);
            -1
        }
    };
    std::process::exit(code);
}
