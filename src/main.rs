use std::ffi::CString;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;

use glutin::config::ConfigTemplate;
use glutin::context::{ContextAttributesBuilder, PossiblyCurrentContext};
use glutin::display::{Display, DisplayApiPreference};
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use winit::window::{Window, WindowId};

use ember_engine::camera::Camera;
use ember_engine::{Model, PerspectiveCamera};

use glow::HasContext;

struct Timer {
    last_frame: Instant,
    delta_time: f64,
}

impl Timer {
    fn new() -> Timer {
        Timer {
            last_frame: Instant::now(),
            delta_time: 0.0,
        }
    }

    fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
    }
}

#[derive(Default)]
struct App {
    timer: Option<Timer>,

    window: Option<Window>,
    current_context: Option<PossiblyCurrentContext>,
    surface: Option<Surface<WindowSurface>>,

    gl: Option<Arc<glow::Context>>,

    model: Option<Model>,
    camera: Option<PerspectiveCamera>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = event_loop
            .create_window(Window::default_attributes().with_title("ember engine"))
            .expect("failed to create window");

        let display_handle = window.display_handle().expect("no display handle");
        let window_handle = window.window_handle().expect("no window handle");

        #[cfg(target_os = "windows")]
        let preference = DisplayApiPreference::Wgl(Some(window_handle.into()));
        #[cfg(target_os = "macos")]
        let preference = DisplayApiPreference::Cgl;
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        let preference = DisplayApiPreference::Egl;

        let display = unsafe {
            Display::new(display_handle.into(), preference).expect("failed to create GL display")
        };

        let config = unsafe {
            display
                .find_configs(ConfigTemplate::default())
                .expect("failed to enumerate GL configs")
                .next()
                .expect("no usable GL config")
        };

        let physical_size = window.inner_size();
        let width = NonZeroU32::new(physical_size.width.max(1)).unwrap();
        let height = NonZeroU32::new(physical_size.height.max(1)).unwrap();

        let surface_attributes = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            window_handle.into(),
            width,
            height,
        );
        let context_attributes = ContextAttributesBuilder::new().build(Some(window_handle.into()));

        let surface = unsafe {
            display
                .create_window_surface(&config, &surface_attributes)
                .expect("failed to create GL surface")
        };
        let current_context = unsafe {
            display
                .create_context(&config, &context_attributes)
                .expect("failed to create GL context")
        }
        .make_current(&surface)
        .expect("failed to make GL context current");

        let gl = unsafe {
            Arc::new(glow::Context::from_loader_function(|s| {
                let c_str = CString::new(s).unwrap();
                display.get_proc_address(&c_str) as *const _
            }))
        };

        let model = match Model::new(&gl, "cube.gltf", "checker.png") {
            Ok(mut model) => {
                let renderer = model.renderer_mut();
                renderer.scale = cgmath::vec3(3.0, 3.0, 3.0);
                model
            }
            Err(e) => {
                log::error!("could not set up the demo model: {e}");
                event_loop.exit();
                return;
            }
        };

        let aspect_ratio = physical_size.width.max(1) as f32 / physical_size.height.max(1) as f32;
        let camera = PerspectiveCamera::new(cgmath::point3(0.0, 0.0, 10.0), 45.0, aspect_ratio);

        self.window = Some(window);
        self.surface = Some(surface);
        self.current_context = Some(current_context);
        self.gl = Some(gl);
        self.model = Some(model);
        self.camera = Some(camera);
        self.timer = Some(Timer::new());
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                if let (Some(gl), Some(model)) = (self.gl.as_ref(), self.model.take()) {
                    model.destroy(gl);
                }
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                let (Some(surface), Some(context), Some(gl), Some(camera)) = (
                    self.surface.as_ref(),
                    self.current_context.as_ref(),
                    self.gl.as_ref(),
                    self.camera.as_mut(),
                ) else {
                    return;
                };

                if let (Some(width), Some(height)) =
                    (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                {
                    surface.resize(context, width, height);
                    unsafe {
                        gl.viewport(0, 0, size.width as i32, size.height as i32);
                    }
                    camera.set_aspect_ratio(size.width as f32 / size.height as f32);
                }
            }
            WindowEvent::RedrawRequested => {
                let (Some(window), Some(surface), Some(context), Some(gl)) = (
                    self.window.as_ref(),
                    self.surface.as_ref(),
                    self.current_context.as_ref(),
                    self.gl.as_ref(),
                ) else {
                    return;
                };
                let (Some(model), Some(camera), Some(timer)) = (
                    self.model.as_mut(),
                    self.camera.as_mut(),
                    self.timer.as_mut(),
                ) else {
                    return;
                };

                timer.update();

                unsafe {
                    gl.clear_color(0.1, 0.1, 0.1, 1.0);
                    gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
                    gl.enable(glow::DEPTH_TEST);
                    gl.depth_func(glow::LESS);
                }

                model.renderer_mut().rotation.y += (20.0 * timer.delta_time) as f32;

                camera.update_matrices();
                model.draw(gl, camera);

                surface
                    .swap_buffers(context)
                    .expect("failed to swap buffers");
                window.request_redraw();
            }
            _ => (),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::default();
    event_loop.run_app(&mut app)?;

    Ok(())
}
