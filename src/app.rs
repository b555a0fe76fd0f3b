use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use crate::config::AppConfig;
use crate::core::{Button, Controller, GpuContext, InputEvent, InputQueue, InputState};
use crate::error::{Error, Result};
use crate::frame::{FpsCounter, FrameIterator};
use crate::render::SurfaceTarget;
use crate::scenes::{Scene, SceneKind};

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Everything that only exists once the window is up
struct Graphics {
    window: Arc<Window>,
    gpu: GpuContext,
    surface: SurfaceTarget,
    scene: Box<dyn Scene>,
}

struct App {
    config: AppConfig,
    kind: SceneKind,
    graphics: Option<Graphics>,
    queue: InputQueue,
    input: InputState,
    frames: FrameIterator,
    fps: FpsCounter,
    failure: Option<Error>,
}

impl App {
    fn new(config: AppConfig, kind: SceneKind) -> Self {
        Self {
            config,
            kind,
            graphics: None,
            queue: InputQueue::new(),
            input: InputState::new(),
            frames: FrameIterator::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
            failure: None,
        }
    }

    fn init_graphics(&self, event_loop: &ActiveEventLoop) -> Result<Graphics> {
        let window = event_loop.create_window(
            Window::default_attributes()
                .with_title(self.config.window.title.as_str())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        )?;
        let window = Arc::new(window);

        let (gpu, surface) = pollster::block_on(GpuContext::for_window(window.clone()))?;
        let surface = SurfaceTarget::new(&gpu, surface, window.inner_size().into());
        let scene = self
            .kind
            .build(&gpu, surface.format(), &self.config, surface.aspect_ratio())?;

        Ok(Graphics {
            window,
            gpu,
            surface,
            scene,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        log::error!("{}", error);
        self.failure = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame = self.frames.advance();
        self.input.apply_all(&mut self.queue);

        if self.input.is_down(Button::Escape) {
            event_loop.exit();
            return;
        }

        let Some(graphics) = self.graphics.as_mut() else {
            return;
        };

        graphics.scene.update(&frame, &self.input);
        self.input.reset_deltas();
        graphics.scene.prepare(&graphics.gpu);

        let scene = &graphics.scene;
        let result = graphics
            .surface
            .draw(&graphics.gpu, scene.clear_color(), |pass| scene.render(pass));

        match result {
            Ok(()) => {}
            Err(Error::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                graphics.surface.reconfigure(&graphics.gpu);
            }
            Err(Error::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                self.fail(event_loop, Error::Gpu("surface out of memory".to_string()));
                return;
            }
            Err(e) => log::warn!("Frame skipped: {}", e),
        }

        if let Some(fps) = self.fps.tick(frame.delta) {
            log::debug!("FPS: {:.1}", fps);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        match self.init_graphics(event_loop) {
            Ok(graphics) => self.graphics = Some(graphics),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(graphics) = self.graphics.as_mut() {
                    graphics.surface.resize(&graphics.gpu, size.width, size.height);
                    graphics.scene.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => {
                if let Some(input) = InputEvent::from_window_event(&other) {
                    self.queue.push(input);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(graphics) = &self.graphics {
            graphics.window.request_redraw();
        }
    }
}

/// Open the window and run `kind` until it is closed
pub fn run(config: AppConfig, kind: SceneKind) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, kind);

    event_loop.run_app(&mut app)?;

    match app.failure {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
