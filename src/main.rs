use anyhow::Result;
use clap::Parser;
use glam::Vec2;
use serde::Serialize;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use cave::cli::Cli;
use cave::frame::{FixedStep, FrameClock};
use cave::input::{InputRecorder, InputSnapshot, Key};
use cave::math::aspect;
use cave::traits::Controller;
use cave::{ActiveCamera, FsParams, World, WorldConfig};

// === Constants ===

const STATS_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

// === Headless ===

#[derive(Serialize)]
struct HeadlessReport {
    mode: &'static str,
    camera: ActiveCamera,
    params: FsParams,
}

fn run_headless(cli: &Cli, config: &WorldConfig) -> Result<()> {
    if !(cli.dt.is_finite() && cli.dt >= 0.0) {
        anyhow::bail!("--dt must be a non-negative number, got {}", cli.dt);
    }
    let viewport = match cli.viewport.as_slice() {
        [w, h] => Vec2::new(*w, *h),
        _ => anyhow::bail!("--viewport takes WIDTH HEIGHT"),
    };

    let mut world = World::new(config);
    let mut params = FsParams::default();

    for frame in FixedStep::new(cli.dt).take(cli.frames as usize) {
        let mut input = InputSnapshot::idle(frame.delta);
        for &key in &cli.hold {
            input = if frame.number == 0 {
                input.with_pressed(key)
            } else {
                input.with_down(key)
            };
        }
        if cli.toggle_at == Some(frame.number) {
            input = input.with_pressed(Key::F);
        }
        params = world.step(&input, &frame, viewport);
    }

    let report = HeadlessReport {
        mode: world.mode().label(),
        camera: world.camera(),
        params,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    world: World,
    recorder: InputRecorder,
    clock: FrameClock,
    frames_since_stats: u32,
    stats_timer: f32,
}

impl App {
    fn new(world: World) -> Self {
        Self {
            window: None,
            world,
            recorder: InputRecorder::new(),
            clock: FrameClock::new(),
            frames_since_stats: 0,
            stats_timer: 0.0,
        }
    }

    fn update_stats(&mut self, delta: f32) {
        self.frames_since_stats += 1;
        self.stats_timer += delta;

        if self.stats_timer >= STATS_INTERVAL {
            let fps = self.frames_since_stats as f32 / self.stats_timer;
            let camera = self.world.camera();
            log::debug!(
                "{:.1} fps, {} camera at {:?}",
                fps,
                self.world.mode().label(),
                camera.position
            );
            self.frames_since_stats = 0;
            self.stats_timer = 0.0;
        }
    }

    /// Apply the capture request from the controls to the window
    fn sync_capture(&mut self, window: &Window) {
        let wanted = self.world.controls().capture_mouse;
        if wanted == self.recorder.capture() {
            return;
        }

        let applied = if wanted {
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            window.set_cursor_grab(CursorGrabMode::None)
        };

        match applied {
            Ok(()) => {
                window.set_cursor_visible(!wanted);
                self.recorder.set_capture(wanted);
            }
            Err(e) => log::warn!("cursor grab failed: {e}"),
        }
    }

    /// Run one frame. Returns false once the user asked to quit.
    fn redraw(&mut self, window: &Window) -> bool {
        let frame = self.clock.tick();
        let input = self.recorder.take_snapshot(frame.delta);

        let size = window.inner_size();
        let viewport = Vec2::new(size.width as f32, size.height as f32);
        let params = self.world.step(&input, &frame, viewport);
        log::trace!(
            "frame {} aspect {:.3}: {} bytes of fs params",
            params.frame_count,
            aspect(viewport),
            params.encode().len()
        );

        self.sync_capture(window);
        self.update_stats(frame.delta);

        !input.was_pressed(Key::Escape)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Cave")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.clock.reset();
            self.window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.recorder.process_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                if let Some(window) = self.window.clone() {
                    if !self.redraw(&window) {
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        self.recorder.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = WorldConfig::load(cli.config.as_deref())?;

    if cli.headless {
        return run_headless(&cli, &config);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(World::new(&config));

    log::info!(
        "Cave - Controls: WASD move, arrows look, F toggle camera, [ ] render scale, \
         = - debug scalar, 0 reset, Tab capture mouse, Escape quit"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
