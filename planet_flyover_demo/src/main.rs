//! Planet flyover demo
//!
//! Opens a window and runs one flyover frame per redraw. Drawing goes to a
//! renderer that only logs what it would draw; plug a GPU backend in behind
//! the `Renderer` trait to see pixels.
//!
//! Usage: planet_flyover_demo [config.toml]

use std::time::Instant;

use planet_flyover::planet::log::{LogEntry, LogSeverity, Logger};
use planet_flyover::planet::render::{FrameContext, Renderer};
use planet_flyover::planet::{Engine, Flyover, FlyoverConfig, Result};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Forwards engine log entries into the `log` facade
struct LogBridge;

impl Logger for LogBridge {
    fn log(&self, entry: &LogEntry) {
        let level = match entry.severity {
            LogSeverity::Trace => log::Level::Trace,
            LogSeverity::Debug => log::Level::Debug,
            LogSeverity::Info => log::Level::Info,
            LogSeverity::Warn => log::Level::Warn,
            LogSeverity::Error => log::Level::Error,
        };
        match (entry.file, entry.line) {
            (Some(file), Some(line)) => {
                log::log!(target: entry.source.as_str(), level, "{} ({}:{})", entry.message, file, line)
            }
            _ => log::log!(target: entry.source.as_str(), level, "{}", entry.message),
        }
    }
}

/// Renderer stand-in: reports what it would upload on the first frame, then
/// frame throughput once per second
struct LogRenderer {
    width: u32,
    height: u32,
    uploaded: bool,
    frames_since_report: u32,
    last_report: Instant,
}

impl LogRenderer {
    fn new(width: u32, height: u32) -> Self {
        Self { width, height, uploaded: false, frames_since_report: 0, last_report: Instant::now() }
    }

    /// Log the buffers and materials a GPU backend would create once
    fn log_uploads(frame: &FrameContext) {
        let mut meshes = Vec::new();
        let mut materials = Vec::new();
        for (_, instance) in frame.scene.instances() {
            if !meshes.contains(&instance.mesh()) {
                meshes.push(instance.mesh());
            }
            if !materials.contains(&instance.material()) {
                materials.push(instance.material());
            }
        }

        for mesh in meshes.iter().filter_map(|&key| frame.resources.mesh(key)) {
            log::info!(
                "upload mesh: {} triangles, {} vertex bytes, {} index bytes",
                mesh.triangle_count(),
                mesh.vertex_bytes().len(),
                mesh.index_bytes().len(),
            );
        }
        for material in materials.iter().filter_map(|&key| frame.resources.material(key)) {
            let rgb = material.color_rgb();
            log::info!(
                "upload material: rgb ({:.2}, {:.2}, {:.2}), roughness {}, metalness {}, env map {}",
                rgb.x,
                rgb.y,
                rgb.z,
                material.roughness,
                material.metalness,
                material.env_map.is_some(),
            );
        }
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &FrameContext) -> Result<()> {
        if !self.uploaded {
            Self::log_uploads(frame);
            self.uploaded = true;
        }

        self.frames_since_report += 1;
        let elapsed = self.last_report.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            log::info!(
                "frame {}: {:.1} fps, {}x{}, camera ({:.2}, {:.2}), {} of {} instances visible",
                frame.frame_index,
                self.frames_since_report as f32 / elapsed,
                self.width,
                self.height,
                frame.pose.position.x,
                frame.pose.position.y,
                frame.view.visible_count(),
                frame.scene.len(),
            );
            self.frames_since_report = 0;
            self.last_report = Instant::now();
        }
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

struct FlyoverApp {
    window: Option<Window>,
    flyover: Flyover,
    renderer: LogRenderer,
}

impl FlyoverApp {
    fn new(flyover: Flyover) -> Self {
        Self { window: None, flyover, renderer: LogRenderer::new(0, 0) }
    }
}

impl ApplicationHandler for FlyoverApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Planet Flyover")
            .with_inner_size(LogicalSize::new(1280, 720));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => window,
            Err(e) => {
                log::error!("failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.flyover.resize(size.width, size.height, &mut self.renderer);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("closing after {} frames", self.flyover.frame_count());
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.flyover.resize(size.width, size.height, &mut self.renderer);
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.flyover.frame(&mut self.renderer) {
                    log::error!("frame failed: {}", e);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => (),
        }
    }
}

fn main() {
    env_logger::init();
    Engine::set_logger(LogBridge);

    let config = match std::env::args().nth(1) {
        Some(path) => FlyoverConfig::from_file(&path),
        None => Ok(FlyoverConfig::default()),
    };
    let flyover = match config.and_then(Flyover::new) {
        Ok(flyover) => flyover,
        Err(e) => {
            log::error!("startup failed: {}", e);
            std::process::exit(1);
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = FlyoverApp::new(flyover);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {}", e);
    }
}
