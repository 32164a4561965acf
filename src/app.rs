use anyhow::Context as _;
use cgmath::Vector3;
use std::{
    path::PathBuf,
    sync::Arc,
    time::Instant,
};
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalSize, Size},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::{
    animation::camera_rig::ScrollCameraRig,
    assets::loader::ModelLoadTask,
    gfx::{
        rendering::render_engine::RenderEngine,
        scene::{scene::Scene, settings::SceneSettings},
    },
    ui::UiManager,
};

/// Camera position at scroll progress 0
const CAMERA_START: Vector3<f32> = Vector3::new(34.0, 16.0, -20.0);
/// Camera position at scroll progress 1
const CAMERA_END: Vector3<f32> = Vector3::new(-30.0, 20.0, -40.0);
/// Scrub damping time constant in seconds
const SCRUB_LAG: f32 = 0.5;
/// Virtual scroll container height in viewport heights
const CONTENT_FACTOR: f32 = 2.0;
/// Pixel density ceiling, applied at startup and on every resize
const MAX_PIXEL_RATIO: f64 = 2.0;

// UI callback type
pub type UiCallback = Box<dyn Fn(&imgui::Ui, &mut SceneSettings) + Send + Sync>;

pub struct VistaApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
    ui_callback: Option<UiCallback>,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    scene: Scene,
    settings: SceneSettings,
    rig: ScrollCameraRig,
    model_path: Option<PathBuf>,
    load_task: Option<ModelLoadTask>,
    ui_callback: Option<UiCallback>,
    last_frame: Instant,
}

/// Clamps the effective pixel density of a surface to [`MAX_PIXEL_RATIO`]
///
/// On displays with a scale factor above the ceiling the physical surface
/// is shrunk so it behaves like a ceiling-density display; below it the
/// native size is kept. The same policy runs at startup and on resize.
fn surface_size_for(size: PhysicalSize<u32>, scale_factor: f64) -> PhysicalSize<u32> {
    if scale_factor <= MAX_PIXEL_RATIO {
        return size;
    }

    let shrink = MAX_PIXEL_RATIO / scale_factor;
    PhysicalSize::new(
        ((size.width as f64 * shrink) as u32).max(1),
        ((size.height as f64 * shrink) as u32).max(1),
    )
}

impl VistaApp {
    /// Create a new Vista application with the default scene
    ///
    /// Fails fast if the event loop cannot be created or the scroll
    /// timeline configuration is unusable, before any rendering starts.
    pub fn new() -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("Failed to create event loop")?;

        // Aspect and viewport height are placeholders until the window
        // reports its real size in resumed()
        let scene = Scene::new(1.0);
        let settings = SceneSettings::from_scene(&scene);
        let rig = ScrollCameraRig::new(CAMERA_START, CAMERA_END, SCRUB_LAG, CONTENT_FACTOR, 800.0)
            .context("Invalid scroll timeline configuration")?;

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                ui_manager: None,
                scene,
                settings,
                rig,
                model_path: None,
                load_task: None,
                ui_callback: None,
                last_frame: Instant::now(),
            },
            ui_callback: None,
        })
    }

    /// Set the model to load when the window opens
    ///
    /// The load is fire-once: it starts at startup, and whether it succeeds
    /// or fails the render loop keeps going.
    pub fn set_model_path(&mut self, path: impl Into<PathBuf>) {
        self.app_state.model_path = Some(path.into());
    }

    /// Set UI callback
    pub fn set_ui<F>(&mut self, ui_fn: F)
    where
        F: Fn(&imgui::Ui, &mut SceneSettings) + Send + Sync + 'static,
    {
        self.ui_callback = Some(Box::new(ui_fn));
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) -> anyhow::Result<()> {
        self.app_state.ui_callback = self.ui_callback.take();

        let event_loop = self
            .event_loop
            .take()
            .context("Event loop already consumed")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .context("Event loop terminated with an error")
    }
}

impl AppState {
    /// Per-frame work: poll the loader, advance the rig, apply overrides,
    /// update uniforms, draw
    fn redraw(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;

        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };
        let Some(window) = self.window.as_ref() else {
            return;
        };

        // Model load completion is the only asynchronous event; it joins
        // the frame here, on the UI thread, as one atomic scene append.
        if let Some(task) = &self.load_task {
            if let Some(result) = task.poll() {
                match result {
                    Ok(model) => {
                        self.scene
                            .attach_model(model, render_engine.device(), render_engine.queue());
                    }
                    Err(err) => {
                        log::warn!("model load failed: {err}; rendering without model");
                    }
                }
                self.load_task = None;
            }
        }

        // The rig writes the camera only while scroll progress is changing
        // or the scrub is catching up; when idle, panel edits hold.
        if let Some(position) = self.rig.advance(dt) {
            self.settings.track_camera(position.into());
        }

        self.scene.apply_settings(&self.settings);
        self.scene.update();

        if self.settings.trace_camera {
            let p = self.scene.camera.position;
            log::debug!("camera position: ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
        }

        render_engine.update(self.scene.camera.uniform, &self.scene);

        if let (Some(ui_manager), Some(ui_callback)) =
            (self.ui_manager.as_mut(), &self.ui_callback)
        {
            let window_clone = window.clone();
            let settings = &mut self.settings;
            render_engine.render_frame(
                &self.scene,
                Some(
                    |device: &wgpu::Device,
                     queue: &wgpu::Queue,
                     encoder: &mut wgpu::CommandEncoder,
                     color_attachment: &wgpu::TextureView| {
                        ui_manager.draw(
                            device,
                            queue,
                            encoder,
                            &window_clone,
                            color_attachment,
                            |ui| {
                                ui_callback(ui, settings);
                            },
                        );
                    },
                ),
            );
        } else {
            render_engine.render_frame(
                &self.scene,
                None::<
                    fn(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
                >,
            );
        }
    }

    fn handle_resize(&mut self, size: PhysicalSize<u32>) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        let surface_size = surface_size_for(size, window.scale_factor());

        self.scene
            .camera
            .resize_projection(surface_size.width, surface_size.height);
        self.rig.set_viewport_height(surface_size.height as f32);

        if let Some(render_engine) = self.render_engine.as_mut() {
            render_engine.resize(surface_size.width, surface_size.height);
        }
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            ui_manager.update_display_size(surface_size.width, surface_size.height);
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WindowAttributes::default()
            .with_title("vista")
            .with_inner_size(Size::Logical(winit::dpi::LogicalSize::new(1200.0, 800.0)));

        if let Ok(window) = event_loop.create_window(attributes) {
            let window_handle = Arc::new(window);
            self.window = Some(window_handle.clone());

            let surface_size =
                surface_size_for(window_handle.inner_size(), window_handle.scale_factor());

            let window_clone = window_handle.clone();
            let renderer = pollster::block_on(async move {
                RenderEngine::new(window_clone, surface_size.width, surface_size.height).await
            });

            self.scene
                .camera
                .resize_projection(surface_size.width, surface_size.height);
            self.rig.set_viewport_height(surface_size.height as f32);
            self.scene
                .init_gpu_resources(renderer.device(), renderer.queue());

            let mut ui_manager = UiManager::new(
                renderer.device(),
                renderer.queue(),
                renderer.surface_format(),
                &window_handle,
            );
            ui_manager.update_display_size(surface_size.width, surface_size.height);

            // Kick off the one-shot model load; the render loop below never
            // waits for it
            if let Some(path) = &self.model_path {
                log::info!("loading model from {}", path.display());
                self.load_task = Some(ModelLoadTask::spawn(path.clone()));
            }

            self.ui_manager = Some(ui_manager);
            self.render_engine = Some(renderer);
            self.last_frame = Instant::now();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: winit::event::WindowEvent,
    ) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        // UI input first: wheel events over the panel scroll the panel,
        // not the camera timeline
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            if ui_manager.handle_input(window, &ui_event) {
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: winit::keyboard::PhysicalKey::Code(key_code),
                        ..
                    },
                ..
            } => {
                if matches!(key_code, winit::keyboard::KeyCode::Escape) {
                    event_loop.exit();
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.rig.process_scroll(&delta);
            }
            WindowEvent::Resized(size) => {
                self.handle_resize(size);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Unconditional render loop: one redraw per event-loop turn,
        // paced only by surface presentation
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_density_surfaces_keep_native_size() {
        let size = PhysicalSize::new(1920, 1080);
        assert_eq!(surface_size_for(size, 1.0), size);
        assert_eq!(surface_size_for(size, 2.0), size);
    }

    #[test]
    fn test_high_density_surfaces_are_clamped() {
        // A 3x display renders as if it were 2x: two thirds the pixels
        let size = PhysicalSize::new(3000, 1500);
        let clamped = surface_size_for(size, 3.0);
        assert_eq!(clamped, PhysicalSize::new(2000, 1000));
    }

    #[test]
    fn test_clamp_policy_is_idempotent_per_event() {
        let size = PhysicalSize::new(2560, 1440);
        let first = surface_size_for(size, 1.5);
        let second = surface_size_for(size, 1.5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_clamped_size_never_hits_zero() {
        let clamped = surface_size_for(PhysicalSize::new(1, 1), 4.0);
        assert!(clamped.width >= 1 && clamped.height >= 1);
    }
}
