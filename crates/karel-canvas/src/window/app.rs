//! Windowed viewer for a world/agent snapshot pair.
//!
//! Provides [`run_windowed`], which opens a winit window, draws the given
//! snapshots through a [`KarelCanvas`] into a [`DisplayList`], and presents
//! the scene until the window is closed. The scene is static; interactive
//! hosts write their own `ApplicationHandler` and drive the canvas
//! themselves (see the `window_demo` example).

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{WindowAttributes, WindowId};

use karel_world::karel::Karel;
use karel_world::world::World;

use crate::canvas::KarelCanvas;
use crate::surface::DisplayList;

use super::renderer::WindowRenderer;

/// Show a world/agent snapshot in a window. Blocks until the window closes.
///
/// # Errors
///
/// Returns an error if the event loop cannot be created or window/GPU
/// initialization fails.
pub fn run_windowed(
    canvas: KarelCanvas,
    world: World,
    karel: Karel,
    window_title: &str,
    width: u32,
    height: u32,
) -> Result<(), anyhow::Error> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(winit::event_loop::ControlFlow::Wait);

    let mut app = App {
        state: AppState::Pending {
            canvas,
            world,
            karel,
            title: window_title.to_owned(),
            width,
            height,
        },
        init_failed: false,
    };

    event_loop.run_app(&mut app)?;

    if app.init_failed {
        return Err(anyhow::anyhow!(
            "failed to initialize windowed viewer (see logs for details)"
        ));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Internal state machine
// ---------------------------------------------------------------------------

/// Winit 0.30 requires window creation inside `ApplicationHandler::resumed`,
/// so the viewer is a two-phase state machine: `Pending` before the window
/// exists, `Running` once window, renderer, and scene are initialized.
enum AppState {
    Pending {
        canvas: KarelCanvas,
        world: World,
        karel: Karel,
        title: String,
        width: u32,
        height: u32,
    },
    Running {
        canvas: KarelCanvas,
        world: World,
        karel: Karel,
        scene: DisplayList,
        renderer: WindowRenderer,
    },
    /// Temporary placeholder used during state transitions.
    Transitioning,
}

struct App {
    state: AppState,
    /// Set when window or renderer initialization fails, so `run_windowed`
    /// can return an error after the event loop exits.
    init_failed: bool,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let state = std::mem::replace(&mut self.state, AppState::Transitioning);
        match state {
            AppState::Pending {
                canvas,
                world,
                karel,
                title,
                width,
                height,
            } => {
                let window_attrs = WindowAttributes::default()
                    .with_title(title)
                    .with_inner_size(winit::dpi::PhysicalSize::new(width, height));

                let window = match event_loop.create_window(window_attrs) {
                    Ok(window) => Arc::new(window),
                    Err(e) => {
                        tracing::error!(error = %e, "failed to create window -- exiting");
                        self.init_failed = true;
                        event_loop.exit();
                        return;
                    }
                };

                match pollster::block_on(WindowRenderer::new(window.clone())) {
                    Ok(renderer) => {
                        let mut scene = DisplayList::new(width as f32, height as f32);
                        canvas.redraw_all(&mut scene, &world, &karel);
                        window.request_redraw();
                        self.state = AppState::Running {
                            canvas,
                            world,
                            karel,
                            scene,
                            renderer,
                        };
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to initialize renderer -- exiting");
                        self.init_failed = true;
                        event_loop.exit();
                    }
                }
            }
            running @ AppState::Running { .. } => {
                // Already initialized; put the state back.
                self.state = running;
            }
            AppState::Transitioning => {
                tracing::warn!("resumed called during state transition");
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let AppState::Running {
            canvas,
            world,
            karel,
            scene,
            renderer,
        } = &mut self.state
        else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                renderer.resize(new_size);
                scene.resize(new_size.width as f32, new_size.height as f32);
                canvas.redraw_all(scene, world, karel);
                renderer.window().request_redraw();
            }
            WindowEvent::RedrawRequested => match renderer.render(scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let size = renderer.window().inner_size();
                    renderer.resize(size);
                    renderer.window().request_redraw();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    tracing::error!("GPU out of memory -- exiting");
                    event_loop.exit();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "surface error during render");
                }
            },
            _ => {}
        }
    }
}
