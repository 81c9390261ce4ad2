//! Interactive world viewer -- steer Karel with the keyboard.
//!
//! Run with:
//!   cargo run --example window_demo --features window -p karel-canvas
//!
//! Controls:
//!   Up arrow or W -- move forward (walls and edges block)
//!   Left/Right arrows or A/D -- turn
//!   Space -- put a beeper on the current corner
//!   I -- toggle between the full figure and the simple arrow icon
//!   Escape -- quit

use std::sync::Arc;

use karel_canvas::canvas::{IconStyle, KarelCanvas};
use karel_canvas::surface::DisplayList;
use karel_canvas::window::WindowRenderer;
use karel_world::prelude::*;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{WindowAttributes, WindowId};

const WINDOW_WIDTH: u32 = 600;
const WINDOW_HEIGHT: u32 = 450;

/// A small world with something of everything: walls, beeper stacks, and a
/// painted corner.
fn sample_world() -> World {
    let mut world = World::new(8, 6);
    world.add_wall(Wall::new(3, 1, Direction::East));
    world.add_wall(Wall::new(3, 2, Direction::East));
    world.add_wall(Wall::new(5, 4, Direction::North));
    world.add_wall(Wall::new(6, 4, Direction::North));
    world.set_beepers(Corner::new(2, 2), 1);
    world.set_beepers(Corner::new(6, 3), 12);
    world.paint_corner(Corner::new(8, 6), Some([0.3, 0.5, 1.0, 1.0]));
    world
}

/// Whether a step forward is blocked by the grid edge or a wall on either
/// side of the crossed boundary.
fn blocked(world: &World, karel: &Karel) -> bool {
    let (da, ds) = karel.facing.delta();
    let target = Corner::new(
        karel.avenue.wrapping_add_signed(da),
        karel.street.wrapping_add_signed(ds),
    );
    if !world.in_bounds(target) {
        return true;
    }
    let ahead = Wall {
        corner: karel.corner(),
        direction: karel.facing,
    };
    let behind = Wall {
        corner: target,
        direction: karel.facing.opposite(),
    };
    world.walls().contains(&ahead) || world.walls().contains(&behind)
}

// ---------------------------------------------------------------------------
// App state
// ---------------------------------------------------------------------------

enum RenderState {
    Pending,
    Running {
        renderer: WindowRenderer,
        scene: DisplayList,
    },
}

struct DemoApp {
    canvas: KarelCanvas,
    world: World,
    karel: Karel,
    render_state: RenderState,
}

impl DemoApp {
    fn redraw(&mut self) {
        if let RenderState::Running { renderer, scene } = &mut self.render_state {
            self.canvas.redraw_all(scene, &self.world, &self.karel);
            renderer.window().request_redraw();
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if matches!(self.render_state, RenderState::Running { .. }) {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("Karel -- arrows to steer, space for beepers, ESC to quit")
            .with_inner_size(winit::dpi::PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let window = Arc::new(window);
                match pollster::block_on(WindowRenderer::new(window.clone())) {
                    Ok(renderer) => {
                        let scene =
                            DisplayList::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
                        self.render_state = RenderState::Running { renderer, scene };
                        self.redraw();
                    }
                    Err(e) => {
                        eprintln!("renderer init failed: {e}");
                        event_loop.exit();
                    }
                }
            }
            Err(e) => {
                eprintln!("window creation failed: {e}");
                event_loop.exit();
            }
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
                if let RenderState::Running { renderer, scene } = &mut self.render_state {
                    renderer.resize(size);
                    scene.resize(size.width as f32, size.height as f32);
                }
                self.redraw();
            }

            WindowEvent::KeyboardInput { event: key_ev, .. } => {
                if key_ev.state != ElementState::Pressed {
                    return;
                }
                match key_ev.physical_key {
                    PhysicalKey::Code(KeyCode::ArrowUp) | PhysicalKey::Code(KeyCode::KeyW) => {
                        if !blocked(&self.world, &self.karel) {
                            let (da, ds) = self.karel.facing.delta();
                            self.karel.avenue = self.karel.avenue.wrapping_add_signed(da);
                            self.karel.street = self.karel.street.wrapping_add_signed(ds);
                            self.redraw();
                        }
                    }
                    PhysicalKey::Code(KeyCode::ArrowLeft) | PhysicalKey::Code(KeyCode::KeyA) => {
                        self.karel.facing = self.karel.facing.left();
                        self.redraw();
                    }
                    PhysicalKey::Code(KeyCode::ArrowRight) | PhysicalKey::Code(KeyCode::KeyD) => {
                        self.karel.facing = self.karel.facing.right();
                        self.redraw();
                    }
                    PhysicalKey::Code(KeyCode::Space) => {
                        self.world.add_beeper(self.karel.corner());
                        self.redraw();
                    }
                    PhysicalKey::Code(KeyCode::KeyI) => {
                        let next = match self.canvas.config().icon {
                            IconStyle::Full => IconStyle::Simple,
                            IconStyle::Simple => IconStyle::Full,
                        };
                        self.canvas.set_icon(next);
                        self.redraw();
                    }
                    PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                    _ => {}
                }
            }

            WindowEvent::RedrawRequested => {
                if let RenderState::Running { renderer, scene } = &mut self.render_state {
                    match renderer.render(scene) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            let size = renderer.window().inner_size();
                            renderer.resize(size);
                        }
                        Err(e) => eprintln!("surface error: {e}"),
                    }
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(winit::event_loop::ControlFlow::Wait);

    let mut app = DemoApp {
        canvas: KarelCanvas::default(),
        world: sample_world(),
        karel: Karel::default(),
        render_state: RenderState::Pending,
    };
    event_loop.run_app(&mut app)?;
    Ok(())
}
