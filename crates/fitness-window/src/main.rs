// File: crates/fitness-window/src/main.rs
// Summary: Shows the PMX fitness chart in a window via RGBA blit (CPU) using winit + softbuffer.
// Controls: left-drag pans, wheel zooms at the cursor, H/Home restores the home view,
// Escape/Q closes. Nothing is written to disk.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use fitness_chart::naming::{literal_title, DEFAULT_INPUT};
use fitness_chart::types::{HEIGHT, WIDTH};
use fitness_chart::{fitness_chart_from_records, load_records, theme, Chart, RenderOptions, ViewState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{
    ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent,
};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser)]
#[command(name = "fitness-window")]
#[command(about = "Show best and average fitness per generation of a PMX run", long_about = None)]
struct Cli {
    /// Fitness log to display
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Colour preset (light, dark, solarized-light)
    #[arg(long, default_value = "light")]
    theme: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let records = load_records(&cli.input)
        .with_context(|| format!("failed to load fitness log '{}'", cli.input.display()))?;
    info!("Loaded {} generation records from {}", records.len(), cli.input.display());

    let title = literal_title();
    let mut chart = fitness_chart_from_records(&records, &title);
    let home = ViewState::of_axes(&chart);
    let opts = RenderOptions::default().with_theme(theme::find(&cli.theme));

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(&title)
        .with_inner_size(LogicalSize::new(WIDTH as f64, HEIGHT as f64))
        .build(&event_loop)
        .map_err(|e| anyhow!("failed to open window: {e}"))?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut view = home;
    let mut cursor: Option<(f64, f64)> = None;
    let mut dragging = false;

    event_loop.run(move |event, _, control_flow| {
        // The surface must not outlive its context.
        let _ = &context;
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(_) => window.request_redraw(),
                WindowEvent::CursorMoved { position, .. } => {
                    let pos = (position.x, position.y);
                    if let (true, Some((lx, ly))) = (dragging, cursor) {
                        let size = window.inner_size();
                        view.pan_by_pixels(pos.0 - lx, pos.1 - ly, size.width as i32, size.height as i32, &opts.insets);
                        window.request_redraw();
                    }
                    cursor = Some(pos);
                }
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                    dragging = state == ElementState::Pressed;
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    if let Some((cx, cy)) = cursor {
                        let scroll = match delta {
                            MouseScrollDelta::LineDelta(_, y) => y as f64 * 0.1,
                            MouseScrollDelta::PixelDelta(p) => p.y / 240.0,
                        };
                        let size = window.inner_size();
                        view.zoom_at_pixel(scroll, cx, cy, size.width as i32, size.height as i32, &opts.insets);
                        window.request_redraw();
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::H | VirtualKeyCode::Home => {
                        view = home;
                        window.request_redraw();
                    }
                    VirtualKeyCode::Escape | VirtualKeyCode::Q => *control_flow = ControlFlow::Exit,
                    _ => {}
                },
                _ => {}
            },
            Event::RedrawRequested(_) => {
                view.apply_to_chart(&mut chart);
                if let Err(e) = present(&mut surface, &chart, &opts, window.inner_size()) {
                    warn!("present failed: {e:#}");
                }
            }
            _ => {}
        }
    })
}

/// Render `chart` at the window's size and blit it as 0RGB pixels.
fn present(surface: &mut softbuffer::Surface, chart: &Chart, opts: &RenderOptions, size: PhysicalSize<u32>) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(()); // minimised
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize surface: {e}"))?;

    let mut opts = opts.clone();
    opts.width = w.get() as i32;
    opts.height = h.get() as i32;
    let (rgba, ..) = chart.render_to_rgba8(&opts)?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
