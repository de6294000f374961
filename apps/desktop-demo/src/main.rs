mod preset;

use std::path::PathBuf;
use std::sync::Arc;

use debuglayout::graphics::{DisplayMetrics, Size};
use debuglayout::{log_draw_ops, DebugLayout, DebugOverlay, RecordingDrawScope};
use debuglayout_render_pixels::{FontTextMeasurer, PixelsDrawScope, RasterError, CLEAR_COLOR};
use once_cell::sync::Lazy;
#[cfg(feature = "renderer-pixels")]
use pixels::{Pixels, SurfaceTexture};

#[cfg(not(feature = "renderer-pixels"))]
compile_error!("The desktop demo currently requires the `renderer-pixels` feature.");

#[cfg(not(feature = "desktop"))]
compile_error!("The desktop demo must be built with the `desktop` feature enabled.");

use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::window::WindowBuilder;

use crate::preset::Preset;

const INITIAL_WIDTH: u32 = 800;
const INITIAL_HEIGHT: u32 = 600;
const FONT_ENV: &str = "DEBUGLAYOUT_FONT";
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static FONT: Lazy<Option<FontTextMeasurer>> = Lazy::new(load_font);

fn main() {
    env_logger::init();

    println!("=== debuglayout overlay demo ===");
    println!("  1-9  switch overlay preset");
    println!("  R    toggle navigation regions");
    println!("  D    dump the overlay draw calls to the log");
    println!("Set {FONT_ENV} to a .ttf file for ruler labels.");
    println!();

    let event_loop = EventLoopBuilder::new().build();
    let window = WindowBuilder::new()
        .with_title("debuglayout")
        .with_inner_size(LogicalSize::new(
            INITIAL_WIDTH as f64,
            INITIAL_HEIGHT as f64,
        ))
        .build(&event_loop)
        .expect("window");
    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(size.width, size.height, surface_texture).expect("pixels");

    let mut demo = OverlayDemo::new(window.scale_factor() as f32);
    demo.set_buffer_size(size.width, size.height);
    window.set_title(&demo.title());

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                        log::error!("failed to resize surface: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    if let Err(err) = pixels.resize_buffer(new_size.width, new_size.height) {
                        log::error!("failed to resize buffer: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    demo.set_buffer_size(new_size.width, new_size.height);
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged {
                    scale_factor,
                    new_inner_size,
                } => {
                    if let Err(err) =
                        pixels.resize_surface(new_inner_size.width, new_inner_size.height)
                    {
                        log::error!("failed to resize surface: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    if let Err(err) =
                        pixels.resize_buffer(new_inner_size.width, new_inner_size.height)
                    {
                        log::error!("failed to resize buffer: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    demo.set_buffer_size(new_inner_size.width, new_inner_size.height);
                    demo.set_density(scale_factor as f32);
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state != ElementState::Pressed {
                        return;
                    }
                    let Some(keycode) = input.virtual_keycode else {
                        return;
                    };
                    let changed = match keycode {
                        VirtualKeyCode::R => demo.toggle_regions(),
                        VirtualKeyCode::D => {
                            demo.log_debug_info();
                            false
                        }
                        other => digit(other)
                            .and_then(Preset::from_digit)
                            .map_or(false, |preset| demo.select(preset)),
                    };
                    if changed {
                        window.set_title(&demo.title());
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(err) = demo.draw(pixels.frame_mut()) {
                    log::error!("overlay draw failed: {err}");
                }
                if let Err(err) = pixels.render() {
                    log::error!("pixels render failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn digit(keycode: VirtualKeyCode) -> Option<u8> {
    let digit = match keycode {
        VirtualKeyCode::Key1 => 1,
        VirtualKeyCode::Key2 => 2,
        VirtualKeyCode::Key3 => 3,
        VirtualKeyCode::Key4 => 4,
        VirtualKeyCode::Key5 => 5,
        VirtualKeyCode::Key6 => 6,
        VirtualKeyCode::Key7 => 7,
        VirtualKeyCode::Key8 => 8,
        VirtualKeyCode::Key9 => 9,
        _ => return None,
    };
    Some(digit)
}

fn load_font() -> Option<FontTextMeasurer> {
    let candidates = std::env::var_os(FONT_ENV)
        .map(PathBuf::from)
        .into_iter()
        .chain(FONT_CANDIDATES.iter().map(PathBuf::from));
    for path in candidates {
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::debug!("font {} unavailable: {err}", path.display());
                continue;
            }
        };
        match FontTextMeasurer::from_bytes(bytes) {
            Ok(font) => {
                log::info!("ruler labels use {}", path.display());
                return Some(font);
            }
            Err(err) => log::warn!("font {}: {err}", path.display()),
        }
    }
    log::warn!("no label font found, rulers are drawn without labels");
    None
}

struct OverlayDemo {
    preset: Preset,
    regions: bool,
    metrics: DisplayMetrics,
    overlay: DebugOverlay,
    buffer_size: (u32, u32),
}

impl OverlayDemo {
    fn new(density: f32) -> Self {
        let metrics = DisplayMetrics::from_density(density);
        let preset = Preset::Grid;
        Self {
            preset,
            regions: false,
            metrics,
            overlay: build_overlay(preset, false, metrics),
            buffer_size: (INITIAL_WIDTH, INITIAL_HEIGHT),
        }
    }

    fn title(&self) -> String {
        let regions = if self.regions { ", regions" } else { "" };
        format!("debuglayout: {}{regions}", self.preset.label())
    }

    fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.buffer_size = (width, height);
    }

    fn set_density(&mut self, density: f32) {
        self.metrics = DisplayMetrics::from_density(density);
        self.rebuild();
    }

    fn select(&mut self, preset: Preset) -> bool {
        self.preset = preset;
        self.rebuild()
    }

    fn toggle_regions(&mut self) -> bool {
        self.regions = !self.regions;
        self.rebuild();
        // The title changes even when the overlay does not.
        true
    }

    /// Returns whether the overlay changed.
    fn rebuild(&mut self) -> bool {
        let overlay = build_overlay(self.preset, self.regions, self.metrics);
        if overlay == self.overlay {
            return false;
        }
        self.overlay = overlay;
        true
    }

    fn draw(&self, frame: &mut [u8]) -> Result<(), RasterError> {
        let (width, height) = self.buffer_size;
        let density = self.metrics.density;
        let mut paint = |frame: &mut [u8], width: u32, height: u32| {
            paint_mock_content(frame, width, height, density);
        };
        let mut scope = PixelsDrawScope::new(frame, width, height)?
            .with_density(density)
            .with_content(&mut paint);
        if let Some(font) = FONT.as_ref() {
            scope = scope.with_font(font);
        }
        self.overlay.draw(&mut scope);
        Ok(())
    }

    fn log_debug_info(&self) {
        let (width, height) = self.buffer_size;
        let mut recording = RecordingDrawScope::new(Size::new(width as f32, height as f32));
        self.overlay.draw(&mut recording);
        log::info!("{} ({} layers)", self.title(), self.overlay.layers().len());
        log_draw_ops(recording.operations());
    }
}

fn build_overlay(preset: Preset, regions: bool, metrics: DisplayMetrics) -> DebugOverlay {
    let mut layout = DebugLayout::new(metrics);
    if let Some(font) = FONT.as_ref() {
        layout = layout.with_text_measurer(Arc::new(font.clone()));
    }
    preset.configure(&mut layout, regions);
    layout.build()
}

/// Fake screen: a toolbar and a column of cards.
fn paint_mock_content(frame: &mut [u8], width: u32, height: u32, density: f32) {
    for chunk in frame.chunks_exact_mut(4) {
        chunk.copy_from_slice(&CLEAR_COLOR);
    }
    let dp = |value: f32| (value * density).round() as u32;
    fill(frame, width, height, (0, 0, width, dp(56.0)), [44, 44, 60, 255]);

    let card_step = dp(112.0).max(1);
    let mut top = dp(72.0);
    while top + dp(96.0) < height {
        let card = (dp(16.0), top, width.saturating_sub(dp(16.0)), top + dp(96.0));
        fill(frame, width, height, card, [60, 60, 78, 255]);
        let title = (card.0 + dp(16.0), top + dp(16.0), card.0 + dp(180.0), top + dp(32.0));
        fill(frame, width, height, title, [110, 110, 130, 255]);
        top += card_step;
    }
}

fn fill(frame: &mut [u8], width: u32, height: u32, rect: (u32, u32, u32, u32), rgba: [u8; 4]) {
    let (left, top, right, bottom) = rect;
    for y in top..bottom.min(height) {
        for x in left..right.min(width) {
            let idx = (y as usize * width as usize + x as usize) * 4;
            frame[idx..idx + 4].copy_from_slice(&rgba);
        }
    }
}
