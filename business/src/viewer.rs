//! The viewer's application state and event dispatch.
//!
//! [`ViewerState`] is the single owned state object: the UI layer holds one
//! instance, mutates it through [`ViewerState::handle_event`] and the
//! parameter panel, and reads the derived grid/pixels/layout back out each
//! frame. Keeping it GUI-free means the whole pipeline is testable without a
//! window.

use std::path::PathBuf;

use crate::encode::{EncodeRequest, encode};
use crate::export::write_png;
use crate::grid::ModuleGrid;
use crate::layout::{LayoutRects, compute_layout};
use crate::raster::{ColorPair, PixelBuffer, rasterize};

/// Initial window width in logical pixels.
pub const INITIAL_WINDOW_WIDTH: f32 = 1280.0;

/// Initial window height in logical pixels.
pub const INITIAL_WINDOW_HEIGHT: f32 = 720.0;

/// External events the viewer reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    /// Show or hide the parameter panel.
    TogglePanel,
    /// End the run on the next loop iteration.
    Quit,
    /// The window's drawable size changed.
    Resized { width: f32, height: f32 },
    /// The save dialog delivered a destination path.
    FileChosen(PathBuf),
}

/// All viewer state: encoding parameters, colors, derived grid and pixels,
/// layout rectangles and the panel/quit flags.
pub struct ViewerState {
    /// Current encoding parameters, edited by the panel.
    pub request: EncodeRequest,
    /// Current module colors, edited by the panel.
    pub colors: ColorPair,
    grid: ModuleGrid,
    pixels: PixelBuffer,
    layout: LayoutRects,
    window: (f32, f32),
    panel_open: bool,
    quit: bool,
    revision: u64,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerState {
    pub fn new() -> Self {
        let request = EncodeRequest::default();
        let colors = ColorPair::default();
        // The default text fits easily in the widest version range.
        let grid = encode(&request).expect("default request must encode");
        let pixels = rasterize(&grid, &colors);
        let layout = compute_layout(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT, true);
        Self {
            request,
            colors,
            grid,
            pixels,
            layout,
            window: (INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT),
            panel_open: true,
            quit: false,
            revision: 0,
        }
    }

    /// The last successfully encoded grid.
    pub fn grid(&self) -> &ModuleGrid {
        &self.grid
    }

    /// The pixel buffer derived from [`ViewerState::grid`] and the current
    /// colors.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn layout(&self) -> &LayoutRects {
        &self.layout
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Bumped every time the pixel buffer is replaced. The UI re-uploads its
    /// texture when this moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Re-run the full pipeline: clamp parameters, encode, rasterize.
    ///
    /// On encode failure the previous grid and pixel buffer stay on screen;
    /// stale output with a logged warning is the documented contract, so a
    /// half-typed edit never blanks the display.
    pub fn recompute(&mut self) {
        self.request.clamp();
        match encode(&self.request) {
            Ok(grid) => {
                self.pixels = rasterize(&grid, &self.colors);
                self.grid = grid;
                self.revision += 1;
            }
            Err(err) => {
                log::warn!("QR encode failed, keeping previous output: {err}");
            }
        }
    }

    /// Dispatch one external event.
    pub fn handle_event(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::Quit => {
                self.quit = true;
            }
            ViewerEvent::TogglePanel => {
                self.panel_open = !self.panel_open;
                self.layout = compute_layout(self.window.0, self.window.1, self.panel_open);
            }
            ViewerEvent::Resized { width, height } => {
                // Geometry only; the grid is not re-encoded on resize.
                self.window = (width, height);
                self.layout = compute_layout(width, height, self.panel_open);
            }
            ViewerEvent::FileChosen(path) => match write_png(&self.pixels, &path) {
                Ok(()) => log::info!("saved QR code to {}", path.display()),
                Err(err) => log::error!("failed to save QR code: {err}"),
            },
        }
    }
}
