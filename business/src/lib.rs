#![warn(clippy::all, rust_2018_idioms)]

pub mod encode;
pub mod export;
pub mod grid;
pub mod layout;
pub mod raster;
pub mod viewer;

pub use encode::{EccLevel, EncodeError, EncodeRequest, MAX_VERSION, MIN_VERSION, TEXT_LIMIT, encode};
pub use export::{ExportError, write_png};
pub use grid::ModuleGrid;
pub use layout::{LayoutRects, Rect, compute_layout};
pub use raster::{ChannelOrder, ColorPair, PixelBuffer, pack_color, rasterize};
pub use viewer::{INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, ViewerEvent, ViewerState};
