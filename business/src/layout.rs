//! Window layout: panel, main-content and QR-display rectangles.
//!
//! Pure functions of the window size and panel visibility. The viewer
//! recomputes the layout on every resize and panel toggle; nothing here holds
//! state.

/// Fraction of the window width taken by the parameter panel when open.
pub const PANEL_WIDTH_FRACTION: f32 = 0.25;

/// QR square side as a fraction of the main-content height, panel open.
pub const QR_FRACTION_PANEL_OPEN: f32 = 0.75;

/// QR square side as a fraction of the main-content height, panel hidden.
pub const QR_FRACTION_PANEL_HIDDEN: f32 = 0.90;

/// An axis-aligned rectangle in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    /// Whether `other` lies entirely within this rectangle.
    pub fn contains(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.w <= self.x + self.w
            && other.y + other.h <= self.y + self.h
    }
}

/// The three rectangles the render pass works with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRects {
    /// Parameter panel; zero-area when hidden.
    pub panel: Rect,
    /// Everything right of the panel.
    pub main: Rect,
    /// The QR square, centered in `main`.
    pub qr: Rect,
}

/// Compute the layout for a window of `width` x `height`.
///
/// The panel takes the left quarter of the window (full height) when open.
/// The QR square side is 75% of the main-content height with the panel open,
/// 90% with it hidden, centered both ways.
pub fn compute_layout(width: f32, height: f32, panel_open: bool) -> LayoutRects {
    let panel = if panel_open {
        Rect::new(0.0, 0.0, width * PANEL_WIDTH_FRACTION, height)
    } else {
        Rect::default()
    };
    let main = Rect::new(panel.w, 0.0, width - panel.w, height);

    let qr_side = main.h
        * if panel_open {
            QR_FRACTION_PANEL_OPEN
        } else {
            QR_FRACTION_PANEL_HIDDEN
        };
    let qr = Rect::new(
        main.x + (main.w - qr_side) * 0.5,
        main.y + (main.h - qr_side) * 0.5,
        qr_side,
        qr_side,
    );

    LayoutRects { panel, main, qr }
}
