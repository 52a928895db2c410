//! QR encoder adapter over the `qrcodegen` crate.
//!
//! The encoder itself is an external dependency; this module only maps the
//! viewer's parameter set onto it and converts the result into a
//! [`ModuleGrid`].

use qrcodegen::{Mask, QrCode, QrCodeEcc, QrSegment, Version};
use thiserror::Error;

use crate::grid::ModuleGrid;

/// Lowest QR version.
pub const MIN_VERSION: u8 = 1;

/// Highest QR version.
pub const MAX_VERSION: u8 = 40;

/// Input text limit enforced by the UI (bytes).
pub const TEXT_LIMIT: usize = 1024;

/// QR error-correction level, trading data capacity for damage tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EccLevel {
    #[default]
    Low,
    Medium,
    Quartile,
    High,
}

impl EccLevel {
    /// All levels, in capacity order. Used to populate the ECC combo box.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::Quartile, Self::High];

    /// Human-readable name for UI display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::Quartile => "Quartile",
            Self::High => "High",
        }
    }

    fn to_qrcodegen(self) -> QrCodeEcc {
        match self {
            Self::Low => QrCodeEcc::Low,
            Self::Medium => QrCodeEcc::Medium,
            Self::Quartile => QrCodeEcc::Quartile,
            Self::High => QrCodeEcc::High,
        }
    }
}

/// The full parameter set for one encode attempt.
///
/// Invariants (restored by [`EncodeRequest::clamp`] before every encode):
/// `1 <= min_version <= max_version <= 40` and `mask` in `[-1, 7]`
/// (`-1` lets the encoder choose).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeRequest {
    pub text: String,
    pub ecc: EccLevel,
    pub min_version: u8,
    pub max_version: u8,
    pub mask: i8,
    pub boost_ecc: bool,
}

impl Default for EncodeRequest {
    fn default() -> Self {
        Self {
            text: "Hello, World!".to_owned(),
            ecc: EccLevel::default(),
            min_version: MIN_VERSION,
            max_version: MAX_VERSION,
            mask: -1,
            boost_ecc: false,
        }
    }
}

impl EncodeRequest {
    /// Set the lower version bound. If the new minimum passes the current
    /// maximum, the maximum is dragged up to keep `min <= max`.
    pub fn set_min_version(&mut self, version: i32) {
        self.min_version = version.clamp(i32::from(MIN_VERSION), i32::from(MAX_VERSION)) as u8;
        if self.min_version > self.max_version {
            self.max_version = self.min_version;
        }
    }

    /// Set the upper version bound. If the new maximum drops below the
    /// current minimum, the minimum is dragged down to keep `min <= max`.
    pub fn set_max_version(&mut self, version: i32) {
        self.max_version = version.clamp(i32::from(MIN_VERSION), i32::from(MAX_VERSION)) as u8;
        if self.max_version < self.min_version {
            self.min_version = self.max_version;
        }
    }

    /// Set the mask preference, clamped to `[-1, 7]`.
    pub fn set_mask(&mut self, mask: i32) {
        self.mask = mask.clamp(-1, 7) as i8;
    }

    /// Restore every invariant in place. Called before each encode attempt so
    /// a request is always valid regardless of how its fields were edited.
    pub fn clamp(&mut self) {
        self.min_version = self.min_version.clamp(MIN_VERSION, MAX_VERSION);
        self.max_version = self.max_version.clamp(MIN_VERSION, MAX_VERSION);
        if self.min_version > self.max_version {
            self.max_version = self.min_version;
        }
        self.mask = self.mask.clamp(-1, 7);
        self.text.truncate(floor_char_boundary(&self.text, TEXT_LIMIT));
    }
}

/// Largest index `<= at` that lies on a char boundary of `text`.
fn floor_char_boundary(text: &str, at: usize) -> usize {
    if at >= text.len() {
        return text.len();
    }
    (0..=at).rev().find(|&i| text.is_char_boundary(i)).unwrap_or(0)
}

/// Why an encode attempt failed.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The text does not fit any allowed version at the requested ECC level.
    #[error("text does not fit the allowed QR versions: {0}")]
    DataTooLong(#[from] qrcodegen::DataTooLong),
}

/// Encode `req` into a module grid.
///
/// The request must already satisfy its invariants; callers go through
/// [`EncodeRequest::clamp`] first.
pub fn encode(req: &EncodeRequest) -> Result<ModuleGrid, EncodeError> {
    let segments = QrSegment::make_segments(&req.text);
    let mask = (req.mask >= 0).then(|| Mask::new(req.mask as u8));
    let qr = QrCode::encode_segments_advanced(
        &segments,
        req.ecc.to_qrcodegen(),
        Version::new(req.min_version),
        Version::new(req.max_version),
        mask,
        req.boost_ecc,
    )?;
    let size = qr.size() as usize;
    Ok(ModuleGrid::from_fn(size, |x, y| {
        qr.get_module(x as i32, y as i32)
    }))
}
