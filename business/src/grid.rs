//! The square boolean module matrix produced by the encoder.

/// A square grid of QR modules (dark = `true`, light = `false`).
///
/// Produced by [`crate::encode::encode`] and replaced wholesale on every
/// successful re-encode; never mutated in place.
#[derive(Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// Build a grid by sampling `module` at every `(x, y)` cell.
    pub fn from_fn(size: usize, mut module: impl FnMut(usize, usize) -> bool) -> Self {
        let mut modules = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                modules.push(module(x, y));
            }
        }
        Self { size, modules }
    }

    /// Side length in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at `(x, y)` is dark.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is outside the grid.
    pub fn get(&self, x: usize, y: usize) -> bool {
        assert!(x < self.size && y < self.size, "module out of bounds");
        self.modules[y * self.size + x]
    }
}

impl std::fmt::Debug for ModuleGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleGrid")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
