// THEORY:
// The `Classifier` is the "smart" counterpart to the static category table. It
// wraps a borrowed table and answers one question per pixel: which category,
// if any, does this sample belong to?
//
// The table is injected at construction rather than read from a global, so tests
// can probe overlap behavior with purpose-built fixtures while the binary always
// runs against `CATEGORY_TABLE`. Classification is a first-match linear scan over
// a handful of rows and is a pure function of the pixel.

use crate::core_modules::category::{CATEGORY_TABLE, Category, CategoryBounds};
use crate::core_modules::pixel::pixel::Pixel;

#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    table: &'static [CategoryBounds],
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// A classifier over the compiled-in category table.
    pub fn new() -> Self {
        Self::with_table(CATEGORY_TABLE)
    }

    pub fn with_table(table: &'static [CategoryBounds]) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'static [CategoryBounds] {
        self.table
    }

    /// Returns the first category in table order whose box contains `pixel`.
    pub fn classify(&self, pixel: &Pixel) -> Option<Category> {
        self.table
            .iter()
            .find(|row| row.bounds.contains(pixel))
            .map(|row| row.category)
    }
}
