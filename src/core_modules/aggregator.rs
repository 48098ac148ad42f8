// THEORY:
// The aggregator turns a flat pixel sequence into one average color per category.
// It plays the role a `Chunk` plays for a spatial block: sum the channels, divide
// by the count, and hand back a summary `Pixel`.
//
// Key architectural principles:
// 1.  **Single Pass**: Each pixel is classified exactly once and its channels are
//     added to that category's `ChannelAccumulator`. The result is identical to
//     scanning the whole image once per category.
// 2.  **Integer Means**: Sums are `u64` and the mean is `sum / count`. For
//     non-negative values integer division is truncation toward zero, so no
//     floating point is involved and no rounding can push a mean out of its box.
// 3.  **Ordered Output**: `CategoryAverages` is an insertion-ordered map seeded in
//     table order, so iteration follows category precedence. Categories that
//     matched nothing are dropped before the map is returned.

use crate::core_modules::category::Category;
use crate::core_modules::classifier::Classifier;
use crate::core_modules::pixel::pixel::Pixel;
use indexmap::IndexMap;
use tracing::debug;

/// Running channel totals for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelAccumulator {
    sum_red: u64,
    sum_green: u64,
    sum_blue: u64,
    count: u64,
}

impl ChannelAccumulator {
    pub fn add(&mut self, pixel: &Pixel) {
        self.sum_red += pixel.red as u64;
        self.sum_green += pixel.green as u64;
        self.sum_blue += pixel.blue as u64;
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Truncated per-channel mean, or `None` when nothing was added.
    pub fn mean(&self) -> Option<Pixel> {
        if self.count == 0 {
            return None;
        }
        // Each quotient is bounded by the largest channel value added, so it fits in a u8.
        Some(Pixel::new(
            (self.sum_red / self.count) as u8,
            (self.sum_green / self.count) as u8,
            (self.sum_blue / self.count) as u8,
        ))
    }
}

/// Average color of one category plus the number of pixels behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAverage {
    pub color: Pixel,
    pub pixel_count: u64,
}

/// Per-category averages in table order. Only categories with at least one pixel appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryAverages {
    entries: IndexMap<Category, CategoryAverage>,
}

impl CategoryAverages {
    pub fn get(&self, category: Category) -> Option<&CategoryAverage> {
        self.entries.get(&category)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.entries.contains_key(&category)
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CategoryAverages {
    type Item = (&'a Category, &'a CategoryAverage);
    type IntoIter = indexmap::map::Iter<'a, Category, CategoryAverage>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Classifies every pixel and averages each category's channels.
pub fn averages(pixels: &[Pixel], classifier: &Classifier) -> CategoryAverages {
    let mut accumulators: IndexMap<Category, ChannelAccumulator> = classifier
        .table()
        .iter()
        .map(|row| (row.category, ChannelAccumulator::default()))
        .collect();

    let mut unclassified = 0usize;
    for pixel in pixels {
        match classifier.classify(pixel) {
            Some(category) => {
                if let Some(accumulator) = accumulators.get_mut(&category) {
                    accumulator.add(pixel);
                }
            }
            None => unclassified += 1,
        }
    }

    let entries: IndexMap<Category, CategoryAverage> = accumulators
        .into_iter()
        .filter_map(|(category, accumulator)| {
            debug!(%category, pixels = accumulator.count(), "category tally");
            accumulator.mean().map(|color| {
                (
                    category,
                    CategoryAverage {
                        color,
                        pixel_count: accumulator.count(),
                    },
                )
            })
        })
        .collect();

    debug!(
        total = pixels.len(),
        unclassified,
        categories = entries.len(),
        "aggregated pixels"
    );

    CategoryAverages { entries }
}
