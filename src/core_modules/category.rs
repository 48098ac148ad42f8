// THEORY:
// The `category` module holds the static knowledge of the sorter: the eight named
// color categories and the inclusive RGB box that defines membership in each.
//
// Key architectural principles:
// 1.  **Immutable Table**: `CATEGORY_TABLE` is a `const`-built, process-wide slice.
//     Nothing mutates it at runtime; classifiers borrow it for `'static`.
// 2.  **Order Is Precedence**: Several boxes overlap (red and orange share
//     the slab green = 100, red and mauve meet along blue = 100). The table order
//     is the tie-break rule: the first box that contains a pixel wins.
// 3.  **Axis-Aligned Boxes**: A `ColorBox` is a product of three inclusive channel
//     ranges. Boxes are convex, so the mean of any set of in-box pixels is itself
//     in-box and an aggregated average never leaves its category's box.

use crate::core_modules::pixel::pixel::Pixel;
use std::fmt;

/// One of the fixed, named color classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Mauve,
    White,
    Black,
}

impl Category {
    /// Lowercase display name, as printed in report lines.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Red => "red",
            Category::Orange => "orange",
            Category::Yellow => "yellow",
            Category::Green => "green",
            Category::Blue => "blue",
            Category::Mauve => "mauve",
            Category::White => "white",
            Category::Black => "black",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An axis-aligned, inclusive range in RGB space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBox {
    pub low: Pixel,
    pub high: Pixel,
}

impl ColorBox {
    pub const fn new(low: Pixel, high: Pixel) -> Self {
        Self { low, high }
    }

    /// True when every channel of `pixel` lies within `[low, high]`.
    pub fn contains(&self, pixel: &Pixel) -> bool {
        (self.low.red..=self.high.red).contains(&pixel.red)
            && (self.low.green..=self.high.green).contains(&pixel.green)
            && (self.low.blue..=self.high.blue).contains(&pixel.blue)
    }
}

/// A category bound to its membership box. One row of the category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryBounds {
    pub category: Category,
    pub bounds: ColorBox,
}

impl CategoryBounds {
    pub const fn new(category: Category, low: (u8, u8, u8), high: (u8, u8, u8)) -> Self {
        Self {
            category,
            bounds: ColorBox::new(
                Pixel::new(low.0, low.1, low.2),
                Pixel::new(high.0, high.1, high.2),
            ),
        }
    }
}

/// The compiled-in category table, in precedence order.
pub const CATEGORY_TABLE: &[CategoryBounds] = &[
    CategoryBounds::new(Category::Red, (150, 0, 0), (255, 100, 100)),
    CategoryBounds::new(Category::Orange, (200, 100, 0), (255, 165, 50)),
    CategoryBounds::new(Category::Yellow, (200, 200, 0), (255, 255, 100)),
    CategoryBounds::new(Category::Green, (0, 150, 0), (100, 255, 100)),
    CategoryBounds::new(Category::Blue, (0, 0, 150), (100, 100, 255)),
    CategoryBounds::new(Category::Mauve, (150, 50, 100), (255, 150, 200)),
    CategoryBounds::new(Category::White, (200, 200, 200), (255, 255, 255)),
    CategoryBounds::new(Category::Black, (0, 0, 0), (50, 50, 50)),
];

/// Looks up a category's box in `table`.
pub fn bounds_in(table: &[CategoryBounds], category: Category) -> Option<ColorBox> {
    table
        .iter()
        .find(|row| row.category == category)
        .map(|row| row.bounds)
}
