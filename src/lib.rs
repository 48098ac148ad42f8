// THEORY:
// This file is the main entry point for the `color_sort` library crate.
// It exposes the `ColorSortPipeline` and the data structures it produces
// (`CategoryAverages`, `Category`, `Pixel`) as the high-level interface. The
// binary in `main.rs` is a thin shell around this API: it parses arguments,
// runs the pipeline and hands the result to the reporter.
//
// The `core_modules` are public so the individual stages (loader, classifier,
// aggregator, reporter) can be driven and tested in isolation.

pub mod core_modules;
pub mod error;
pub mod pipeline;

pub use core_modules::aggregator::{CategoryAverage, CategoryAverages};
pub use core_modules::category::{CATEGORY_TABLE, Category, CategoryBounds, ColorBox};
pub use core_modules::classifier::Classifier;
pub use core_modules::pixel::pixel::Pixel;
pub use core_modules::reporter::ReportStyle;
pub use error::{ColorSortError, Result};
pub use pipeline::ColorSortPipeline;
