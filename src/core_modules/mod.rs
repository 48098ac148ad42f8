pub mod aggregator;
pub mod category;
pub mod classifier;
pub mod image_loader;
pub mod pixel;
pub mod reporter;
