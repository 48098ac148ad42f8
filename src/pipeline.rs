// THEORY:
// The `pipeline` module is the top-level API of the sorter. It strings the three
// stages together in a single straight pass:
//
//   decode (image_loader) -> classify + average (classifier, aggregator)
//
// and hands back a `CategoryAverages` for the caller to report however it likes.
// There is no state carried between runs; a pipeline can be reused for any number
// of images and always produces the same answer for the same pixels.

use crate::core_modules::aggregator::{self, CategoryAverages};
use crate::core_modules::classifier::Classifier;
use crate::core_modules::image_loader;
use crate::core_modules::pixel::pixel::Pixel;
use crate::error::Result;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Loader, classifier and aggregator behind a single call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorSortPipeline {
    classifier: Classifier,
}

impl ColorSortPipeline {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Decodes the image at `path` and averages its pixels per category.
    pub fn analyze_path(&self, path: &Path) -> Result<CategoryAverages> {
        let started = Instant::now();
        let pixels = image_loader::load_pixels(path)?;
        let result = self.analyze_pixels(&pixels);
        info!(
            path = %path.display(),
            pixels = pixels.len(),
            categories = result.len(),
            elapsed = ?started.elapsed(),
            "analyzed image"
        );
        Ok(result)
    }

    pub fn analyze_pixels(&self, pixels: &[Pixel]) -> CategoryAverages {
        aggregator::averages(pixels, &self.classifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::category::{Category, CategoryBounds};
    use crate::error::ColorSortError;
    use image::{ImageBuffer, Rgb};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn analyzes_an_image_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pair.png");
        let buffer = ImageBuffer::from_fn(2, 1, |x, _| {
            if x == 0 { Rgb([255u8, 0, 0]) } else { Rgb([0u8, 0, 0]) }
        });
        buffer.save(&path).unwrap();

        let result = ColorSortPipeline::default().analyze_path(&path).unwrap();
        assert_eq!(result.categories().collect::<Vec<_>>(), vec![Category::Red, Category::Black]);
    }

    #[test]
    fn timing_line_logs_the_full_duration() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("one.png");
        ImageBuffer::from_pixel(1, 1, Rgb([0u8, 0, 0])).save(&path).unwrap();

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            ColorSortPipeline::default().analyze_path(&path).unwrap();
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("analyzed image"), "{output}");
        assert!(output.contains("elapsed="), "{output}");
        assert!(!output.contains("elapsed_ms"), "{output}");
    }

    #[test]
    fn load_failures_surface_as_image_open() {
        let result = ColorSortPipeline::default().analyze_path(Path::new("/nonexistent.png"));
        assert!(matches!(result, Err(ColorSortError::ImageOpen { .. })));
    }

    #[test]
    fn uses_the_injected_classifier() {
        static WHITE_ONLY: [CategoryBounds; 1] =
            [CategoryBounds::new(Category::White, (0, 0, 0), (255, 255, 255))];
        let pipeline = ColorSortPipeline::new(Classifier::with_table(&WHITE_ONLY));
        let result = pipeline.analyze_pixels(&[Pixel::new(255, 0, 0), Pixel::new(1, 1, 1)]);
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(Category::White).unwrap().color, Pixel::new(128, 0, 0));
    }
}
