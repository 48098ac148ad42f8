// THEORY:
// The reporter renders `CategoryAverages` as terminal text. Each category line is
// painted in its own average color using a 24-bit ANSI foreground escape and then
// reset, so a reader sees the color and its numeric value side by side.
//
// Output goes through any `io::Write`, which keeps the binary's stdout handling
// trivial and lets tests capture the exact bytes. No terminal capability
// detection is attempted: true-color escapes are always emitted.

use crate::core_modules::aggregator::CategoryAverages;
use crate::core_modules::pixel::pixel::Pixel;
use std::io::{self, Write};

pub const HEADER: &str = "Average colors for each category:";
pub const RESET: &str = "\x1b[0m";

const SWATCH_WIDTH: usize = 10;
const SWATCH_CHAR: char = '█';

/// How each category line is decorated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportStyle {
    /// `Average {category} color: (r, g, b)` only.
    #[default]
    Plain,
    /// A solid block swatch in front of the text. Library callers only; the
    /// `color_sort` binary always prints `Plain`.
    Swatch,
}

/// True-color foreground escape for `color`: `ESC[38;2;{r};{g};{b}m`.
pub fn foreground_escape(color: &Pixel) -> String {
    format!("\x1b[38;2;{};{};{}m", color.red, color.green, color.blue)
}

/// Writes the blank line, header and one colored line per category present.
pub fn write_report<W: Write>(
    writer: &mut W,
    averages: &CategoryAverages,
    style: ReportStyle,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{HEADER}")?;
    for (category, average) in averages {
        let color = average.color;
        write!(writer, "{}", foreground_escape(&color))?;
        if style == ReportStyle::Swatch {
            let swatch: String = std::iter::repeat_n(SWATCH_CHAR, SWATCH_WIDTH).collect();
            write!(writer, "{swatch} | ")?;
        }
        writeln!(writer, "Average {category} color: {color}{RESET}")?;
    }
    writer.flush()
}

/// Renders the report into a `String`.
pub fn render(averages: &CategoryAverages, style: ReportStyle) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, averages, style)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::aggregator::averages;
    use crate::core_modules::classifier::Classifier;

    #[test]
    fn escape_sequence_format() {
        assert_eq!(foreground_escape(&Pixel::new(1, 22, 255)), "\x1b[38;2;1;22;255m");
    }

    #[test]
    fn empty_averages_print_only_the_header() {
        let report = render(&CategoryAverages::default(), ReportStyle::Plain).unwrap();
        assert_eq!(report, format!("\n{HEADER}\n"));
    }

    #[test]
    fn plain_lines_are_colored_with_their_own_average() {
        let result = averages(
            &[Pixel::new(255, 0, 0), Pixel::new(0, 0, 0)],
            &Classifier::new(),
        );
        let report = render(&result, ReportStyle::Plain).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "",
                HEADER,
                "\x1b[38;2;255;0;0mAverage red color: (255, 0, 0)\x1b[0m",
                "\x1b[38;2;0;0;0mAverage black color: (0, 0, 0)\x1b[0m",
            ]
        );
    }

    #[test]
    fn swatch_style_prefixes_a_block() {
        let result = averages(&[Pixel::new(20, 20, 200)], &Classifier::new());
        let report = render(&result, ReportStyle::Swatch).unwrap();
        let line = report.lines().nth(2).unwrap();
        assert_eq!(
            line,
            "\x1b[38;2;20;20;200m██████████ | Average blue color: (20, 20, 200)\x1b[0m"
        );
    }

    #[test]
    fn render_matches_the_written_bytes() {
        let result = averages(&[Pixel::new(240, 240, 50)], &Classifier::new());
        let mut written = Vec::new();
        write_report(&mut written, &result, ReportStyle::Swatch).unwrap();
        let rendered = render(&result, ReportStyle::Swatch).unwrap();
        assert_eq!(rendered.as_bytes(), written.as_slice());
    }

    #[test]
    fn write_errors_propagate() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let result = write_report(&mut Broken, &CategoryAverages::default(), ReportStyle::Plain);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }
}
