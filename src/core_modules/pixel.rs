// THEORY:
// The `Pixel` module is the most fundamental unit of the sorter. It is a "dumb"
// data container for a single RGB sample, produced by the image loader and
// consumed immediately by the classifier and aggregator.
//
// Alpha is deliberately absent: the loader flattens every decoded image to
// 8-bit RGB, so a transparent pixel classifies by its color channels alone.

pub mod pixel {
    use std::fmt;

    pub type Byte = u8;
    pub type Channel = Byte;

    /// A "dumb" data container representing a single RGB pixel.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
    }

    impl Pixel {
        pub const fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Pixel { red, green, blue }
        }
    }

    /// Formats as `(r, g, b)`, the tuple notation used in report lines.
    impl fmt::Display for Pixel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({}, {}, {})", self.red, self.green, self.blue)
        }
    }

    impl From<image::Rgb<Byte>> for Pixel {
        fn from(rgb: image::Rgb<Byte>) -> Self {
            let [red, green, blue] = rgb.0;
            Pixel::new(red, green, blue)
        }
    }
}
