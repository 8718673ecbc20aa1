use common::PixelFormats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError<E> {
    /// The requested fill width does not fit the line buffer. Detected before
    /// anything is written.
    LineBufferOverflow { width: u16, capacity: usize },
    /// The sink supports neither RGB565 nor BGR565. Terminal for the session.
    FormatUnsupported { supported: PixelFormats },
    /// Whatever the sink reported, carried through uninterpreted.
    Sink(E),
}

impl<E: core::fmt::Display> core::fmt::Display for DisplayError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::LineBufferOverflow { width, capacity } => {
                write!(f, "line buffer ({capacity} pixels) too small for width {width}")
            }
            DisplayError::FormatUnsupported { supported } => {
                write!(f, "no RGB/BGR565 support (formats={supported:?})")
            }
            DisplayError::Sink(e) => write!(f, "display sink error: {e}"),
        }
    }
}
