use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// The frame holds fewer than `width * height * 4` bytes.
    FrameTooSmall {
        width: u32,
        height: u32,
        len: usize,
    },
    /// The font data could not be parsed.
    FontRejected,
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::FrameTooSmall { width, height, len } => {
                write!(f, "frame of {len} bytes is too small for {width}x{height} RGBA8")
            }
            RasterError::FontRejected => write!(f, "font data rejected"),
        }
    }
}

impl std::error::Error for RasterError {}
