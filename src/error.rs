use std::fmt;

/// Why a whole-string parse failed. Overflow is not an error: values wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseIntError {
    /// Nothing to parse, or only a sign or radix prefix
    Empty,
    /// The byte at `index` is not a digit of the radix
    InvalidDigit { index: usize },
    InvalidRadix(u32),
}

impl fmt::Display for ParseIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot parse integer from empty string"),
            Self::InvalidDigit { index } => write!(f, "invalid digit at byte {index}"),
            Self::InvalidRadix(radix) => write!(f, "radix {radix} is not in 2..=36"),
        }
    }
}

impl std::error::Error for ParseIntError {}
