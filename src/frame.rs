//! Strip layout
//!
//! The light bar is one RGB end-cap on each side with a row of white LEDs in
//! between. On the wire a frame is always 19 values:
//! `LR LG LB W0 .. W12 RR RG RB`.

use core::fmt;

use rgb::RGB16;

use crate::intensity::{Intensity, MAX_INTENSITY, is_in_range};

/// Number of white LEDs between the end-caps
pub const WHITE_COUNT: usize = 13;

/// Index of the middle white LED
pub const MIDDLE_WHITE: usize = WHITE_COUNT / 2;

/// Index of the right-most white LED
pub const LAST_WHITE: usize = WHITE_COUNT - 1;

/// Number of channel values in one strip frame
pub const STRIP_LEN: usize = 3 + WHITE_COUNT + 3;

/// White LED intensities, left to right
pub type WhiteLeds = [Intensity; WHITE_COUNT];

/// Color of an RGB end-cap
pub type EndCap = RGB16;

/// Returns a white vector with every LED off
pub const fn dark_whites() -> WhiteLeds {
    [0; WHITE_COUNT]
}

/// Error returned when raw values do not form a valid strip frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Wrong number of values
    WrongLength(usize),
    /// Value above the 12-bit range
    OutOfRange { index: usize, value: Intensity },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "strip frame needs {STRIP_LEN} values, got {len}")
            }
            Self::OutOfRange { index, value } => {
                write!(
                    f,
                    "value {value} at position {index} exceeds {MAX_INTENSITY}"
                )
            }
        }
    }
}

/// Full state of the light bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StripFrame {
    pub left: EndCap,
    pub whites: WhiteLeds,
    pub right: EndCap,
}

impl StripFrame {
    /// Frame with every channel off
    pub const fn dark() -> Self {
        Self {
            left: EndCap::new(0, 0, 0),
            whites: dark_whites(),
            right: EndCap::new(0, 0, 0),
        }
    }

    /// Build a frame from the 19 wire-ordered values
    pub fn from_values(values: &[Intensity]) -> Result<Self, FrameError> {
        if values.len() != STRIP_LEN {
            return Err(FrameError::WrongLength(values.len()));
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, value)| !is_in_range(**value))
        {
            return Err(FrameError::OutOfRange { index, value });
        }

        let mut whites = dark_whites();
        whites.copy_from_slice(&values[3..3 + WHITE_COUNT]);
        let right = &values[3 + WHITE_COUNT..];

        Ok(Self {
            left: EndCap::new(values[0], values[1], values[2]),
            whites,
            right: EndCap::new(right[0], right[1], right[2]),
        })
    }

    /// Build a frame from separate end-caps and whites
    pub fn from_parts(left: EndCap, whites: WhiteLeds, right: EndCap) -> Result<Self, FrameError> {
        let frame = Self {
            left,
            whites,
            right,
        };
        frame.validate()?;
        Ok(frame)
    }

    /// Check every channel value against the 12-bit range
    pub fn validate(&self) -> Result<(), FrameError> {
        match self
            .values()
            .into_iter()
            .enumerate()
            .find(|(_, value)| !is_in_range(*value))
        {
            Some((index, value)) => Err(FrameError::OutOfRange { index, value }),
            None => Ok(()),
        }
    }

    /// Channel values in wire order
    pub fn values(&self) -> [Intensity; STRIP_LEN] {
        let mut values = [0; STRIP_LEN];
        values[..3].copy_from_slice(&[self.left.r, self.left.g, self.left.b]);
        values[3..3 + WHITE_COUNT].copy_from_slice(&self.whites);
        values[3 + WHITE_COUNT..].copy_from_slice(&[self.right.r, self.right.g, self.right.b]);
        values
    }

    /// Set both end-caps to the same color
    pub fn set_end_caps(&mut self, color: EndCap) {
        self.left = color;
        self.right = color;
    }

    /// Turn every channel off
    pub fn clear(&mut self) {
        *self = Self::dark();
    }
}
