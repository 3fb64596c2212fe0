//! Speaking animation patterns
//!
//! The whole bar pulses through the named intensity levels.

use super::{Family, Pattern};
use crate::frame::WhiteLeds;
use crate::intensity::{
    BRIGHT_INTENSITY, DIM_INTENSITY, Intensity, LEVEL_1_INTENSITY, LEVEL_2_INTENSITY,
    LEVEL_3_INTENSITY, MAX_INTENSITY, MID_INTENSITY,
};

const PATTERN_NAME_ALL_DIM: &str = "ALL-DIM";
const PATTERN_NAME_ALL_INTENSITY_1: &str = "ALL-INTENSITY-1";
const PATTERN_NAME_ALL_INTENSITY_2: &str = "ALL-INTENSITY-2";
const PATTERN_NAME_ALL_INTENSITY_3: &str = "ALL-INTENSITY-3";
const PATTERN_NAME_ALL_MID: &str = "ALL-MID";
const PATTERN_NAME_ALL_BRIGHT: &str = "ALL-BRIGHT";
const PATTERN_NAME_ALL: &str = "ALL";
const PATTERN_NAME_NONE: &str = "NONE";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeakingPattern {
    AllDim,
    AllIntensity1,
    AllIntensity2,
    AllIntensity3,
    AllMid,
    AllBright,
    All,
    None,
}

impl SpeakingPattern {
    /// Level every white LED is set to
    pub const fn level(self) -> Intensity {
        match self {
            Self::AllDim => DIM_INTENSITY,
            Self::AllIntensity1 => LEVEL_1_INTENSITY,
            Self::AllIntensity2 => LEVEL_2_INTENSITY,
            Self::AllIntensity3 => LEVEL_3_INTENSITY,
            Self::AllMid => MID_INTENSITY,
            Self::AllBright => BRIGHT_INTENSITY,
            Self::All => MAX_INTENSITY,
            Self::None => 0,
        }
    }
}

impl Pattern for SpeakingPattern {
    const FAMILY: Family = Family::Speaking;

    // Rises to full and falls back; ALL-BRIGHT is not part of the pulse
    const SEQUENCE: &'static [Self] = &[
        Self::AllDim,
        Self::AllIntensity1,
        Self::AllIntensity2,
        Self::AllIntensity3,
        Self::AllMid,
        Self::All,
        Self::All,
        Self::AllMid,
        Self::AllIntensity3,
        Self::AllIntensity2,
        Self::AllIntensity1,
        Self::AllDim,
    ];

    fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_ALL_DIM => Some(Self::AllDim),
            PATTERN_NAME_ALL_INTENSITY_1 => Some(Self::AllIntensity1),
            PATTERN_NAME_ALL_INTENSITY_2 => Some(Self::AllIntensity2),
            PATTERN_NAME_ALL_INTENSITY_3 => Some(Self::AllIntensity3),
            PATTERN_NAME_ALL_MID => Some(Self::AllMid),
            PATTERN_NAME_ALL_BRIGHT => Some(Self::AllBright),
            PATTERN_NAME_ALL => Some(Self::All),
            PATTERN_NAME_NONE => Some(Self::None),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::AllDim => PATTERN_NAME_ALL_DIM,
            Self::AllIntensity1 => PATTERN_NAME_ALL_INTENSITY_1,
            Self::AllIntensity2 => PATTERN_NAME_ALL_INTENSITY_2,
            Self::AllIntensity3 => PATTERN_NAME_ALL_INTENSITY_3,
            Self::AllMid => PATTERN_NAME_ALL_MID,
            Self::AllBright => PATTERN_NAME_ALL_BRIGHT,
            Self::All => PATTERN_NAME_ALL,
            Self::None => PATTERN_NAME_NONE,
        }
    }

    fn apply(self, leds: &mut WhiteLeds) {
        leds.fill(self.level());
    }
}
