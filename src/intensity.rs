//! Single channel intensity model
//!
//! Every LED channel of the light bar is driven by a 12-bit PWM duty cycle.
//! Patterns only ever write one of the named levels below (or zero).

/// Raw PWM duty cycle of one LED channel (0..=[`MAX_INTENSITY`])
pub type Intensity = u16;

/// Full duty cycle
pub const MAX_INTENSITY: Intensity = 4095;

/// Lowest visible level
pub const DIM_INTENSITY: Intensity = MAX_INTENSITY / 16;

pub const LEVEL_1_INTENSITY: Intensity = DIM_INTENSITY * 2;
pub const LEVEL_2_INTENSITY: Intensity = DIM_INTENSITY * 3;
pub const LEVEL_3_INTENSITY: Intensity = DIM_INTENSITY * 4;

/// Half duty cycle
pub const MID_INTENSITY: Intensity = MAX_INTENSITY / 2;

/// Three quarters duty cycle
pub const BRIGHT_INTENSITY: Intensity = MAX_INTENSITY * 3 / 4;

/// All named non-zero levels, dimmest first
pub const LEVELS: [Intensity; 7] = [
    DIM_INTENSITY,
    LEVEL_1_INTENSITY,
    LEVEL_2_INTENSITY,
    LEVEL_3_INTENSITY,
    MID_INTENSITY,
    BRIGHT_INTENSITY,
    MAX_INTENSITY,
];

/// Returns true if `value` is zero or one of the named levels
pub fn is_named_level(value: Intensity) -> bool {
    value == 0 || LEVELS.contains(&value)
}

/// Returns true if `value` fits the 12-bit channel range
pub const fn is_in_range(value: Intensity) -> bool {
    value <= MAX_INTENSITY
}
