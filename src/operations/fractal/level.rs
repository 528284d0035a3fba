use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigError;

/// A recursion depth validated to the range the viewer accepts.
///
/// The generators themselves take a raw `u32`; this type is what every
/// user-facing boundary (HTTP query, CLI flag, server default) parses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RecursionLevel(u32);

impl RecursionLevel {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 4;
    pub const DEFAULT: u32 = 1;

    /// Returns the raw depth.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for RecursionLevel {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<i64> for RecursionLevel {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u32::try_from(value) {
            Ok(level) if (Self::MIN..=Self::MAX).contains(&level) => Ok(Self(level)),
            _ => Err(ConfigError::LevelOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            }),
        }
    }
}

impl TryFrom<u32> for RecursionLevel {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl FromStr for RecursionLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidLevel(s.to_owned()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for RecursionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
