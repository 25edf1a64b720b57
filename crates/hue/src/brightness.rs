use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HueError, HueResult};

/// Light brightness, as used by the legacy api (`bri`).
///
/// The bridge accepts values from 1 (dimmest, but still on) to 254
/// (brightest). Zero is not a brightness; use `on: false` instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Brightness(u8);

impl Brightness {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(254);

    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(value: u64) -> HueResult<Self> {
        if value < Self::MIN.0 as u64 || value > Self::MAX.0 as u64 {
            return Err(HueError::BrightnessOutOfRange(value));
        }
        Ok(Self(value as u8))
    }
}

impl TryFrom<u8> for Brightness {
    type Error = HueError;

    fn try_from(value: u8) -> HueResult<Self> {
        Self::new(u64::from(value))
    }
}

impl From<Brightness> for u8 {
    fn from(value: Brightness) -> Self {
        value.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
