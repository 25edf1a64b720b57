use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::str::FromStr;

use hue::brightness::Brightness;
use hue::legacy_api::ApiLightStateUpdate;

use crate::error::StateError;

/// Requested light state, as given on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LightState {
    On,
    Off,
    Brightness(Brightness),
}

impl FromStr for LightState {
    type Err = StateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("on") {
            return Ok(Self::On);
        }

        if value.eq_ignore_ascii_case("off") {
            return Ok(Self::Off);
        }

        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(StateError::Invalid(value.to_string()));
        }

        /* all digits, so parsing can only fail on overflow */
        let number = value.parse::<u64>().unwrap_or(u64::MAX);

        Brightness::new(number)
            .map(Self::Brightness)
            .map_err(|_| StateError::OutOfRange(value.to_string()))
    }
}

impl Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "on"),
            Self::Off => write!(f, "off"),
            Self::Brightness(bri) => write!(f, "brightness {bri}"),
        }
    }
}

/// State change sent to every targeted light
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub on: bool,
    pub brightness: Option<Brightness>,
    pub transition: Option<u16>,
}

impl Action {
    /// A light must be on for its brightness to be set, so any brightness
    /// also turns the light on.
    #[must_use]
    pub fn new(state: LightState, transition: Option<u16>) -> Self {
        let (on, brightness) = match state {
            LightState::On => (true, None),
            LightState::Off => (false, None),
            LightState::Brightness(bri) => (true, Some(bri)),
        };

        Self {
            on,
            brightness,
            transition: transition.filter(|&time| time != 0),
        }
    }
}

impl From<&Action> for ApiLightStateUpdate {
    fn from(action: &Action) -> Self {
        Self::new()
            .with_on(action.on)
            .with_brightness(action.brightness)
            .with_transitiontime(action.transition)
    }
}

/// What the user asked for: a state, and which lights to apply it to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub state: LightState,
    pub transition: Option<u16>,
    pub lights: Option<BTreeSet<String>>,
    pub rooms: Option<BTreeSet<String>>,
}

/// One group of lights to apply the action to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    All,
    Lights(BTreeSet<String>),
    Rooms(BTreeSet<String>),
}

impl Command {
    #[must_use]
    pub fn action(&self) -> Action {
        Action::new(self.state, self.transition)
    }

    /// Targets in the order they are applied: lights before rooms. With
    /// neither given, every light is targeted.
    #[must_use]
    pub fn targets(&self) -> Vec<Target> {
        if self.lights.is_none() && self.rooms.is_none() {
            return vec![Target::All];
        }

        let lights = self.lights.clone().map(Target::Lights);
        let rooms = self.rooms.clone().map(Target::Rooms);

        lights.into_iter().chain(rooms).collect()
    }
}
