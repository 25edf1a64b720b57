use std::collections::BTreeSet;

use camino::Utf8PathBuf;
use clap::Parser;

use crate::command::{Command, LightState};

/// Hue Control.
///
/// Switch Philips Hue lights on or off, or set their brightness. Lights can
/// be selected by name (-l), by room (-r), or both. Without either, every
/// light on the bridge is changed.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// The state to set the light(s) to - may be on/off or a brightness from 1 to 254
    pub state: LightState,

    /// A light or set of lights to apply the new state to (may be repeated)
    #[arg(short, long = "light", value_name = "NAME", num_args = 1..)]
    pub lights: Vec<String>,

    /// A room or set of rooms to apply the new state to (may be repeated)
    #[arg(short, long = "room", value_name = "NAME", num_args = 1..)]
    pub rooms: Vec<String>,

    /// Transition time, in steps of 100ms
    #[arg(short, long, value_name = "TIME")]
    pub transition: Option<u16>,

    /// Configuration file
    #[arg(short, long, default_value = "huectl.yaml")]
    pub config: Utf8PathBuf,

    /// Bridge hostname or address (overrides configuration)
    #[arg(long)]
    pub host: Option<String>,

    /// Bridge api username (overrides configuration)
    #[arg(long)]
    pub username: Option<String>,
}

fn name_set(names: &[String]) -> Option<BTreeSet<String>> {
    (!names.is_empty()).then(|| names.iter().cloned().collect())
}

impl Args {
    #[must_use]
    pub fn to_command(&self) -> Command {
        Command {
            state: self.state,
            transition: self.transition,
            lights: name_set(&self.lights),
            rooms: name_set(&self.rooms),
        }
    }
}
