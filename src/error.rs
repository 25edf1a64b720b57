use thiserror::Error;

use bridge_api::error::BridgeError;

#[derive(Error, Debug)]
pub enum ApiError {
    /* mapped errors */
    #[error(transparent)]
    ConfigError(#[from] config::ConfigError),

    #[error(transparent)]
    SetLoggerError(#[from] log::SetLoggerError),

    #[error(transparent)]
    BridgeError(#[from] BridgeError),

    #[error(transparent)]
    HueError(#[from] hue::error::HueError),

    /* validation errors */
    #[error("{invalid:?} are invalid. Valid lights: {valid:?}.")]
    InvalidLights {
        invalid: Vec<String>,
        valid: Vec<String>,
    },

    #[error("{invalid:?} are invalid. Valid rooms: {valid:?}.")]
    InvalidRooms {
        invalid: Vec<String>,
        valid: Vec<String>,
    },

    #[error("Room {room:?} refers to unknown light {id}")]
    UnknownLightId { room: String, id: u32 },
}

/// Rejected `state` argument. Reported by the argument parser, before the
/// bridge is contacted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Invalid state: {0:?} (expected on, off or a brightness from 1 to 254)")]
    Invalid(String),

    #[error("Brightness must be < 255 and > 0 (got {0})")]
    OutOfRange(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Process exit status for the outcome of a run. Usage errors never get
/// here: clap exits with status 2 while parsing arguments.
#[must_use]
pub const fn exit_code(res: &ApiResult<()>) -> u8 {
    match res {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
