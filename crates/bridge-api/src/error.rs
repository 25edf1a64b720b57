use thiserror::Error;

use hue::legacy_api::HueApiV1ErrorReply;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),

    #[error(transparent)]
    HueError(#[from] hue::error::HueError),

    #[error("Bridge error {} at {:?}: {}", .0.error_type, .0.address, .0.description)]
    ApiError(HueApiV1ErrorReply),
}

impl From<HueApiV1ErrorReply> for BridgeError {
    fn from(value: HueApiV1ErrorReply) -> Self {
        Self::ApiError(value)
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;
