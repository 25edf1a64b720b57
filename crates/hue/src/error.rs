use thiserror::Error;

#[derive(Error, Debug)]
pub enum HueError {
    /* mapped errors */
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error("Brightness must be < 255 and > 0 (got {0})")]
    BrightnessOutOfRange(u64),

    #[error("Invalid v1 resource id: {0:?}")]
    V1InvalidId(String),
}

/// Error types for Hue Bridge v1 API
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueApiV1Error {
    /// Type 1
    #[error("Unauthorized")]
    UnauthorizedUser = 1,

    /// Type 2
    #[error("Body contains invalid JSON")]
    BodyContainsInvalidJson = 2,

    /// Type 3
    #[error("Resource not found")]
    ResourceNotfound = 3,

    /// Type 4
    #[error("Method not available for resource")]
    MethodNotAvailableForResource = 4,

    /// Type 5
    #[error("Missing parameters in body")]
    MissingParametersInBody = 5,

    /// Type 6
    #[error("Parameter not available")]
    ParameterNotAvailable = 6,

    /// Type 7
    #[error("Invalid value for parameter")]
    InvalidValueForParameter = 7,

    /// Type 8
    #[error("Parameter not modifiable")]
    ParameterNotModifiable = 8,

    /// Type 11
    #[error("Too many items in list")]
    TooManyItemsInList = 11,

    /// Type 12
    #[error("Portal connection is required")]
    PortalConnectionIsRequired = 12,

    /// Type 201
    #[error("Parameter not modifiable, device is set to off")]
    DeviceIsOff = 201,

    /// Type 901
    #[error("Internal bridge error")]
    BridgeInternalError = 901,
}

impl HueApiV1Error {
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        *self as u32
    }

    #[must_use]
    pub const fn from_error_code(code: u32) -> Option<Self> {
        let err = match code {
            1 => Self::UnauthorizedUser,
            2 => Self::BodyContainsInvalidJson,
            3 => Self::ResourceNotfound,
            4 => Self::MethodNotAvailableForResource,
            5 => Self::MissingParametersInBody,
            6 => Self::ParameterNotAvailable,
            7 => Self::InvalidValueForParameter,
            8 => Self::ParameterNotModifiable,
            11 => Self::TooManyItemsInList,
            12 => Self::PortalConnectionIsRequired,
            201 => Self::DeviceIsOff,
            901 => Self::BridgeInternalError,
            _ => return None,
        };
        Some(err)
    }
}

pub type HueResult<T> = Result<T, HueError>;

#[cfg(test)]
mod tests {
    use crate::error::HueApiV1Error;

    #[test]
    fn error_code_roundtrip() {
        for code in [1, 2, 3, 4, 5, 6, 7, 8, 11, 12, 201, 901] {
            let err = HueApiV1Error::from_error_code(code).unwrap();
            assert_eq!(err.error_code(), code);
        }
    }

    #[test]
    fn error_code_unknown() {
        assert_eq!(HueApiV1Error::from_error_code(0), None);
        assert_eq!(HueApiV1Error::from_error_code(301), None);
    }
}
