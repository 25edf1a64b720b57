use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::brightness::Brightness;
use crate::error::{HueApiV1Error, HueError, HueResult};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiLightState {
    pub on: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bri: Option<u8>,
    #[serde(default)]
    pub reachable: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiLight {
    pub name: String,
    #[serde(rename = "type", default)]
    pub light_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modelid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturername: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniqueid: Option<String>,
    pub state: ApiLightState,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ApiGroupType {
    Entertainment,
    Luminaire,
    LightGroup,
    LightSource,
    Room,
    Zone,
    #[serde(other)]
    Other,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiGroup {
    pub name: String,
    #[serde(default)]
    pub lights: Vec<String>,
    #[serde(rename = "type")]
    pub group_type: ApiGroupType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl ApiGroup {
    /// Light ids of this group, parsed from their string form
    pub fn light_ids(&self) -> HueResult<Vec<u32>> {
        self.lights
            .iter()
            .map(|id| id.parse().map_err(|_| HueError::V1InvalidId(id.clone())))
            .collect()
    }
}

/// Subset of `GET /api/<username>` needed to address lights and rooms.
///
/// The bridge also returns config, scenes, rules, schedules, sensors and
/// resourcelinks in this reply. Those are ignored.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ApiUserConfig {
    #[serde(default)]
    pub lights: BTreeMap<u32, ApiLight>,
    #[serde(default)]
    pub groups: BTreeMap<u32, ApiGroup>,
}

/// Body of `PUT /api/<username>/lights/<id>/state`
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApiLightStateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bri: Option<Brightness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitiontime: Option<u16>,
}

impl ApiLightStateUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_on(self, on: bool) -> Self {
        Self {
            on: Some(on),
            ..self
        }
    }

    #[must_use]
    pub const fn with_brightness(self, bri: Option<Brightness>) -> Self {
        Self { bri, ..self }
    }

    #[must_use]
    pub const fn with_transitiontime(self, transitiontime: Option<u16>) -> Self {
        Self {
            transitiontime,
            ..self
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HueApiV1ErrorReply {
    #[serde(rename = "type")]
    pub error_type: u32,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

impl HueApiV1ErrorReply {
    #[must_use]
    pub const fn kind(&self) -> Option<HueApiV1Error> {
        HueApiV1Error::from_error_code(self.error_type)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HueApiResult<T> {
    Success(T),
    Error(HueApiV1ErrorReply),
}

/// Reply to a v1 GET request.
///
/// The bridge reports failures (bad username, unknown resource) with status
/// 200 and a list of error objects, where the resource itself was expected.
#[derive(Debug, Clone)]
pub enum V1Response<T> {
    Errors(Vec<HueApiResult<Value>>),
    Ok(T),
}

impl<T: DeserializeOwned> V1Response<T> {
    /// Decode a reply whose expected resource is a json object.
    ///
    /// The body is read as a [`Value`] before picking a variant, since
    /// buffering it through serde's untagged enum support turns map keys
    /// into strings, and numeric resource ids would no longer parse.
    pub fn from_value(value: Value) -> HueResult<Self> {
        if value.is_array() {
            Ok(Self::Errors(serde_json::from_value(value)?))
        } else {
            Ok(Self::Ok(serde_json::from_value(value)?))
        }
    }

    pub fn from_slice(body: &[u8]) -> HueResult<Self> {
        Self::from_value(serde_json::from_slice(body)?)
    }
}

impl<T> V1Response<T> {
    /// Returns the first reported error, if any
    pub fn into_result(self) -> Result<T, HueApiV1ErrorReply> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Errors(errors) => Err(errors
                .into_iter()
                .find_map(|res| match res {
                    HueApiResult::Error(err) => Some(err),
                    HueApiResult::Success(_) => None,
                })
                .unwrap_or_else(|| HueApiV1ErrorReply {
                    error_type: HueApiV1Error::BridgeInternalError.error_code(),
                    address: String::new(),
                    description: "unexpected list reply".to_string(),
                })),
        }
    }
}
