use serde_json::Value;

use hue::legacy_api::{ApiLightStateUpdate, HueApiResult};

use crate::Client;
use crate::error::BridgeResult;

impl Client {
    /// Update the state of a single light.
    ///
    /// The bridge replies with one entry per changed attribute. Entries can
    /// individually fail (e.g. setting brightness on an unreachable light),
    /// so the reply is returned as-is for the caller to inspect.
    pub async fn put_light_state(
        &self,
        id: u32,
        upd: &ApiLightStateUpdate,
    ) -> BridgeResult<Vec<HueApiResult<Value>>> {
        self.put(&format!("lights/{id}/state"), upd).await
    }
}
