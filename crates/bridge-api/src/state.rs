use hue::legacy_api::ApiUserConfig;

use crate::Client;
use crate::error::BridgeResult;

impl Client {
    /// Fetch lights and groups in a single request
    pub async fn get_full_state(&self) -> BridgeResult<ApiUserConfig> {
        self.get("").await
    }
}
