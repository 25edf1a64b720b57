use async_trait::async_trait;

use bridge_api::Client;
use hue::legacy_api::{ApiLightStateUpdate, HueApiResult};

use crate::command::Action;
use crate::error::ApiResult;
use crate::snapshot::BridgeSnapshot;

#[async_trait]
pub trait Bridge {
    async fn get_state(&self) -> ApiResult<BridgeSnapshot>;

    async fn set_light_state(&self, ids: &[u32], action: &Action) -> ApiResult<()>;
}

#[async_trait]
impl Bridge for Client {
    async fn get_state(&self) -> ApiResult<BridgeSnapshot> {
        self.get_full_state().await?.try_into()
    }

    async fn set_light_state(&self, ids: &[u32], action: &Action) -> ApiResult<()> {
        let upd = ApiLightStateUpdate::from(action);

        for &id in ids {
            let reply = self.put_light_state(id, &upd).await?;

            /* per-attribute failures (unreachable light, etc) are not fatal */
            for res in reply {
                if let HueApiResult::Error(err) = res {
                    log::warn!("Light {id}: {} ({})", err.description, err.address);
                }
            }
        }

        Ok(())
    }
}
