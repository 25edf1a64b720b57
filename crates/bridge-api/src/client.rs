use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use hue::legacy_api::V1Response;

use crate::error::BridgeResult;

/// Client for the legacy (v1) api of a single bridge user
#[derive(Clone, Debug)]
pub struct Client {
    client: reqwest::Client,
    base: Url,
}

impl Client {
    pub fn new(host: &str, username: &str, timeout: Duration) -> BridgeResult<Self> {
        let base = Self::base_url(host, username)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    /// Url of the user's api root. Always ends with a slash, so relative
    /// resource paths can be joined onto it.
    pub fn base_url(host: &str, username: &str) -> BridgeResult<Url> {
        let mut url = Url::parse(&format!("http://{host}/"))?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["api", username, ""]);
        Ok(url)
    }

    /// Url of a resource below the user's api root. The root itself is
    /// addressed by an empty path, and has no trailing slash.
    pub fn url(&self, path: &str) -> BridgeResult<Url> {
        if path.is_empty() {
            let mut url = self.base.clone();
            url.path_segments_mut()
                .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
                .pop_if_empty();
            return Ok(url);
        }
        Ok(self.base.join(path)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> BridgeResult<T> {
        log::debug!("GET /{path}");
        let body = self
            .client
            .get(self.url(path)?)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Self::decode(&body)
    }

    /// Decode the body of a GET reply, turning a bridge error list into
    /// [`crate::error::BridgeError::ApiError`]
    pub fn decode<T: DeserializeOwned>(body: &[u8]) -> BridgeResult<T> {
        Ok(V1Response::<T>::from_slice(body)?.into_result()?)
    }

    pub async fn put<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        value: &T,
    ) -> BridgeResult<R> {
        log::debug!("PUT /{path}");
        Ok(self
            .client
            .put(self.url(path)?)
            .json(value)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }
}
