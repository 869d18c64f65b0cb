use crate::error::{AccountCheckError, Result};
use reqwest::{Client, Request};
use url::Url;

/// Path of the HikerAPI "user by username" endpoint
pub const USER_BY_USERNAME_PATH: &str = "/v1/user/by/username";

/// Builds provider requests for a username lookup
#[derive(Clone)]
pub struct ProfileRequestBuilder {
    client: Client,
    endpoint: Url,
    token: String,
}

impl ProfileRequestBuilder {
    /// Create a new request builder for the given provider base URL
    pub fn new(client: Client, base_url: &str, token: String) -> Result<Self> {
        let full_url = format!("{}{}", base_url.trim_end_matches('/'), USER_BY_USERNAME_PATH);
        let endpoint = Url::parse(&full_url).map_err(|e| {
            AccountCheckError::invalid_config(format!(
                "Cannot build lookup endpoint from '{}': {}",
                base_url, e
            ))
        })?;

        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    /// Endpoint requests are sent to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the lookup request for one username
    pub fn build_request(&self, username: &str) -> Result<Request> {
        self.client
            .get(self.endpoint.clone())
            .query(&[("username", username)])
            .header("x-access-key", &self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .build()
            .map_err(Into::into)
    }
}
