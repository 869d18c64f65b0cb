use crate::config::ProviderConfig;
use crate::error::{AccountCheckError, LookupError, Result};
use crate::http::{ProfileRequestBuilder, ProfileResponseConverter};
use crate::traits::ProfileLookup;
use crate::types::LookupOutcome;
use reqwest::Client;
use tracing::debug;

/// HikerAPI profile lookup client
#[derive(Clone)]
pub struct HikerClient {
    client: Client,
    request_builder: ProfileRequestBuilder,
    response_converter: ProfileResponseConverter,
}

impl HikerClient {
    /// Create a new client from provider configuration.
    ///
    /// Fails with [`AccountCheckError::MissingToken`] when no access key is
    /// configured.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let token = config
            .token()
            .ok_or(AccountCheckError::MissingToken)?
            .to_string();

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("account-check/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let request_builder = ProfileRequestBuilder::new(client.clone(), &config.base_url, token)?;
        let response_converter = ProfileResponseConverter::new();

        Ok(Self {
            client,
            request_builder,
            response_converter,
        })
    }
}

impl ProfileLookup for HikerClient {
    async fn fetch_profile(&self, username: &str) -> LookupOutcome {
        let request = self
            .request_builder
            .build_request(username)
            .map_err(LookupError::transport)?;

        debug!(username, url = %request.url(), "fetching profile");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(LookupError::transport)?;

        self.response_converter.convert_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_requires_token() {
        let config = ProviderConfig::default();
        assert!(matches!(
            HikerClient::new(&config),
            Err(AccountCheckError::MissingToken)
        ));

        let config = ProviderConfig {
            token: Some("token".to_string()),
            ..ProviderConfig::default()
        };
        assert!(HikerClient::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_profile_sends_access_key() {
        use wiremock::matchers::{header, method, path, query_param};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/user/by/username"))
            .and(query_param("username", "alice"))
            .and(header("x-access-key", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "pk": "123",
                "full_name": "Alice",
                "follower_count": 10,
                "following_count": 5
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HikerClient::new(&ProviderConfig {
            base_url: server.uri(),
            token: Some("secret".to_string()),
            ..ProviderConfig::default()
        })
        .unwrap();

        let record = client.fetch_profile("alice").await.unwrap().unwrap();
        assert_eq!(record.pk, Some(123));
        assert_eq!(record.full_name.as_deref(), Some("Alice"));
    }
}
