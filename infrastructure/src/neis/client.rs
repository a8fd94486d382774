//! NEIS meal fetcher over HTTP

use super::{
    DEFAULT_API_URL, DEFAULT_OFFICE_CODE, DEFAULT_RELAY_URL, DEFAULT_SCHOOL_CODE,
    DEFAULT_USER_AGENT,
};
use async_trait::async_trait;
use meal_application::{FetchError, MealSource};
use meal_domain::QueryKey;
use reqwest::Url;
use tracing::debug;

const OFFICE_CODE_PARAM: &str = "ATPT_OFCDC_SC_CODE";
const SCHOOL_CODE_PARAM: &str = "SD_SCHUL_CODE";
const DATE_PARAM: &str = "MLSV_YMD";
const RELAY_TARGET_PARAM: &str = "url";

/// Endpoint and school identification for [`NeisMealClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeisClientConfig {
    pub api_url: String,
    pub office_code: String,
    pub school_code: String,
    /// Relay endpoint, or `None` to call the API directly
    pub relay_url: Option<String>,
    pub user_agent: String,
}

impl Default for NeisClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            office_code: DEFAULT_OFFICE_CODE.to_string(),
            school_code: DEFAULT_SCHOOL_CODE.to_string(),
            relay_url: Some(DEFAULT_RELAY_URL.to_string()),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl NeisClientConfig {
    pub fn without_relay(mut self) -> Self {
        self.relay_url = None;
        self
    }
}

/// Fetches raw meal XML from the NEIS meal service
///
/// One GET per lookup. No retry and no client-side timeout; failures
/// go straight back to the caller.
pub struct NeisMealClient {
    client: reqwest::Client,
    config: NeisClientConfig,
}

impl NeisMealClient {
    pub fn new(config: NeisClientConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &NeisClientConfig {
        &self.config
    }

    /// The NEIS URL for a query key, before any relay wrapping
    pub fn api_url(&self, key: &QueryKey) -> Result<Url, FetchError> {
        Url::parse_with_params(
            &self.config.api_url,
            [
                (OFFICE_CODE_PARAM, self.config.office_code.as_str()),
                (SCHOOL_CODE_PARAM, self.config.school_code.as_str()),
                (DATE_PARAM, key.as_str()),
            ],
        )
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", self.config.api_url, e)))
    }

    /// The URL actually requested: the API URL, wrapped by the relay if one is set
    pub fn request_url(&self, key: &QueryKey) -> Result<Url, FetchError> {
        let target = self.api_url(key)?;

        match &self.config.relay_url {
            Some(relay) => Url::parse_with_params(relay, [(RELAY_TARGET_PARAM, target.as_str())])
                .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", relay, e))),
            None => Ok(target),
        }
    }
}

#[async_trait]
impl MealSource for NeisMealClient {
    async fn fetch(&self, key: &QueryKey) -> Result<String, FetchError> {
        let url = self.request_url(key)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to fetch meal data: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to read response body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const MEAL_PATH: &str = "/hub/mealServiceDietInfo";

    fn key() -> QueryKey {
        QueryKey::from_iso_date("2024-03-15")
    }

    fn direct_config(base: &str) -> NeisClientConfig {
        NeisClientConfig {
            api_url: format!("{}{}", base, MEAL_PATH),
            ..NeisClientConfig::default()
        }
        .without_relay()
    }

    #[test]
    fn test_api_url_carries_codes_and_key() {
        let client = NeisMealClient::new(NeisClientConfig::default()).unwrap();
        let url = client.api_url(&key()).unwrap();

        assert_eq!(
            url.as_str(),
            "https://open.neis.go.kr/hub/mealServiceDietInfo\
             ?ATPT_OFCDC_SC_CODE=J10&SD_SCHUL_CODE=7530079&MLSV_YMD=20240315"
        );
    }

    #[test]
    fn test_request_url_wraps_through_relay() {
        let client = NeisMealClient::new(NeisClientConfig::default()).unwrap();
        let url = client.request_url(&key()).unwrap();

        assert_eq!(url.host_str(), Some("api.allorigins.win"));
        assert_eq!(url.path(), "/raw");

        let target: Vec<_> = url
            .query_pairs()
            .filter(|(k, _)| k == "url")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(
            target,
            vec![client.api_url(&key()).unwrap().to_string()]
        );
        // Encoded, not spliced in raw
        assert!(url.as_str().contains("url=https%3A%2F%2Fopen.neis.go.kr"));
    }

    #[test]
    fn test_request_url_without_relay_is_api_url() {
        let client = NeisMealClient::new(NeisClientConfig::default().without_relay()).unwrap();
        assert_eq!(
            client.request_url(&key()).unwrap(),
            client.api_url(&key()).unwrap()
        );
    }

    #[test]
    fn test_invalid_api_url() {
        let config = NeisClientConfig {
            api_url: "not a url".to_string(),
            ..NeisClientConfig::default()
        };
        let client = NeisMealClient::new(config).unwrap();
        assert!(matches!(
            client.request_url(&key()),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_returns_body_unchanged() {
        let mut server = Server::new_async().await;
        let body = "<mealServiceDietInfo><row><MMEAL_SC_NM>중식</MMEAL_SC_NM></row></mealServiceDietInfo>";

        let mock = server
            .mock("GET", MEAL_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("ATPT_OFCDC_SC_CODE".into(), "J10".into()),
                Matcher::UrlEncoded("SD_SCHUL_CODE".into(), "7530079".into()),
                Matcher::UrlEncoded("MLSV_YMD".into(), "20240315".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "text/xml;charset=UTF-8")
            .with_body(body)
            .create_async()
            .await;

        let client = NeisMealClient::new(direct_config(&server.url())).unwrap();
        let fetched = client.fetch(&key()).await.unwrap();

        assert_eq!(fetched, body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_through_relay_forwards_target_url() {
        let mut server = Server::new_async().await;
        let config = NeisClientConfig {
            relay_url: Some(format!("{}/raw", server.url())),
            ..NeisClientConfig::default()
        };
        let client = NeisMealClient::new(config).unwrap();
        let target = client.api_url(&key()).unwrap().to_string();

        let mock = server
            .mock("GET", "/raw")
            .match_query(Matcher::UrlEncoded("url".into(), target))
            .with_status(200)
            .with_body("<RESULT><CODE>INFO-200</CODE></RESULT>")
            .create_async()
            .await;

        let fetched = client.fetch(&key()).await.unwrap();

        assert_eq!(fetched, "<RESULT><CODE>INFO-200</CODE></RESULT>");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", MEAL_PATH)
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("unavailable")
            .expect(1)
            .create_async()
            .await;

        let client = NeisMealClient::new(direct_config(&server.url())).unwrap();
        let err = client.fetch(&key()).await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 503, .. }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_error() {
        // Port 1 is reserved and nothing listens there
        let client = NeisMealClient::new(direct_config("http://127.0.0.1:1")).unwrap();
        let err = client.fetch(&key()).await.unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
    }
}
