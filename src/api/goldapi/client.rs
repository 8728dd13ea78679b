use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::debug;

use super::models::PricePoint;
use crate::api::{ApiError, PriceSource};
use crate::services::price_service::ounce_to_gram;

/// GoldAPI client for the XAU/INR spot price
pub struct GoldApiClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
}

impl GoldApiClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.goldapi.io/api";
    const SYMBOL_PATH: &'static str = "XAU/INR";

    /// Create a new client with custom base URL
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self::with_http_client(HttpClient::new(), api_key, base_url)
    }

    pub fn with_http_client(http_client: HttpClient, api_key: String, base_url: String) -> Self {
        Self {
            http_client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn create_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let token = HeaderValue::from_str(&self.api_key)
            .map_err(|e| ApiError::Request(format!("Failed to create access token header: {}", e)))?;
        headers.insert("x-access-token", token);

        Ok(headers)
    }

    /// GET /XAU/INR
    ///
    /// Returns the spot price in INR per troy ounce.
    pub async fn get_spot_price(&self) -> Result<PricePoint, ApiError> {
        let url = format!("{}/{}", self.base_url, Self::SYMBOL_PATH);
        let headers = self.create_headers()?;

        debug!("Fetching gold spot price from {}", url);

        let response = self
            .http_client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(ApiError::from_send)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;

        serde_json::from_str::<PricePoint>(&body)
            .map_err(|e| ApiError::Decode(format!("Failed to parse price response: {}", e)))
    }
}

#[async_trait]
impl PriceSource for GoldApiClient {
    async fn fetch_price_per_gram(&self) -> Result<f64, ApiError> {
        let point = self.get_spot_price().await?;
        debug!("Spot price ₹{:.2} / oz", point.price);
        Ok(ounce_to_gram(point.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::{http_client, refused_base_url, CannedServer};
    use crate::utils::errors::exit_code;
    use crate::utils::JobError;

    fn client(base_url: String) -> GoldApiClient {
        GoldApiClient::with_http_client(http_client(), "goldapi-test-key".to_string(), base_url)
    }

    #[tokio::test]
    async fn test_fetch_converts_ounce_to_gram() {
        let server = CannedServer::start(
            "200 OK",
            r#"{"timestamp":1700000000,"metal":"XAU","currency":"INR","price":387000.0}"#,
        )
        .await;

        let per_gram = client(server.base_url.clone())
            .fetch_price_per_gram()
            .await
            .expect("price");

        assert!((per_gram - 387000.0 / 31.1035).abs() < 1e-9);

        let request = server.request().await;
        let lower = request.to_lowercase();
        assert!(request.starts_with("GET /XAU/INR HTTP/1.1"));
        assert!(lower.contains("x-access-token: goldapi-test-key"));
        assert!(lower.contains("content-type: application/json"));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = CannedServer::start("403 Forbidden", r#"{"error":"Invalid API Key"}"#).await;

        let err = client(server.base_url.clone())
            .fetch_price_per_gram()
            .await
            .unwrap_err();

        match err {
            ApiError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 403);
                assert!(body.contains("Invalid API Key"));
            }
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_body_without_price_is_decode_error() {
        let server = CannedServer::start("200 OK", r#"{"metal":"XAU"}"#).await;

        let err = client(server.base_url.clone())
            .fetch_price_per_gram()
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let err = client(refused_base_url().await)
            .fetch_price_per_gram()
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_unencodable_key_fails_before_sending() {
        let client = GoldApiClient::with_http_client(
            http_client(),
            "bad\nkey".to_string(),
            refused_base_url().await,
        );

        let err = client.get_spot_price().await.unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
        assert!(err.to_string().contains("access token header"));
        assert_eq!(JobError::PriceFetch(err).exit_code(), exit_code::UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_malformed_base_url_is_permanent() {
        let client = GoldApiClient::with_http_client(
            http_client(),
            "goldapi-test-key".to_string(),
            "not a url".to_string(),
        );

        let err = client.fetch_price_per_gram().await.unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
        assert!(!err.is_transient());
        assert_eq!(JobError::PriceFetch(err).exit_code(), exit_code::UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_only_200_is_success() {
        let server = CannedServer::start("203 Non-Authoritative Information", r#"{"price":387000.0}"#).await;

        let err = client(server.base_url.clone())
            .fetch_price_per_gram()
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::UnexpectedStatus { status: 203, .. }));
    }
}
