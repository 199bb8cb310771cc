use super::error::ApiClientError;
use crate::config::ApiConfig;
use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Thin typed wrapper over the records backend. One instance per
/// process; per-resource operations live in sibling modules as impl
/// blocks on this type.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiClientError> {
        debug!("GET {}", path);
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiClientError> {
        debug!("POST {}", path);
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiClientError> {
        debug!("PUT {}", path);
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiClientError> {
        debug!("DELETE {}", path);
        let response = self.http.delete(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        if response.status().is_success() {
            Ok(response.json::<T>().await?)
        } else {
            Err(ApiClientError::from_response(response).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Patient;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: format!("{}/api", server.uri()),
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn success_decodes_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/patients/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "patient_id": 7,
                "first_name": "Ana",
                "last_name": "Silva",
                "date_of_birth": "1984-03-12",
                "gender": "F",
                "address": "12 Elm St",
                "phone": "555-0199"
            })))
            .mount(&server)
            .await;

        let patient: Patient = client_for(&server).get_json("/patients/7").await.unwrap();
        assert_eq!(patient.patient_id, Some(7));
    }

    #[tokio::test]
    async fn not_found_detail_becomes_the_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/patients/99"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"detail": "Patient not found"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_json::<Patient>("/patients/99")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Patient not found");
    }

    #[tokio::test]
    async fn non_json_error_body_gets_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/patients/1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_json::<Patient>("/patients/1")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "An error occurred with the API");
    }

    #[tokio::test]
    async fn unreachable_server_is_no_response() {
        // Nothing listens on this port.
        let client = ApiClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:9/api".to_string(),
            timeout_seconds: 1,
        })
        .unwrap();

        let err = client.get_json::<Patient>("/patients/1").await.unwrap_err();
        assert!(matches!(err, ApiClientError::NoResponse));
        assert_eq!(err.to_string(), "No response received from server");
    }
}
