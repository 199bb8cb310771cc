use super::client::ApiClient;
use super::error::ApiClientError;
use super::models::{DeleteOutcome, MedicalRecord};

impl ApiClient {
    pub async fn get_medical_record(&self, id: i64) -> Result<MedicalRecord, ApiClientError> {
        self.get_json(&format!("/medical_records/{id}")).await
    }

    pub async fn create_medical_record(
        &self,
        record: &MedicalRecord,
    ) -> Result<MedicalRecord, ApiClientError> {
        self.post_json("/medical_records/", record).await
    }

    pub async fn update_medical_record(
        &self,
        id: i64,
        record: &MedicalRecord,
    ) -> Result<MedicalRecord, ApiClientError> {
        self.put_json(&format!("/medical_records/{id}"), record).await
    }

    pub async fn delete_medical_record(&self, id: i64) -> Result<DeleteOutcome, ApiClientError> {
        self.delete_json(&format!("/medical_records/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record() -> serde_json::Value {
        serde_json::json!({
            "record_id": 31,
            "patient_id": 7,
            "doctor_id": 2,
            "diagnosis": "Sprain",
            "treatment": "Rest",
            "record_date": "2025-10-01"
        })
    }

    #[tokio::test]
    async fn get_and_update_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/medical_records/31"))
            .respond_with(ResponseTemplate::new(200).set_body_json(record()))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/medical_records/31"))
            .respond_with(ResponseTemplate::new(200).set_body_json(record()))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&ApiConfig {
            base_url: format!("{}/api", server.uri()),
            timeout_seconds: 5,
        })
        .unwrap();

        let mut fetched = client.get_medical_record(31).await.unwrap();
        fetched.treatment = "Rest and ice".to_string();
        let updated = client.update_medical_record(31, &fetched).await.unwrap();
        assert_eq!(updated.record_id, Some(31));
    }
}
