use super::client::ApiClient;
use super::error::ApiClientError;
use super::models::{DeleteOutcome, InsurancePolicy};

impl ApiClient {
    /// Policies are keyed by patient on the backend; there is no global
    /// policy listing.
    pub async fn get_patient_policies(
        &self,
        patient_id: i64,
    ) -> Result<Vec<InsurancePolicy>, ApiClientError> {
        self.get_json(&format!("/patients/{patient_id}/insurance_policies"))
            .await
    }

    pub async fn get_policy(&self, id: &str) -> Result<InsurancePolicy, ApiClientError> {
        self.get_json(&format!("/insurance_policies/{id}")).await
    }

    pub async fn create_policy(
        &self,
        policy: &InsurancePolicy,
    ) -> Result<InsurancePolicy, ApiClientError> {
        self.post_json("/insurance_policies/", policy).await
    }

    pub async fn update_policy(
        &self,
        id: &str,
        policy: &InsurancePolicy,
    ) -> Result<InsurancePolicy, ApiClientError> {
        self.put_json(&format!("/insurance_policies/{id}"), policy).await
    }

    pub async fn delete_policy(&self, id: &str) -> Result<DeleteOutcome, ApiClientError> {
        self.delete_json(&format!("/insurance_policies/{id}")).await
    }
}
