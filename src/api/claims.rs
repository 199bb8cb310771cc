use super::client::ApiClient;
use super::error::ApiClientError;
use super::models::{Claim, ClaimComplete, DeleteOutcome};

impl ApiClient {
    pub async fn get_patient_claims(&self, patient_id: i64) -> Result<Vec<Claim>, ApiClientError> {
        self.get_json(&format!("/patients/{patient_id}/claims")).await
    }

    pub async fn get_claim(&self, id: &str) -> Result<Claim, ApiClientError> {
        self.get_json(&format!("/claims/{id}")).await
    }

    /// Federated view: claim joined with its policy, medical record and
    /// patient.
    pub async fn get_claim_complete(&self, id: &str) -> Result<ClaimComplete, ApiClientError> {
        self.get_json(&format!("/claims/{id}/complete")).await
    }

    pub async fn create_claim(&self, claim: &Claim) -> Result<Claim, ApiClientError> {
        self.post_json("/claims/", claim).await
    }

    pub async fn update_claim(&self, id: &str, claim: &Claim) -> Result<Claim, ApiClientError> {
        self.put_json(&format!("/claims/{id}"), claim).await
    }

    pub async fn delete_claim(&self, id: &str) -> Result<DeleteOutcome, ApiClientError> {
        self.delete_json(&format!("/claims/{id}")).await
    }
}
