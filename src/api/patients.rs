use super::client::ApiClient;
use super::error::ApiClientError;
use super::models::{DeleteOutcome, MedicalRecord, Patient, PatientComplete};

impl ApiClient {
    pub async fn list_patients(&self) -> Result<Vec<Patient>, ApiClientError> {
        self.get_json("/patients/").await
    }

    pub async fn get_patient(&self, id: i64) -> Result<Patient, ApiClientError> {
        self.get_json(&format!("/patients/{id}")).await
    }

    /// Federated view: patient joined with policies, records and claims.
    pub async fn get_patient_complete(&self, id: i64) -> Result<PatientComplete, ApiClientError> {
        self.get_json(&format!("/patients/{id}/complete")).await
    }

    pub async fn get_patient_medical_records(
        &self,
        id: i64,
    ) -> Result<Vec<MedicalRecord>, ApiClientError> {
        self.get_json(&format!("/patients/{id}/medical_records")).await
    }

    pub async fn create_patient(&self, patient: &Patient) -> Result<Patient, ApiClientError> {
        self.post_json("/patients/", patient).await
    }

    pub async fn update_patient(
        &self,
        id: i64,
        patient: &Patient,
    ) -> Result<Patient, ApiClientError> {
        self.put_json(&format!("/patients/{id}"), patient).await
    }

    pub async fn delete_patient(&self, id: i64) -> Result<DeleteOutcome, ApiClientError> {
        self.delete_json(&format!("/patients/{id}")).await
    }
}
