use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub address: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub diagnosis: String,
    pub treatment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub record_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    pub policy_id: String,
    pub patient_id: i64,
    pub provider: String,
    pub policy_number: String,
    pub coverage_type: String,
    pub start_date: String,
    pub end_date: String,
    /// Free-form object, shape decided by the provider.
    pub coverage_details: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<String>,
    pub policy_id: String,
    pub record_id: i64,
    pub claim_date: String,
    pub amount: f64,
    #[serde(default = "default_claim_status")]
    pub status: String,
    pub description: String,
}

fn default_claim_status() -> String {
    "Pending".to_string()
}

/// Federated aggregate: everything the backend knows about one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientComplete {
    pub patient_info: Patient,
    pub insurance_policies: Vec<InsurancePolicy>,
    pub medical_records: Vec<MedicalRecord>,
    pub claims: Vec<Claim>,
}

/// Federated aggregate: a claim joined with its policy, medical record
/// and patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimComplete {
    pub claim_info: Claim,
    pub policy_info: InsurancePolicy,
    pub medical_record: MedicalRecord,
    pub patient_info: Patient,
}

/// Backend acknowledgment for DELETE calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_deserializes_from_backend_shape() {
        let raw = r#"{
            "patient_id": 7,
            "first_name": "Ana",
            "last_name": "Silva",
            "date_of_birth": "1984-03-12",
            "gender": "F",
            "address": "12 Elm St",
            "phone": "555-0199",
            "email": null
        }"#;
        let patient: Patient = serde_json::from_str(raw).unwrap();
        assert_eq!(patient.patient_id, Some(7));
        assert_eq!(patient.full_name(), "Ana Silva");
        assert_eq!(patient.email, None);
    }

    #[test]
    fn new_patient_serializes_without_id() {
        let patient = Patient {
            patient_id: None,
            first_name: "Ana".into(),
            last_name: "Silva".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1984, 3, 12).unwrap(),
            gender: "F".into(),
            address: "12 Elm St".into(),
            phone: "555-0199".into(),
            email: None,
        };
        let raw = serde_json::to_value(&patient).unwrap();
        assert!(raw.get("patient_id").is_none());
        assert_eq!(raw["date_of_birth"], "1984-03-12");
    }

    #[test]
    fn claim_status_defaults_to_pending() {
        let raw = r#"{
            "policy_id": "POL-1",
            "record_id": 3,
            "claim_date": "2025-11-02",
            "amount": 1250.5,
            "description": "MRI scan"
        }"#;
        let claim: Claim = serde_json::from_str(raw).unwrap();
        assert_eq!(claim.status, "Pending");
        assert_eq!(claim.claim_id, None);
    }
}
