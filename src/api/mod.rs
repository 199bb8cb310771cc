mod claims;
mod client;
mod error;
mod medical_records;
mod models;
mod patients;
mod policies;

pub use client::ApiClient;
pub use error::ApiClientError;
pub use models::{
    Claim, ClaimComplete, DeleteOutcome, InsurancePolicy, MedicalRecord, Patient,
    PatientComplete,
};
