use super::{notify, prompt, prompt_default, prompt_optional};
use crate::api::{ApiClient, ApiClientError, Patient};
use anyhow::Result;
use chrono::NaiveDate;

/// In-memory state of the patients table for one visit to `/patients`:
/// the fetched rows plus a client-side name filter.
pub struct PatientsList {
    patients: Vec<Patient>,
    search: String,
}

impl PatientsList {
    pub async fn load(client: &ApiClient) -> Result<Self, ApiClientError> {
        Ok(Self {
            patients: client.list_patients().await?,
            search: String::new(),
        })
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    /// Case-insensitive substring match over the full name.
    pub fn visible(&self) -> Vec<&Patient> {
        let needle = self.search.to_lowercase();
        self.patients
            .iter()
            .filter(|p| p.full_name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Delete on the backend, then drop the row from the in-memory list
    /// without re-fetching. The backend stays the source of truth; this
    /// is the documented optimistic cache-invalidation strategy.
    pub async fn delete(&mut self, client: &ApiClient, id: i64) -> Result<(), ApiClientError> {
        client.delete_patient(id).await?;
        self.patients.retain(|p| p.patient_id != Some(id));
        Ok(())
    }

    fn render_table(&self) {
        let visible = self.visible();
        if visible.is_empty() {
            println!("No patients found.");
            return;
        }
        println!(
            "{:<6} {:<24} {:<12} {:<8} {:<14}",
            "ID", "Name", "Born", "Gender", "Phone"
        );
        for patient in visible {
            println!(
                "{:<6} {:<24} {:<12} {:<8} {:<14}",
                patient.patient_id.unwrap_or_default(),
                patient.full_name(),
                patient.date_of_birth.to_string(),
                patient.gender,
                patient.phone
            );
        }
    }
}

pub(super) async fn render_list(client: &ApiClient) -> Result<Option<String>> {
    println!("=== Patients ===");
    let mut list = match PatientsList::load(client).await {
        Ok(list) => list,
        Err(e) => {
            notify::error(&format!("Failed to load patients: {e}"));
            return Ok(None);
        }
    };

    loop {
        list.render_table();
        let command = prompt("patients (search <name> | new | open <id> | delete <id> | back)")?;
        let mut parts = command.splitn(2, ' ');
        match (parts.next().unwrap_or(""), parts.next()) {
            ("search", Some(term)) => list.set_search(term),
            ("search", None) | ("clear", _) => list.set_search(""),
            ("new", _) => return Ok(Some("/patients/new".to_string())),
            ("open", Some(id)) => return Ok(Some(format!("/patients/{}", id.trim()))),
            ("delete", Some(id)) => match id.trim().parse::<i64>() {
                Ok(id) => match list.delete(client, id).await {
                    Ok(()) => notify::success("Patient deleted successfully"),
                    Err(e) => notify::error(&format!("Failed to delete patient: {e}")),
                },
                Err(_) => notify::error("delete takes a numeric patient id"),
            },
            ("back", _) | ("", None) => return Ok(None),
            _ => println!("Unknown command: {command}"),
        }
    }
}

/// Create (`/patients/new`) or edit (`/patients/:id`) form. The edit
/// variant loads the federated `complete` view so the patient's medical
/// records can be listed and managed alongside the fields.
pub(super) async fn render_form(client: &ApiClient, id: Option<&str>) -> Result<Option<String>> {
    let id = match id {
        Some(raw) => match raw.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                notify::error("Patient ids are numeric");
                return Ok(Some("/patients".to_string()));
            }
        },
        None => None,
    };

    let existing = match id {
        Some(id) => match client.get_patient_complete(id).await {
            Ok(complete) => Some(complete),
            Err(e) => {
                notify::error(&format!("Failed to load patient: {e}"));
                return Ok(Some("/patients".to_string()));
            }
        },
        None => None,
    };

    if let (Some(id), Some(complete)) = (id, existing) {
        return edit_patient(client, id, complete).await;
    }

    println!("=== New Patient ===");
    let patient = match read_patient_fields(None) {
        Ok(patient) => patient,
        Err(e) => {
            notify::error(&format!("Invalid input: {e}"));
            return Ok(Some("/patients".to_string()));
        }
    };

    match client.create_patient(&patient).await {
        Ok(saved) => {
            notify::success(&format!("Patient {} created successfully", saved.full_name()));
            Ok(Some("/patients".to_string()))
        }
        Err(e) => {
            notify::error(&format!("Failed to save patient: {e}"));
            Ok(None)
        }
    }
}

async fn edit_patient(
    client: &ApiClient,
    id: i64,
    mut complete: crate::api::PatientComplete,
) -> Result<Option<String>> {
    println!("=== Edit Patient #{id} - {} ===", complete.patient_info.full_name());

    loop {
        if complete.medical_records.is_empty() {
            println!("No medical records found");
        } else {
            println!("Medical records:");
            for record in &complete.medical_records {
                println!(
                    "  #{:<5} {}  {} - {}",
                    record.record_id.unwrap_or_default(),
                    record.record_date,
                    record.diagnosis,
                    record.treatment
                );
            }
        }

        let command = prompt("patient (edit | addrec | delrec <id> | back)")?;
        let mut parts = command.splitn(2, ' ');
        match (parts.next().unwrap_or(""), parts.next()) {
            ("edit", _) => {
                println!("Leave a field blank to keep the current value.");
                let patient = match read_patient_fields(Some(&complete.patient_info)) {
                    Ok(patient) => patient,
                    Err(e) => {
                        notify::error(&format!("Invalid input: {e}"));
                        continue;
                    }
                };
                match client.update_patient(id, &patient).await {
                    Ok(saved) => {
                        notify::success(&format!(
                            "Patient {} updated successfully",
                            saved.full_name()
                        ));
                        return Ok(Some("/patients".to_string()));
                    }
                    Err(e) => notify::error(&format!("Failed to save patient: {e}")),
                }
            }
            ("addrec", _) => match read_record_fields(id) {
                Ok(record) => match client.create_medical_record(&record).await {
                    Ok(created) => {
                        complete.medical_records.push(created);
                        notify::success("Medical record added successfully");
                    }
                    Err(e) => notify::error(&format!("Failed to add medical record: {e}")),
                },
                Err(e) => notify::error(&format!("Invalid input: {e}")),
            },
            ("delrec", Some(raw)) => match raw.trim().parse::<i64>() {
                Ok(record_id) => match client.delete_medical_record(record_id).await {
                    Ok(_) => {
                        complete
                            .medical_records
                            .retain(|r| r.record_id != Some(record_id));
                        notify::success("Medical record deleted successfully");
                    }
                    Err(e) => notify::error(&format!("Failed to delete medical record: {e}")),
                },
                Err(_) => notify::error("delrec takes a numeric record id"),
            },
            ("back", _) | ("", None) => return Ok(Some("/patients".to_string())),
            _ => println!("Unknown command: {command}"),
        }
    }
}

fn read_record_fields(patient_id: i64) -> Result<crate::api::MedicalRecord> {
    Ok(crate::api::MedicalRecord {
        record_id: None,
        patient_id,
        doctor_id: prompt("Doctor id")?.parse::<i64>()?,
        diagnosis: prompt("Diagnosis")?,
        treatment: prompt("Treatment")?,
        notes: prompt_optional("Notes")?,
        record_date: prompt("Record date (YYYY-MM-DD)")?,
    })
}

fn read_patient_fields(existing: Option<&Patient>) -> Result<Patient> {
    let text = |label: &str, current: Option<&str>| -> std::io::Result<String> {
        match current {
            Some(value) => prompt_default(label, value),
            None => prompt(label),
        }
    };

    let dob_raw = text(
        "Date of birth (YYYY-MM-DD)",
        existing.map(|p| p.date_of_birth.to_string()).as_deref(),
    )?;
    let date_of_birth = dob_raw.parse::<NaiveDate>()?;

    let email = match existing.and_then(|p| p.email.as_deref()) {
        Some(current) => Some(prompt_default("Email", current)?),
        None => prompt_optional("Email")?,
    };

    Ok(Patient {
        patient_id: existing.and_then(|p| p.patient_id),
        first_name: text("First name", existing.map(|p| p.first_name.as_str()))?,
        last_name: text("Last name", existing.map(|p| p.last_name.as_str()))?,
        date_of_birth,
        gender: text("Gender", existing.map(|p| p.gender.as_str()))?,
        address: text("Address", existing.map(|p| p.address.as_str()))?,
        phone: text("Phone", existing.map(|p| p.phone.as_str()))?,
        email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn patient(id: i64, first: &str, last: &str) -> serde_json::Value {
        serde_json::json!({
            "patient_id": id,
            "first_name": first,
            "last_name": last,
            "date_of_birth": "1990-01-01",
            "gender": "F",
            "address": "1 Main St",
            "phone": "555-0000"
        })
    }

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: format!("{}/api", server.uri()),
            timeout_seconds: 5,
        })
        .unwrap()
    }

    async fn listing(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/patients/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                patient(1, "Ana", "Silva"),
                patient(2, "Ben", "Okafor"),
                patient(3, "Ana", "Moreau")
            ])))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn search_filters_by_full_name() {
        let server = MockServer::start().await;
        listing(&server).await;

        let mut list = PatientsList::load(&client_for(&server)).await.unwrap();
        assert_eq!(list.visible().len(), 3);

        list.set_search("ana");
        assert_eq!(list.visible().len(), 2);

        list.set_search("ben ok");
        assert_eq!(list.visible().len(), 1);
        assert_eq!(list.visible()[0].full_name(), "Ben Okafor");

        list.set_search("");
        assert_eq!(list.visible().len(), 3);
    }

    #[tokio::test]
    async fn successful_delete_removes_the_row_without_refetch() {
        let server = MockServer::start().await;
        listing(&server).await;
        Mock::given(method("DELETE"))
            .and(path("/api/patients/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "message": "Patient 2 deleted successfully"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut list = PatientsList::load(&client).await.unwrap();
        list.delete(&client, 2).await.unwrap();

        let remaining: Vec<_> = list.visible().iter().map(|p| p.patient_id).collect();
        assert_eq!(remaining, vec![Some(1), Some(3)]);
    }

    #[tokio::test]
    async fn failed_delete_keeps_the_row() {
        let server = MockServer::start().await;
        listing(&server).await;
        Mock::given(method("DELETE"))
            .and(path("/api/patients/1"))
            .respond_with(ResponseTemplate::new(404).set_body_json(
                serde_json::json!({"detail": "Patient not found"}),
            ))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut list = PatientsList::load(&client).await.unwrap();
        let err = list.delete(&client, 1).await.unwrap_err();
        assert_eq!(err.to_string(), "Patient not found");
        assert_eq!(list.visible().len(), 3);
    }
}
