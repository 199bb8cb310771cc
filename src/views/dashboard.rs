use super::{layout, notify};
use crate::api::ApiClient;
use crate::session::{Role, SessionStore};
use anyhow::Result;

/// Role-specific landing screen. Both roles see the patient count;
/// insurance staff additionally see recent claims (for the first
/// patient, mirroring the original demo dashboard).
pub(super) async fn render(client: &ApiClient, store: &mut SessionStore) -> Result<Option<String>> {
    let session = store.state();
    layout::render_nav(&session);

    let role = match session.role {
        Some(role) => role,
        // Unreachable past the gate; render nothing rather than panic.
        None => return Ok(None),
    };

    match role {
        Role::Hospital => println!("=== Hospital Dashboard ==="),
        Role::Insurance => println!("=== Insurance Dashboard ==="),
    }

    let patients = match client.list_patients().await {
        Ok(patients) => patients,
        Err(e) => {
            notify::error(&format!("Failed to load dashboard data: {e}"));
            return Ok(None);
        }
    };

    println!("Patients: {}", patients.len());
    for patient in patients.iter().take(5) {
        println!(
            "  #{:<5} {}",
            patient.patient_id.unwrap_or_default(),
            patient.full_name()
        );
    }

    if role == Role::Insurance {
        if let Some(first_id) = patients.first().and_then(|p| p.patient_id) {
            match client.get_patient_claims(first_id).await {
                Ok(claims) => {
                    println!("Recent claims (patient #{first_id}): {}", claims.len());
                    for claim in claims.iter().take(5) {
                        println!(
                            "  {:<12} {:<10} ${:.2}  {}",
                            claim.claim_id.as_deref().unwrap_or("-"),
                            claim.status,
                            claim.amount,
                            claim.description
                        );
                    }
                }
                Err(e) => notify::error(&format!("Failed to load claims: {e}")),
            }
        }
    }

    println!();
    Ok(None)
}
