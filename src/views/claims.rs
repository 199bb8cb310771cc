use super::{notify, prompt, prompt_default, prompt_optional};
use crate::api::{ApiClient, Claim, ClaimComplete};
use anyhow::Result;

pub(super) async fn render_list(client: &ApiClient) -> Result<Option<String>> {
    println!("=== Claims ===");
    let patient_raw = prompt("Patient id")?;
    let patient_id = match patient_raw.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            notify::error("Patient ids are numeric");
            return Ok(None);
        }
    };

    let mut claims = match client.get_patient_claims(patient_id).await {
        Ok(claims) => claims,
        Err(e) => {
            notify::error(&format!("Failed to load claims: {e}"));
            return Ok(None);
        }
    };

    loop {
        if claims.is_empty() {
            println!("No claims for patient #{patient_id}.");
        } else {
            println!(
                "{:<12} {:<12} {:<10} {:>10}  {}",
                "Claim", "Date", "Status", "Amount", "Description"
            );
            for claim in &claims {
                println!(
                    "{:<12} {:<12} {:<10} {:>10.2}  {}",
                    claim.claim_id.as_deref().unwrap_or("-"),
                    claim.claim_date,
                    claim.status,
                    claim.amount,
                    claim.description
                );
            }
        }

        let command = prompt("claims (new | open <id> | complete <id> | delete <id> | back)")?;
        let mut parts = command.splitn(2, ' ');
        match (parts.next().unwrap_or(""), parts.next()) {
            ("new", _) => return Ok(Some("/claims/new".to_string())),
            ("open", Some(id)) => return Ok(Some(format!("/claims/{}", id.trim()))),
            ("complete", Some(id)) => match client.get_claim_complete(id.trim()).await {
                Ok(complete) => render_complete(&complete),
                Err(e) => notify::error(&format!("Failed to load claim: {e}")),
            },
            ("delete", Some(id)) => {
                let id = id.trim();
                match client.delete_claim(id).await {
                    Ok(_) => {
                        claims.retain(|c| c.claim_id.as_deref() != Some(id));
                        notify::success("Claim deleted successfully");
                    }
                    Err(e) => notify::error(&format!("Failed to delete claim: {e}")),
                }
            }
            ("back", _) | ("", None) => return Ok(None),
            _ => println!("Unknown command: {command}"),
        }
    }
}

fn render_complete(complete: &ClaimComplete) {
    println!("--- Claim {} ---", complete.claim_info.claim_id.as_deref().unwrap_or("-"));
    println!(
        "  {} - ${:.2} ({})",
        complete.claim_info.claim_date, complete.claim_info.amount, complete.claim_info.status
    );
    println!(
        "  Patient: {} (#{})",
        complete.patient_info.full_name(),
        complete.patient_info.patient_id.unwrap_or_default()
    );
    println!(
        "  Policy: {} - {} ({})",
        complete.policy_info.policy_id, complete.policy_info.provider, complete.policy_info.coverage_type
    );
    println!(
        "  Record: {} - {}",
        complete.medical_record.diagnosis, complete.medical_record.treatment
    );
}

pub(super) async fn render_form(client: &ApiClient, id: Option<&str>) -> Result<Option<String>> {
    let existing = match id {
        Some(id) => match client.get_claim(id).await {
            Ok(claim) => Some(claim),
            Err(e) => {
                notify::error(&format!("Failed to load claim: {e}"));
                return Ok(Some("/claims".to_string()));
            }
        },
        None => None,
    };

    match &existing {
        Some(claim) => println!(
            "=== Edit Claim {} ===",
            claim.claim_id.as_deref().unwrap_or("-")
        ),
        None => println!("=== New Claim ==="),
    }

    let claim = match read_claim_fields(existing.as_ref()) {
        Ok(claim) => claim,
        Err(e) => {
            notify::error(&format!("Invalid input: {e}"));
            return Ok(Some("/claims".to_string()));
        }
    };

    let outcome = match existing.as_ref().and_then(|c| c.claim_id.as_deref()) {
        Some(id) => client.update_claim(id, &claim).await,
        None => client.create_claim(&claim).await,
    };

    match outcome {
        Ok(_) => {
            let verb = if existing.is_some() { "updated" } else { "submitted" };
            notify::success(&format!("Claim {verb} successfully"));
            Ok(Some("/claims".to_string()))
        }
        Err(e) => {
            notify::error(&format!("Failed to save claim: {e}"));
            Ok(None)
        }
    }
}

fn read_claim_fields(existing: Option<&Claim>) -> Result<Claim> {
    let text = |label: &str, current: Option<&str>| -> std::io::Result<String> {
        match current {
            Some(value) => prompt_default(label, value),
            None => prompt(label),
        }
    };

    let record_id = text(
        "Medical record id",
        existing.map(|c| c.record_id.to_string()).as_deref(),
    )?
    .parse::<i64>()?;
    let amount = text("Amount", existing.map(|c| c.amount.to_string()).as_deref())?
        .parse::<f64>()?;

    let status = match existing {
        Some(claim) => prompt_default("Status", &claim.status)?,
        None => prompt_optional("Status")?.unwrap_or_else(|| "Pending".to_string()),
    };

    Ok(Claim {
        claim_id: existing.and_then(|c| c.claim_id.clone()),
        policy_id: text("Policy id", existing.map(|c| c.policy_id.as_str()))?,
        record_id,
        claim_date: text("Claim date (YYYY-MM-DD)", existing.map(|c| c.claim_date.as_str()))?,
        amount,
        status,
        description: text("Description", existing.map(|c| c.description.as_str()))?,
    })
}
