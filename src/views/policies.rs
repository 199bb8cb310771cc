use super::{notify, prompt, prompt_default};
use crate::api::{ApiClient, InsurancePolicy};
use anyhow::Result;

pub(super) async fn render_list(client: &ApiClient) -> Result<Option<String>> {
    println!("=== Insurance Policies ===");
    let patient_raw = prompt("Patient id")?;
    let patient_id = match patient_raw.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            notify::error("Patient ids are numeric");
            return Ok(None);
        }
    };

    let mut policies = match client.get_patient_policies(patient_id).await {
        Ok(policies) => policies,
        Err(e) => {
            notify::error(&format!("Failed to load policies: {e}"));
            return Ok(None);
        }
    };

    loop {
        if policies.is_empty() {
            println!("No policies for patient #{patient_id}.");
        } else {
            println!(
                "{:<12} {:<18} {:<16} {:<12} {:<12}",
                "Policy", "Provider", "Number", "Start", "End"
            );
            for policy in &policies {
                println!(
                    "{:<12} {:<18} {:<16} {:<12} {:<12}",
                    policy.policy_id,
                    policy.provider,
                    policy.policy_number,
                    policy.start_date,
                    policy.end_date
                );
            }
        }

        let command = prompt("policies (new | open <id> | delete <id> | back)")?;
        let mut parts = command.splitn(2, ' ');
        match (parts.next().unwrap_or(""), parts.next()) {
            ("new", _) => return Ok(Some("/policies/new".to_string())),
            ("open", Some(id)) => return Ok(Some(format!("/policies/{}", id.trim()))),
            ("delete", Some(id)) => {
                let id = id.trim();
                match client.delete_policy(id).await {
                    Ok(_) => {
                        // Drop the row locally instead of re-fetching.
                        policies.retain(|p| p.policy_id != id);
                        notify::success("Policy deleted successfully");
                    }
                    Err(e) => notify::error(&format!("Failed to delete policy: {e}")),
                }
            }
            ("back", _) | ("", None) => return Ok(None),
            _ => println!("Unknown command: {command}"),
        }
    }
}

pub(super) async fn render_form(client: &ApiClient, id: Option<&str>) -> Result<Option<String>> {
    let existing = match id {
        Some(id) => match client.get_policy(id).await {
            Ok(policy) => Some(policy),
            Err(e) => {
                notify::error(&format!("Failed to load policy: {e}"));
                return Ok(Some("/policies".to_string()));
            }
        },
        None => None,
    };

    match &existing {
        Some(policy) => println!("=== Edit Policy {} ===", policy.policy_id),
        None => println!("=== New Policy ==="),
    }

    let policy = match read_policy_fields(existing.as_ref()) {
        Ok(policy) => policy,
        Err(e) => {
            notify::error(&format!("Invalid input: {e}"));
            return Ok(Some("/policies".to_string()));
        }
    };

    let outcome = match &existing {
        Some(current) => client.update_policy(&current.policy_id, &policy).await,
        None => client.create_policy(&policy).await,
    };

    match outcome {
        Ok(saved) => {
            let verb = if existing.is_some() { "updated" } else { "created" };
            notify::success(&format!("Policy {} {verb} successfully", saved.policy_id));
            Ok(Some("/policies".to_string()))
        }
        Err(e) => {
            notify::error(&format!("Failed to save policy: {e}"));
            Ok(None)
        }
    }
}

fn read_policy_fields(existing: Option<&InsurancePolicy>) -> Result<InsurancePolicy> {
    let text = |label: &str, current: Option<&str>| -> std::io::Result<String> {
        match current {
            Some(value) => prompt_default(label, value),
            None => prompt(label),
        }
    };

    let patient_id = text(
        "Patient id",
        existing.map(|p| p.patient_id.to_string()).as_deref(),
    )?
    .parse::<i64>()?;

    let details_raw = text(
        "Coverage details (JSON)",
        existing
            .map(|p| p.coverage_details.to_string())
            .as_deref()
            .or(Some("{}")),
    )?;
    let coverage_details = serde_json::from_str(&details_raw)?;

    Ok(InsurancePolicy {
        policy_id: text("Policy id", existing.map(|p| p.policy_id.as_str()))?,
        patient_id,
        provider: text("Provider", existing.map(|p| p.provider.as_str()))?,
        policy_number: text("Policy number", existing.map(|p| p.policy_number.as_str()))?,
        coverage_type: text("Coverage type", existing.map(|p| p.coverage_type.as_str()))?,
        start_date: text("Start date (YYYY-MM-DD)", existing.map(|p| p.start_date.as_str()))?,
        end_date: text("End date (YYYY-MM-DD)", existing.map(|p| p.end_date.as_str()))?,
        coverage_details,
    })
}
