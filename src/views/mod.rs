mod claims;
mod dashboard;
mod layout;
mod login;
pub mod notify;
mod patients;
mod policies;
mod unauthorized;

pub use login::attempt_login;
pub use patients::PatientsList;

use crate::api::ApiClient;
use crate::router::View;
use crate::session::SessionStore;
use anyhow::Result;
use std::io::{self, Write};

/// Mount the view the router picked. Returns the path to navigate to
/// next, if the view ended with a navigation (login success, form
/// submit), otherwise `None` to hand control back to the shell.
pub async fn render(
    view: &View,
    client: &ApiClient,
    store: &mut SessionStore,
) -> Result<Option<String>> {
    match view {
        View::Login => login::render(store),
        View::Unauthorized => {
            unauthorized::render();
            Ok(None)
        }
        View::Dashboard => dashboard::render(client, store).await,
        View::PatientsList => patients::render_list(client).await,
        View::PatientForm(id) => patients::render_form(client, id.as_deref()).await,
        View::PoliciesList => policies::render_list(client).await,
        View::PolicyForm(id) => policies::render_form(client, id.as_deref()).await,
        View::ClaimsList => claims::render_list(client).await,
        View::ClaimForm(id) => claims::render_form(client, id.as_deref()).await,
    }
}

pub(crate) fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt with a prefill; an empty answer keeps the current value.
pub(crate) fn prompt_default(label: &str, default: &str) -> io::Result<String> {
    let answer = prompt(&format!("{label} [{default}]"))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

pub(crate) fn prompt_optional(label: &str) -> io::Result<Option<String>> {
    let answer = prompt(&format!("{label} (blank to skip)"))?;
    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(answer))
    }
}
