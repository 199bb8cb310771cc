use anyhow::Result;
use carelink::api::ApiClient;
use carelink::config::Settings;
use carelink::router::{navigate, Navigation};
use carelink::session::{FileStorage, SessionStore};
use carelink::views;
use std::io::{self, Write};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,carelink=debug".to_string()),
        )
        .with_target(true)
        .init();

    info!("🚀 Starting Carelink console...");

    let settings = Settings::load()?;
    info!("✅ Configuration loaded");

    let client = ApiClient::new(&settings.api)?;
    info!("🎯 Records API at {}", settings.api.base_url);

    let mut store = SessionStore::new(Box::new(FileStorage::open(&settings.storage.state_path)));
    // The persisted session must be read before the first gate decision,
    // otherwise a valid session would flash-redirect to login.
    store.initialize();

    run_shell(&client, &mut store).await
}

/// Navigation loop: resolve the current path, follow redirects, mount
/// the view, then read the next path or command.
async fn run_shell(client: &ApiClient, store: &mut SessionStore) -> Result<()> {
    let mut path = String::from("/");

    loop {
        match navigate(store, &path) {
            Navigation::Loading => {
                // Only reachable if the store was never initialized;
                // render the neutral state and finish the read.
                println!("Loading...");
                store.initialize();
            }
            Navigation::Redirect(target) => {
                path = target;
            }
            Navigation::Render(view) => {
                if let Some(next) = views::render(&view, client, store).await? {
                    path = next;
                    continue;
                }
                match read_command()?.as_str() {
                    "" => {}
                    "quit" | "exit" => break,
                    "logout" => {
                        if let Err(e) = store.logout() {
                            views::notify::error(&format!("Failed to clear session: {e}"));
                        }
                        path = "/login".to_string();
                    }
                    "help" => print_help(),
                    input if input.starts_with('/') => path = input.to_string(),
                    other => println!("Unknown command: {other} (try help)"),
                }
            }
        }
    }

    info!("Bye");
    Ok(())
}

fn read_command() -> io::Result<String> {
    print!("carelink> ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_help() {
    println!("Navigate by path: /  /patients  /patients/new  /patients/<id>");
    println!("                  /policies  /policies/new  /policies/<id>");
    println!("                  /claims  /claims/new  /claims/<id>");
    println!("Commands: logout, help, quit");
}
