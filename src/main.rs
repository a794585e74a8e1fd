//! authgate CLI - log in, log out, and inspect the current session.
//!
//! The session token lives in the OS keychain, so it survives across
//! invocations the way a browser tab's local storage would.

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use authgate::{
    ActionOutcome, ApiClient, Config, Credentials, KeyringTokenStore, NewAccount, SessionStore,
};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_usage() {
    eprintln!("Usage: authgate <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  login                        Prompt for the password and start a session");
    eprintln!("  logout                       Clear the session and the stored token");
    eprintln!("  whoami                       Show the current session and profile");
    eprintln!("  register <username> <email>  Create a new remote account");
}

fn report(outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Success => println!("OK"),
        ActionOutcome::Failure { message } => println!("Failed: {message}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::load()?;
    info!(api = %config.api_base_url, "authgate starting");

    let api = ApiClient::new(&config.api_base_url)?;
    let mut store = SessionStore::new(api, KeyringTokenStore);

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("login") => {
            let password = rpassword::prompt_password("Password: ")?;
            let outcome = store.login(&Credentials::new(password)).await;
            report(&outcome);
        }
        Some("logout") => {
            store.logout();
            println!("OK");
        }
        Some("whoami") => {
            if !store.is_authenticated() {
                println!("Not logged in");
                return Ok(());
            }
            store.fetch_profile().await;
            match store.user() {
                Some(profile) => match &profile.email {
                    Some(email) => println!("{} <{}>", profile.username, email),
                    None => println!("{}", profile.username),
                },
                None => println!("Logged in (profile unavailable)"),
            }
        }
        Some("register") => {
            let (Some(username), Some(email)) = (args.get(2), args.get(3)) else {
                print_usage();
                std::process::exit(2);
            };
            let password = rpassword::prompt_password("Password: ")?;
            let account = NewAccount {
                username: username.clone(),
                email: email.clone(),
                password,
            };
            let outcome = store.register(&account).await;
            report(&outcome);
        }
        _ => {
            print_usage();
            std::process::exit(2);
        }
    }

    Ok(())
}
