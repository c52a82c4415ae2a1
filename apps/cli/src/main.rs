//! Sitecrew operator CLI.
//!
//! A thin terminal front end over the same session and API client stack the
//! mobile app uses: login, inspect the current session, and list backend
//! resources.

#![forbid(unsafe_code)]

use std::env;
use std::sync::Arc;

use sitecrew_application::{Session, SessionService, SignupRequest};
use sitecrew_core::{AppError, AppResult};
use sitecrew_infrastructure::{FileCredentialStore, HttpApiClient, Resource};
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Debug, Clone)]
struct CliConfig {
    api_base_url: String,
    credentials_path: String,
}

impl CliConfig {
    fn load() -> AppResult<Self> {
        let api_base_url = env::var("SITECREW_API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000/api/".to_owned());
        let credentials_path = env::var("SITECREW_CREDENTIALS_PATH")
            .unwrap_or_else(|_| "sitecrew-credentials.json".to_owned());

        if api_base_url.trim().is_empty() {
            return Err(AppError::Validation(
                "SITECREW_API_BASE_URL must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            api_base_url,
            credentials_path,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = CliConfig::load()?;
    let base_url = Url::parse(config.api_base_url.as_str()).map_err(|error| {
        AppError::Validation(format!(
            "invalid SITECREW_API_BASE_URL '{}': {error}",
            config.api_base_url
        ))
    })?;

    let store = Arc::new(FileCredentialStore::new(config.credentials_path.clone()));
    let client = Arc::new(HttpApiClient::new(base_url, store.clone())?);
    let sessions = SessionService::new(client.clone(), store);

    info!(
        api_base_url = %config.api_base_url,
        credentials_path = %config.credentials_path,
        "sitecrew-cli started"
    );

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("login") => {
            let (email, password) = two_args(&args, "login <email> <password>")?;
            let session = sessions.login(email, password).await?;
            print_session(&session);
            Ok(())
        }
        Some("signup") => {
            let (email, password, role) = three_args(&args, "signup <email> <password> <role>")?;
            let session = sessions
                .signup(&SignupRequest {
                    email: email.to_owned(),
                    password: password.to_owned(),
                    first_name: None,
                    last_name: None,
                    role: role.to_owned(),
                })
                .await?;
            print_session(&session);
            Ok(())
        }
        Some("whoami") => {
            let session = require_session(&sessions).await?;
            print_session(&session);
            Ok(())
        }
        Some("route") => {
            let session = require_session(&sessions).await?;
            match session.dashboard_route() {
                Some(route) => println!("{route}"),
                None => println!("no dashboard route for role '{}'", session.profile().role),
            }
            Ok(())
        }
        Some("modules") => {
            let session = require_session(&sessions).await?;
            for module in session.accessible_modules() {
                println!("{}", module.as_str());
            }
            Ok(())
        }
        Some("list") => {
            let name = args.get(1).ok_or_else(|| usage("list <resource>"))?;
            let resource: Resource = name.parse()?;
            let records = client.list::<serde_json::Value>(resource).await?;
            let rendered = serde_json::to_string_pretty(&records)
                .map_err(|error| AppError::Internal(format!("failed to render records: {error}")))?;
            println!("{rendered}");
            Ok(())
        }
        Some("logout") => {
            sessions.logout().await?;
            println!("logged out");
            Ok(())
        }
        _ => Err(usage(
            "login | signup | whoami | route | modules | list <resource> | logout",
        )),
    }
}

async fn require_session(sessions: &SessionService) -> AppResult<Session> {
    sessions
        .restore()
        .await?
        .ok_or_else(|| AppError::Unauthorized("no active session; run 'login' first".to_owned()))
}

fn print_session(session: &Session) {
    let display = session.role_display();
    println!(
        "{} <{}> as {} [{}]",
        session.profile().display_name(),
        session.profile().email,
        display.label,
        display.icon
    );
    if let Some(route) = session.dashboard_route() {
        println!("dashboard: {route}");
    }
}

fn two_args<'a>(args: &'a [String], usage_line: &str) -> AppResult<(&'a str, &'a str)> {
    match (args.get(1), args.get(2)) {
        (Some(first), Some(second)) => Ok((first.as_str(), second.as_str())),
        _ => Err(usage(usage_line)),
    }
}

fn three_args<'a>(args: &'a [String], usage_line: &str) -> AppResult<(&'a str, &'a str, &'a str)> {
    match (args.get(1), args.get(2), args.get(3)) {
        (Some(first), Some(second), Some(third)) => {
            Ok((first.as_str(), second.as_str(), third.as_str()))
        }
        _ => Err(usage(usage_line)),
    }
}

fn usage(line: &str) -> AppError {
    AppError::Validation(format!("usage: sitecrew-cli {line}"))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
