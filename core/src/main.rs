/// EventLink demo console - Main entry point
use eventlink_core::directory::{seed_channel_messages, AttendeeDirectory};
use eventlink_core::ledger::ContactLedger;
use eventlink_core::profile::ProfileForm;
use eventlink_core::{cli_app, Config, Session};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse configuration
    let args: Vec<String> = env::args().collect();
    let config = Config::from_args(&args)
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    let form = ProfileForm {
        name: config.name.clone(),
        title: config.title.clone(),
        company: config.company.clone(),
        interests: config.interests.clone(),
        ..Default::default()
    };
    let profile = form
        .build()
        .map_err(|e| anyhow::anyhow!("Profile error: {}", e))?;
    info!("created profile {} ({})", profile.name, profile.id);

    // A custom pool starts with a clean ledger; the builtin seed also carries
    // the demo ledger state (one connection, one pending request).
    let session = match &config.attendees_path {
        Some(path) => {
            let directory = AttendeeDirectory::load_from_file(path)
                .map_err(|e| anyhow::anyhow!("Attendee pool error: {}", e))?;
            Session::new(
                profile,
                directory,
                seed_channel_messages(),
                ContactLedger::new(),
            )
        }
        None => Session::with_event_seed(profile),
    };

    cli_app::run(session)
}
