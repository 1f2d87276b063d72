//! Command line front-end for the ASPSP mock server.
//!
//! Drives one banking session from the shell: the session record comes from
//! flags, the subcommand picks the backend call.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use online_banking::config::resolve_config;
use online_banking::observability::logging;
use online_banking::{BankingClient, BankingSession, ConfirmationBody, ConfirmationResponse, SessionRecord};

#[derive(Parser)]
#[command(name = "online-banking")]
#[command(about = "Confirm TANs, decide consents and fetch payments against the ASPSP mock server", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides backend.base_url from the configuration.
    #[arg(short, long)]
    base_url: Option<String>,

    #[arg(long, default_value = "")]
    iban: String,

    #[arg(long, default_value = "")]
    consent_id: String,

    #[arg(long, default_value = "")]
    payment_id: String,

    #[arg(long)]
    tan: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit the TAN for the pending payment
    ConfirmTan,
    /// Accept or reject the pending consent
    Consent {
        /// ACCEPTED or REJECTED
        decision: String,
    },
    /// Show the payment referenced by --payment-id
    Payment,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref(), cli.base_url)?;

    logging::init(&config.observability)?;

    let client = BankingClient::from_config(&config)?;
    let session = BankingSession::new(client);
    session.save_data(SessionRecord {
        tan: cli.tan,
        iban: cli.iban,
        consent_id: cli.consent_id,
        payment_id: cli.payment_id,
    });

    match cli.command {
        Commands::ConfirmTan => print_confirmation(session.post_tan().await?)?,
        Commands::Consent { decision } => {
            print_confirmation(session.post_consent_str(&decision).await?)?
        }
        Commands::Payment => match session.get_single_payments().await? {
            Some(payment) => println!("{}", serde_json::to_string_pretty(&payment)?),
            None => println!("No payment found for id '{}'", session.load_data().payment_id),
        },
    }

    Ok(())
}

fn print_confirmation(response: ConfirmationResponse) -> Result<(), Box<dyn std::error::Error>> {
    match response.body {
        ConfirmationBody::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        ConfirmationBody::Text(text) => println!("{}", text),
        ConfirmationBody::Empty => println!("Backend answered {} with no body", response.status),
    }
    Ok(())
}
