use cic_payment::callback::CallbackFields;
use cic_payment::config::Configuration;
use cic_payment::form;
use cic_payment::request::{Amount, PaymentRequest};
use cic_payment::verifier::ResponseVerifier;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Merchant configuration JSON file
    #[arg(long)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the signed payment form fields for an outbound request
    Request {
        /// Payment request JSON file
        input: PathBuf,
    },
    /// Verify a bank callback and classify its outcome
    Verify {
        /// Callback fields JSON file
        input: PathBuf,
    },
}

#[derive(Deserialize)]
struct RequestInput {
    /// Decimal amount as a string so the signed scale is exact, e.g. "10.00"
    amount: String,
    #[serde(default)]
    currency: Option<String>,
    reference: String,
    #[serde(default)]
    texte_libre: String,
    #[serde(default = "default_lgue")]
    lgue: String,
    mail: String,
}

fn default_lgue() -> String {
    "FR".to_string()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config: Configuration =
        serde_json::from_str(&fs::read_to_string(&cli.config).into_diagnostic()?)
            .into_diagnostic()?;

    match cli.command {
        Command::Request { input } => {
            let input: RequestInput =
                serde_json::from_str(&fs::read_to_string(&input).into_diagnostic()?)
                    .into_diagnostic()?;
            let value: Decimal = input.amount.parse().into_diagnostic()?;
            let currency = input.currency.unwrap_or_else(|| config.devise.clone());
            let req = PaymentRequest::new(
                Amount::new(value, currency),
                input.reference,
                input.texte_libre,
                input.lgue,
                input.mail,
            );
            let fields = form::build(&config, &req).into_diagnostic()?;
            println!("{}", serde_json::to_string(&fields).into_diagnostic()?);
        }
        Command::Verify { input } => {
            let fields: CallbackFields =
                serde_json::from_str(&fs::read_to_string(&input).into_diagnostic()?)
                    .into_diagnostic()?;
            let verifier = ResponseVerifier::new(config).into_diagnostic()?;
            let verdict = verifier.verify(&fields);
            println!("{}", serde_json::to_string(&verdict).into_diagnostic()?);
        }
    }

    Ok(())
}
