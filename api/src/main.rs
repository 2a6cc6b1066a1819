use anyhow::{Context, Result};
use clap::Parser;
use nexx_api::{init_logging, ResponseHandler};
use nexx_core::Translator;
use nexx_shared::{AppConfig, Environment};
use serde_json::{json, Value};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

/// Translate an error value into its envelope and flat response
#[derive(Parser, Debug)]
#[command(name = "nexx-errors", author, version, about, long_about = None)]
struct Args {
    /// JSON file holding the error value; stdin when omitted
    file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only check that the configured message resources load
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    // `.env` may itself name the environment, so it is read first
    dotenvy::dotenv().ok();
    dotenvy::from_filename(Environment::from_env().env_file()).ok();

    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;
    info!(environment = %config.environment, "Configuration loaded");

    let translator = Translator::from_config(&config.i18n).context("Failed to load message resources")?;
    let dictionary = translator.dictionary();

    if args.check {
        for locale in dictionary.locales() {
            println!("{}: {} messages", locale, dictionary.len(locale));
        }
        info!(locale = %dictionary.locale(), "Message resources loaded");
        return Ok(());
    }

    let value = read_input(args.file.as_ref())?;
    let envelope = translator.translate(&value);
    let response = ResponseHandler::response(&value, &translator);

    let output = json!({
        "envelope": envelope,
        "response": response,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Read a JSON value; text that is not JSON is taken as a plain message
fn read_input(file: Option<&PathBuf>) -> Result<Value> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    let text = text.trim();
    Ok(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}
