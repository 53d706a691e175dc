#![forbid(unsafe_code)]

mod config;
mod options;
mod submission;

use std::rc::Rc;

use anyhow::{Context, Result};
use checkout_operations::{GraphQLOperation, TokeniseCardMutation};
use structopt::StructOpt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use config::Config;
use options::Options;
use submission::{CheckoutForm, Mode};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new("info"))
                .unwrap(),
        )
        .init();
}

fn main() -> Result<()> {
    let options: Options = Options::from_args();
    init_tracing();

    let config = toml::from_str::<Config>(
        &std::fs::read_to_string(&options.config)
            .with_context(|| format!("Failed to load config file '{}'.", options.config))?,
    )
    .with_context(|| format!("Failed to parse config file '{}'.", options.config))?;
    let reasons = config
        .create_reason_table()
        .with_context(|| format!("Incomplete reasons in config file '{}'.", options.config))?;

    let form = CheckoutForm::new(&config, Rc::new(reasons));
    let mode = match (options.only, options.silent) {
        (Some(identifier), _) => Mode::Only(identifier),
        (None, true) => Mode::Silent,
        (None, false) => Mode::ShowingErrors,
    };

    let outcome = form.validate(&mode);
    for (identifier, message) in &outcome.errors {
        tracing::warn!(field = %identifier, "{}", message);
    }
    if !outcome.valid {
        for (identifier, rule) in form.failing_rules() {
            tracing::info!(field = %identifier, rule = %rule, "Rule failed.");
        }
        anyhow::bail!("Form is invalid.");
    }
    if let Mode::Only(identifier) = &mode {
        tracing::info!(field = %identifier, "Field is valid.");
        return Ok(());
    }

    let mutation = TokeniseCardMutation::new(form.token_input(&config)?);
    let request = mutation
        .to_request()
        .context("Failed to build the tokeniseCard request.")?;
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}
