use std::io::{self, Write};

use anyhow::Context;
use dotenv::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bmi_tracker_client::console::{parse_command, Command, ConsoleView, TextChartBackend};
use bmi_tracker_client::{ClientConfig, HttpBmiApi};
use bmi_tracker_domain::services::{FormController, Outcome, PageEvent};

const PROMPT: &str = "weight (kg) height (cm)> ";

/// Terminal front end for the BMI calculator
///
/// This function:
/// 1. Loads environment variables from .env
/// 2. Sets up tracing on stderr so stdout only carries the page
/// 3. Loads history once, like a page load
/// 4. Dispatches every input line as a form submission until `quit` or EOF
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if dotenv().is_err() {
        eprintln!("Warning: .env file not found or couldn't be read. Using environment variables.");
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_target(false)
            .with_writer(io::stderr))
        .with(env_filter)
        .init();

    let config = ClientConfig::from_env().context("Failed to load client configuration")?;
    info!("Using BMI server at {}", config.server_url());

    let mut controller = FormController::new(
        HttpBmiApi::new(config),
        ConsoleView::new(io::stdout()),
        TextChartBackend::new(io::stdout()),
    );

    if let Outcome::HistoryUnavailable(e) = controller.dispatch(PageEvent::Ready).await {
        warn!("History not available yet: {}", e);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush().context("Failed to write prompt")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        match parse_command(&line) {
            Command::Quit => break,
            Command::Nothing => continue,
            Command::Refresh => {
                controller.load_history().await;
            }
            Command::Submit(submission) => {
                controller.dispatch(PageEvent::Submit(submission)).await;
            }
        }
    }

    info!("Goodbye");
    Ok(())
}
