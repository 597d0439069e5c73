//! Weather console: interactive terminal front end for the chat backend.
//!
//! Reads one question per line from stdin, asks the backend, and prints the
//! interpreted answer together with the recent-queries list.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use wx_console::config::ConsoleConfig;
use wx_console::render::{render_answer, render_history};
use wx_console::{Console, HttpReplySource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Load config ─────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => ConsoleConfig::from_file(&path)?,
        None => ConsoleConfig::default(),
    }
    .with_env_overrides();

    // Logs go to stderr; stdout is the console itself.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if config.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = %config.backend_url,
        "wx-console starting"
    );

    let source = HttpReplySource::new(&config)?;
    let mut console = Console::new(Box::new(source));

    println!("AI Weather Experience Console");
    println!("Ask natural questions, e.g. \"What's the weather in Pune today?\"");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutdown signal received");
                break;
            }
        };
        let Some(question) = line else {
            break;
        };
        if question.trim().is_empty() {
            continue;
        }

        println!("Analyzing your query...");
        match console.submit(&question).await {
            Ok(Some(answer)) => {
                println!("\n{}", render_answer(&answer));
                print!("{}", render_history(console.history().iter()));
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!(error = %e, "question failed");
                eprintln!("error: {e}");
            }
        }
    }

    tracing::info!("wx-console stopped");
    Ok(())
}
