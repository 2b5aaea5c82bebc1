#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;
use std::sync::Arc;

use anyhow::Error;
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::sync::watch;
use tokio::task;
use yansi::Paint;

use crate::application::cli;
use crate::domain::models::ErrorKind;
use crate::domain::models::Event;
use crate::domain::models::SessionState;
use crate::domain::models::Status;
use crate::domain::models::TranslatorBox;
use crate::domain::services::EngineService;
use crate::domain::services::FilePreferences;
use crate::domain::services::SessionEngine;
use crate::infrastructure::translators::TranslatorManager;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        Paint::red(format!(
            "Oh no! codeshift has failed with the following app version and error.\n\nVersion: {}\nError: {}",
            env!("CARGO_PKG_VERSION"),
            err
        ))
    );

    process::exit(1);
}

async fn run() -> Result<()> {
    let launch_res = cli::parse().await?;
    if launch_res.is_none() {
        return Ok(());
    }
    let launch = launch_res.unwrap();

    let translator: Arc<TranslatorBox> = Arc::new(TranslatorManager::get());
    let preferences = Box::<FilePreferences>::default();

    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
    let (state_tx, mut state_rx) = watch::channel(SessionState::default());

    let engine = SessionEngine::new(preferences, state_tx).await;

    let worker_tx = event_tx.clone();
    task::spawn(async move {
        return EngineService::start(translator, engine, worker_tx, event_rx).await;
    });

    if let Some(source) = launch.source {
        event_tx.send(Event::SourceLanguageChanged(source))?;
    }
    if let Some(target) = launch.target {
        event_tx.send(Event::TargetLanguageChanged(target))?;
    }
    if let Some(input) = launch.input {
        event_tx.send(Event::InputChanged(input))?;
    }
    event_tx.send(Event::ConvertTriggered())?;

    loop {
        state_rx.changed().await?;
        let state = state_rx.borrow_and_update().clone();

        match state.status {
            Status::Succeeded => {
                println!("{}", state.output_text);
                return Ok(());
            }
            Status::Failed => {
                if state.error == Some(ErrorKind::Validation) {
                    eprintln!("{}", Paint::yellow("Nothing to convert: the input is empty."));
                } else {
                    eprintln!(
                        "{}",
                        Paint::red(
                            "Conversion failed. Check your connection and API key, then try again."
                        )
                    );
                }
                process::exit(1);
            }
            _ => {}
        }
    }
}

#[tokio::main]
async fn main() {
    let debug_log_dir = env::var("CODESHIFT_LOG_DIR").unwrap_or_else(|_| {
        return dirs::cache_dir()
            .unwrap()
            .join("codeshift")
            .to_string_lossy()
            .to_string();
    });

    let file_appender = tracing_appender::rolling::never(debug_log_dir, "debug.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("codeshift")
    {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    let res = run().await;
    if let Err(err) = res {
        handle_error(err);
    }
}
