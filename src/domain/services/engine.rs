#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::sync::watch;
use tokio::task;

use super::preferences::PreferenceStoreBox;
use super::registry::LanguageRegistry;
use super::sanitizer;
use crate::domain::models::ConversionRequest;
use crate::domain::models::ErrorKind;
use crate::domain::models::Event;
use crate::domain::models::Language;
use crate::domain::models::SessionState;
use crate::domain::models::Status;
use crate::domain::models::TranslateError;
use crate::domain::models::TranslatorBox;

/// Owns the session state machine. Every inbound event is applied as one
/// transition, and a snapshot is published to the observer channel after
/// each one, which is the only surface a UI collaborator sees.
pub struct SessionEngine {
    state: SessionState,
    preferences: PreferenceStoreBox,
    observer: watch::Sender<SessionState>,
}

impl SessionEngine {
    pub async fn new(
        preferences: PreferenceStoreBox,
        observer: watch::Sender<SessionState>,
    ) -> SessionEngine {
        let pair = preferences.load().await;
        let state = SessionState {
            pair,
            input_text: LanguageRegistry::get(pair.source).sample.to_string(),
            output_text: "".to_string(),
            status: Status::Idle,
            error: None,
        };
        observer.send_replace(state.clone());

        return SessionEngine {
            state,
            preferences,
            observer,
        };
    }

    pub fn state(&self) -> &SessionState {
        return &self.state;
    }

    /// Applies a single transition. Returns the request to dispatch when a
    /// convert trigger passes validation; the caller owns dispatching so
    /// that this stays free of network concerns.
    pub async fn handle_event(&mut self, event: Event) -> Option<ConversionRequest> {
        let request = match event {
            Event::InputChanged(text) => self.apply_input_change(text),
            Event::SourceLanguageChanged(language) => self.apply_source_change(language).await,
            Event::TargetLanguageChanged(language) => self.apply_target_change(language).await,
            Event::ConvertTriggered() => self.apply_convert_trigger(),
            Event::TranslationArrived(request, outcome) => self.apply_outcome(request, outcome),
        };

        self.observer.send_replace(self.state.clone());
        return request;
    }

    fn leave_terminal(&mut self) {
        if self.state.status.is_terminal() {
            self.state.status = Status::Idle;
            self.state.error = None;
        }
    }

    fn apply_input_change(&mut self, text: String) -> Option<ConversionRequest> {
        self.state.input_text = text;
        self.leave_terminal();
        return None;
    }

    async fn apply_source_change(&mut self, language: Language) -> Option<ConversionRequest> {
        self.state.pair.source = language;
        self.state.input_text = LanguageRegistry::get(language).sample.to_string();
        self.leave_terminal();
        self.preferences.save(&self.state.pair).await;
        return None;
    }

    async fn apply_target_change(&mut self, language: Language) -> Option<ConversionRequest> {
        self.state.pair.target = language;
        self.state.output_text = "".to_string();
        self.state.status = Status::Idle;
        self.state.error = None;
        self.preferences.save(&self.state.pair).await;
        return None;
    }

    fn apply_convert_trigger(&mut self) -> Option<ConversionRequest> {
        // At most one request in flight; extra triggers are a no-op.
        if self.state.status == Status::Requesting {
            return None;
        }

        self.state.status = Status::Validating;
        if self.state.input_text.trim().is_empty() {
            self.state.status = Status::Failed;
            self.state.error = Some(ErrorKind::Validation);
            return None;
        }

        self.state.status = Status::Requesting;
        self.state.error = None;
        return Some(ConversionRequest {
            pair: self.state.pair,
            code: self.state.input_text.clone(),
        });
    }

    fn apply_outcome(
        &mut self,
        request: ConversionRequest,
        outcome: Result<String, TranslateError>,
    ) -> Option<ConversionRequest> {
        if request.pair != self.state.pair {
            tracing::debug!(
                source = %request.pair.source,
                target = %request.pair.target,
                "discarding stale translation result"
            );

            // The in-flight slot is free again.
            if self.state.status == Status::Requesting {
                self.state.status = Status::Idle;
            }
            return None;
        }

        match outcome {
            Ok(raw) => {
                self.state.output_text = sanitizer::sanitize(&raw);
                self.state.status = Status::Succeeded;
                self.state.error = None;
            }
            Err(err) => {
                tracing::error!(error = ?err, "translation failed");
                self.state.status = Status::Failed;
                self.state.error = Some(err.kind());
            }
        }

        return None;
    }
}

pub struct EngineService {}

impl EngineService {
    /// Runs the engine loop: events are handled strictly in arrival order,
    /// and translator calls run on their own task, reporting back through
    /// the same channel. In-flight requests are never cancelled.
    pub async fn start(
        translator: Arc<TranslatorBox>,
        mut engine: SessionEngine,
        tx: mpsc::UnboundedSender<Event>,
        mut rx: mpsc::UnboundedReceiver<Event>,
    ) -> Result<()> {
        loop {
            let event = rx.recv().await;
            if event.is_none() {
                return Ok(());
            }

            if let Some(request) = engine.handle_event(event.unwrap()).await {
                let worker_translator = translator.clone();
                let worker_tx = tx.clone();
                task::spawn(async move {
                    let outcome = worker_translator.translate(&request).await;
                    let _ = worker_tx.send(Event::TranslationArrived(request, outcome));
                });
            }
        }
    }
}
