use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::sync::watch;
use tokio::task;

use super::EngineService;
use super::SessionEngine;
use crate::domain::models::ConversionRequest;
use crate::domain::models::ErrorKind;
use crate::domain::models::Event;
use crate::domain::models::Language;
use crate::domain::models::LanguagePair;
use crate::domain::models::SessionState;
use crate::domain::models::Status;
use crate::domain::models::TranslateError;
use crate::domain::models::Translator;
use crate::domain::models::TranslatorBox;
use crate::domain::services::LanguageRegistry;
use crate::domain::services::PreferenceStore;

struct MemoryPreferences {
    saved: Arc<Mutex<Vec<LanguagePair>>>,
}

#[async_trait]
impl PreferenceStore for MemoryPreferences {
    async fn load(&self) -> LanguagePair {
        return LanguagePair::default();
    }

    async fn save(&self, pair: &LanguagePair) {
        self.saved.lock().unwrap().push(*pair);
    }
}

enum Script {
    Succeed(&'static str),
    ServiceDown(u16),
    Unreachable,
}

struct ScriptedTranslator {
    calls: Arc<AtomicUsize>,
    script: Script,
}

#[async_trait]
impl Translator for ScriptedTranslator {
    async fn translate(&self, _request: &ConversionRequest) -> Result<String, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.script {
            Script::Succeed(raw) => return Ok(raw.to_string()),
            Script::ServiceDown(status) => return Err(TranslateError::Service { status: *status }),
            Script::Unreachable => {
                // A real transport error, from a port nothing listens on.
                let err = reqwest::Client::new()
                    .get("http://127.0.0.1:1")
                    .send()
                    .await
                    .unwrap_err();
                return Err(TranslateError::Network(err));
            }
        }
    }
}

async fn build_engine() -> (SessionEngine, Arc<Mutex<Vec<LanguagePair>>>) {
    let saved = Arc::new(Mutex::new(vec![]));
    let preferences = Box::new(MemoryPreferences {
        saved: saved.clone(),
    });
    let (state_tx, _state_rx) = watch::channel(SessionState::default());
    let engine = SessionEngine::new(preferences, state_tx).await;

    return (engine, saved);
}

async fn run_session(script: Script, events: Vec<Event>) -> (SessionState, usize) {
    let calls = Arc::new(AtomicUsize::new(0));
    let translator: Arc<TranslatorBox> = Arc::new(Box::new(ScriptedTranslator {
        calls: calls.clone(),
        script,
    }));

    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
    let (state_tx, mut state_rx) = watch::channel(SessionState::default());

    let saved = Arc::new(Mutex::new(vec![]));
    let engine = SessionEngine::new(Box::new(MemoryPreferences { saved }), state_tx).await;

    let worker_tx = event_tx.clone();
    let service = task::spawn(async move {
        return EngineService::start(translator, engine, worker_tx, event_rx).await;
    });

    for event in events {
        event_tx.send(event).unwrap();
    }

    loop {
        state_rx.changed().await.unwrap();
        let state = state_rx.borrow_and_update().clone();
        if state.status.is_terminal() {
            service.abort();
            return (state, calls.load(Ordering::SeqCst));
        }
    }
}

#[tokio::test]
async fn it_seeds_the_session_from_preferences_and_sample() {
    let (engine, _saved) = build_engine().await;

    let state = engine.state();
    assert_eq!(state.pair, LanguagePair::default());
    assert_eq!(
        state.input_text,
        LanguageRegistry::get(Language::Python).sample
    );
    assert_eq!(state.output_text, "");
    assert_eq!(state.status, Status::Idle);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn it_fails_validation_on_whitespace_input_without_dispatching() {
    let (mut engine, _saved) = build_engine().await;

    engine
        .handle_event(Event::InputChanged("   \n\t".to_string()))
        .await;
    let request = engine.handle_event(Event::ConvertTriggered()).await;

    assert!(request.is_none());
    assert_eq!(engine.state().status, Status::Failed);
    assert_eq!(engine.state().error, Some(ErrorKind::Validation));
}

#[tokio::test]
async fn it_stays_dispatch_eligible_after_a_validation_failure() {
    let (mut engine, _saved) = build_engine().await;

    engine
        .handle_event(Event::InputChanged("".to_string()))
        .await;
    assert!(engine.handle_event(Event::ConvertTriggered()).await.is_none());

    engine
        .handle_event(Event::InputChanged("print(1)".to_string()))
        .await;
    let request = engine.handle_event(Event::ConvertTriggered()).await;

    assert!(request.is_some());
    assert_eq!(engine.state().status, Status::Requesting);
    assert_eq!(engine.state().error, None);
}

#[tokio::test]
async fn it_builds_requests_from_the_current_session() {
    let (mut engine, _saved) = build_engine().await;

    engine
        .handle_event(Event::InputChanged("print(\"hi\")".to_string()))
        .await;
    let request = engine.handle_event(Event::ConvertTriggered()).await.unwrap();

    assert_eq!(request.pair, LanguagePair::default());
    assert_eq!(request.code, "print(\"hi\")");
    assert_eq!(engine.state().status, Status::Requesting);
}

#[tokio::test]
async fn it_rejects_triggers_while_requesting() {
    let (mut engine, _saved) = build_engine().await;

    let first = engine.handle_event(Event::ConvertTriggered()).await;
    let second = engine.handle_event(Event::ConvertTriggered()).await;

    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(engine.state().status, Status::Requesting);
}

#[tokio::test]
async fn it_sanitizes_and_applies_successful_outcomes() {
    let (mut engine, _saved) = build_engine().await;

    let request = engine.handle_event(Event::ConvertTriggered()).await.unwrap();
    engine
        .handle_event(Event::TranslationArrived(
            request,
            Ok("```javascript\nconsole.log(\"Hello World\")\n```".to_string()),
        ))
        .await;

    assert_eq!(engine.state().status, Status::Succeeded);
    assert_eq!(engine.state().output_text, "console.log(\"Hello World\")");
    assert_eq!(engine.state().error, None);
}

#[tokio::test]
async fn it_preserves_prior_output_on_failure() {
    let (mut engine, _saved) = build_engine().await;

    let request = engine.handle_event(Event::ConvertTriggered()).await.unwrap();
    engine
        .handle_event(Event::TranslationArrived(
            request,
            Ok("console.log(1)".to_string()),
        ))
        .await;

    engine
        .handle_event(Event::InputChanged("print(2)".to_string()))
        .await;
    let retry = engine.handle_event(Event::ConvertTriggered()).await.unwrap();
    engine
        .handle_event(Event::TranslationArrived(
            retry,
            Err(TranslateError::Service { status: 500 }),
        ))
        .await;

    assert_eq!(engine.state().status, Status::Failed);
    assert_eq!(engine.state().error, Some(ErrorKind::Service));
    assert_eq!(engine.state().output_text, "console.log(1)");
}

#[tokio::test]
async fn it_replaces_input_with_the_sample_on_source_change() {
    let (mut engine, saved) = build_engine().await;

    let request = engine.handle_event(Event::ConvertTriggered()).await.unwrap();
    engine
        .handle_event(Event::TranslationArrived(
            request,
            Ok("console.log(1)".to_string()),
        ))
        .await;

    engine
        .handle_event(Event::SourceLanguageChanged(Language::Ruby))
        .await;

    let state = engine.state();
    assert_eq!(state.pair.source, Language::Ruby);
    assert_eq!(state.input_text, LanguageRegistry::get(Language::Ruby).sample);
    assert_eq!(state.output_text, "console.log(1)");
    assert_eq!(state.status, Status::Idle);
    assert_eq!(saved.lock().unwrap().last(), Some(&state.pair));
}

#[tokio::test]
async fn it_clears_output_on_target_change() {
    let (mut engine, saved) = build_engine().await;

    let request = engine.handle_event(Event::ConvertTriggered()).await.unwrap();
    engine
        .handle_event(Event::TranslationArrived(
            request,
            Ok("console.log(1)".to_string()),
        ))
        .await;

    engine
        .handle_event(Event::TargetLanguageChanged(Language::Swift))
        .await;

    let state = engine.state();
    assert_eq!(state.pair.target, Language::Swift);
    assert_eq!(state.output_text, "");
    assert_eq!(state.status, Status::Idle);
    assert_eq!(state.error, None);
    assert_eq!(saved.lock().unwrap().last(), Some(&state.pair));
}

#[tokio::test]
async fn it_discards_results_dispatched_under_a_stale_pair() {
    let (mut engine, _saved) = build_engine().await;

    let request = engine.handle_event(Event::ConvertTriggered()).await.unwrap();
    engine
        .handle_event(Event::TargetLanguageChanged(Language::Rust))
        .await;
    engine
        .handle_event(Event::TranslationArrived(
            request,
            Ok("fn main() {}".to_string()),
        ))
        .await;

    let state = engine.state();
    assert_eq!(state.output_text, "");
    assert_eq!(state.status, Status::Idle);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn it_frees_the_inflight_slot_when_a_stale_result_lands() {
    let (mut engine, _saved) = build_engine().await;

    let request = engine.handle_event(Event::ConvertTriggered()).await.unwrap();
    engine
        .handle_event(Event::SourceLanguageChanged(Language::Ruby))
        .await;
    assert_eq!(engine.state().status, Status::Requesting);

    engine
        .handle_event(Event::TranslationArrived(
            request,
            Ok("puts 1".to_string()),
        ))
        .await;
    assert_eq!(engine.state().status, Status::Idle);

    let retry = engine.handle_event(Event::ConvertTriggered()).await;
    assert!(retry.is_some());
}

#[tokio::test]
async fn it_converts_python_to_javascript_end_to_end() {
    let (state, calls) = run_session(
        Script::Succeed("```javascript\nconsole.log(\"Hello World\")\n```"),
        vec![
            Event::InputChanged("print(\"Hello World\")".to_string()),
            Event::ConvertTriggered(),
        ],
    )
    .await;

    assert_eq!(state.status, Status::Succeeded);
    assert_eq!(state.output_text, "console.log(\"Hello World\")");
    assert_eq!(calls, 1);
}

#[tokio::test]
async fn it_fails_validation_end_to_end_without_calling_the_service() {
    let (state, calls) = run_session(
        Script::Succeed("unused"),
        vec![
            Event::InputChanged("".to_string()),
            Event::ConvertTriggered(),
        ],
    )
    .await;

    assert_eq!(state.status, Status::Failed);
    assert_eq!(state.error, Some(ErrorKind::Validation));
    assert_eq!(calls, 0);
}

#[tokio::test]
async fn it_reports_transport_failures_end_to_end() {
    let (state, calls) = run_session(
        Script::Unreachable,
        vec![
            Event::InputChanged("print(1)".to_string()),
            Event::ConvertTriggered(),
        ],
    )
    .await;

    assert_eq!(state.status, Status::Failed);
    assert_eq!(state.error, Some(ErrorKind::Network));
    assert_eq!(state.output_text, "");
    assert_eq!(calls, 1);
}

#[tokio::test]
async fn it_reports_service_failures_end_to_end() {
    let (state, _calls) = run_session(
        Script::ServiceDown(503),
        vec![
            Event::InputChanged("print(1)".to_string()),
            Event::ConvertTriggered(),
        ],
    )
    .await;

    assert_eq!(state.status, Status::Failed);
    assert_eq!(state.error, Some(ErrorKind::Service));
}
