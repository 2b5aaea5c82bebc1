use super::ConversionRequest;
use super::Language;
use super::TranslateError;

/// Everything that can enter the session engine, including translator
/// outcomes re-entering the loop so they are applied in arrival order.
pub enum Event {
    ConvertTriggered(),
    InputChanged(String),
    SourceLanguageChanged(Language),
    TargetLanguageChanged(Language),
    TranslationArrived(ConversionRequest, Result<String, TranslateError>),
}
