use super::LanguagePair;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Validating,
    Requesting,
    Succeeded,
    Failed,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        return *self == Status::Succeeded || *self == Status::Failed;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
    Service,
    MalformedResponse,
}

/// The single session value the engine owns and the UI observes. Superseded
/// snapshot by snapshot; never explicitly destroyed.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub pair: LanguagePair,
    pub input_text: String,
    pub output_text: String,
    pub status: Status,
    pub error: Option<ErrorKind>,
}

impl Default for SessionState {
    fn default() -> SessionState {
        return SessionState {
            pair: LanguagePair::default(),
            input_text: "".to_string(),
            output_text: "".to_string(),
            status: Status::Idle,
            error: None,
        };
    }
}

/// Built from the session at dispatch time and carried back with the
/// translator's outcome, so a result can be checked against the pair it was
/// requested under.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionRequest {
    pub pair: LanguagePair,
    pub code: String,
}
