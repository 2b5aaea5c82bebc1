pub mod gemini;

use crate::domain::models::TranslatorBox;

pub struct TranslatorManager {}

impl TranslatorManager {
    pub fn get() -> TranslatorBox {
        return Box::<gemini::Gemini>::default();
    }
}
