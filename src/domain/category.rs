use std::fmt;

use serde::Serialize;

const PRODUCTIVE_LABEL: &str = "Produtivo";
const UNPRODUCTIVE_LABEL: &str = "Improdutivo";

/// Score at or above which an email counts as productive.
pub const PRODUCTIVE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Produtivo")]
    Productive,
    #[serde(rename = "Improdutivo")]
    Unproductive,
}

impl Category {
    pub fn as_label(&self) -> &'static str {
        match self {
            Category::Productive => PRODUCTIVE_LABEL,
            Category::Unproductive => UNPRODUCTIVE_LABEL,
        }
    }

    pub fn from_score(score: f64) -> Self {
        if score >= PRODUCTIVE_THRESHOLD {
            Category::Productive
        } else {
            Category::Unproductive
        }
    }

    /// Folds a model-declared label onto the two canonical categories.
    ///
    /// Only a case-insensitive exact match of "produtivo" is productive; every
    /// other label, including unknown ones, is unproductive regardless of score.
    pub fn from_model_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case(PRODUCTIVE_LABEL) {
            Category::Productive
        } else {
            Category::Unproductive
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}
