use super::category::Category;
use super::productivity_score::ProductivityScore;

/// How a classification was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSource {
    Model,
    Keywords,
}

impl ClassificationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationSource::Model => "model",
            ClassificationSource::Keywords => "keywords",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: Category,
    pub productivity_score: ProductivityScore,
    pub confidence: f64,
    pub reason: String,
    pub source: ClassificationSource,
}

impl Classification {
    /// Builds a result whose category is derived from the score.
    pub fn from_score(
        score: ProductivityScore,
        reason: impl Into<String>,
        source: ClassificationSource,
    ) -> Self {
        Self::with_category(Category::from_score(score.value()), score, reason, source)
    }

    /// Builds a result with an explicit category, trusted as given.
    pub fn with_category(
        category: Category,
        score: ProductivityScore,
        reason: impl Into<String>,
        source: ClassificationSource,
    ) -> Self {
        Self {
            category,
            productivity_score: score,
            confidence: score.confidence(),
            reason: reason.into(),
            source,
        }
    }

    pub fn is_productive(&self) -> bool {
        self.category == Category::Productive
    }
}
