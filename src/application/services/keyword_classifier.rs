use crate::domain::{Classification, ClassificationSource, ProductivityScore};

pub const PRODUCTIVE_TERMS: &[&str] = &[
    "problema",
    "erro",
    "bug",
    "não funciona",
    "como faço",
    "suporte técnico",
    "urgente",
    "importante",
    "solicitação",
    "requisição",
    "ajuda",
    "suporte",
    "contrato",
    "pagamento",
    "fatura",
    "serviço",
    "manutenção",
    "atualização",
    "status",
    "dúvida",
    "questão",
    "reclamação",
    "assistência",
];

pub const UNPRODUCTIVE_TERMS: &[&str] = &[
    "obrigado",
    "obrigada",
    "parabéns",
    "feliz natal",
    "boas festas",
    "cumprimentos",
    "saudações",
    "ola",
    "oi",
    "espero",
    "família",
    "amigo",
    "contato",
    "agradecimento",
    "felicidades",
];

pub const KEYWORD_REASON: &str = "Classificação de emergência por análise de palavras-chave";

const LONG_MESSAGE_CHARS: usize = 100;
const LONG_WITH_PUNCTUATION_SCORE: f64 = 70.0;
const DEFAULT_SCORE: f64 = 30.0;

/// Deterministic classification from keyword presence.
///
/// Each term counts once if it occurs anywhere in the lowercased text, with
/// no word boundaries. Without any hit, long messages carrying a `?` or `!`
/// score 70 and everything else scores 30. Pure and infallible.
pub fn classify_by_keywords(content: &str) -> Classification {
    let lowered = content.to_lowercase();

    let productive = count_present(&lowered, PRODUCTIVE_TERMS);
    let unproductive = count_present(&lowered, UNPRODUCTIVE_TERMS);
    let total = productive + unproductive;

    let score = if total > 0 {
        100.0 * productive as f64 / total as f64
    } else if content.chars().count() > LONG_MESSAGE_CHARS && content.contains(['?', '!']) {
        LONG_WITH_PUNCTUATION_SCORE
    } else {
        DEFAULT_SCORE
    };

    Classification::from_score(
        ProductivityScore::new(score),
        KEYWORD_REASON,
        ClassificationSource::Keywords,
    )
}

fn count_present(text: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| text.contains(*term)).count()
}
