use serde::Deserialize;

const MODEL_NAME_PREFIX: &str = "models/";
const GENERATE_CONTENT: &str = "generateContent";

/// One entry of the provider's model catalogue.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogModel {
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl CatalogModel {
    pub fn new(name: impl Into<String>, methods: &[&str]) -> Self {
        Self {
            name: name.into(),
            supported_generation_methods: methods.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn id(&self) -> &str {
        normalize_model_id(&self.name)
    }

    pub fn supports_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == GENERATE_CONTENT)
    }
}

/// Strips the `models/` resource prefix so identifiers compare equal either way.
pub fn normalize_model_id(id: &str) -> &str {
    let id = id.trim();
    id.strip_prefix(MODEL_NAME_PREFIX).unwrap_or(id)
}

/// Picks the first preferred model the catalogue can serve, else the first
/// catalogue model supporting text generation.
pub fn select_model(catalog: &[CatalogModel], preferred: &[String]) -> Option<String> {
    let usable: Vec<&CatalogModel> = catalog
        .iter()
        .filter(|m| m.supports_generate_content())
        .collect();

    preferred
        .iter()
        .map(|p| normalize_model_id(p))
        .find(|p| usable.iter().any(|m| m.id() == *p))
        .or_else(|| usable.first().map(|m| m.id()))
        .map(str::to_string)
}

/// Whether `id` can be addressed as `models/{id}:generateContent`.
pub fn is_valid_model_id(id: &str) -> bool {
    let id = normalize_model_id(id);
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'))
}
