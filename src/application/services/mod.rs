mod classification_service;
mod keyword_classifier;
mod prompts;
mod reply_service;
mod response_parser;
mod triage_service;

pub use classification_service::{ClassificationError, ClassificationService};
pub use keyword_classifier::{
    KEYWORD_REASON, PRODUCTIVE_TERMS, UNPRODUCTIVE_TERMS, classify_by_keywords,
};
pub use prompts::{build_classification_prompt, build_reply_prompt};
pub use reply_service::{
    CANNED_PRODUCTIVE_REPLY, CANNED_UNPRODUCTIVE_REPLY, ReplyService, canned_reply,
};
pub use response_parser::{
    MISSING_REASON, ResponseParseError, extract_json_object, parse_classification,
};
pub use triage_service::{EmailInput, TriageError, TriageOutcome, TriageService};
