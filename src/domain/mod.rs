mod category;
mod classification;
mod document;
mod email_content;
mod productivity_score;
mod reply_draft;

pub use category::{Category, PRODUCTIVE_THRESHOLD};
pub use classification::{Classification, ClassificationSource};
pub use document::{ContentType, Document, DocumentId};
pub use email_content::EmailContent;
pub use productivity_score::ProductivityScore;
pub use reply_draft::{ReplyDraft, ReplySource};
