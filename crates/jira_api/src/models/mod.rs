mod attachment;
mod comment;
mod issue;
mod search;
mod user;

pub use attachment::AttachmentRaw;
pub use comment::{CommentPage, CommentRaw};
pub use issue::{IssueFields, IssueRaw, NamedField};
pub use search::SearchPage;
pub use user::UserRef;
