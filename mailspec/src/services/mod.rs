pub mod anchor;
pub mod fake_mailer;
pub mod mailer;

pub use anchor::{strip_tags, AnchorExtractor};
pub use fake_mailer::FakeMailer;
pub use mailer::Mailer;
