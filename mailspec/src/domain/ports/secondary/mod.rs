pub mod email_service;
pub mod link_extractor;

pub use email_service::{EmailService, Error as EmailError};
pub use link_extractor::{Anchor, LinkExtractor};

#[cfg(test)]
pub use email_service::MockEmailService;

#[cfg(test)]
pub use link_extractor::MockLinkExtractor;
