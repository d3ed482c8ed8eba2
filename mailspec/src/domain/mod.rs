pub mod captured_email;
pub mod email;
pub mod ports;
pub mod query;

pub use captured_email::CapturedEmail;
pub use email::Email;
pub use query::{Direction, EmailQuery};
