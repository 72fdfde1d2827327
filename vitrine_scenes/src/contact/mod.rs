pub mod bot;
pub mod form;

pub use bot::TypingBot;
pub use form::{ContactForm, is_deliverable, mailto_link};
