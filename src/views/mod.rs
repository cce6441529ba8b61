//! Server-rendered HTML views.
//!
//! Every view takes the session's [`LanguageContext`](crate::context::LanguageContext)
//! by shared reference and returns a complete document. Dynamic text goes
//! through [`escape_html`].

pub mod dashboard;
pub mod landing;
mod layout;
pub mod login;

pub use layout::{escape_html, language_selector, support_footer};
