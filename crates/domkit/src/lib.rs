//! domkit
//!
//! Small DOM helpers for a host page: build elements, replace or remove
//! text by element id, show and clear an inline error, and validate a
//! single text form on submit.
//!
//! Every helper looks its element up by id on each call. A missing element
//! is never an error: the helper does nothing and returns `None`.
//!
//! # Example
//! ```rust
//! use domkit::PageConfig;
//!
//! let markup = r#"
//!     <div id="dynamic-content"></div>
//!     <form id="user-form"><input id="user-input" value="  hello  "></form>
//!     <p id="error-message" class="hidden"></p>
//! "#;
//! let (doc, _page) = domkit::load(markup, &PageConfig::default());
//! let target = doc.get_element_by_id("dynamic-content").unwrap();
//! assert_eq!(doc.text_content(target), "hello");
//! ```

mod config;
mod content;
mod error;
mod factory;
mod feedback;
mod form;
mod page;

pub use config::PageConfig;
pub use content::{add_element_to_dom, remove_element_from_dom, simulate_click};
pub use error::{Error, Result};
pub use factory::create_element;
pub use feedback::{ClassMarker, ErrorDisplay, HiddenAttribute, Presentation, clear_error, display_error};
pub use form::{FormBinding, FormOptions, FormState, handle_form_submit, handle_form_submit_with};
pub use page::{Page, PageHandle, PendingPage, load};

// Re-export sub-crates for advanced usage
pub use domkit_dom as dom;
pub use domkit_html as html;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
