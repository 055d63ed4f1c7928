//! Page Configuration

use serde::{Deserialize, Serialize};

/// Element ids and messages the page wiring relies on.
///
/// Defaults match the conventional host page markup. Missing fields in a
/// deserialized config fall back to those defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Button whose clicks append a line to the content container
    pub click_button_id: String,

    /// Container receiving clicked lines and submitted values
    pub content_id: String,

    pub form_id: String,

    /// Text field read on submit
    pub input_id: String,

    pub error_id: String,

    /// Line appended per button click
    pub click_text: String,

    /// Error shown when the trimmed input is empty
    pub empty_input_message: String,

    /// Class that hides the error element
    pub hidden_class: String,

    /// Run the form routine once during setup as well as on submit
    pub process_on_setup: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            click_button_id: "simulate-click".to_string(),
            content_id: "dynamic-content".to_string(),
            form_id: "user-form".to_string(),
            input_id: "user-input".to_string(),
            error_id: "error-message".to_string(),
            click_text: "Button Clicked!".to_string(),
            empty_input_message: "Input cannot be empty".to_string(),
            hidden_class: "hidden".to_string(),
            process_on_setup: true,
        }
    }
}
