//! Form Submission Handler
//!
//! Validates a single text field on submit and shows its trimmed value in a
//! target container. The target keeps only the latest accepted value.

use std::cell::RefCell;
use std::rc::Rc;

use domkit_dom::{Document, EventType, ListenerId, NodeId};

use crate::feedback::{ClassMarker, ErrorDisplay};
use crate::{PageConfig, add_element_to_dom};

/// Options for [`handle_form_submit_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOptions {
    pub input_id: String,
    pub error_id: String,
    pub empty_message: String,
    pub hidden_class: String,
    pub process_on_setup: bool,
}

impl FormOptions {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            input_id: config.input_id.clone(),
            error_id: config.error_id.clone(),
            empty_message: config.empty_input_message.clone(),
            hidden_class: config.hidden_class.clone(),
            process_on_setup: config.process_on_setup,
        }
    }

    /// Same options with a different error element
    pub fn with_error_id(mut self, error_id: impl Into<String>) -> Self {
        self.error_id = error_id.into();
        self
    }
}

impl Default for FormOptions {
    fn default() -> Self {
        Self::from_config(&PageConfig::default())
    }
}

/// Per-form processing state.
///
/// `Validating` and `Committed` only exist while a submission is being
/// processed; between events a form is `Idle` or `ErrorShown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    ErrorShown,
    Committed,
}

#[derive(Debug, Default)]
struct Progress {
    state: FormState,
    submissions: usize,
    last_committed: Option<String>,
}

struct FormContext {
    input: NodeId,
    target_id: String,
    error_id: String,
    empty_message: String,
    errors: ErrorDisplay<ClassMarker>,
    progress: Rc<RefCell<Progress>>,
}

impl FormContext {
    fn transition(&self, next: FormState) {
        let mut progress = self.progress.borrow_mut();
        tracing::trace!(from = ?progress.state, to = ?next, "form state");
        progress.state = next;
    }

    fn process(&self, doc: &mut Document) {
        self.transition(FormState::Validating);
        self.progress.borrow_mut().submissions += 1;

        let value = doc.value(self.input).unwrap_or_default().trim_matches(is_js_whitespace).to_string();
        if value.is_empty() {
            self.errors.show(doc, &self.error_id, &self.empty_message);
            self.transition(FormState::ErrorShown);
            return;
        }

        self.errors.clear(doc, &self.error_id);
        add_element_to_dom(doc, &self.target_id, &value);
        if let Err(err) = doc.set_value(self.input, "") {
            tracing::trace!(%err, "input vanished before reset");
        }

        tracing::debug!(target_id = %self.target_id, %value, "form value committed");
        self.transition(FormState::Committed);
        self.progress.borrow_mut().last_committed = Some(value);
        self.transition(FormState::Idle);
    }
}

/// White space as `String.prototype.trim` sees it: NEL is kept, BOM is not.
fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Live submit handling for one form
#[derive(Debug)]
pub struct FormBinding {
    form: NodeId,
    listener: ListenerId,
    progress: Rc<RefCell<Progress>>,
}

impl FormBinding {
    pub fn form(&self) -> NodeId {
        self.form
    }

    /// Settled state after the latest submission
    pub fn state(&self) -> FormState {
        self.progress.borrow().state
    }

    /// Number of times the routine ran, setup run included
    pub fn submissions(&self) -> usize {
        self.progress.borrow().submissions
    }

    /// Most recent value written to the target
    pub fn last_committed(&self) -> Option<String> {
        self.progress.borrow().last_committed.clone()
    }

    /// Stop handling submits; false if the listener was already removed
    pub fn dispose(self, doc: &mut Document) -> bool {
        doc.remove_event_listener(self.listener)
    }
}

/// Wire `#form_id` with the default input (`user-input`) and error
/// element (`error-message`). See [`handle_form_submit_with`].
pub fn handle_form_submit(doc: &mut Document, form_id: &str, target_id: &str) -> Option<FormBinding> {
    handle_form_submit_with(doc, form_id, target_id, &FormOptions::default())
}

/// Validate the input on every submit of `#form_id`.
///
/// Each submit has its default action prevented, then the trimmed input
/// value is checked: empty shows `empty_message` in the error element and
/// leaves target and input untouched; anything else clears the error,
/// replaces the target's text with the value and empties the input.
///
/// When `process_on_setup` is set the same routine also runs once right
/// away. If the form, input, target or error element is missing, nothing
/// is registered and `None` is returned.
pub fn handle_form_submit_with(
    doc: &mut Document,
    form_id: &str,
    target_id: &str,
    options: &FormOptions,
) -> Option<FormBinding> {
    let form = doc.get_element_by_id(form_id);
    let input = doc.get_element_by_id(&options.input_id);
    let target = doc.get_element_by_id(target_id);
    let error = doc.get_element_by_id(&options.error_id);

    let (Some(form), Some(input), Some(_), Some(_)) = (form, input, target, error) else {
        tracing::trace!(
            form_id,
            input_id = %options.input_id,
            target_id,
            error_id = %options.error_id,
            "form handler not wired: element missing"
        );
        return None;
    };

    let progress = Rc::new(RefCell::new(Progress::default()));
    let context = Rc::new(FormContext {
        input,
        target_id: target_id.to_string(),
        error_id: options.error_id.clone(),
        empty_message: options.empty_message.clone(),
        errors: ErrorDisplay::new(ClassMarker::new(options.hidden_class.clone())),
        progress: Rc::clone(&progress),
    });

    let handler = Rc::clone(&context);
    let listener = doc.add_event_listener(form, EventType::Submit, move |doc, event| {
        event.prevent_default();
        handler.process(doc);
    });
    tracing::debug!(%form, form_id, target_id, "form handler wired");

    if options.process_on_setup {
        context.process(doc);
    }

    Some(FormBinding {
        form,
        listener,
        progress,
    })
}
