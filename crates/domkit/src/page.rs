//! Page initialization
//!
//! Wires the click button and the form of a host page. [`Page::init`] runs
//! the wiring immediately and hands back a disposable handle;
//! [`Page::install`] defers it to the document's `DOMContentLoaded`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use domkit_dom::{Document, EventType, ListenerId, NodeId};

use crate::{FormBinding, FormOptions, PageConfig, handle_form_submit_with, simulate_click};

/// Page wiring entry points
#[derive(Debug, Clone, Copy)]
pub struct Page;

impl Page {
    /// Register the click handler and the form handler.
    ///
    /// Either part is skipped when its elements are missing.
    pub fn init(doc: &mut Document, config: &PageConfig) -> PageHandle {
        let click_listener = doc.get_element_by_id(&config.click_button_id).map(|button| {
            let content_id = config.content_id.clone();
            let text = config.click_text.clone();
            doc.add_event_listener(button, EventType::Click, move |doc, _| {
                simulate_click(doc, &content_id, &text);
            })
        });

        let form = handle_form_submit_with(
            doc,
            &config.form_id,
            &config.content_id,
            &FormOptions::from_config(config),
        );

        tracing::debug!(
            url = doc.url(),
            click = click_listener.is_some(),
            form = form.is_some(),
            "page initialized"
        );
        PageHandle {
            click_listener,
            form,
        }
    }

    /// Run [`Page::init`] when the document fires `DOMContentLoaded`.
    ///
    /// Later `DOMContentLoaded` events are ignored.
    pub fn install(doc: &mut Document, config: &PageConfig) -> PendingPage {
        let slot: Rc<RefCell<Option<PageHandle>>> = Rc::new(RefCell::new(None));
        let config = config.clone();
        let ready = Rc::new(Cell::new(false));

        let target = Rc::clone(&slot);
        let fired = Rc::clone(&ready);
        let listener = doc.add_event_listener(NodeId::ROOT, EventType::DOMContentLoaded, move |doc, _| {
            if fired.replace(true) {
                return;
            }
            let handle = Page::init(doc, &config);
            *target.borrow_mut() = Some(handle);
        });

        PendingPage {
            listener,
            ready,
            slot,
        }
    }
}

/// Listeners registered by [`Page::init`]
#[derive(Debug)]
pub struct PageHandle {
    click_listener: Option<ListenerId>,
    form: Option<FormBinding>,
}

impl PageHandle {
    pub fn has_click_handler(&self) -> bool {
        self.click_listener.is_some()
    }

    pub fn form(&self) -> Option<&FormBinding> {
        self.form.as_ref()
    }

    /// Unregister everything this page wired
    pub fn dispose(self, doc: &mut Document) {
        if let Some(id) = self.click_listener {
            doc.remove_event_listener(id);
        }
        if let Some(form) = self.form {
            form.dispose(doc);
        }
        tracing::debug!(url = doc.url(), "page disposed");
    }
}

/// Initialization waiting for `DOMContentLoaded`
#[derive(Debug)]
pub struct PendingPage {
    listener: ListenerId,
    ready: Rc<Cell<bool>>,
    slot: Rc<RefCell<Option<PageHandle>>>,
}

impl PendingPage {
    /// Whether the load event already ran the wiring
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// Take the handle once the page is initialized
    pub fn take_handle(&self) -> Option<PageHandle> {
        self.slot.borrow_mut().take()
    }

    /// Drop the load listener, and the page wiring if it already ran
    pub fn cancel(self, doc: &mut Document) {
        doc.remove_event_listener(self.listener);
        if let Some(handle) = self.take_handle() {
            handle.dispose(doc);
        }
    }
}

/// Parse host `markup` and initialize it with `config`
pub fn load(markup: &str, config: &PageConfig) -> (Document, PageHandle) {
    let mut doc = domkit_html::parse(markup);
    let handle = Page::init(&mut doc, config);
    (doc, handle)
}
