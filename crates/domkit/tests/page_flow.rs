//! Page flow tests
//!
//! Drives a host page through clicks and submits the way a user would:
//! HTML → Document → Page::init → events.

use domkit::dom::{Document, EventType, NodeId};
use domkit::{FormState, Page, PageConfig, create_element, handle_form_submit};

const HOST_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>DOM helpers</title></head>
  <body>
    <button id="simulate-click">Simulate Click</button>
    <div id="dynamic-content"></div>
    <form id="user-form">
      <input type="text" id="user-input" />
      <button type="submit">Submit</button>
    </form>
    <p id="error-message" class="error hidden"></p>
  </body>
</html>"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn host_page() -> Document {
    init_tracing();
    domkit::html::parse(HOST_PAGE)
}

fn by_id(doc: &Document, id: &str) -> NodeId {
    doc.get_element_by_id(id)
        .unwrap_or_else(|| panic!("host page lacks #{id}"))
}

fn submit_button(doc: &Document) -> NodeId {
    let form = by_id(doc, "user-form");
    doc.tree()
        .descendants(form)
        .find(|&n| doc.tag_name(n) == Some("button"))
        .unwrap()
}

// ============================================================================
// CLICK FLOW
// ============================================================================

#[test]
fn test_click_appends_paragraph() {
    let mut doc = host_page();
    let _page = Page::init(&mut doc, &PageConfig::default());
    let button = by_id(&doc, "simulate-click");
    let content = by_id(&doc, "dynamic-content");

    let event = doc.click(button);

    assert!(!event.is_default_prevented());
    let paragraphs: Vec<NodeId> = doc.tree().children(content).map(|(id, _)| id).collect();
    assert_eq!(paragraphs.len(), 1);
    assert_eq!(doc.tag_name(paragraphs[0]), Some("p"));
    assert_eq!(doc.text_content(paragraphs[0]), "Button Clicked!");
}

#[test]
fn test_repeated_clicks_accumulate() {
    let mut doc = host_page();
    let _page = Page::init(&mut doc, &PageConfig::default());
    let button = by_id(&doc, "simulate-click");
    let content = by_id(&doc, "dynamic-content");

    for _ in 0..5 {
        doc.click(button);
    }

    assert_eq!(doc.tree().children(content).count(), 5);
    assert_eq!(doc.text_content(content), "Button Clicked!".repeat(5));
}

#[test]
fn test_click_text_is_configurable() {
    let mut doc = host_page();
    let config = PageConfig {
        click_text: "Clicked".to_string(),
        ..PageConfig::default()
    };
    let _page = Page::init(&mut doc, &config);

    doc.click(by_id(&doc, "simulate-click"));
    assert_eq!(doc.text_content(by_id(&doc, "dynamic-content")), "Clicked");
}

// ============================================================================
// FORM FLOW
// ============================================================================

#[test]
fn test_setup_with_empty_input_shows_error() {
    let mut doc = host_page();
    let page = Page::init(&mut doc, &PageConfig::default());
    let error = by_id(&doc, "error-message");

    assert_eq!(doc.text_content(error), "Input cannot be empty");
    assert!(!doc.has_class(error, "hidden"));
    assert_eq!(doc.text_content(by_id(&doc, "dynamic-content")), "");
    assert_eq!(page.form().map(|f| f.state()), Some(FormState::ErrorShown));
}

#[test]
fn test_whitespace_submit_leaves_target_and_input() {
    let mut doc = host_page();
    let _page = Page::init(&mut doc, &PageConfig::default());
    let input = by_id(&doc, "user-input");
    let content = by_id(&doc, "dynamic-content");
    doc.set_text_content(content, "previous").unwrap();

    doc.set_value(input, "   \t ").unwrap();
    doc.click(submit_button(&doc));

    assert_eq!(doc.text_content(by_id(&doc, "error-message")), "Input cannot be empty");
    assert_eq!(doc.text_content(content), "previous");
    assert_eq!(doc.value(input), Some("   \t "));
    assert!(doc.navigations().is_empty());
}

#[test]
fn test_valid_submit_commits_trimmed_value() {
    let mut doc = host_page();
    let page = Page::init(&mut doc, &PageConfig::default());
    let input = by_id(&doc, "user-input");
    let error = by_id(&doc, "error-message");

    doc.set_value(input, "  hello  ").unwrap();
    doc.click(submit_button(&doc));

    assert_eq!(doc.text_content(by_id(&doc, "dynamic-content")), "hello");
    assert_eq!(doc.value(input), Some(""));
    assert_eq!(doc.text_content(error), "");
    assert!(doc.has_class(error, "hidden"));
    assert!(doc.navigations().is_empty(), "submit default must be prevented");

    let form = page.form().unwrap();
    assert_eq!(form.state(), FormState::Idle);
    assert_eq!(form.last_committed().as_deref(), Some("hello"));
}

#[test]
fn test_error_cleared_by_next_valid_submit() {
    let mut doc = host_page();
    let _page = Page::init(&mut doc, &PageConfig::default());
    let input = by_id(&doc, "user-input");
    let error = by_id(&doc, "error-message");
    assert!(!doc.has_class(error, "hidden"));

    doc.set_value(input, "again").unwrap();
    doc.request_submit(by_id(&doc, "user-form")).unwrap();

    assert!(doc.has_class(error, "hidden"));
    assert_eq!(doc.text_content(by_id(&doc, "dynamic-content")), "again");
}

#[test]
fn test_submit_replaces_clicked_lines() {
    let mut doc = host_page();
    let _page = Page::init(&mut doc, &PageConfig::default());
    let content = by_id(&doc, "dynamic-content");

    doc.click(by_id(&doc, "simulate-click"));
    doc.click(by_id(&doc, "simulate-click"));
    doc.set_value(by_id(&doc, "user-input"), "typed").unwrap();
    doc.click(submit_button(&doc));

    assert_eq!(doc.tree().children(content).count(), 1);
    assert_eq!(doc.text_content(content), "typed");
}

#[test]
fn test_missing_error_element_wires_no_form() {
    let mut doc = host_page();
    domkit::remove_element_from_dom(&mut doc, "error-message");
    let form = by_id(&doc, "user-form");

    assert!(handle_form_submit(&mut doc, "user-form", "dynamic-content").is_none());
    assert_eq!(doc.listener_count(form, EventType::Submit), 0);

    let page = Page::init(&mut doc, &PageConfig::default());
    assert!(page.form().is_none());
    assert!(page.has_click_handler());
}

// ============================================================================
// LOAD LIFECYCLE
// ============================================================================

#[test]
fn test_install_then_content_loaded() {
    let mut doc = host_page();
    let pending = Page::install(&mut doc, &PageConfig::default());
    let button = by_id(&doc, "simulate-click");

    doc.click(button);
    assert_eq!(doc.tree().children(by_id(&doc, "dynamic-content")).count(), 0);

    doc.content_loaded();
    doc.click(button);
    let content = by_id(&doc, "dynamic-content");
    assert_eq!(doc.text_content(content), "Button Clicked!");
    assert!(pending.take_handle().is_some());
}

#[test]
fn test_created_elements_join_the_page() {
    let mut doc = host_page();
    let content = by_id(&doc, "dynamic-content");
    let item = create_element(&mut doc, "li", [("id", "item-1"), ("data-kind", "note")], "note").unwrap();

    assert_eq!(doc.get_element_by_id("item-1"), None);
    doc.append_child(content, item).unwrap();
    assert_eq!(doc.get_element_by_id("item-1"), Some(item));

    assert_eq!(domkit::add_element_to_dom(&mut doc, "item-1", "edited"), Some(item));
    assert_eq!(doc.text_content(item), "edited");
    assert_eq!(domkit::remove_element_from_dom(&mut doc, "item-1"), Some(item));
    assert_eq!(doc.get_element_by_id("item-1"), None);
}
