//! Abstract UI events.
//!
//! The storefront core never touches a real document. Instead, the embedding
//! shell describes each raw browser event with the types in this module:
//! a click carries the clicked element and its ancestor chain, a change
//! carries the input's name and value, and a submit carries the form's id and
//! field values. This keeps the dispatcher testable and free of any DOM API.

use std::collections::HashMap;

/// A snapshot of one element: its CSS classes and string attributes.
///
/// Built with a fluent API, mirroring how markup declares the markers the
/// dispatcher looks for:
///
/// ```
/// use fashionpoint::dispatch::Element;
///
/// let button = Element::new()
///     .class("add-to-cart-btn")
///     .attr("data-product-id", "sku-42");
/// assert!(button.has_class("add-to-cart-btn"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    classes: Vec<String>,
    attrs: HashMap<String, String>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a CSS class to the element.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Adds an attribute to the element.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// The originating element of a click together with its ancestor chain,
/// innermost first.
///
/// [`Target::closest`] reproduces delegated-listener matching: the event
/// bubbles from the clicked element, so a rule looking for a marker checks
/// the element itself and then each ancestor in turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    path: Vec<Element>,
}

impl Target {
    /// A target with no ancestors.
    pub fn new(element: Element) -> Self {
        Self { path: vec![element] }
    }

    /// Appends an ancestor (outward from the previous element).
    pub fn within(mut self, ancestor: Element) -> Self {
        self.path.push(ancestor);
        self
    }

    /// Returns the nearest element (self included) matching the predicate,
    /// scanning outward through the ancestor chain.
    pub fn closest(&self, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.path.iter().find(|e| predicate(e))
    }
}

/// A change event on a named input.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub name: String,
    pub value: String,
}

impl FieldChange {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A form submission: the form's id, its field values, and the submit
/// control's current label.
///
/// Only fields that would be serialized by the browser appear in `fields`;
/// in particular, a radio group contributes its value only when one of its
/// buttons is checked.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission {
    pub form_id: String,
    pub fields: HashMap<String, String>,
    pub submit_label: Option<String>,
}

impl FormSubmission {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            fields: HashMap::new(),
            submit_label: None,
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = Some(label.into());
        self
    }
}

/// A raw UI event, one per delegated listener kind.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Click(Target),
    Change(FieldChange),
    Submit(FormSubmission),
}

/// What the dispatcher did with an event.
///
/// `Handled` means a rule matched and the default browser action was
/// suppressed. `Ignored` means no rule matched: clicks and changes are
/// no-ops, and form submissions fall through to default browser behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Handled,
    Ignored,
}
