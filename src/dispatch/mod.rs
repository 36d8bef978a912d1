//! Generic event-dispatch engine.
//!
//! This module provides the building blocks the storefront actor uses to
//! interpret raw UI events:
//!
//! - [`Element`], [`Target`], [`FieldChange`], [`FormSubmission`],
//!   [`InputEvent`] - the DOM-free event model.
//! - [`RuleSet`] - an ordered first-match-wins table of named rules.
//! - [`DispatchOutcome`] - whether the default browser action was suppressed.

pub mod event;
pub mod rules;

pub use event::{DispatchOutcome, Element, FieldChange, FormSubmission, InputEvent, Target};
pub use rules::RuleSet;
