// ============================================================================
// Advisor Module
// Rule-based guidance assistant
// ============================================================================
//
// A static keyword classifier plus canned replies. There is no model and
// no I/O behind this: classification is a fixed, ordered rule table, which
// keeps the assistant's answers reviewable and its behavior exact.

mod replies;
mod rules;

pub use rules::{reply, Topic};
