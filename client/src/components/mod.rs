//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, topic pills, the modal and the list demo
//! while reading/writing shared state from Leptos context providers.

pub mod list_demo;
pub mod pill_sections;
pub mod site_footer;
pub mod site_header;
pub mod topic_modal;
