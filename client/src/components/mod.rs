//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and page building blocks while reading/writing
//! shared state from Leptos context providers or signals passed in by pages.

pub mod confirm_dialog;
pub mod header;
pub mod image_card;
pub mod user_detail_panel;
pub mod user_list_panel;
