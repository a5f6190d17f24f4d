//! LeadPulse UI Components
//!
//! Dioxus building blocks shared by the dashboard views: buttons, the
//! progress bar and the campaign status badge.
//!
//! Components only render what they are given. State lives in
//! `leadpulse-core`'s controller and reaches these components as props.

pub mod components;

pub use components::*;
