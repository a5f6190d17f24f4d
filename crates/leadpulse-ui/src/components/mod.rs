//! Reusable UI components

mod button;
mod progress_bar;
mod status_badge;

pub use button::*;
pub use progress_bar::*;
pub use status_badge::*;
