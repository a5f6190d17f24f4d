//! Visual theme for LeadPulse.

mod styles;

pub use styles::GLOBAL_STYLES;
