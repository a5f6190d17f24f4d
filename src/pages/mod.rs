//! Page components for LeadPulse.

mod dashboard;
mod landing;

pub use dashboard::Dashboard;
pub use landing::Landing;
