//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod banner;
pub mod chart;
pub mod loading;
pub mod nav;
pub mod toast;

pub use banner::ErrorBanner;
pub use chart::LineChart;
pub use loading::{InlineLoading, Loading};
pub use nav::Nav;
pub use toast::Toast;
