// Render module
// Widgets drawn from plain state

pub mod dashboard;

pub use dashboard::render_dashboard;
