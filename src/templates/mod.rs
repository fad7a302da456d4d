pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{card, euros, progress_bar, stat};
pub use layouts::desktop::desktop_layout;
