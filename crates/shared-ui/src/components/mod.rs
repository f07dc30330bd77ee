// Standalone building blocks
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod search_bar;
pub mod skeleton;

// Search-specific widgets; depend on button
pub mod hierarchy;
pub mod pagination;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use hierarchy::*;
pub use pagination::*;
pub use search_bar::*;
pub use skeleton::*;
