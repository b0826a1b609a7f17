pub mod input;
pub mod selector;

// Re-exports for convenience
pub use input::*;
pub use selector::*;
