pub mod answers;
pub mod emit;
pub mod license;
pub mod render;
pub mod wizard;

// Re-export commonly used types
pub use answers::AnswerSet;
pub use license::License;
