//! Terminal output layer.

pub mod renderer;

pub use renderer::TerminalRenderer;
