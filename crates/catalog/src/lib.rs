pub mod builtin;
pub mod error;
pub mod render;
pub mod statement;
