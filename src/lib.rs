// SpiritStream Live Channel Compiler
// Compiles channel topologies and schedule actions for a managed live-encoding service

pub mod models;
pub mod services;

pub use models::*;
pub use services::*;
