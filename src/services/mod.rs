// Live Channel Services
// Compilation, validation and the encoding-service boundary

mod compile_error;
mod events;
mod id_allocator;
mod compile_context;
mod destination_builder;
mod output_group_builder;
mod reference_validator;
mod channel_compiler;
mod input_compiler;
mod schedule_compiler;
mod backend;
mod settings_manager;

pub use compile_error::*;
pub use events::*;
pub use id_allocator::*;
pub use compile_context::*;
pub use destination_builder::*;
pub use output_group_builder::*;
pub use reference_validator::*;
pub use channel_compiler::*;
pub use input_compiler::*;
pub use schedule_compiler::*;
pub use backend::*;
pub use settings_manager::*;
