// Live Channel Models
// Descriptor shapes exchanged with the encoding service

mod settings;
mod destination;
mod descriptions;
mod output_group;
mod channel;
mod input;
mod schedule;
mod channel_status;

pub use settings::*;
pub use destination::*;
pub use descriptions::*;
pub use output_group::*;
pub use channel::*;
pub use input::*;
pub use schedule::*;
pub use channel_status::*;
