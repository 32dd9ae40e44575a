pub mod memory;
pub mod status;

pub use memory::MemoryWidget;
pub use status::StatusWidget;
