pub mod json;
pub mod memory;

pub use json::{JsonFileStore, resolve_state_path};
pub use memory::MemoryStore;
