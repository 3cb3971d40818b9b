pub mod file_store;
pub mod memory_store;

pub use file_store::JsonFileStore;
pub use memory_store::MemoryStore;
