pub mod memory_map_store;

pub use memory_map_store::MemoryMapStore;
