//! Infrastructure Layer
//!
//! Storage implementations.

pub mod memory;
pub mod seed;

pub use memory::InMemoryPlacesRepository;
pub use seed::{SeedData, load_seed_file};
