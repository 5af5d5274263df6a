//! Profile registry adapters.

mod catalog;
mod memory;

pub use catalog::{DEFAULT_LOCAL_DIR, ProfileCatalog};
pub use memory::InMemoryRegistry;
