pub mod content_store;
pub mod seed;

pub use content_store::ContentStore;
