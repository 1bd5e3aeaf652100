pub mod backend;
pub mod session_store;

pub use backend::{BrowserStorage, KeyValueStore, MemoryStorage};
pub use session_store::SessionStore;
