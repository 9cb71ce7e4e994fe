mod client;
mod error;
mod memory;
mod properties;
mod store;

pub use client::{DEFAULT_BASE_URL, DEFAULT_NOTION_VERSION, NotionClient, NotionConfig};
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use properties::{PropertyNames, decode_page, duration_update_body};
pub use store::{RecordSink, RecordSource, RecordStore};
