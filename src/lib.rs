pub mod domain;
pub mod index;
pub mod infrastructure;
pub mod store;

pub use crate::domain::entities::document::Document;
pub use crate::domain::error::StoreError;
pub use crate::domain::ports::docstore::{AddableDocstore, Docstore};
pub use crate::domain::ports::embedding::{EmbeddingProvider, InputType};
pub use crate::domain::values::lambda::Lambda;
pub use crate::infrastructure::docstore::in_memory::InMemoryDocstore;
pub use crate::store::MemdexStore;
