pub mod collection;
pub mod error;
pub mod host;
pub mod memory;

pub use collection::{Note, NoteCollection, NoteField, NoteId};
pub use error::LoadError;
pub use host::HostUi;
pub use memory::InMemoryCollection;
