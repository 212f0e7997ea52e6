//! Data models for Librarium

pub mod book;
pub mod category;
pub mod librarian;
pub mod log_operation;

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
pub use category::{Category, CategoryPayload};
pub use librarian::{CreateLibrarian, Librarian, LibrarianBase, User};
pub use log_operation::{CreateLogOperation, LogOperation, UpdateLogOperation};
