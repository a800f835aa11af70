//! Persistence of brightness tables: one compressed file per level plus a
//! JSON index of per-level color counts.

pub mod builder;
pub mod index;
pub mod reader;
pub mod store;
pub mod writer;

pub use builder::{BuildReport, TableBuilder};
pub use index::CountIndex;
pub use reader::TableReader;
pub use store::{FileStore, MemoryStore, TableStore};
pub use writer::TableWriter;

#[cfg(test)]
mod tests;
