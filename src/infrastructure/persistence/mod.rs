//! Storage backends for analyzed strings.

pub mod memory_string_repository;
pub mod pg_string_repository;

pub use memory_string_repository::MemoryStringRepository;
pub use pg_string_repository::PgStringRepository;
