/// Database model definitions.
pub mod models;
/// Game result persistence backends.
pub mod result_store;
/// Storage abstraction layer for database operations.
pub mod storage;
