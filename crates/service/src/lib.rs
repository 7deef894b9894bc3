//! Service layer providing the dish resource on top of `models`.
//! - Separates business rules (validation, random pick) from data access.
//! - Repository trait with SeaORM and in-memory implementations.
//! - Owns the lazily connected database handle.

pub mod errors;
pub mod db;
pub mod dish;
#[cfg(test)]
pub mod test_support;
