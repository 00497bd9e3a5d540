//! Repository trait definitions for the domain layer.
//!
//! The [`LinkRepository`] trait is the single store contract. It is implemented
//! by the PostgreSQL and in-memory backends in `crate::infrastructure::persistence`;
//! a `mockall` mock is generated for unit tests.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
