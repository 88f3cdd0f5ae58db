//! Service layer for business logic.

pub mod tag_service;

pub use tag_service::TagService;
