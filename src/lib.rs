//! Course Catalog API Library
//!
//! This library provides the core functionality for the course catalog
//! service, including domain logic, repositories, and infrastructure
//! components.

pub mod api;
pub mod domain;
pub mod infrastructure;
