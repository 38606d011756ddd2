// Repository contracts (ports implemented by the infrastructure layer)

pub mod catalog_repository;

pub use catalog_repository::{
    CatalogRepository, DynCatalogRepository, RepositoryError, RepositoryResult,
};
