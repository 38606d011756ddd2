// Repository implementations (data access layer)

pub mod postgres_catalog_repository;

pub use postgres_catalog_repository::PostgresCatalogRepository;
