// Infrastructure layer module
// Contains database adapters implementing the domain repository contracts

pub mod repositories;
