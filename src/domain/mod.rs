// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod catalog;
pub mod repositories;
