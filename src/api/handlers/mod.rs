// HTTP handlers, one async fn per route

pub mod catalog;
