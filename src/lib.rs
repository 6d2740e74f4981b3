// Library for tests to access modules

pub mod config;
pub mod error;
pub mod models;
pub mod queue_repo;
pub mod routes;
pub mod series;
pub mod version;
