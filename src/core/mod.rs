pub mod aggregate;
pub mod backup;
pub mod config;
pub mod documents;
pub mod log;
pub mod send;
pub mod store;
pub mod track;
