pub mod add;
pub mod aggregate;
pub mod backup;
pub mod filter;
pub mod log;
pub mod repository;
