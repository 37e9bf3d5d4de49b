pub mod config;
pub mod email;
pub mod persistence;
pub mod providers;
