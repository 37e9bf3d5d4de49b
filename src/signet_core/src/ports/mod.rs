pub mod providers;
pub mod repositories;
pub mod services;
