pub mod hashmap_user_repository;

pub use hashmap_user_repository::HashMapUserRepository;
