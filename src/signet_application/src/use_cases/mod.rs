pub mod create_user;
pub mod get_user;
pub mod login;
pub mod update_user;
pub mod verify_email;
