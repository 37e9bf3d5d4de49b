pub mod certification_code;
pub mod email;
pub mod user;
pub mod user_id;
pub mod user_status;
