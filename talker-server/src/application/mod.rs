pub mod auth_service;
pub mod talker_service;
