pub mod error;
pub mod talker;
pub mod validation;
