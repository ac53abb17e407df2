pub mod contacts;
pub mod messages;
