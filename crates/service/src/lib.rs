pub mod contact_service;
pub mod storage;
pub mod user_service;
