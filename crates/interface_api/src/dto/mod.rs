//! Request and response DTOs

pub mod claims;
