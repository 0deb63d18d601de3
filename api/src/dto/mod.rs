//! Request and response DTOs

pub mod booking;
