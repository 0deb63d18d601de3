//! Route handlers

pub mod bookings;
