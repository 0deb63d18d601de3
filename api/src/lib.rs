//! # API Layer
//!
//! REST surface for the booking engine, built on actix-web. Route
//! handlers stay thin: DTO validation, a call into
//! `rf_core::services::BookingService`, and a response envelope.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
