//! Tests for the booking validation and availability engine

mod support;

mod service_tests;
