//! HTTP handlers for hello-service.

pub mod hello;

pub use hello::hello;
