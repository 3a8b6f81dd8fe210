//! Hello Service - a single greeting endpoint on the shared service-core stack.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
