//! HTTP route handlers

pub mod health;
pub mod seed;
pub mod statistics;
pub mod transactions;
