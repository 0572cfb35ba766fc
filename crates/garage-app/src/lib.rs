//! Application service layer - vehicle use cases, config

pub mod app;
pub mod config;
pub mod repository;
