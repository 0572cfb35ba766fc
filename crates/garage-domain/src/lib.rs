//! Domain layer - vehicle models, validation rules, repository traits

pub mod model;
pub mod repository;
pub mod service;
