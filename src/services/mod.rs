// src/services/mod.rs
pub mod draft;
pub mod exchange;
pub mod transcript;
