//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate multi-repository sequences on top of the repository traits.
//! - Stay storage-agnostic: services only see `Arc<dyn ...Repository>`.

pub mod seed_service;
