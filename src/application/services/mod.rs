//! Use-case services orchestrating domain logic and storage.

pub mod analysis_service;

pub use analysis_service::AnalysisService;
