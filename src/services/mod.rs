/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Recording and listing game results.
pub mod results_service;
/// Background connection management for the result store.
pub mod storage_supervisor;
