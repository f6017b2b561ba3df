// Infrastructure layer - Session storage, configuration and response encoding
pub mod config;
pub mod http_response;
pub mod memory_repository;
