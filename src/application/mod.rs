// Application layer - Use cases over the series store and idea board
pub mod board_repository;
pub mod chart_service;
pub mod idea_service;
