// Domain layer - Series store, projections and the idea board
pub mod chart;
pub mod grid;
pub mod idea_board;
pub mod series;
pub mod store;
