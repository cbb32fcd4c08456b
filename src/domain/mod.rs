// ドメイン層 - パズルロジックの中核

pub mod segment;
pub mod cell;
pub mod equation;
pub mod eval;
pub mod move_controller;
