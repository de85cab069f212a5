pub mod export;
pub mod roster;
pub mod student;
pub mod visitor;
