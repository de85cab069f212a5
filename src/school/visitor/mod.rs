pub mod census;
pub mod information_system;
pub mod student_visitor;
pub mod visitable;

pub use census::Census;
pub use information_system::SchoolInformationSystem;
pub use student_visitor::StudentVisitor;
pub use visitable::Visitable;
