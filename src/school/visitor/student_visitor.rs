use crate::school::student::{PhDStudent, SeniorStudent, Student};

/// An operation over every student kind, one method per kind.
///
/// Each method defaults to doing nothing and returning `None`, so a visitor
/// only overrides the kinds it cares about. Visiting an unsupported kind is
/// a silent no-op rather than an error.
pub trait StudentVisitor {
    type Output;

    fn visit_student(&mut self, _student: &Student) -> Option<Self::Output> {
        None
    }

    fn visit_senior_student(&mut self, _student: &SeniorStudent) -> Option<Self::Output> {
        None
    }

    fn visit_phd_student(&mut self, _student: &PhDStudent) -> Option<Self::Output> {
        None
    }
}
