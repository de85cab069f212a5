use tracing::{debug, trace};

use super::student_visitor::StudentVisitor;
use crate::school::student::{AnyStudent, PhDStudent, SeniorStudent, Student, StudentKind};

/// Something a [`StudentVisitor`] can be applied to.
///
/// `accept` is the first half of the double dispatch: the implementing type
/// picks the visitor method for its own kind, and the visitor's type picks
/// what that method does. Returns `None` when the visitor has no operation
/// for this kind.
pub trait Visitable {
    fn kind(&self) -> StudentKind;

    fn accept<V>(&self, visitor: &mut V) -> Option<V::Output>
    where
        V: StudentVisitor + ?Sized;
}

fn dispatched<T>(kind: StudentKind, output: Option<T>) -> Option<T> {
    if output.is_none() {
        debug!(%kind, "visitor has no {} operation, skipping", kind.visit_operation());
    }
    output
}

impl Visitable for Student {
    fn kind(&self) -> StudentKind {
        StudentKind::Student
    }

    fn accept<V>(&self, visitor: &mut V) -> Option<V::Output>
    where
        V: StudentVisitor + ?Sized,
    {
        trace!(kind = %self.kind(), "dispatching to {}", self.kind().visit_operation());
        dispatched(self.kind(), visitor.visit_student(self))
    }
}

impl Visitable for SeniorStudent {
    fn kind(&self) -> StudentKind {
        StudentKind::SeniorStudent
    }

    fn accept<V>(&self, visitor: &mut V) -> Option<V::Output>
    where
        V: StudentVisitor + ?Sized,
    {
        trace!(kind = %self.kind(), "dispatching to {}", self.kind().visit_operation());
        dispatched(self.kind(), visitor.visit_senior_student(self))
    }
}

impl Visitable for PhDStudent {
    fn kind(&self) -> StudentKind {
        StudentKind::PhDStudent
    }

    fn accept<V>(&self, visitor: &mut V) -> Option<V::Output>
    where
        V: StudentVisitor + ?Sized,
    {
        trace!(kind = %self.kind(), "dispatching to {}", self.kind().visit_operation());
        dispatched(self.kind(), visitor.visit_phd_student(self))
    }
}

impl Visitable for AnyStudent {
    fn kind(&self) -> StudentKind {
        match self {
            AnyStudent::Student(s) => s.kind(),
            AnyStudent::SeniorStudent(s) => s.kind(),
            AnyStudent::PhDStudent(s) => s.kind(),
        }
    }

    fn accept<V>(&self, visitor: &mut V) -> Option<V::Output>
    where
        V: StudentVisitor + ?Sized,
    {
        match self {
            AnyStudent::Student(s) => s.accept(visitor),
            AnyStudent::SeniorStudent(s) => s.accept(visitor),
            AnyStudent::PhDStudent(s) => s.accept(visitor),
        }
    }
}
