use std::fmt;

use serde::Serialize;

/// The concrete kind of a visitable student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StudentKind {
    Student,
    SeniorStudent,
    PhDStudent,
}

impl StudentKind {
    pub const ALL: [StudentKind; 3] = [
        StudentKind::Student,
        StudentKind::SeniorStudent,
        StudentKind::PhDStudent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StudentKind::Student => "Student",
            StudentKind::SeniorStudent => "SeniorStudent",
            StudentKind::PhDStudent => "PhDStudent",
        }
    }

    /// Name of the visitor operation this kind is routed to.
    pub fn visit_operation(self) -> &'static str {
        match self {
            StudentKind::Student => "VisitStudent",
            StudentKind::SeniorStudent => "VisitSeniorStudent",
            StudentKind::PhDStudent => "VisitPhDStudent",
        }
    }
}

impl fmt::Display for StudentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The base kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Student {
    /// Display name, only used by reports.
    name: Option<String>,
}

/// A student in their final undergraduate year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeniorStudent {
    name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhDStudent {
    name: Option<String>,
}

macro_rules! impl_student {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                pub fn new() -> Self {
                    Self { name: None }
                }

                pub fn named(name: impl Into<String>) -> Self {
                    Self {
                        name: Some(name.into()),
                    }
                }

                pub fn name(&self) -> Option<&str> {
                    self.name.as_deref()
                }
            }

            impl From<$ty> for AnyStudent {
                fn from(student: $ty) -> Self {
                    AnyStudent::$ty(student)
                }
            }
        )*
    };
}

impl_student!(Student, SeniorStudent, PhDStudent);

/// Closed set of every concrete student kind, for heterogeneous collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyStudent {
    Student(Student),
    SeniorStudent(SeniorStudent),
    PhDStudent(PhDStudent),
}

impl AnyStudent {
    pub fn name(&self) -> Option<&str> {
        match self {
            AnyStudent::Student(s) => s.name(),
            AnyStudent::SeniorStudent(s) => s.name(),
            AnyStudent::PhDStudent(s) => s.name(),
        }
    }
}
