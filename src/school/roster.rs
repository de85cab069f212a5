use tracing::debug;

use super::student::AnyStudent;
use super::visitor::{StudentVisitor, Visitable};

/// An ordered collection of students of any kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Roster {
    students: Vec<AnyStudent>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_student(&mut self, student: impl Into<AnyStudent>) -> &mut Self {
        self.students.push(student.into());
        self
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnyStudent> {
        self.students.iter()
    }

    /// Has every student accept `visitor`, in insertion order.
    pub fn accept_all<V>(&self, visitor: &mut V) -> Vec<Option<V::Output>>
    where
        V: StudentVisitor + ?Sized,
    {
        debug!(students = self.len(), "visiting roster");
        self.students
            .iter()
            .map(|student| student.accept(&mut *visitor))
            .collect()
    }
}

impl FromIterator<AnyStudent> for Roster {
    fn from_iter<I: IntoIterator<Item = AnyStudent>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}

impl Extend<AnyStudent> for Roster {
    fn extend<I: IntoIterator<Item = AnyStudent>>(&mut self, iter: I) {
        self.students.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a AnyStudent;
    type IntoIter = std::slice::Iter<'a, AnyStudent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
