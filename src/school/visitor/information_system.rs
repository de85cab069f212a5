use std::io::Write;

use super::student_visitor::StudentVisitor;
use crate::school::student::{PhDStudent, SeniorStudent};

/// Announces each visited student on a writer, one line per visit.
///
/// Only senior and PhD students are supported; plain students are left to
/// the default no-op.
pub struct SchoolInformationSystem<W: Write> {
    out: W,
}

impl<W: Write> SchoolInformationSystem<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn announce(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

impl<W: Write> StudentVisitor for SchoolInformationSystem<W> {
    type Output = anyhow::Result<()>;

    fn visit_senior_student(&mut self, _student: &SeniorStudent) -> Option<Self::Output> {
        Some(self.announce("A SeniorStudent"))
    }

    fn visit_phd_student(&mut self, _student: &PhDStudent) -> Option<Self::Output> {
        Some(self.announce("A PhdStudent"))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::school::student::Student;
    use crate::school::visitor::visitable::Visitable;

    fn output(system: SchoolInformationSystem<Vec<u8>>) -> String {
        String::from_utf8(system.into_inner()).unwrap()
    }

    #[test]
    fn test_lines_follow_call_order() {
        let mut info_sys = SchoolInformationSystem::with_writer(Vec::new());
        let phd_stu = PhDStudent::new();
        let sen_stu = SeniorStudent::new();

        phd_stu.accept(&mut info_sys).unwrap().unwrap();
        sen_stu.accept(&mut info_sys).unwrap().unwrap();

        assert_eq!(output(info_sys), "A PhdStudent\nA SeniorStudent\n");
    }

    #[test]
    fn test_plain_student_prints_nothing() {
        let mut info_sys = SchoolInformationSystem::with_writer(Vec::new());

        assert!(Student::new().accept(&mut info_sys).is_none());

        assert_eq!(output(info_sys), "");
    }

    /// Handles the same kind as the information system, differently.
    struct Registrar {
        out: Vec<u8>,
    }

    impl StudentVisitor for Registrar {
        type Output = anyhow::Result<()>;

        fn visit_phd_student(&mut self, _student: &PhDStudent) -> Option<Self::Output> {
            Some(writeln!(self.out, "registered doctoral candidate").map_err(Into::into))
        }
    }

    #[test]
    fn test_implementation_selected_by_visitor() {
        let phd = PhDStudent::new();
        let mut info_sys = SchoolInformationSystem::with_writer(Vec::new());
        let mut registrar = Registrar { out: Vec::new() };

        phd.accept(&mut info_sys).unwrap().unwrap();
        phd.accept(&mut registrar).unwrap().unwrap();

        assert_eq!(output(info_sys), "A PhdStudent\n");
        assert_eq!(
            String::from_utf8(registrar.out).unwrap(),
            "registered doctoral candidate\n"
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut info_sys = SchoolInformationSystem::with_writer(BrokenPipe);

        let result = SeniorStudent::new().accept(&mut info_sys);

        assert!(matches!(result, Some(Err(_))));
    }
}
