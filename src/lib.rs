use std::io::Write;

use school::{
    student::{PhDStudent, SeniorStudent},
    visitor::{SchoolInformationSystem, Visitable},
};

pub mod school;

/// Runs the demo: a banner, then one PhD and one senior student visited by
/// the school information system, all written to `out`.
pub fn run<W: Write>(out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "Testing Visitor Pattern...")?;

    let mut info_sys = SchoolInformationSystem::with_writer(&mut *out);
    let phd_stu = PhDStudent::new();
    let sen_stu = SeniorStudent::new();

    phd_stu.accept(&mut info_sys).transpose()?;
    sen_stu.accept(&mut info_sys).transpose()?;

    Ok(())
}
