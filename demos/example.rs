use std::io;

use student_record::core::{ledger, FormatStyle, RecordOption};
use student_record::error::Result;
use student_record::{Roster, Student};

use log::{info, warn};

pub fn main() -> Result<()> {
    let option = RecordOption::default()
        .set_style(FormatStyle::Labeled)
        .set_log_level("trace".to_string())
        .build();
    // 初始化日志
    student_record::utils::init_log(option.log_level())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    info!("Creating Student s1");
    let mut s1 = Student::new("Tom", 54.10324, -6.41667);
    s1.write_with(&mut out, &option)?;

    info!("s2 = s1.clone() - copy construct");
    let s2 = s1.clone();
    s2.write_with(&mut out, &option)?;

    info!("Changing location in s1");
    s1.set_location(77.77777, 88.88888);
    s1.write_to(&mut out, FormatStyle::Inline)?;

    let s3 = s1.clone();
    info!("s3 = s1.clone(), s3 = {}", s3);

    let mut s4 = Student::from_option(&option);
    info!("s4.assign_from(&s1) - assignment into an existing record");
    s4.assign_from(&s1);
    s4.write_with(&mut out, &option)?;

    let mut s5 = Student::default();
    let mut s6 = Student::default();
    // s6 = s5 = s2
    s6.assign_from(s5.assign_from(&s2));
    info!("chained assignment: s5 = {}, s6 = {}", s5, s6);

    info!("Reading a student from stdin: <name> <latitude> <longitude>");
    let mut s7 = Student::default();
    let stdin = io::stdin();
    match s7.read_from(&mut stdin.lock()) {
        Ok(s) => s.write_with(&mut out, &option)?,
        Err(e) => warn!("could not read student: {}", e),
    }

    let mut roster = Roster::new();
    let dave = roster.admit(Student::new("Dynamic Dave", 54.10324, -6.41667));
    roster.get(dave)?.write_with(&mut out, &option)?;
    info!("Releasing Dynamic Dave");
    roster.release(dave)?;

    let snapshot = ledger::snapshot();
    info!(
        "allocations: {}, releases: {}, live: {}",
        snapshot.allocations(),
        snapshot.releases(),
        snapshot.live()
    );
    info!("Leaving main, remaining students are released now");
    Ok(())
}
