use std::io::{self, Write};

use fixturegen_core::GenerationReport;

/// Print one `executing command:` block per fixture, followed by its output.
pub fn print_log(report: &GenerationReport, out: &mut impl Write) -> io::Result<()> {
    for entry in &report.log {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}

pub fn print_json(report: &GenerationReport, out: &mut impl Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
