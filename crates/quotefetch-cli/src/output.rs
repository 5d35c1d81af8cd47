use std::io::{self, Write};

use quotefetch_core::{emit, ResultSet};

use crate::error::CliError;

/// Writes the result document to standard output as a single line.
pub fn render(results: &ResultSet) -> Result<(), CliError> {
    let payload = emit(results)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{payload}")?;
    stdout.flush()?;
    Ok(())
}
