pub mod input;
pub mod output;

pub use input::{load_assessment, load_reference, AssessmentRecord};
pub use output::{create_writer, OutputFormat, OutputWriter, PlanReport};

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Where a report goes: the given file, or stdout.
pub fn open_sink(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = fs::File::create(path)?;
            Ok(Box::new(std::io::BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
