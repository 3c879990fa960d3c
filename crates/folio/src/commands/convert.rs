//! `folio convert` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_static::{ConversionReport, MarkdownConverter};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Directory with markdown files (non-recursive).
    #[arg(default_value = "public")]
    input_dir: PathBuf,

    /// Directory to write HTML files into.
    #[arg(default_value = "dist")]
    output_dir: PathBuf,
}

impl ConvertArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let converter = MarkdownConverter::new()?;

        match converter.convert(&self.input_dir, &self.output_dir)? {
            ConversionReport::MissingInput => output.warning(&format!(
                "Input directory not found: {}",
                self.input_dir.display()
            )),
            ConversionReport::NoMarkdown => output.warning(&format!(
                "No markdown files found in {}",
                self.input_dir.display()
            )),
            ConversionReport::Converted(files) => {
                for file in &files {
                    output.line(&format!(
                        "Converted {} → {}",
                        file.source.display(),
                        file.output.display()
                    ));
                }
                output.success(&format!("Converted {} markdown files", files.len()));
            }
        }
        Ok(())
    }
}
