//! Markdown directory to HTML conversion.

use std::fs;
use std::path::{Path, PathBuf};

use folio_pages::parse_blocks;
use folio_renderer::HtmlRenderer;
use minijinja::{Environment, context};

const TEMPLATE_NAME: &str = "converted.html";
const TEMPLATE: &str = include_str!("../templates/converted.html");

/// Error returned by [`MarkdownConverter::convert`].
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// One converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub output: PathBuf,
}

/// Outcome of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionReport {
    /// The input directory does not exist.
    MissingInput,
    /// The input directory has no `*.md` files.
    NoMarkdown,
    /// Files converted, sorted by source name.
    Converted(Vec<ConvertedFile>),
}

/// Converts every `*.md` file in a directory into a standalone HTML page.
///
/// Conversion is non-recursive. Each page's `<title>` is the file stem and
/// the output is written as `<stem>.html`.
pub struct MarkdownConverter {
    env: Environment<'static>,
}

impl MarkdownConverter {
    pub fn new() -> Result<Self, ConvertError> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { env })
    }

    /// Convert `input_dir` into `output_dir`, creating the latter if needed.
    pub fn convert(
        &self,
        input_dir: &Path,
        output_dir: &Path,
    ) -> Result<ConversionReport, ConvertError> {
        if !input_dir.is_dir() {
            tracing::warn!(dir = %input_dir.display(), "Input directory not found");
            return Ok(ConversionReport::MissingInput);
        }

        let mut sources: Vec<PathBuf> = fs::read_dir(input_dir)
            .map_err(io_error(input_dir))?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
            .collect();
        if sources.is_empty() {
            tracing::warn!(dir = %input_dir.display(), "No markdown files found");
            return Ok(ConversionReport::NoMarkdown);
        }
        sources.sort();

        fs::create_dir_all(output_dir).map_err(io_error(output_dir))?;
        tracing::info!(count = sources.len(), "Converting markdown files");

        let mut converted = Vec::with_capacity(sources.len());
        for source in sources {
            let stem = source
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let markdown = fs::read_to_string(&source).map_err(io_error(&source))?;
            let html = self.render(&stem, &markdown)?;

            let output = output_dir.join(format!("{stem}.html"));
            fs::write(&output, html).map_err(io_error(&output))?;
            tracing::info!(source = %source.display(), output = %output.display(), "Converted");
            converted.push(ConvertedFile { source, output });
        }
        Ok(ConversionReport::Converted(converted))
    }

    /// Render one markdown document into the page template.
    ///
    /// Every block keeps its source position, level-one headings included.
    pub fn render(&self, title: &str, markdown: &str) -> Result<String, ConvertError> {
        let content = HtmlRenderer::new().render(&parse_blocks(markdown)).html;

        let template = self.env.get_template(TEMPLATE_NAME)?;
        Ok(template.render(context! { title => title, content => content })?)
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConvertError + '_ {
    move |source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    }
}
