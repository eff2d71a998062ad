//! File driver: read declaration sources, generate, write the result.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::{debug, info};
use wrenbind_core::Class;
use wrenbind_emit::{BindingEmitter, EmitOptions};
use wrenbind_parser::parse_source;

use crate::config::{GeneratorConfig, Output};
use crate::error::{GenerateError, Result};

/// One declaration source held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Path the source was read from; also the name it is included by.
    pub path: PathBuf,
    pub text: String,
}

impl Source {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read a source from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| GenerateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path, text))
    }
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationSummary {
    pub files: usize,
    pub classes: usize,
    pub methods: usize,
    pub bytes: usize,
}

/// Parse every source and collect its classes in input order.
///
/// A class name seen in an earlier source (or earlier in the same source)
/// is rejected.
pub fn collect_classes(sources: &[Source]) -> Result<Vec<Class>> {
    let mut seen: FxHashMap<String, &Path> = FxHashMap::default();
    let mut classes = Vec::new();

    for source in sources {
        let parsed = parse_source(&source.text).map_err(|err| GenerateError::Parse {
            path: source.path.clone(),
            source: err,
        })?;
        debug!(file = %source.path.display(), classes = parsed.len(), "scanned source");

        for class in parsed {
            if let Some(first) = seen.insert(class.name.clone(), source.path.as_path()) {
                return Err(GenerateError::DuplicateClass {
                    class: class.name,
                    first: first.to_path_buf(),
                    second: source.path.clone(),
                });
            }
            classes.push(class);
        }
    }

    Ok(classes)
}

/// Generate the binding source for in-memory declaration sources.
pub fn generate_from_sources(sources: &[Source], options: &EmitOptions) -> Result<String> {
    generate(sources, options).map(|(code, _)| code)
}

#[cfg_attr(feature = "profiling", profiling::function)]
fn generate(sources: &[Source], options: &EmitOptions) -> Result<(String, GenerationSummary)> {
    let classes = collect_classes(sources)?;
    let methods: usize = classes.iter().map(|class| class.methods.len()).sum();
    info!(classes = classes.len(), methods, "collected bindable classes");

    let includes: Vec<String> = sources
        .iter()
        .map(|source| source.path.display().to_string())
        .collect();
    let code = BindingEmitter::new(options.clone()).emit(&classes, &includes)?;

    let summary = GenerationSummary {
        files: sources.len(),
        classes: classes.len(),
        methods,
        bytes: code.len(),
    };
    Ok((code, summary))
}

/// Run a full generation: read every input, generate, then write the output.
///
/// The output is only touched once generation has succeeded.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn run(config: &GeneratorConfig) -> Result<GenerationSummary> {
    let mut sources = Vec::with_capacity(config.inputs.len());
    for path in &config.inputs {
        info!(file = %path.display(), "reading declarations");
        sources.push(Source::read(path)?);
    }

    let (code, summary) = generate(&sources, &config.emit)?;
    write_output(&config.output, &code)?;
    info!(output = %config.output.describe(), bytes = summary.bytes, "wrote bindings");

    Ok(summary)
}

fn write_output(output: &Output, code: &str) -> Result<()> {
    match output {
        Output::File(path) => fs::write(path, code).map_err(|source| GenerateError::Io {
            path: path.clone(),
            source,
        }),
        Output::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(code.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| GenerateError::Io {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        }
    }
}
