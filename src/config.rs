//! Generator configuration.

use std::path::PathBuf;

use wrenbind_emit::EmitOptions;

/// Where the generated source goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Stdout,
    File(PathBuf),
}

impl Output {
    /// Name used in log messages.
    pub fn describe(&self) -> String {
        match self {
            Output::Stdout => "<stdout>".to_string(),
            Output::File(path) => path.display().to_string(),
        }
    }
}

/// One generation run: which files to read, what to emit, where to put it.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Declaration sources, in the order their classes are emitted.
    pub inputs: Vec<PathBuf>,
    pub output: Output,
    pub emit: EmitOptions,
}

impl GeneratorConfig {
    pub fn new(inputs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    pub fn with_emit_options(mut self, emit: EmitOptions) -> Self {
        self.emit = emit;
        self
    }
}
