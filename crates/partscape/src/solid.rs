//! Solid-model compiler boundary.
//!
//! Custom part geometry is written as solid-modeling source and turned into
//! a mesh by an external compiler. The compiler is a collaborator: this
//! module only defines the request/response shape and collects its
//! diagnostics. A failed compile never touches an already computed scene.

use std::fmt;

use log::{info, warn};
use thiserror::Error;

/// Compiled mesh bytes, in whatever format the compiler emits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mesh {
    bytes: Vec<u8>,
}

impl Mesh {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Ordered compiler output.
///
/// Standard output lines are kept verbatim and error lines are prefixed with
/// `ERR: `. Error lines about missing localization data are noise and are
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticLog {
    lines: Vec<String>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_stdout(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn push_stderr(&mut self, line: &str) {
        if line.contains("localization") {
            return;
        }
        self.lines.push(format!("ERR: {line}"));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for DiagnosticLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// A failed compile: a readable message and everything the compiler said.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Solid model compilation failed: {message}")]
pub struct CompileFailure {
    pub message: String,
    pub logs: DiagnosticLog,
}

impl CompileFailure {
    pub fn new(message: impl Into<String>, logs: DiagnosticLog) -> Self {
        Self {
            message: message.into(),
            logs,
        }
    }
}

/// An external solid-model compiler.
pub trait SolidCompiler {
    /// Compile `source` into a mesh.
    ///
    /// # Errors
    ///
    /// Returns [`CompileFailure`] with the accumulated diagnostics when the
    /// source cannot be compiled.
    fn compile(&self, source: &str) -> Result<Mesh, CompileFailure>;
}

/// Run `compiler` on `source`, logging the outcome.
///
/// An empty mesh is reported as a failure.
pub fn compile_solid<C>(compiler: &C, source: &str) -> Result<Mesh, CompileFailure>
where
    C: SolidCompiler + ?Sized,
{
    info!(source_len = source.len(); "Compiling solid model");

    match compiler.compile(source) {
        Ok(mesh) if mesh.is_empty() => {
            warn!("Solid model compiler returned an empty mesh");
            Err(CompileFailure::new("compiler produced no output", DiagnosticLog::new()))
        }
        Ok(mesh) => {
            info!(bytes = mesh.len(); "Solid model compiled");
            Ok(mesh)
        }
        Err(failure) => {
            warn!(error:% = failure, log_lines = failure.logs.lines().len(); "Solid model compilation failed");
            Err(failure)
        }
    }
}
