use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;

/// Destination of a JSON document: a file, or stdout for `-` or no path
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout(_) => f.write_str("stdout"),
            Output::File { path, .. } => fmt::Display::fmt(&path.display(), f),
        }
    }
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<&Path>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        Output::from_output_path(output_path)?.write_json(value)
    }

    pub fn from_output_path(output_path: Option<&Path>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) if !is_stdout_path(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Output::File {
                    writer: BufWriter::new(file),
                    path: path.to_owned(),
                })
            }
            _ => Ok(Output::Stdout(io::stdout().lock())),
        }
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {self}"))?;
        writeln!(self).with_context(|| format!("Failed to write newline to {self}"))?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {self}"))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(writer) => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(writer) => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Whether `path` is the `-` placeholder for stdout
pub fn is_stdout_path(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Format an optional number, or `-` when absent
pub fn format_opt(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.precision$}"))
}
