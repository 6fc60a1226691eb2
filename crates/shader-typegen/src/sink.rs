//! Where rendered artifacts go.

use crate::error::{GenerateError, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Receives each rendered artifact exactly once, in generation order.
pub trait EmissionSink {
    fn emit(&mut self, name: &str, contents: &str) -> Result<()>;
}

/// Artifacts kept in memory, keyed by name in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Output {
    artifacts: IndexMap<String, String>,
}

impl Output {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.artifacts.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.artifacts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.artifacts
            .iter()
            .map(|(name, contents)| (name.as_str(), contents.as_str()))
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Stores `contents` under `name`, replacing an artifact of the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.artifacts.insert(name.into(), contents.into());
    }
}

impl EmissionSink for Output {
    fn emit(&mut self, name: &str, contents: &str) -> Result<()> {
        self.insert(name, contents);
        Ok(())
    }
}

/// Writes every artifact into a directory, replacing whatever was there.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_owned(),
        }
    }
}

impl EmissionSink for DirectorySink {
    fn emit(&mut self, name: &str, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| GenerateError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.dir.join(name);
        fs::write(&path, contents).map_err(|source| GenerateError::Io { path, source })
    }
}

/// Compares artifacts against the files already in a directory instead of writing them.
pub struct CheckSink {
    dir: PathBuf,
    stale: Vec<String>,
}

impl CheckSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_owned(),
            stale: Vec::new(),
        }
    }

    /// Names of artifacts that are missing or differ, so far.
    pub fn stale(&self) -> &[String] {
        &self.stale
    }

    /// Fails with every missing or differing artifact once all of them were compared.
    pub fn finish(self) -> Result<()> {
        if self.stale.is_empty() {
            Ok(())
        } else {
            Err(GenerateError::Stale(self.stale))
        }
    }
}

impl EmissionSink for CheckSink {
    fn emit(&mut self, name: &str, contents: &str) -> Result<()> {
        let path = self.dir.join(name);
        let up_to_date = match fs::read(&path) {
            Ok(existing) => existing == contents.as_bytes(),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => false,
            Err(source) => return Err(GenerateError::Io { path, source }),
        };
        if !up_to_date {
            tracing::warn!(artifact = name, path = %path.display(), "stale artifact");
            self.stale.push(name.to_owned());
        }
        Ok(())
    }
}
