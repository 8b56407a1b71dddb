//! Manifest loading for runpick.
//!
//! This module reads a `package.json` style manifest and extracts the
//! `scripts` table into a [`ScriptSet`], keeping declaration order.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Deserialize, Debug, Default)]
struct PackageManifest {
    #[serde(default)]
    scripts: Option<IndexMap<String, String>>,
}

/// The scripts declared by a manifest, in declaration order.
///
/// Names are unique; the command bound to each name is opaque to matching
/// and resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptSet {
    scripts: IndexMap<String, String>,
}

impl ScriptSet {
    /// Builds a set from `(name, command)` pairs. A repeated name keeps its
    /// first position and its last command.
    pub fn from_pairs<I, N, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            scripts: pairs
                .into_iter()
                .map(|(name, command)| (name.into(), command.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.scripts.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn command(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.scripts
            .iter()
            .map(|(name, command)| (name.as_str(), command.as_str()))
    }
}

fn get_reader(file_description: &str, path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        Error::io_error(
            file_description.to_string(),
            path.display().to_string(),
            e,
        )
    })
}

/// Loads the scripts declared in the manifest at `manifest_path`.
///
/// A manifest without a `scripts` table, or with `"scripts": null`, yields an
/// empty [`ScriptSet`]; every other manifest field is ignored.
///
/// # Errors
///
/// Returns an error if:
/// - No file exists at the path ([`Error::ManifestNotFound`])
/// - The file exists but cannot be opened ([`Error::Io`])
/// - The content is not valid JSON, or `scripts` is not an object of strings
///   ([`Error::ManifestParse`])
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use runpick_core::manifest::load_scripts;
///
/// let scripts = load_scripts(Path::new("package.json"))?;
/// println!("Loaded {} scripts", scripts.len());
/// # Ok::<(), runpick_core::error::Error>(())
/// ```
pub fn load_scripts(manifest_path: &Path) -> Result<ScriptSet> {
    if !manifest_path.exists() {
        return Err(Error::manifest_not_found(
            manifest_path.display().to_string(),
        ));
    }

    let reader = BufReader::new(get_reader("manifest", manifest_path)?);

    let manifest: PackageManifest = serde_json::from_reader(reader)
        .map_err(|e| Error::manifest_parse(manifest_path.display().to_string(), e))?;

    let scripts = manifest.scripts.unwrap_or_default();
    debug!(
        "Loaded {} scripts from `{}`",
        scripts.len(),
        manifest_path.display()
    );

    Ok(ScriptSet { scripts })
}
