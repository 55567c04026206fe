//! Uninstall scripts for a directory of app definitions
//!
//! Each `*.json` file directly inside the apps directory names one app in its `name`
//! field. A failure for one app is reported and the rest carry on.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use super::generate_for_cask;
use crate::cask::CaskSource;
use crate::common::serde_utils::one_or_many;
use crate::error::{Result, file_not_found, file_read_failed};

#[derive(Debug, Deserialize)]
struct AppDefinition {
    #[serde(default, deserialize_with = "one_or_many")]
    name: Vec<String>,
}

/// What a bulk run produced
#[derive(Debug, Default)]
pub struct BulkReport {
    /// Scripts written
    pub written: Vec<PathBuf>,
    /// Apps without a script, with the reason
    pub skipped: Vec<(String, String)>,
}

impl BulkReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}

/// App definition files directly inside `apps_dir`, sorted by path
pub fn app_definition_files(apps_dir: &Path) -> Result<Vec<PathBuf>> {
    if !apps_dir.is_dir() {
        return Err(file_not_found(apps_dir.display().to_string()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(apps_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", apps_dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();

    files.sort();
    Ok(files)
}

/// App name declared by one definition file
pub fn read_app_name(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;

    let definition: AppDefinition = serde_json::from_str(&content)
        .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;

    definition
        .name
        .into_iter()
        .find(|n| !n.trim().is_empty())
        .ok_or_else(|| {
            file_read_failed(path.display().to_string(), "missing field `name`".to_string())
        })
}

/// Generate one script per app definition in `apps_dir`
pub fn generate_for_apps_dir(
    apps_dir: &Path,
    source: &dyn CaskSource,
    output_dir: &Path,
) -> Result<BulkReport> {
    let files = app_definition_files(apps_dir)?;
    log::info!("Generating uninstall scripts for {} applications", files.len());

    let mut report = BulkReport::default();
    for file in files {
        let app_name = match read_app_name(&file) {
            Ok(name) => name,
            Err(e) => {
                log::warn!("Error processing {}: {}", file.display(), e);
                report
                    .skipped
                    .push((file.display().to_string(), e.to_string()));
                continue;
            }
        };

        let outcome = source
            .fetch_cask(&app_name)
            .and_then(|cask| generate_for_cask(&cask, Some(app_name.as_str()), output_dir));

        match outcome {
            Ok(Some(path)) => report.written.push(path),
            Ok(None) => report
                .skipped
                .push((app_name, "no uninstall paths found".to_string())),
            Err(e) => {
                log::warn!("Could not generate uninstall script for {}: {}", app_name, e);
                report.skipped.push((app_name, e.to_string()));
            }
        }
    }

    Ok(report)
}
