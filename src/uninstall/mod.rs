//! Uninstall script generation from cask metadata
//!
//! [`extract_items`] collects what a cask leaves on disk, [`script::render_script`]
//! turns that into a bash script and [`bulk`] does both for a directory of app
//! definitions.

pub mod bulk;
pub mod script;

pub use bulk::{BulkReport, generate_for_apps_dir};
pub use script::{render_script, write_script};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::cask::CaskMetadata;
use crate::error::Result;

/// Install location of app bundles
const APPLICATIONS_DIR: &str = "/Applications";

/// Something an uninstall script has to take care of
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UninstallItem {
    /// File or directory to delete; may start with `~`
    RemovePath(String),
    /// Package receipt to forget
    PackageReceipt(String),
    /// launchd label to unload
    LaunchService(String),
    /// Bundle identifier; informational only
    BundleId(String),
}

/// Collect the uninstall items of a cask
///
/// Paths come first in artifact order, then package receipts, launch services and
/// bundle ids. With a bundle id the usual `~/Library` locations are added. Repeats are
/// dropped, keeping the first occurrence.
pub fn extract_items(cask: &CaskMetadata) -> Vec<UninstallItem> {
    let mut paths = Vec::new();
    let mut receipts = Vec::new();
    let mut services = Vec::new();
    let mut bundle_ids = Vec::new();

    for artifact in &cask.artifacts {
        match artifact {
            Value::String(app) if app.ends_with(".app") => {
                paths.push(format!("{}/{}", APPLICATIONS_DIR, app));
            }
            Value::Object(stanza) => {
                if let Some(apps) = stanza.get("app") {
                    paths.extend(
                        strings(apps)
                            .into_iter()
                            .map(|app| format!("{}/{}", APPLICATIONS_DIR, app)),
                    );
                }

                for key in ["uninstall", "zap"] {
                    let Some(directives) = stanza.get(key) else {
                        continue;
                    };
                    for directive in as_list(directives) {
                        let Value::Object(directive) = directive else {
                            continue;
                        };
                        if key == "zap" {
                            if let Some(trash) = directive.get("trash") {
                                paths.extend(strings(trash));
                            }
                        }
                        if let Some(v) = directive.get("pkgutil") {
                            receipts.extend(strings(v));
                        }
                        if let Some(v) = directive.get("launchctl") {
                            services.extend(strings(v));
                        }
                        if let Some(v) = directive.get("quit") {
                            bundle_ids.extend(strings(v));
                        }
                    }
                }
            }
            _ => {}
        }
    }

    receipts.extend(cask.pkgutil.iter().cloned());
    services.extend(cask.launchctl.iter().cloned());
    bundle_ids.extend(cask.quit.iter().cloned());

    let bundle_id = cask
        .bundle_id
        .clone()
        .or_else(|| bundle_ids.first().cloned());

    let mut items: Vec<UninstallItem> = paths
        .into_iter()
        .map(UninstallItem::RemovePath)
        .chain(receipts.into_iter().map(UninstallItem::PackageReceipt))
        .chain(services.into_iter().map(UninstallItem::LaunchService))
        .chain(bundle_ids.into_iter().map(UninstallItem::BundleId))
        .collect();

    if let Some(bundle_id) = bundle_id {
        items.extend(
            library_paths(cask.display_name(), &bundle_id)
                .into_iter()
                .map(UninstallItem::RemovePath),
        );
    }

    dedup_in_order(items)
}

/// Render and write the uninstall script for one cask
///
/// `app_name` overrides the cask's display name. Returns `None` when the cask has
/// nothing to uninstall.
pub fn generate_for_cask(
    cask: &CaskMetadata,
    app_name: Option<&str>,
    output_dir: &Path,
) -> Result<Option<PathBuf>> {
    let app_name = app_name.unwrap_or_else(|| cask.display_name());
    let items = extract_items(cask);
    if items.is_empty() {
        log::warn!("No uninstall paths found for {}", app_name);
        return Ok(None);
    }

    let content = render_script(app_name, &items);
    let path = write_script(output_dir, app_name, &content)?;
    log::info!("Created uninstall script for {}: {}", app_name, path.display());
    Ok(Some(path))
}

fn library_paths(app_name: &str, bundle_id: &str) -> Vec<String> {
    vec![
        format!("~/Library/Application Support/{}", app_name),
        format!("~/Library/Caches/{}", bundle_id),
        format!("~/Library/Preferences/{}.plist", bundle_id),
        format!("~/Library/Saved Application State/{}.savedState", bundle_id),
    ]
}

fn as_list(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

/// String values of a string-or-list field; other shapes are ignored
fn strings(value: &Value) -> Vec<String> {
    as_list(value)
        .into_iter()
        .filter_map(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn dedup_in_order(items: Vec<UninstallItem>) -> Vec<UninstallItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
