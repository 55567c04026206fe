//! Bash uninstall script rendering and writing

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use super::UninstallItem;
use crate::error::{Result, file_write_failed};

/// Default directory for generated scripts
pub const DEFAULT_OUTPUT_DIR: &str = "Uninstall Scripts";

/// launchd plist locations checked for each service
const LAUNCHD_DIRS: [&str; 3] = [
    "/Library/LaunchAgents",
    "/Library/LaunchDaemons",
    "~/Library/LaunchAgents",
];

/// Render the uninstall script for `app_name`
///
/// The script must run as root, stops the app, then handles each item in order.
/// Every step tolerates failure so one missing file does not abort the rest.
pub fn render_script(app_name: &str, items: &[UninstallItem]) -> String {
    let name = escape_double_quoted(app_name);
    let mut script = format!(
        r#"#!/bin/bash
# Uninstall script for {name}
# Generated by brewmatch

# Exit on error
set -e

echo "Uninstalling {name}..."

# Check if running as root
if [ "$EUID" -ne 0 ]; then
  echo "Please run as root"
  exit 1
fi

# Kill application process if running
echo "Stopping {name} if running..."
pkill -f "{name}" 2>/dev/null || true
"#
    );

    for item in items {
        // writing to a String cannot fail
        let _ = render_item(&mut script, item);
    }

    script.push_str("\necho \"Uninstallation complete!\"\nexit 0\n");
    script
}

fn render_item(script: &mut String, item: &UninstallItem) -> std::fmt::Result {
    match item {
        UninstallItem::PackageReceipt(id) => {
            let id = escape_double_quoted(id);
            write!(
                script,
                r#"
# Remove package {id}
echo "Removing package {id}..."
pkgutil --forget "{id}" 2>/dev/null || true
"#
            )
        }
        UninstallItem::LaunchService(label) => {
            let quoted = escape_double_quoted(label);
            write!(
                script,
                "\n# Unload service {quoted}\necho \"Unloading service {quoted}...\"\n"
            )?;
            for dir in LAUNCHD_DIRS {
                let plist = shell_path(&format!("{}/{}.plist", dir, label));
                writeln!(script, "launchctl unload -w \"{plist}\" 2>/dev/null || true")?;
            }
            Ok(())
        }
        UninstallItem::BundleId(_) => Ok(()),
        UninstallItem::RemovePath(path) => {
            let path = shell_path(path);
            write!(
                script,
                r#"
# Remove {path}
echo "Removing {path}..."
if [ -d "{path}" ]; then
    rm -rf "{path}" 2>/dev/null || true
elif [ -f "{path}" ]; then
    rm -f "{path}" 2>/dev/null || true
fi
"#
            )
        }
    }
}

/// File-name-safe form of an app name
///
/// Spaces become `_`, anything that is not alphanumeric or `_` is dropped and the
/// result is lower-cased.
pub fn sanitize_filename(name: &str) -> String {
    name.replace(' ', "_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_lowercase()
}

/// `uninstall_<sanitized name>.sh`
pub fn script_file_name(app_name: &str) -> String {
    format!("uninstall_{}.sh", sanitize_filename(app_name))
}

/// Write `content` as the executable uninstall script for `app_name`
pub fn write_script(output_dir: &Path, app_name: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .map_err(|e| file_write_failed(output_dir.display().to_string(), e.to_string()))?;

    let path = output_dir.join(script_file_name(app_name));
    fs::write(&path, content)
        .map_err(|e| file_write_failed(path.display().to_string(), e.to_string()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).map_err(|e| {
            file_write_failed(path.display().to_string(), e.to_string())
        })?;
    }

    Ok(path)
}

/// Escape text for use inside a double-quoted bash string
fn escape_double_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Double-quotable path with a leading `~` expanded to `$HOME`
fn shell_path(path: &str) -> String {
    match path.strip_prefix('~') {
        Some(rest) => format!("$HOME{}", escape_double_quoted(rest)),
        None => escape_double_quoted(path),
    }
}
