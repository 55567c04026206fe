//! Uninstall script command implementation

use std::path::Path;

use super::context::CommandContext;
use crate::cask::{CaskMetadata, CaskSource, HttpCaskSource};
use crate::cli::UninstallScriptArgs;
use crate::error::{
    BrewmatchError, Result, catalog_unavailable, file_not_found, file_read_failed, invalid_cask,
};
use crate::resolver::{Outcome, Resolver, ReviewReason};
use crate::uninstall::{self, BulkReport};

/// Run uninstall-script command
pub fn run(ctx: &CommandContext, args: UninstallScriptArgs) -> Result<()> {
    let output_dir = args.output_dir;

    if let Some(apps_dir) = args.input.apps_dir {
        let source = HttpCaskSource::new(ctx.http_client()?, &ctx.config.cask_api_base);
        let report = uninstall::generate_for_apps_dir(&apps_dir, &source, &output_dir)?;
        print_report(&report, &output_dir);
        return Ok(());
    }

    let (cask, app_name) = if let Some(path) = args.input.json_file {
        (read_cask_file(&path)?, None)
    } else if let Some(json) = args.input.json_string {
        (CaskMetadata::from_json_str(&json)?, None)
    } else if let Some(name) = args.name {
        let source = HttpCaskSource::new(ctx.http_client()?, &ctx.config.cask_api_base);
        let cask = fetch_with_resolution(ctx, &source, &name)?;
        (cask, Some(name))
    } else {
        return Err(invalid_cask(
            "no cask given; pass a name, --json-file, --json-string or --apps-dir",
        ));
    };

    match uninstall::generate_for_cask(&cask, app_name.as_deref(), &output_dir)? {
        Some(path) => println!("Created uninstall script: {}", path.display()),
        None => println!(
            "No uninstall paths found for {}; no script written.",
            app_name.as_deref().unwrap_or_else(|| cask.display_name())
        ),
    }
    Ok(())
}

/// Fetch a cask by name, falling back to the fuzzy resolver
///
/// When no API file matches the name directly, the name is resolved against the
/// catalog and a confident match is fetched by its token instead. A catalog that
/// could not be loaded is reported as such rather than as a missing cask.
fn fetch_with_resolution(
    ctx: &CommandContext,
    source: &dyn CaskSource,
    name: &str,
) -> Result<CaskMetadata> {
    let not_found = match source.fetch_cask(name) {
        Ok(cask) => return Ok(cask),
        Err(e @ BrewmatchError::CaskNotFound { .. }) => e,
        Err(e) => return Err(e),
    };

    let resolution = Resolver::new(ctx.config.resolver, &ctx.catalog).resolve(name);
    if let Some(ReviewReason::CatalogUnavailable { reason }) = &resolution.reason {
        log::debug!("No catalog to resolve '{}' against: {}", name, reason);
        return Err(catalog_unavailable(reason.clone()));
    }
    match (&resolution.outcome, &resolution.primary_token) {
        (Outcome::AutoAccept | Outcome::AcceptWithAlternatives, Some(token)) => {
            log::info!("'{}' resolved to cask '{}'", name, token);
            source.fetch_cask(token)
        }
        _ => {
            log::debug!("'{}' did not resolve confidently ({})", name, resolution.outcome);
            Err(not_found)
        }
    }
}

fn read_cask_file(path: &Path) -> Result<CaskMetadata> {
    if !path.is_file() {
        return Err(file_not_found(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;
    CaskMetadata::from_json_str(&content)
}

fn print_report(report: &BulkReport, output_dir: &Path) {
    println!(
        "Generated {} of {} uninstall scripts in '{}'",
        report.written.len(),
        report.total(),
        output_dir.display()
    );
    for (app, reason) in &report.skipped {
        println!("  skipped {}: {}", app, reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogCache, CatalogEntry};
    use crate::cli::uninstall_script::ScriptInput;
    use crate::config::Config;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SIGNAL: &str = r#"{
        "token": "signal",
        "name": ["Signal"],
        "artifacts": [
            {"uninstall": [{"quit": "org.whispersystems.signal-desktop"}]},
            {"app": ["Signal.app"]}
        ]
    }"#;

    struct TokenSource {
        casks: HashMap<String, CaskMetadata>,
    }

    impl CaskSource for TokenSource {
        fn fetch_cask(&self, name: &str) -> Result<CaskMetadata> {
            self.casks
                .get(name)
                .cloned()
                .ok_or_else(|| BrewmatchError::CaskNotFound {
                    name: name.to_string(),
                })
        }
    }

    fn context() -> CommandContext {
        CommandContext {
            config: Config::default(),
            catalog: CatalogCache::from_catalog(Catalog::from_entries(
                vec![CatalogEntry::new("signal", ["Signal"])],
                "memory",
            )),
        }
    }

    fn script_path(output_dir: &Path, app_name: &str) -> PathBuf {
        output_dir.join(uninstall::script::script_file_name(app_name))
    }

    fn args(input: ScriptInput, output_dir: PathBuf) -> UninstallScriptArgs {
        UninstallScriptArgs {
            name: None,
            input,
            output_dir,
        }
    }

    #[test]
    fn test_run_with_json_string() {
        let temp = TempDir::new().unwrap();
        let input = ScriptInput {
            json_file: None,
            json_string: Some(SIGNAL.to_string()),
            apps_dir: None,
        };
        run(&context(), args(input, temp.path().to_path_buf())).unwrap();

        let script = std::fs::read_to_string(script_path(temp.path(), "Signal")).unwrap();
        assert!(script.contains("/Applications/Signal.app"));
        assert!(script.contains("$HOME/Library/Caches/org.whispersystems.signal-desktop"));
    }

    #[test]
    fn test_run_with_json_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("signal.json");
        std::fs::write(&file, SIGNAL).unwrap();
        let out = temp.path().join("out");

        let input = ScriptInput {
            json_file: Some(file),
            json_string: None,
            apps_dir: None,
        };
        run(&context(), args(input, out.clone())).unwrap();
        assert!(script_path(&out, "Signal").is_file());
    }

    #[test]
    fn test_run_with_missing_json_file() {
        let temp = TempDir::new().unwrap();
        let input = ScriptInput {
            json_file: Some(temp.path().join("missing.json")),
            json_string: None,
            apps_dir: None,
        };
        assert!(matches!(
            run(&context(), args(input, temp.path().to_path_buf())),
            Err(BrewmatchError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_fetch_with_resolution_falls_back_to_token() {
        let mut casks = HashMap::new();
        casks.insert(
            "signal".to_string(),
            CaskMetadata::from_json_str(SIGNAL).unwrap(),
        );
        let source = TokenSource { casks };
        let ctx = context();

        // direct hit
        assert_eq!(
            fetch_with_resolution(&ctx, &source, "signal").unwrap().token,
            "signal"
        );
        // "Signal App" has no API file but resolves to the signal cask
        assert_eq!(
            fetch_with_resolution(&ctx, &source, "Signal App").unwrap().token,
            "signal"
        );
        assert!(matches!(
            fetch_with_resolution(&ctx, &source, "Completely Unknown"),
            Err(BrewmatchError::CaskNotFound { .. })
        ));
    }

    struct UnreachableSource;

    impl CaskSource for UnreachableSource {
        fn fetch_cask(&self, name: &str) -> Result<CaskMetadata> {
            Err(crate::error::http_request_failed(
                format!("https://formulae.brew.sh/api/cask/{}.json", name),
                "connection refused",
            ))
        }
    }

    #[test]
    fn test_fetch_with_resolution_propagates_request_failure() {
        match fetch_with_resolution(&context(), &UnreachableSource, "Signal") {
            Err(BrewmatchError::HttpRequestFailed { reason, .. }) => {
                assert_eq!(reason, "connection refused");
            }
            other => panic!("expected HttpRequestFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_with_resolution_reports_unavailable_catalog() {
        let ctx = CommandContext {
            config: Config::default(),
            catalog: CatalogCache::unavailable("connection refused"),
        };
        let source = TokenSource {
            casks: HashMap::new(),
        };

        let err = fetch_with_resolution(&ctx, &source, "Signal").unwrap_err();
        match &err {
            BrewmatchError::CatalogUnavailable { reason } => {
                assert_eq!(reason, "connection refused");
            }
            other => panic!("expected CatalogUnavailable, got {:?}", other),
        }
        assert!(!err.to_string().contains("not found"));
    }
}
