//! Project configuration loading and command-line overlay
//!
//! `convert` resolves the project's `wepy.config.js` against the schema with
//! defaults, resolves the command-line arguments without defaults, and lays
//! the second over the first one top-level key at a time.

mod source;

pub use source::{parse_module, ConfigSource, ModuleFileSource};

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};
use wepy_core::{Map, Value, WepyError, WepyResult};

use crate::parse::{parse, InputOrigin, ResolvedConfig};
use crate::schema::{default_schema, Schema};

/// File name of the project configuration, relative to the working directory
pub const CONFIG_FILE_NAME: &str = "wepy.config.js";

/// Main configuration loading interface
pub struct ConfigLoader<S = ModuleFileSource> {
    /// Directory the configuration file is resolved against
    cwd: Utf8PathBuf,
    source: S,
}

impl ConfigLoader<ModuleFileSource> {
    /// Create a loader reading `wepy.config.js` from disk
    pub fn new(cwd: impl Into<Utf8PathBuf>) -> Self {
        Self::with_source(cwd, ModuleFileSource)
    }

    /// Create a loader for the process working directory
    pub fn from_current_dir() -> WepyResult<Self> {
        Ok(Self::new(current_dir()?))
    }
}

impl<S: ConfigSource> ConfigLoader<S> {
    /// Create a loader backed by a custom source
    pub fn with_source(cwd: impl Into<Utf8PathBuf>, source: S) -> Self {
        Self {
            cwd: cwd.into(),
            source,
        }
    }

    pub fn cwd(&self) -> &Utf8Path {
        &self.cwd
    }

    /// Absolute location of the configuration file
    pub fn config_path(&self) -> Utf8PathBuf {
        self.cwd.join(CONFIG_FILE_NAME)
    }

    /// Resolve the file configuration and overlay `cli_args` on it
    pub fn convert(&self, cli_args: &Map) -> WepyResult<ResolvedConfig> {
        self.convert_with_schema(cli_args, default_schema())
    }

    /// [`ConfigLoader::convert`] against a caller-supplied schema
    pub fn convert_with_schema(&self, cli_args: &Map, schema: &Schema) -> WepyResult<ResolvedConfig> {
        let path = self.config_path();
        let raw = self.source.load(&path)?;

        let raw = match raw {
            Value::Object(map) => map,
            other => {
                return Err(WepyError::config_load(
                    path.as_str(),
                    format!("expected an exported object, found {}", other.type_of()),
                ));
            },
        };

        let file_config = parse(&raw, schema, InputOrigin::ConfigFile)?;
        let cli_config = parse(cli_args, schema, InputOrigin::CommandLine)?;

        debug!(
            file_keys = file_config.as_map().len(),
            cli_keys = cli_config.as_map().len(),
            "overlaying command-line options"
        );
        info!(%path, "resolved project configuration");

        Ok(file_config.overlay(cli_config))
    }
}

/// Resolve `cli_args` against the configuration in the working directory
pub fn convert(cli_args: &Map) -> WepyResult<ResolvedConfig> {
    ConfigLoader::from_current_dir()?.convert(cli_args)
}

fn current_dir() -> WepyResult<Utf8PathBuf> {
    let cwd = std::env::current_dir()
        .map_err(|e| WepyError::io("Failed to get current directory", e))?;

    Utf8PathBuf::try_from(cwd).map_err(|e| {
        WepyError::io("Current directory is not valid UTF-8", e.into_io_error())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;
    use tempfile::TempDir;

    fn map(value: serde_json::Value) -> Map {
        match Value::from(value) {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    fn temp_project(config: Option<&str>) -> (TempDir, Utf8PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        if let Some(content) = config {
            std::fs::write(temp_path.join(CONFIG_FILE_NAME), content).unwrap();
        }
        (temp_dir, temp_path)
    }

    // The only test in this crate that depends on the process directory
    #[test]
    fn test_convert_uses_process_directory() {
        let (_temp_dir, cwd) = temp_project(Some(r#"module.exports = {"src": "lib"};"#));
        let previous = std::env::current_dir().unwrap();

        std::env::set_current_dir(&cwd).unwrap();
        let result = convert(&map(json!({"target": "web"})));
        std::env::set_current_dir(previous).unwrap();

        let resolved = result.unwrap();
        assert_eq!(resolved.get("src"), Some(&Value::from("lib")));
        assert_eq!(resolved.get("target"), Some(&Value::from("web")));
        assert_eq!(resolved.get("entry"), Some(&Value::from("app")));
    }

    #[test]
    fn test_config_path() {
        let loader = ConfigLoader::new("/project");
        assert_eq!(loader.cwd(), Utf8Path::new("/project"));
        assert_eq!(loader.config_path(), Utf8PathBuf::from("/project/wepy.config.js"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let (_temp_dir, cwd) =
            temp_project(Some(r#"module.exports = {"src": "lib", "eslint": false};"#));
        let loader = ConfigLoader::new(cwd);

        let resolved = loader.convert(&map(json!({"src": "app2"}))).unwrap();

        assert_eq!(resolved.get("src"), Some(&Value::from("app2")));
        assert_eq!(resolved.get("eslint"), Some(&Value::from(false)));
        // File side is fully defaulted
        assert_eq!(resolved.get("target"), Some(&Value::from("weapp")));
        assert_eq!(resolved.get("plugins"), Some(&Value::Array(vec![])));
    }

    #[test]
    fn test_cli_does_not_reset_file_values_to_defaults() {
        let (_temp_dir, cwd) = temp_project(Some(r#"module.exports = {"watch": true};"#));
        let resolved = ConfigLoader::new(cwd).convert(&Map::new()).unwrap();
        assert_eq!(resolved.get("watch"), Some(&Value::from(true)));
    }

    #[test]
    fn test_missing_config_file() {
        let (_temp_dir, cwd) = temp_project(None);
        let err = ConfigLoader::new(cwd).convert(&Map::new()).unwrap_err();
        assert!(matches!(err, WepyError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_missing_config_skips_cli_validation() {
        let (_temp_dir, cwd) = temp_project(None);
        let err = ConfigLoader::new(cwd)
            .convert(&map(json!({"target": 42})))
            .unwrap_err();
        assert!(matches!(err, WepyError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_overlay_replaces_nested_objects_wholesale() {
        let source = |_: &Utf8Path| -> WepyResult<Value> {
            Ok(Value::from(json!({
                "build": {"web": {"htmlOutput": "web/index.html", "jsOutput": "web/index.js"}}
            })))
        };
        let loader = ConfigLoader::with_source("/project", source);

        let cli = map(json!({"build": {"web": {"jsOutput": "dist/app.js"}}}));
        let resolved = loader.convert(&cli).unwrap();

        assert_eq!(resolved.get("build.web.jsOutput"), Some(&Value::from("dist/app.js")));
        assert_eq!(resolved.get("build.web.htmlOutput"), None);
    }

    #[test]
    fn test_overlay_keeps_file_key_order() {
        let source = |_: &Utf8Path| -> WepyResult<Value> { Ok(Value::object()) };
        let resolved = ConfigLoader::with_source("/project", source)
            .convert(&map(json!({"platform": "web", "entry": "main"})))
            .unwrap();

        let keys: Vec<&str> = resolved.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys[0], "entry");
        assert_eq!(resolved.get("entry"), Some(&Value::from("main")));
        // `platform` has no default, so it lands after the file keys
        assert_eq!(keys.last(), Some(&"platform"));
    }

    #[test]
    fn test_invalid_file_value() {
        let (_temp_dir, cwd) = temp_project(Some(r#"module.exports = {"noCache": "yes"};"#));
        let err = ConfigLoader::new(cwd).convert(&Map::new()).unwrap_err();
        assert_eq!(err.option_key(), Some("noCache"));
    }

    #[test]
    fn test_invalid_cli_value() {
        let (_temp_dir, cwd) = temp_project(Some("module.exports = {};"));
        let err = ConfigLoader::new(cwd)
            .convert(&map(json!({"plugins": "uglify"})))
            .unwrap_err();
        assert!(matches!(
            err,
            WepyError::InvalidOptionType { ref key, ref expected } if key == "plugins" && expected == "array"
        ));
    }

    #[test]
    fn test_non_object_export() {
        let source = |_: &Utf8Path| -> WepyResult<Value> { Ok(Value::from("weapp")) };
        let err = ConfigLoader::with_source("/project", source)
            .convert(&Map::new())
            .unwrap_err();
        assert!(matches!(err, WepyError::ConfigLoad { .. }));
        assert!(err.to_string().contains("found string"));
    }

    #[test]
    fn test_custom_source_receives_config_path() {
        let calls = Cell::new(0);
        let source = |path: &Utf8Path| -> WepyResult<Value> {
            calls.set(calls.get() + 1);
            assert_eq!(path, Utf8Path::new("/project/wepy.config.js"));
            Ok(Value::object())
        };

        ConfigLoader::with_source("/project", source)
            .convert(&Map::new())
            .unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_convert_with_custom_schema() {
        use crate::check::TypeTag;
        use crate::schema::FieldSpec;

        let schema = Schema::new()
            .field("port", FieldSpec::new(TypeTag::Number).with_default(8080));
        let source = |_: &Utf8Path| -> WepyResult<Value> { Ok(Value::object()) };
        let loader = ConfigLoader::with_source("/project", source);

        let resolved = loader.convert_with_schema(&Map::new(), &schema).unwrap();
        assert_eq!(resolved.get("port"), Some(&Value::from(8080)));

        let resolved = loader
            .convert_with_schema(&map(json!({"port": 3000})), &schema)
            .unwrap();
        assert_eq!(resolved.get("port"), Some(&Value::from(3000)));
    }
}
