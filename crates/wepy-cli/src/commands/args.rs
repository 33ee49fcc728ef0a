//! Option flags shared by the resolving commands.
//!
//! Only flags that were actually given end up in the argument object, so
//! the resolver can tell an explicit flag from a schema default.

use clap::Args;
use wepy_config::set_value;
use wepy_core::{Map, Value};

#[derive(Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Entry file name, without extension
    #[arg(long)]
    pub entry: Option<String>,

    /// Source directory
    #[arg(long)]
    pub src: Option<String>,

    /// Output target
    #[arg(long)]
    pub target: Option<String>,

    /// Static asset directory, may be repeated
    #[arg(long = "static", value_name = "DIR")]
    pub static_dirs: Vec<String>,

    /// Output directory
    #[arg(long)]
    pub output: Option<String>,

    /// Target platform
    #[arg(long)]
    pub platform: Option<String>,

    /// Component file extension
    #[arg(long = "wpy-ext", value_name = "EXT")]
    pub wpy_ext: Option<String>,

    /// Enable or disable eslint
    #[arg(long, value_name = "BOOL")]
    pub eslint: Option<bool>,

    /// Print compiler logs
    #[arg(long = "cli-logs")]
    pub cli_logs: bool,

    /// Watch for changes
    #[arg(short, long)]
    pub watch: bool,

    /// Ignore the build cache
    #[arg(long = "no-cache")]
    pub no_cache: bool,

    /// Set any option by dotted key; the value is read as JSON, or as a plain string
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
    pub options: Vec<(String, Value)>,
}

impl ResolveArgs {
    /// Build the raw command-line argument object
    pub fn to_cli_args(&self) -> Map {
        let mut args = Map::new();

        let strings = [
            ("entry", &self.entry),
            ("src", &self.src),
            ("target", &self.target),
            ("output", &self.output),
            ("platform", &self.platform),
            ("wpyExt", &self.wpy_ext),
        ];
        for (key, value) in strings {
            if let Some(value) = value {
                set_value(&mut args, key, Value::from(value.as_str()));
            }
        }

        match self.static_dirs.as_slice() {
            [] => {},
            [single] => {
                set_value(&mut args, "static", Value::from(single.as_str()));
            },
            many => {
                let dirs = many.iter().map(|d| Value::from(d.as_str())).collect();
                set_value(&mut args, "static", Value::Array(dirs));
            },
        }

        if let Some(eslint) = self.eslint {
            set_value(&mut args, "eslint", Value::from(eslint));
        }

        let flags = [
            ("cliLogs", self.cli_logs),
            ("watch", self.watch),
            ("noCache", self.no_cache),
        ];
        for (key, set) in flags {
            if set {
                set_value(&mut args, key, Value::from(true));
            }
        }

        for (key, value) in &self.options {
            set_value(&mut args, key, value.clone());
        }

        args
    }
}

/// Parse a `KEY=VALUE` option
pub fn parse_option(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;

    if key.is_empty() {
        return Err(format!("missing option key in '{}'", raw));
    }

    let value = serde_json::from_str::<Value>(value).unwrap_or_else(|_| Value::from(value));
    Ok((key.to_string(), value))
}
