/// Config file loading and creation for the sigrank CLI.
///
/// Config lives at ~/.config/sigrank/config.toml.
/// The [systems] table and dimensions drive a run; trials and seed fall
/// back to built-in defaults, and CLI args override config values.
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default)]
pub struct SigrankConfig {
    /// Raw judgment code → display name. The fixed lookup table.
    #[serde(default)]
    pub systems: BTreeMap<String, String>,
    /// A CSV belongs to a dimension when its filename contains the
    /// dimension name.
    #[serde(default)]
    pub dimensions: Vec<String>,
    pub trials: Option<usize>,
    pub seed: Option<u64>,
    #[serde(default)]
    pub columns: Columns,
}

/// Zero-based CSV field positions of the four judgment fields.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Columns {
    pub first_shown: usize,
    pub second_shown: usize,
    pub best: usize,
    pub worst: usize,
}

impl Default for Columns {
    fn default() -> Self {
        Columns {
            first_shown: 29,
            second_shown: 31,
            best: 32,
            worst: 37,
        }
    }
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# sigrank configuration
# All values here can be overridden by CLI flags.

# Quality dimensions. A judgment CSV belongs to a dimension when its
# filename contains the dimension name.
dimensions = [\"Repetition\", \"Coherence\", \"Grammaticality\"]

# Number of bootstrap trials per dimension.
# trials = 1000

# Master seed for the per-trial seed pool.
# seed = 42069

# Raw judgment codes mapped to display names. Required for ranking.
[systems]
sys0 = \"Gold\"
sys1 = \"Template\"
sys2 = \"ed_cc\"
sys3 = \"hier\"
sys4 = \"macro\"

# Zero-based CSV field positions of the judgment fields.
# [columns]
# first_shown = 29
# second_shown = 31
# best = 32
# worst = 37
";

/// Returns the default config path: ~/.config/sigrank/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home)
        .join(".config")
        .join("sigrank")
        .join("config.toml")
}

/// Load config from a file path. Returns default (all empty) if the file
/// doesn't exist.
pub fn load_config(path: &Path) -> SigrankConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => SigrankConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap_or_else(|e| {
            bail(format!("Failed to create directory {}: {e}", parent.display()))
        });
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}
