use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::file_scanner::IgnoreRules;

pub const CONFIG_FILE_NAME: &str = ".unstrungrc.json";

/// A locale's resource file, relative to the resource directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocaleFile {
    /// Short name used in the report (e.g. "cn").
    pub label: String,
    /// Path relative to `resDir` (e.g. "values/strings.xml").
    pub path: String,
}

impl LocaleFile {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_app_dir")]
    pub app_dir: String,
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    #[serde(default = "default_res_dir")]
    pub res_dir: String,
    #[serde(default = "default_markup_extension")]
    pub markup_extension: String,
    #[serde(default = "default_resource_namespace")]
    pub resource_namespace: String,
    #[serde(default = "default_primary_locale")]
    pub primary_locale: LocaleFile,
    #[serde(default = "default_secondary_locale")]
    pub secondary_locale: LocaleFile,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_app_dir() -> String {
    "app/src/main".to_string()
}

fn default_source_dir() -> String {
    "kotlin".to_string()
}

fn default_source_extension() -> String {
    "kt".to_string()
}

fn default_res_dir() -> String {
    "res".to_string()
}

fn default_markup_extension() -> String {
    "xml".to_string()
}

fn default_resource_namespace() -> String {
    "R".to_string()
}

fn default_primary_locale() -> LocaleFile {
    LocaleFile::new("cn", "values/strings.xml")
}

fn default_secondary_locale() -> LocaleFile {
    LocaleFile::new("en", "values-en/strings.xml")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_dir: default_app_dir(),
            source_dir: default_source_dir(),
            source_extension: default_source_extension(),
            res_dir: default_res_dir(),
            markup_extension: default_markup_extension(),
            resource_namespace: default_resource_namespace(),
            primary_locale: default_primary_locale(),
            secondary_locale: default_secondary_locale(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error naming the offending field if a glob pattern,
    /// extension, namespace or locale entry is unusable.
    pub fn validate(&self) -> Result<()> {
        IgnoreRules::new(&self.ignores, Vec::new())?;

        validate_extension("sourceExtension", &self.source_extension)?;
        validate_extension("markupExtension", &self.markup_extension)?;

        if !is_dotted_identifier(&self.resource_namespace) {
            bail!(
                "Invalid 'resourceNamespace': \"{}\" (expected an identifier such as \"R\" or \"com.example.R\")",
                self.resource_namespace
            );
        }

        for (field, locale) in [
            ("primaryLocale", &self.primary_locale),
            ("secondaryLocale", &self.secondary_locale),
        ] {
            if locale.label.trim().is_empty() {
                bail!("'{}.label' must not be empty", field);
            }
            if locale.path.trim().is_empty() {
                bail!("'{}.path' must not be empty", field);
            }
        }

        Ok(())
    }

    /// Directory holding the resource tree (`<appDir>/<resDir>`).
    pub fn res_root(&self, app_dir: &Path) -> PathBuf {
        app_dir.join(&self.res_dir)
    }

    /// Directory holding the source tree (`<appDir>/<sourceDir>`).
    pub fn source_root(&self, app_dir: &Path) -> PathBuf {
        app_dir.join(&self.source_dir)
    }

    /// Resolve a locale's resource file against the application directory.
    pub fn locale_path(&self, app_dir: &Path, locale: &LocaleFile) -> PathBuf {
        self.res_root(app_dir).join(&locale.path)
    }
}

fn validate_extension(field: &str, extension: &str) -> Result<()> {
    if extension.is_empty() {
        bail!("'{}' must not be empty", field);
    }
    if extension.starts_with('.') {
        bail!(
            "Invalid '{}': \"{}\" (write the extension without a leading dot)",
            field,
            extension
        );
    }
    Ok(())
}

fn is_dotted_identifier(value: &str) -> bool {
    !value.is_empty()
        && value.split('.').all(|part| {
            let mut chars = part.chars();
            chars
                .next()
                .is_some_and(|c| c.is_alphabetic() || c == '_')
                && chars.all(|c| c.is_alphanumeric() || c == '_')
        })
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
