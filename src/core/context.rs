use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};

use crate::{
    cli::args::AnalyzeArgs,
    config::{CONFIG_FILE_NAME, Config, LocaleFile, load_config},
    core::{
        FileWarning, KeySet,
        file_scanner::{IgnoreRules, scan_files},
        parsers::xml::parse_resource_file,
        references::ReferencePatterns,
    },
};

/// Declared entries of one locale's resource file.
#[derive(Debug, Clone)]
pub struct DeclaredStrings {
    pub locale: LocaleFile,
    pub file_path: PathBuf,
    /// Entry names; empty when the file could not be parsed.
    pub keys: KeySet,
    /// Why the file could not be parsed, if it could not.
    pub warning: Option<FileWarning>,
}

/// Identifiers referenced anywhere in the scanned trees.
#[derive(Debug, Default)]
pub struct UsedStrings {
    pub keys: KeySet,
    pub files_scanned: usize,
    /// Scan roots that do not exist and were skipped.
    pub missing_dirs: Vec<PathBuf>,
    /// Files that could not be read; their references are omitted.
    pub warnings: Vec<FileWarning>,
    /// Directory entries the walk could not access.
    pub skipped_count: usize,
}

/// Parse a locale's resource file without failing the run.
///
/// A missing or malformed file yields an empty key set and a warning.
pub fn load_declared_strings(locale: &LocaleFile, path: &Path) -> DeclaredStrings {
    let (keys, warning) = match parse_resource_file(path) {
        Ok(keys) => (keys, None),
        Err(e) => (
            KeySet::new(),
            Some(FileWarning {
                file_path: path.to_string_lossy().to_string(),
                error: format!("{:#}", e),
            }),
        ),
    };

    DeclaredStrings {
        locale: locale.clone(),
        file_path: path.to_path_buf(),
        keys,
        warning,
    }
}

/// Collect referenced identifiers from every `(directory, extension)` root.
///
/// Roots that do not exist are recorded in `missing_dirs`, unreadable files
/// in `warnings`; neither stops the scan.
pub fn find_used_strings(
    roots: &[(PathBuf, &str)],
    patterns: &ReferencePatterns,
    ignores: &IgnoreRules,
    verbose: bool,
) -> UsedStrings {
    let mut used = UsedStrings::default();

    for (dir, extension) in roots {
        if !dir.is_dir() {
            used.missing_dirs.push(dir.clone());
            continue;
        }

        let scan = scan_files(dir, extension, ignores, verbose);
        used.skipped_count += scan.skipped_count;

        for file in scan.files {
            match fs::read_to_string(&file) {
                Ok(content) => {
                    patterns.collect(&content, &mut used.keys);
                    used.files_scanned += 1;
                }
                Err(e) => used.warnings.push(FileWarning {
                    file_path: file.to_string_lossy().to_string(),
                    error: e.to_string(),
                }),
            }
        }
    }

    used
}

/// Everything one run of the analysis produces.
#[derive(Debug)]
pub struct AnalysisData {
    pub primary: DeclaredStrings,
    pub secondary: DeclaredStrings,
    pub used: UsedStrings,
}

/// Resolved configuration and paths for one analysis run.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--app-dir`)
/// 2. `.unstrungrc.json` config file
/// 3. Built-in defaults
pub struct AnalysisContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub project_root: PathBuf,

    /// Application directory; checked to exist at construction.
    pub app_dir: PathBuf,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    patterns: ReferencePatterns,
    ignores: IgnoreRules,
}

impl AnalysisContext {
    /// Create a context from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the application
    /// directory does not exist.
    pub fn new(args: &AnalyzeArgs) -> Result<Self> {
        let project_root = args
            .project_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&project_root)?;

        if args.verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;

        if let Some(ref app_dir) = args.app_dir {
            config.app_dir = app_dir.to_string_lossy().to_string();
        }

        Self::from_config(config, project_root, args.verbose)
    }

    /// Create a context from an already loaded configuration.
    pub fn from_config(config: Config, project_root: PathBuf, verbose: bool) -> Result<Self> {
        config.validate()?;

        let app_dir = resolve_path(&project_root, &config.app_dir);
        if !app_dir.exists() {
            bail!(
                "Application directory '{}' does not exist.\n\
                 Hint: Check your {} 'appDir' setting or pass --app-dir.",
                app_dir.display(),
                CONFIG_FILE_NAME
            );
        }
        if !app_dir.is_dir() {
            bail!("'{}' is not a directory.", app_dir.display());
        }

        let patterns = ReferencePatterns::new(&config.resource_namespace)?;
        let ignores = IgnoreRules::new(
            &config.ignores,
            vec![project_root.clone(), app_dir.clone()],
        )?;

        Ok(Self {
            config,
            project_root,
            app_dir,
            verbose,
            patterns,
            ignores,
        })
    }

    /// Declared entries of the primary locale.
    pub fn primary_strings(&self) -> DeclaredStrings {
        self.declared_strings(&self.config.primary_locale)
    }

    /// Declared entries of the secondary locale.
    pub fn secondary_strings(&self) -> DeclaredStrings {
        self.declared_strings(&self.config.secondary_locale)
    }

    fn declared_strings(&self, locale: &LocaleFile) -> DeclaredStrings {
        let path = self.config.locale_path(&self.app_dir, locale);
        load_declared_strings(locale, &path)
    }

    /// Scan the source and markup trees for references.
    pub fn used_strings(&self) -> UsedStrings {
        let roots = [
            (
                self.config.source_root(&self.app_dir),
                self.config.source_extension.as_str(),
            ),
            (
                self.config.res_root(&self.app_dir),
                self.config.markup_extension.as_str(),
            ),
        ];
        find_used_strings(&roots, &self.patterns, &self.ignores, self.verbose)
    }

    /// Parse both locale files and scan the tree.
    pub fn collect(&self) -> AnalysisData {
        AnalysisData {
            primary: self.primary_strings(),
            secondary: self.secondary_strings(),
            used: self.used_strings(),
        }
    }
}

fn resolve_path(root: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}
