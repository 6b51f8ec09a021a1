//! The rule document: layers, boundaries, naming, linter, structure, styles.
//!
//! Loaded once at process start (TOML or JSON) and treated as immutable
//! thereafter. Every analyzer receives the document read-only, so concurrent
//! analysis requests share one instance without locking.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors when loading or validating a rule document.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// Failed to read the rule file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// IO error.
        source: std::io::Error,
    },
    /// Failed to parse the document.
    #[error("invalid rule document: {message}")]
    Parse {
        /// Parse error detail.
        message: String,
    },
    /// Document is structurally invalid.
    #[error("rule validation: {0}")]
    Validation(String),
}

/// Top-level rule document.
///
/// Field names follow the wire format expected by tool callers, so the same
/// schema round-trips through both the TOML config file and JSON requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    /// Layer and boundary rules.
    pub fsd: FsdRules,
    /// Declaration and file naming rules.
    pub naming: NamingRules,
    /// Linter prohibitions.
    pub linter: LinterRules,
    /// Module structure constraints.
    pub structure: StructureRules,
    /// Style constraints.
    pub styles: StyleRules,
}

/// Feature-Sliced-Design layer rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FsdRules {
    /// Layer names, outer layers first; later entries are more foundational.
    pub layers: Vec<String>,
    /// Directed allow-lists between layers.
    pub boundaries: Vec<BoundaryDef>,
    /// Rule toggles.
    pub rules: FsdToggles,
}

/// The allow-list for one source layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryDef {
    /// Source layer name.
    pub from: String,
    /// Layers the source may import from.
    pub allow: Vec<String>,
}

/// On/off switches for the boundary checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FsdToggles {
    /// Flag cross-layer imports outside the allow-list.
    #[serde(rename = "no-cross-layer-imports")]
    pub no_cross_layer_imports: bool,
    /// Enforce the expected directory layout.
    #[serde(rename = "enforce-directory-structure")]
    pub enforce_directory_structure: bool,
    /// Flag imports of slice internals.
    #[serde(rename = "no-private-imports")]
    pub no_private_imports: bool,
    /// Flag imports that reach past a slice's public entry point.
    #[serde(rename = "enforce-barrel-exports")]
    pub enforce_barrel_exports: bool,
}

/// Declaration and file naming rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingRules {
    /// File naming convention (informational).
    pub file_case: String,
    /// Required declaration-name prefixes.
    pub prefixes: NamingPrefixes,
    /// Backend type/file suffix pair.
    pub backend: BackendNaming,
}

/// Required prefixes per declaration kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingPrefixes {
    /// Interface declarations (e.g., `"I"`).
    pub interface: String,
    /// Type alias declarations (e.g., `"T"`).
    #[serde(rename = "type")]
    pub type_alias: String,
    /// Literal enum objects and enum-style types (e.g., `"ENUM_"`).
    #[serde(rename = "enum")]
    pub enum_object: String,
}

/// Suffixes that mark backend-coupled types and files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendNaming {
    /// Required suffix on interfaces in backend files (e.g., `"Backend"`).
    pub type_suffix: String,
    /// File name token that classifies a file as backend (e.g., `"-backend"`).
    pub file_suffix: String,
}

/// Linter prohibitions.
///
/// `no_enums` is kept for schema compatibility but is not consulted: native
/// enum declarations are always flagged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinterRules {
    /// Prohibit `console.*` usage.
    pub no_console: bool,
    /// Prohibit `any` annotations and casts.
    pub no_any: bool,
    /// Require explicit typing (informational).
    pub strict_typing: bool,
    /// Prohibit native enum declarations.
    pub no_enums: bool,
}

/// Module structure constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureRules {
    /// Constraints on `model` directories.
    pub model: ModelStructure,
    /// Data-mapping converter requirements.
    pub converters: ConverterRules,
}

/// Constraints on a slice's `model` directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelStructure {
    /// Maximum file count before the model must be split into subfolders.
    pub base_max_size: usize,
    /// Files every model is expected to carry.
    pub required_files: Vec<String>,
    /// Subfolder set a large model must be organized into.
    pub subfolders: Vec<String>,
    /// Glob describing model files (informational).
    pub file_pattern: String,
}

/// Data-mapping converter requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterRules {
    /// Required file suffix for converters (e.g., `".converters.ts"`).
    pub suffix: String,
    /// Whether a converter is mandatory when a module has an `api` segment.
    pub mandatory: bool,
}

/// Style constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRules {
    /// Color-name tokens forbidden as ad-hoc utility classes.
    pub forbidden_colors: Vec<String>,
    /// Required class-merge utility function name (e.g., `"cn"`).
    pub required_utility: String,
}

impl Default for RuleSet {
    fn default() -> Self {
        let layers = ["app", "pages", "widgets", "features", "entities", "shared"];
        // Every layer may import from all layers below it
        let boundaries = layers
            .iter()
            .enumerate()
            .map(|(i, from)| BoundaryDef {
                from: (*from).to_string(),
                allow: layers[i + 1..].iter().map(|l| (*l).to_string()).collect(),
            })
            .collect();

        Self {
            fsd: FsdRules {
                layers: layers.iter().map(|l| (*l).to_string()).collect(),
                boundaries,
                rules: FsdToggles {
                    no_cross_layer_imports: true,
                    enforce_directory_structure: true,
                    no_private_imports: true,
                    enforce_barrel_exports: true,
                },
            },
            naming: NamingRules {
                file_case: "kebab-case".to_string(),
                prefixes: NamingPrefixes {
                    interface: "I".to_string(),
                    type_alias: "T".to_string(),
                    enum_object: "ENUM_".to_string(),
                },
                backend: BackendNaming {
                    type_suffix: "Backend".to_string(),
                    file_suffix: "-backend".to_string(),
                },
            },
            linter: LinterRules {
                no_console: true,
                no_any: true,
                strict_typing: true,
                no_enums: true,
            },
            structure: StructureRules {
                model: ModelStructure {
                    base_max_size: 5,
                    required_files: vec!["index.ts".to_string(), "types.ts".to_string()],
                    subfolders: vec![
                        "types".to_string(),
                        "slice".to_string(),
                        "selectors".to_string(),
                        "actions".to_string(),
                    ],
                    file_pattern: "*.ts".to_string(),
                },
                converters: ConverterRules {
                    suffix: ".converters.ts".to_string(),
                    mandatory: true,
                },
            },
            styles: StyleRules {
                forbidden_colors: vec![
                    "slate".to_string(),
                    "gray".to_string(),
                    "zinc".to_string(),
                    "neutral".to_string(),
                    "stone".to_string(),
                    "red".to_string(),
                    "orange".to_string(),
                    "yellow".to_string(),
                    "green".to_string(),
                    "blue".to_string(),
                    "indigo".to_string(),
                    "purple".to_string(),
                    "pink".to_string(),
                ],
                required_utility: "cn".to_string(),
            },
        }
    }
}

impl RuleSet {
    /// Load from a TOML or JSON file, dispatching on the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self, RulesError> {
        let content = std::fs::read_to_string(path).map_err(|e| RulesError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let rules = if is_json {
            Self::parse_json(&content)?
        } else {
            Self::parse_toml(&content)?
        };

        rules.validate()?;
        Ok(rules)
    }

    /// Parse from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse_toml(content: &str) -> Result<Self, RulesError> {
        toml::from_str(content).map_err(|e| RulesError::Parse {
            message: e.to_string(),
        })
    }

    /// Parse from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn parse_json(content: &str) -> Result<Self, RulesError> {
        serde_json::from_str(content).map_err(|e| RulesError::Parse {
            message: e.to_string(),
        })
    }

    /// Validate document consistency.
    ///
    /// Boundary entries may reference only configured layer names.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first problem found.
    pub fn validate(&self) -> Result<(), RulesError> {
        let layer_names: std::collections::HashSet<&str> =
            self.fsd.layers.iter().map(String::as_str).collect();

        for (i, b) in self.fsd.boundaries.iter().enumerate() {
            if !layer_names.contains(b.from.as_str()) {
                return Err(RulesError::Validation(format!(
                    "boundaries[{i}]: unknown layer '{}'",
                    b.from
                )));
            }
            for dep in &b.allow {
                if !layer_names.contains(dep.as_str()) {
                    return Err(RulesError::Validation(format!(
                        "boundaries[{i}] ({}): unknown allowed layer '{dep}'",
                        b.from
                    )));
                }
            }
        }

        if self.fsd.layers.is_empty() {
            return Err(RulesError::Validation("no layers configured".to_string()));
        }

        Ok(())
    }

    /// The most foundational layer (last in the configured order).
    #[must_use]
    pub fn foundational_layer(&self) -> Option<&str> {
        self.fsd.layers.last().map(String::as_str)
    }
}
