//! Init command: write a default rule configuration file.

use anyhow::{bail, Result};
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# fsd-lint rule document
# Keys use the same casing as the JSON wire format, so this file and the
# `rules` tool output stay interchangeable.

[fsd]
# Outer layers first; later entries are more foundational. The last layer is
# exempt from barrel-export enforcement.
layers = ["app", "pages", "widgets", "features", "entities", "shared"]

# Directed allow-lists: which layers each layer may import from.

[[fsd.boundaries]]
from = "app"
allow = ["pages", "widgets", "features", "entities", "shared"]

[[fsd.boundaries]]
from = "pages"
allow = ["widgets", "features", "entities", "shared"]

[[fsd.boundaries]]
from = "widgets"
allow = ["features", "entities", "shared"]

[[fsd.boundaries]]
from = "features"
allow = ["entities", "shared"]

[[fsd.boundaries]]
from = "entities"
allow = ["shared"]

[[fsd.boundaries]]
from = "shared"
allow = []

[fsd.rules]
"no-cross-layer-imports" = true
"enforce-directory-structure" = true
"no-private-imports" = true
"enforce-barrel-exports" = true

[naming]
fileCase = "kebab-case"

[naming.prefixes]
interface = "I"
type = "T"
enum = "ENUM_"

[naming.backend]
typeSuffix = "Backend"
fileSuffix = "-backend"

[linter]
noConsole = true
noAny = true
strictTyping = true
# Native enum declarations are always flagged; this key is informational.
noEnums = true

[structure.model]
baseMaxSize = 5
requiredFiles = ["index.ts", "types.ts"]
subfolders = ["types", "slice", "selectors", "actions"]
filePattern = "*.ts"

[structure.converters]
suffix = ".converters.ts"
mandatory = true

[styles]
forbiddenColors = [
    "slate", "gray", "zinc", "neutral", "stone",
    "red", "orange", "yellow", "green", "blue",
    "indigo", "purple", "pink",
]
requiredUtility = "cn"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("fsd-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, CONFIG_TEMPLATE)?;

    println!("Created fsd-lint.toml");
    println!();
    println!("Next steps:");
    println!("  1. Edit layers and [[fsd.boundaries]] for your project");
    println!("  2. Run: fsd-lint check");

    Ok(())
}
