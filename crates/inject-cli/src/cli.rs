use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `inject-field` binary.
#[derive(Debug, Parser)]
#[command(
    name = "inject-field",
    version,
    about = "Inject `// @inject_field:` fields into generated Go structs"
)]
pub struct Cli {
    /// Directory to walk for generated files
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}
