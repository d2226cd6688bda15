use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "ldedit", version, about = "Schema.org JSON-LD editor")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Catalog JSON file replacing the built-in schema types.
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Type used for new sessions and as the import fallback.
    #[arg(long, global = true)]
    pub default_type: Option<String>,

    /// Refuse imports larger than this many bytes.
    #[arg(long, global = true)]
    pub max_import_bytes: Option<usize>,

    /// Debug logging on stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List catalog types, or the properties of one type.
    Types {
        name: Option<String>,
    },

    /// Start a new document of the given type.
    New {
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// Property edit, `key=value`. An empty value removes the key.
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Write the document here instead of stdout.
        #[arg(long)]
        out: Option<String>,
    },

    /// Import a JSON or HTML file and validate it.
    Validate {
        file: String,

        /// Validate against this type instead of the imported one.
        #[arg(long = "type", value_name = "TYPE")]
        type_name: Option<String>,
    },

    /// Import a file, apply edits and write the result.
    Edit {
        file: String,

        /// Property edit, `key=value`.
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Property to remove.
        #[arg(long = "unset", value_name = "KEY")]
        unset: Vec<String>,

        /// Replace the document with the contents of this JSON file, as if
        /// typed into the raw view. Applied before property edits.
        #[arg(long)]
        raw: Option<String>,

        /// Write the document here instead of stdout.
        #[arg(long)]
        out: Option<String>,
    },

    /// Export an imported document.
    Export {
        file: String,

        #[arg(long, value_enum, default_value_t = ExportFormat::Jsonld)]
        format: ExportFormat,

        /// Directory receiving `<type>.jsonld`.
        #[arg(long, default_value = ".")]
        out_dir: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Write `<type>.jsonld`.
    Jsonld,
    /// Print a `<script type="application/ld+json">` snippet.
    Script,
}
