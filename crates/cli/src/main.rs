//! post2swag CLI
//!
//! Command-line interface for converting Postman collection exports
//! into OpenAPI 3.0 documents.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use post2swag_converter::PostmanParser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "post2swag")]
#[command(version, about = "Convert Postman collections into OpenAPI 3.0 documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a collection and display a summary of the resulting document
    #[command(after_help = "EXAMPLES:\n  \
        # Summarize a collection export\n  \
        post2swag inspect --collection shop.postman_collection.json\n\n  \
        # Include the per-path method breakdown\n  \
        post2swag inspect --collection shop.postman_collection.json --verbose")]
    Inspect {
        /// Path to the Postman collection export
        #[arg(short, long)]
        collection: PathBuf,
    },

    /// Convert a collection and write the OpenAPI document
    #[command(after_help = "EXAMPLES:\n  \
        # Write shop_swagger.json next to the input\n  \
        post2swag convert --collection shop.postman_collection.json\n\n  \
        # Explicit output path, YAML format\n  \
        post2swag convert \\\n    \
        --collection shop.postman_collection.json \\\n    \
        --format yaml \\\n    \
        --output openapi.yaml\n\n  \
        # Pipe the document to another tool\n  \
        post2swag convert --collection shop.postman_collection.json --stdout")]
    Convert {
        /// Path to the Postman collection export
        #[arg(short, long)]
        collection: PathBuf,

        /// Output file (defaults to `<input stem>_swagger.<format>`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Print the document to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { collection } => {
            inspect_command(collection.as_path(), cli.verbose)?;
        }
        Commands::Convert {
            collection,
            output,
            format,
            stdout,
        } => {
            convert_command(collection.as_path(), output.as_deref(), format, stdout)?;
        }
    }

    Ok(())
}

fn inspect_command(collection_path: &Path, verbose: bool) -> Result<()> {
    println!(
        "{} Parsing collection: {}",
        "→".cyan(),
        collection_path.display()
    );

    let parser = PostmanParser::from_file(collection_path).context("Failed to load collection")?;
    let document = parser.convert();

    let operation_count: usize = document.paths.values().map(|ops| ops.len()).sum();

    println!("\n{}", "✓ Parse successful!".green().bold());
    println!("\n{}", "Document:".bold());
    println!("  Title: {}", document.info.title.yellow());
    println!("  Base URL: {}", document.servers[0].url.yellow());
    println!("  Paths: {}", document.paths.len());
    println!("  Operations: {}", operation_count);

    if verbose {
        println!("\n{}", "Paths:".bold());
        for (path, operations) in &document.paths {
            let methods = operations
                .keys()
                .map(|method| method.to_uppercase())
                .collect::<Vec<_>>()
                .join(", ");
            println!("  • {} ({})", path.cyan(), methods);
        }
    }

    Ok(())
}

fn convert_command(
    collection_path: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    stdout: bool,
) -> Result<()> {
    let parser = PostmanParser::from_file(collection_path).context("Failed to load collection")?;
    let document = parser.convert();

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&document)
            .context("Failed to serialize OpenAPI document")?,
        OutputFormat::Yaml => {
            serde_yaml::to_string(&document).context("Failed to serialize OpenAPI document")?
        }
    };

    if stdout {
        println!("{}", rendered);
        return Ok(());
    }

    println!(
        "{} Converting collection: {}",
        "→".cyan(),
        collection_path.display()
    );

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(collection_path, format),
    };

    std::fs::write(&output_path, rendered)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("\n{}", "✓ Conversion complete!".green().bold());
    println!("  📄 {}", output_path.display());

    Ok(())
}

/// Default output path: the input stem with a `_swagger` suffix
fn default_output_path(collection_path: &Path, format: OutputFormat) -> PathBuf {
    let stem = collection_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("collection");

    collection_path.with_file_name(format!("{}_swagger.{}", stem, format))
}
