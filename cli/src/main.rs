//! armydoc CLI - service document conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use armydoc::{
    parse_file_with_options, Document, JsonFormat, ParseOptions, Part, PartChild, RenderOptions,
};

#[derive(Parser)]
#[command(name = "armydoc")]
#[command(version)]
#[command(about = "Convert plain-text service documents to HTML and JSON", long_about = None)]
struct Cli {
    /// Input document file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output HTML file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to HTML
    Html {
        /// Input document file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Render parts one after another
        #[arg(long)]
        sequential: bool,
    },

    /// Convert a document to JSON
    Json {
        /// Input document file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Skip header processing and part nesting
        #[arg(long)]
        raw: bool,
    },

    /// Show document information
    Info {
        /// Input document file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Html {
            input,
            output,
            sequential,
        }) => cmd_html(&input, output.as_deref(), sequential),
        Some(Commands::Json {
            input,
            output,
            compact,
            raw,
        }) => cmd_json(&input, output.as_deref(), compact, raw),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: write HTML next to the input
            if let Some(input) = cli.input {
                let output = cli.output.unwrap_or_else(|| default_output(&input));
                cmd_html(&input, Some(&output), false)
            } else {
                println!("{}", "Usage: armydoc <FILE> [OUTPUT]".yellow());
                println!("       armydoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn default_output(input: &Path) -> PathBuf {
    input.with_extension("html")
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Parsing {}", input.display());
    let doc = armydoc::parse_file(input)?;

    let mut render_options = RenderOptions::new();
    if sequential {
        render_options = render_options.sequential();
    }

    let html = armydoc::render::to_html(&doc, &render_options)?;

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    raw: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = if raw {
        ParseOptions::new().raw()
    } else {
        ParseOptions::new()
    };
    let doc = parse_file_with_options(input, options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = armydoc::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Header processing needs the required properties; info should work without them
    let options = ParseOptions::new().with_post_processing(false);
    let doc = parse_file_with_options(input, options)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());

    for (key, value) in doc.properties.iter() {
        println!("{}: {}", key.bold(), serde_json::to_string(value)?);
    }

    println!();
    println!("{}", "Parts".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for part in &doc.parts {
        print_part(part, 0);
    }

    println!();
    print_statistics(&doc);

    Ok(())
}

fn print_part(part: &Part, depth: usize) {
    let indent = "  ".repeat(depth);
    println!(
        "{}{} {} {} ({} blocks{})",
        indent,
        part.name.bold(),
        part.description,
        format!("[{}]", part.kind).dimmed(),
        part.block_count(),
        if part.is_landscape() { ", landscape" } else { "" }
    );

    for child in &part.children {
        match child {
            PartChild::Summary { name, description } => {
                println!("{}  {} {} {}", indent, "├─".dimmed(), name, description);
            }
            PartChild::Part(nested) => print_part(nested, depth + 1),
        }
    }
}

fn print_statistics(doc: &Document) {
    let tables: usize = doc
        .parts
        .iter()
        .flat_map(|p| std::iter::once(p).chain(p.nested_parts()))
        .map(|p| p.blocks.iter().filter(|b| b.is_table()).count())
        .sum();

    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Parts".bold(), doc.part_count());
    println!("{}: {}", "Blocks".bold(), doc.block_count());
    println!("{}: {}", "Tables".bold(), tables);
}

fn cmd_version() {
    println!("{} {}", "armydoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Service document conversion tool");
    println!();
    println!("License: MIT");
}
