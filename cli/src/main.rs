//! docoutline CLI - document outline extraction tool

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docoutline::analysis::FontStatistics;
use docoutline::render::{to_json, write_json};
use docoutline::{
    validate_json, BatchItem, BatchProcessor, ExtractOptions, JsonFormat, ReaderRegistry,
    ValidationWarning,
};

#[derive(Parser)]
#[command(name = "docoutline")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Infer a title and H1/H2/H3 outline from page dumps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract outlines from one or more page dumps
    Extract {
        /// Input files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (stdout if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Deduplicate headings per page instead of per document
        #[arg(long)]
        per_page_dedup: bool,

        /// Normalize whitespace, quotes and dashes in the output
        #[arg(long)]
        clean_text: bool,

        /// Stop at the first failing document
        #[arg(long)]
        strict: bool,

        /// Process documents one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Check outline JSON files against the output contract
    Validate {
        /// Outline files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Show document information and font statistics
    Info {
        /// Input file
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
        Commands::Extract {
            inputs,
            output,
            compact,
            per_page_dedup,
            clean_text,
            strict,
            sequential,
        } => {
            let mut options = ExtractOptions::new()
                .with_clean_text(clean_text)
                .with_parallel(!sequential);
            if per_page_dedup {
                options = options.per_page_dedup();
            }
            if strict {
                options = options.strict();
            }
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            cmd_extract(&inputs, output.as_deref(), options, format)
        }
        Commands::Validate { inputs } => cmd_validate(&inputs),
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_extract(
    inputs: &[PathBuf],
    output: Option<&Path>,
    options: ExtractOptions,
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let processor = BatchProcessor::new(options)?;

    let pb = if inputs.len() > 1 {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Extracting outlines...");
        Some(pb)
    } else {
        None
    };

    let items = processor.run(inputs)?;

    if let Some(dir) = output {
        fs::create_dir_all(dir)?;
    }

    let file_names = output_file_names(items.iter().map(|item| item.path.as_path()));

    let mut recovered = 0;
    for (item, file_name) in items.iter().zip(&file_names) {
        if item.recovered {
            recovered += 1;
        }
        report_item(item, pb.as_ref());

        match output {
            Some(dir) => {
                let path = dir.join(file_name);
                write_json(&item.outline, &path, format)?;
                if pb.is_none() {
                    println!("{} {}", "Saved to".green(), path.display());
                }
            }
            None => {
                let json = to_json(&item.outline, format)?;
                match &pb {
                    Some(pb) => pb.println(json),
                    None => println!("{}", json),
                }
            }
        }

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done!");
        println!(
            "\n{} {} documents, {} recovered",
            "Processed".green().bold(),
            items.len(),
            recovered
        );
    }

    Ok(())
}

/// Output file name per input: `<stem>.json`, or `<stem>-N.json` when an
/// earlier input already claimed the name.
fn output_file_names<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Vec<String> {
    let mut taken = HashSet::new();
    paths
        .into_iter()
        .map(|path| {
            let stem = path.file_stem().unwrap_or_default().to_string_lossy();
            let mut name = format!("{}.json", stem);
            let mut n = 2;
            while !taken.insert(name.clone()) {
                name = format!("{}-{}.json", stem, n);
                n += 1;
            }
            if n > 2 {
                log::warn!(
                    "{} shares its output name with an earlier input, writing {}",
                    path.display(),
                    name
                );
            }
            name
        })
        .collect()
}

fn report_item(item: &BatchItem, pb: Option<&ProgressBar>) {
    let mut lines = Vec::new();

    if let Some(ref error) = item.error {
        lines.push(format!(
            "{} {}: {} (fallback outline written)",
            "Warning:".yellow().bold(),
            item.path.display(),
            error
        ));
    }
    for warning in item.outline.validate() {
        lines.push(format!(
            "{} {}: {}",
            "Warning:".yellow().bold(),
            item.path.display(),
            warning
        ));
    }

    for line in lines {
        match pb {
            Some(pb) => pb.suspend(|| eprintln!("{}", line)),
            None => eprintln!("{}", line),
        }
    }
}

fn cmd_validate(inputs: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    for input in inputs {
        let warnings = match load_and_validate(input) {
            Ok(warnings) => warnings,
            Err(e) => {
                eprintln!("{} {}: {}", "Unreadable".red().bold(), input.display(), e);
                continue;
            }
        };

        if warnings.is_empty() {
            println!("{} {}", "Valid".green(), input.display());
        } else {
            println!(
                "{} {} ({} warnings)",
                "Warnings".yellow().bold(),
                input.display(),
                warnings.len()
            );
            for warning in warnings {
                println!("  {} {}", "-".dimmed(), warning.to_string().yellow());
            }
        }
    }

    Ok(())
}

fn load_and_validate(path: &Path) -> Result<Vec<ValidationWarning>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    Ok(validate_json(&value))
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = ReaderRegistry::with_defaults().read(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), doc.page_count());

    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref subject) = doc.metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref creator) = doc.metadata.creator {
        println!("{}: {}", "Creator".bold(), creator);
    }
    if let Some(ref producer) = doc.metadata.producer {
        println!("{}: {}", "Producer".bold(), producer);
    }
    if let Some(ref created) = doc.metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = doc.metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    println!();
    println!("{}", "Font Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for page in &doc.pages {
        let stats = FontStatistics::from_runs(page.runs().filter(|r| r.has_valid_size()));
        if stats.is_empty() {
            println!("{} {}: {}", "Page".bold(), page.number, "no text runs".dimmed());
            continue;
        }

        let ranks = stats
            .hierarchy()
            .iter()
            .map(|(size, rank)| format!("#{} {:.1}pt", rank, size))
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "{} {}: {} runs, avg {:.1}pt, min {:.1}pt, max {:.1}pt [{}]",
            "Page".bold(),
            page.number,
            stats.sizes.len(),
            stats.avg_size,
            stats.min_size,
            stats.max_size,
            ranks
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docoutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document outline extraction tool");
    println!();
    println!("License: MIT");
}
