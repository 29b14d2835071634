//! aac CLI: two-level augmentative-communication board.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use aac_board::config::{BoardConfig, DuplicatePolicy};
use aac_board::mapper::{Location, Record};
use aac_board::mapping;

#[derive(Parser)]
#[command(name = "aac", version, about = "Two-level AAC pictogram board")]
struct Cli {
    /// Mapping file (overrides the config's `mapping_file`).
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Board config file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Tracing filter used when RUST_LOG is unset (e.g. "debug").
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Reject repeated category names instead of replacing them.
    #[arg(long, global = true)]
    reject_duplicates: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a board config file with the current settings.
    Init {
        /// Destination path for the TOML config.
        #[arg(long, default_value = "aac.toml")]
        output: PathBuf,

        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
    },

    /// Load the mapping file and report what it contains.
    Check,

    /// Print the board: home pictograms and every category's items.
    Show {
        /// Emit the board as JSON records.
        #[arg(long)]
        json: bool,
    },

    /// Run pictogram selections in order, starting at home.
    Select {
        /// Image locations to select.
        #[arg(required = true)]
        images: Vec<String>,

        /// Return home before each selection.
        #[arg(long)]
        reset_between: bool,
    },

    /// Add a pictogram and write the mapping file back.
    Add {
        /// Image location of the new pictogram.
        image: String,

        /// Spoken text, or the category name when adding to home.
        text: String,

        /// Home pictogram of the category to add into; omit to add a category.
        #[arg(long)]
        into: Option<String>,
    },

    /// Write the loaded board to another file.
    Write {
        /// Destination path.
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };
    if let Some(file) = cli.file.clone() {
        config.mapping_file = file;
    }
    if let Some(level) = cli.log_level.clone() {
        config.log_level = level;
    }
    if cli.reject_duplicates {
        config.duplicate_categories = DuplicatePolicy::Reject;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let load = || mapping::load_file(&config.mapping_file, config.duplicate_categories);

    match cli.command {
        Commands::Init { output, force } => {
            if output.exists() && !force {
                miette::bail!(
                    "{} already exists; pass --force to overwrite it",
                    output.display()
                );
            }
            config.save(&output)?;
            println!("Wrote board config to {}", output.display());
        }

        Commands::Check => {
            let board = load()?;
            let names = board.category_names();
            let items: usize = names
                .iter()
                .filter_map(|name| board.category(name))
                .map(|c| c.len())
                .sum();
            println!("{}", config.mapping_file.display());
            println!("  categories:       {}", names.len());
            println!("  home pictograms:  {}", board.home_image_locs().len());
            println!("  items:            {items}");
            println!("  duplicate policy: {}", board.duplicate_policy());
        }

        Commands::Show { json } => {
            let board = load()?;
            let records = board.records()?;
            if json {
                let out = serde_json::to_string_pretty(&records).into_diagnostic()?;
                println!("{out}");
            } else if records.is_empty() {
                println!("Board is empty.");
            } else {
                for record in &records {
                    match record {
                        Record::Category { image_loc, name } => println!("{name} [{image_loc}]"),
                        Record::Item { image_loc, text } => {
                            println!("  {image_loc} -> \"{text}\"")
                        }
                    }
                }
            }
        }

        Commands::Select {
            images,
            reset_between,
        } => {
            let mut board = load()?;
            for image in &images {
                if reset_between {
                    board.reset();
                }
                let from_home = *board.location() == Location::AtHome;
                let spoken = board.select(image)?;
                if from_home {
                    println!("{image}: open \"{}\"", board.get_category_name());
                } else {
                    println!("{image}: say \"{spoken}\"");
                }
            }
        }

        Commands::Add { image, text, into } => {
            let mut board = load()?;
            if let Some(category_image) = into {
                if !board.is_category_image(&category_image) {
                    miette::bail!("\"{category_image}\" is not a home pictogram");
                }
                board.select(&category_image)?;
            }
            board.add_item(image.as_str(), text.as_str())?;
            mapping::write_file(&board, &config.mapping_file)?;
            let target = match board.get_category_name() {
                "" => "home".to_string(),
                name => format!("\"{name}\""),
            };
            println!("Added {image} -> \"{text}\" to {target}");
        }

        Commands::Write { output } => {
            let board = load()?;
            mapping::write_file(&board, &output)?;
            println!(
                "Wrote {} categories to {}",
                board.category_names().len(),
                output.display()
            );
        }
    }

    Ok(())
}
