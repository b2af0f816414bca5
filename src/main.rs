//! fitlog CLI
//!
//! Command-line interface for the student collection:
//! - List, show and delete entries
//! - Import entries from CSV
//! - Generate a default config file

use clap::{Parser, Subcommand};
use fitlog::client::StudentClient;
use fitlog::config::{generate_default_config, Config};
use fitlog::import::import_csv;
use fitlog::Student;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage fitness log entries in a fitlog record store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Student collection URL (default: derived from config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all entries
    List,

    /// Show a single entry
    Show {
        /// Entry id
        id: String,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,
    },

    /// Import entries from CSV
    Import {
        /// Path to CSV file
        path: PathBuf,
        /// Validate only, don't send anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load_default()?;
    fitlog::logging::init(&config.logging);

    let api_url = cli
        .api_url
        .clone()
        .unwrap_or_else(|| config.api.local_url());

    match cli.command {
        Commands::List => {
            let client = StudentClient::new(&api_url)?;
            let students = client.list().await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&students)?);
            } else if students.is_empty() {
                println!("No entries yet.");
            } else {
                print_table(&students);
            }
        }

        Commands::Show { id } => {
            let client = StudentClient::new(&api_url)?;
            let student = match client.get(&id).await {
                Ok(student) => student,
                Err(e) if e.is_not_found() => {
                    eprintln!("No entry with id {}", id);
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            };

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&student)?);
            } else {
                print_table(std::slice::from_ref(&student));
            }
        }

        Commands::Delete { id } => {
            let client = StudentClient::new(&api_url)?;
            client.delete(&id).await?;
            println!("Deleted {}", id);
        }

        Commands::Import { path, dry_run } => {
            if !path.exists() {
                eprintln!("File not found: {:?}", path);
                std::process::exit(1);
            }

            let result = import_csv(&path)?;

            for error in &result.errors {
                eprintln!("  {}", error);
            }
            println!(
                "Parsed {} rows: {} valid, {} rejected",
                result.rows_processed,
                result.entries.len(),
                result.rows_failed
            );

            if dry_run {
                println!("Dry run, nothing imported.");
                return Ok(());
            }

            let client = StudentClient::new(&api_url)?;
            let mut imported = 0;
            for fields in &result.entries {
                match client.create(fields).await {
                    Ok(_) => imported += 1,
                    Err(e) => eprintln!("  Failed to import {}: {}", fields.student_name, e),
                }
            }
            println!("Imported {} entries into {}", imported, client.base_url());
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_table(students: &[Student]) {
    println!(
        "{:<34} {:<12} {:<16} {:<11} {:>8} {:>10} {:>10}",
        "ID", "Date", "Description", "Status", "Pushups", "Distance", "Weight"
    );
    println!("{}", "-".repeat(107));

    for student in students {
        let f = &student.fields;
        println!(
            "{:<34} {:<12} {:<16} {:<11} {:>8} {:>10} {:>10}",
            student.id,
            f.student_name,
            truncate(&f.student_address, 16),
            f.status,
            f.pushups,
            format!("{} Km", f.ran_distance),
            format!("{} Kg", f.weight_lifted),
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
