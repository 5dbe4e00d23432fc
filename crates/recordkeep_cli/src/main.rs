//! recordkeep CLI
//!
//! Command-line front end for recordkeep's record stores.
//!
//! # Commands
//!
//! - `grade` - Read a student file and write a grade report
//! - `inventory` - Append to and list the persistent inventory log
//! - `stock` - Manage warehouse stock through a keyed store
//! - `health` - Manage patients and look up their prescriptions
//! - `version` - Show version information

mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use commands::health::HealthFiles;
use commands::stock::StockKind;
use recordkeep_domain::PatientQuery;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// recordkeep command-line tools.
#[derive(Parser)]
#[command(name = "recordkeep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read student records and write a grade report
    Grade {
        /// Student file, one `id, name, score` per line
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the report
        #[arg(short, long)]
        output: PathBuf,

        /// Minimum score counted as a pass
        #[arg(long, default_value_t = 50)]
        pass_threshold: i32,
    },

    /// Work with the persistent inventory log
    Inventory {
        /// Path to the inventory file
        #[arg(short, long, default_value = recordkeep_log::DEFAULT_LOG_FILE)]
        path: PathBuf,

        #[command(subcommand)]
        action: InventoryAction,
    },

    /// Manage warehouse stock
    Stock {
        /// Path to the stock file (defaults to one file per kind)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Which stock to operate on
        #[arg(short, long, value_enum, default_value_t = StockKind::Electronics)]
        kind: StockKind,

        #[command(subcommand)]
        action: StockAction,
    },

    /// Manage patients and prescriptions
    Health {
        /// Path to the patient file
        #[arg(long, default_value = "patients.json")]
        patients: PathBuf,

        /// Path to the prescription file
        #[arg(long, default_value = "prescriptions.json")]
        prescriptions: PathBuf,

        #[command(subcommand)]
        action: HealthAction,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum HealthAction {
    /// Register a patient
    AddPatient {
        /// Patient id
        #[arg(long)]
        id: i32,

        /// Full name
        #[arg(long)]
        name: String,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Gender
        #[arg(long)]
        gender: String,
    },

    /// Record a prescription for a registered patient
    AddPrescription {
        /// Prescription id
        #[arg(long)]
        id: i32,

        /// Patient the prescription is issued to
        #[arg(long)]
        patient_id: i32,

        /// Medication name
        #[arg(long)]
        medication: String,

        /// Issue date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show a patient's prescriptions, oldest first
    Prescriptions {
        /// Patient id
        #[arg(long)]
        patient_id: i32,
    },

    /// Search patients by name, age range or gender
    Search {
        /// Name contains this text (case-insensitive)
        #[arg(long, conflicts_with_all = ["gender", "min_age", "max_age"])]
        name: Option<String>,

        /// Gender equals this text (case-insensitive)
        #[arg(long, conflicts_with_all = ["min_age", "max_age"])]
        gender: Option<String>,

        /// Minimum age
        #[arg(long)]
        min_age: Option<u32>,

        /// Maximum age
        #[arg(long)]
        max_age: Option<u32>,
    },

    /// Remove a patient and their prescriptions
    RemovePatient {
        /// Patient id
        #[arg(long)]
        id: i32,
    },

    /// Show record counts
    Summary,

    /// Add sample patients and prescriptions
    Seed,
}

#[derive(Subcommand)]
enum InventoryAction {
    /// Append an item and save
    Add {
        /// Item id
        #[arg(long)]
        id: i32,

        /// Item name
        #[arg(long)]
        name: String,

        /// Quantity on hand
        #[arg(long)]
        quantity: u32,
    },

    /// List saved items
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Append a set of sample items and save
    Seed,
}

#[derive(Subcommand)]
enum StockAction {
    /// List items of the selected kind
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Set an item's quantity
    SetQuantity {
        /// Item id
        #[arg(long)]
        id: i32,

        /// New quantity
        #[arg(long, allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Add to an item's quantity (negative amounts take stock away)
    Increase {
        /// Item id
        #[arg(long)]
        id: i32,

        /// Amount to add
        #[arg(long, allow_negative_numbers = true)]
        by: i64,
    },

    /// Remove an item
    Remove {
        /// Item id
        #[arg(long)]
        id: i32,
    },

    /// Add an electronic item (implies `--kind electronics`)
    AddElectronic {
        /// Item id
        #[arg(long)]
        id: i32,

        /// Product name
        #[arg(long)]
        name: String,

        /// Quantity on hand
        #[arg(long)]
        quantity: u32,

        /// Manufacturer
        #[arg(long)]
        brand: String,

        /// Warranty length in months
        #[arg(long)]
        warranty_months: u32,
    },

    /// Add a grocery item (implies `--kind groceries`)
    AddGrocery {
        /// Item id
        #[arg(long)]
        id: i32,

        /// Product name
        #[arg(long)]
        name: String,

        /// Quantity on hand
        #[arg(long)]
        quantity: u32,

        /// Expiry date (YYYY-MM-DD)
        #[arg(long)]
        expiry: NaiveDate,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Grade {
            input,
            output,
            pass_threshold,
        } => {
            commands::grade::run(&input, &output, pass_threshold)?;
        }
        Commands::Inventory { path, action } => match action {
            InventoryAction::Add { id, name, quantity } => {
                commands::inventory::add(&path, id, &name, quantity)?;
            }
            InventoryAction::List { format } => {
                commands::inventory::list(&path, &format)?;
            }
            InventoryAction::Seed => {
                commands::inventory::seed(&path)?;
            }
        },
        Commands::Stock { path, kind, action } => {
            use commands::stock;

            match action {
                StockAction::List { format } => {
                    let path = path.unwrap_or_else(|| kind.default_path());
                    stock::list(kind, &path, &format)?;
                }
                StockAction::SetQuantity { id, quantity } => {
                    let path = path.unwrap_or_else(|| kind.default_path());
                    stock::set_quantity(kind, &path, id, quantity)?;
                }
                StockAction::Increase { id, by } => {
                    let path = path.unwrap_or_else(|| kind.default_path());
                    stock::increase(kind, &path, id, by)?;
                }
                StockAction::Remove { id } => {
                    let path = path.unwrap_or_else(|| kind.default_path());
                    stock::remove(kind, &path, id)?;
                }
                StockAction::AddElectronic {
                    id,
                    name,
                    quantity,
                    brand,
                    warranty_months,
                } => {
                    let path = path.unwrap_or_else(|| StockKind::Electronics.default_path());
                    stock::add_electronic(&path, id, &name, quantity, &brand, warranty_months)?;
                }
                StockAction::AddGrocery {
                    id,
                    name,
                    quantity,
                    expiry,
                } => {
                    let path = path.unwrap_or_else(|| StockKind::Groceries.default_path());
                    stock::add_grocery(&path, id, &name, quantity, expiry)?;
                }
            }
        }
        Commands::Health {
            patients,
            prescriptions,
            action,
        } => {
            use commands::health;

            let files = HealthFiles {
                patients,
                prescriptions,
            };
            match action {
                HealthAction::AddPatient {
                    id,
                    name,
                    age,
                    gender,
                } => {
                    health::add_patient(&files, id, &name, age, &gender)?;
                }
                HealthAction::AddPrescription {
                    id,
                    patient_id,
                    medication,
                    date,
                } => {
                    health::add_prescription(&files, id, patient_id, &medication, date)?;
                }
                HealthAction::Prescriptions { patient_id } => {
                    health::prescriptions(&files, patient_id)?;
                }
                HealthAction::Search {
                    name,
                    gender,
                    min_age,
                    max_age,
                } => {
                    let query = match (name, gender) {
                        (Some(name), _) => PatientQuery::Name(name),
                        (None, Some(gender)) => PatientQuery::Gender(gender),
                        (None, None) => PatientQuery::Age(
                            min_age.unwrap_or(0)..=max_age.unwrap_or(u32::MAX),
                        ),
                    };
                    health::search(&files, &query)?;
                }
                HealthAction::RemovePatient { id } => {
                    health::remove_patient(&files, id)?;
                }
                HealthAction::Summary => {
                    health::summary(&files)?;
                }
                HealthAction::Seed => {
                    health::seed(&files)?;
                }
            }
        }
        Commands::Version => {
            println!("recordkeep CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("recordkeep Core v{}", recordkeep_core::VERSION);
        }
    }

    Ok(())
}
