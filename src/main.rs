// MRZ scanner decoding tool

use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, LevelFilter};
use mrzfill::{
    fill::{FillPlan, TargetKind},
    models::MrzDocument,
    Config, MrzError, MrzParser,
};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mrzfill", version, about = "Decode MRZ scanner input and plan field fills")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode an MRZ and print the record
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,

        /// Resolve two-digit years against this year instead of today
        #[arg(long)]
        reference_year: Option<i32>,
    },
    /// Decode an MRZ and print the fill plan for a target as JSON
    Plan {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, value_enum, default_value = "row-data")]
        target: TargetArg,

        #[arg(long)]
        reference_year: Option<i32>,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// MRZ text; read from stdin when neither this nor --file is given
    text: Option<String>,

    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetArg {
    RowData,
    CellEditor,
    IndexedCells,
    DialogForm,
}

impl From<TargetArg> for TargetKind {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::RowData => TargetKind::RowData,
            TargetArg::CellEditor => TargetKind::CellEditor,
            TargetArg::IndexedCells => TargetKind::IndexedCells,
            TargetArg::DialogForm => TargetKind::DialogForm,
        }
    }
}

impl InputArgs {
    fn read(&self) -> Result<String, MrzError> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return Ok(std::fs::read_to_string(path)?);
        }
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

// Print the decoded record in a readable layout
fn print_report(document: &MrzDocument) {
    println!("\n===============================================");
    println!("             MRZ DOCUMENT RECORD");
    println!("===============================================\n");

    for (label, value) in document.fields() {
        let shown = if value.is_empty() { "-" } else { value };
        println!("  {:<16} {}", format!("{}:", label), shown);
    }
}

fn load_config(cli: &Cli) -> Result<Config, MrzError> {
    match &cli.config {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}

fn parser_for(config: &Config, reference_year: Option<i32>) -> MrzParser {
    match reference_year {
        Some(year) => MrzParser::with_reference_year(year),
        None => MrzParser::from_config(&config.parser),
    }
}

fn run(cli: Cli) -> Result<(), MrzError> {
    let config = load_config(&cli)?;
    debug!("Using configuration {:?}", config);

    match cli.command {
        Command::Parse {
            input,
            json,
            reference_year,
        } => {
            let document = parser_for(&config, reference_year).parse(&input.read()?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&document)?);
            } else {
                print_report(&document);
            }
        }
        Command::Plan {
            input,
            target,
            reference_year,
        } => {
            let document = parser_for(&config, reference_year).parse(&input.read()?)?;
            let plan = FillPlan::for_document(&document, target.into(), &config.fill);
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
