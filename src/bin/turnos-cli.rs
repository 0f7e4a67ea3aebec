#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use turnos::{
    export::{ScheduleExporter, XlsxExporter, ZipExporter},
    io,
    model::HolidaySet,
    preview::render_table,
    scheduler::{filter_applicable_dates, label_day, ScheduleRun},
    storage::write_all_atomic,
    RunConfig,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Générateur de turnos (week-ends et jours fériés)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Configuration JSON (colonnes, séparateurs, feuilles)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le planning et l'exporter en classeur
    Generate {
        /// CSV des jours fériés
        #[arg(long)]
        holidays: PathBuf,
        /// CSV du roster (ordre = rotation)
        #[arg(long)]
        roster: PathBuf,
        /// Annuaire code → nom (CSV, ou XLSX selon l'extension)
        #[arg(long)]
        directory: PathBuf,
        /// YYYY-MM-DD
        #[arg(long)]
        start: NaiveDate,
        /// YYYY-MM-DD (inclus)
        #[arg(long)]
        end: NaiveDate,
        /// Fichier de sortie (défaut turnos.xlsx, ou turnos.zip avec --zip)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Compresse le classeur dans une archive ZIP
        #[arg(long)]
        zip: bool,
        #[arg(long)]
        codes_csv: Option<PathBuf>,
        #[arg(long)]
        names_csv: Option<PathBuf>,
        #[arg(long)]
        out_json: Option<PathBuf>,
        /// N'affiche pas l'aperçu
        #[arg(long)]
        quiet: bool,
    },

    /// Lister les dates retenues et leur libellé
    Dates {
        /// CSV des jours fériés (optionnel)
        #[arg(long)]
        holidays: Option<PathBuf>,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let config = match &cli.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    let code = match cli.cmd {
        Commands::Generate {
            holidays,
            roster,
            directory,
            start,
            end,
            out,
            zip,
            codes_csv,
            names_csv,
            out_json,
            quiet,
        } => {
            let holidays = io::import_holidays_csv(&holidays, &config)?;
            let roster = io::import_roster_csv(&roster, &config)?;
            let directory = io::import_directory(&directory, &config)?;

            let run = ScheduleRun::new(start, end, holidays, roster, directory);
            let schedule = run.generate()?;

            // Tout est rendu en mémoire avant la première écriture.
            let xlsx = XlsxExporter::new(config.export.clone());
            let (out, workbook) = if zip {
                let exporter = ZipExporter::new(xlsx, config.export.archive_entry.as_str());
                let out = out.unwrap_or_else(|| PathBuf::from("turnos.zip"));
                (out, exporter.render(&schedule)?)
            } else {
                let out = out.unwrap_or_else(|| PathBuf::from("turnos.xlsx"));
                (out, xlsx.render(&schedule)?)
            };

            let mut outputs = vec![(out.clone(), workbook)];
            if let Some(path) = codes_csv {
                outputs.push((path, io::rows_csv_bytes(&schedule.coded)?));
            }
            if let Some(path) = names_csv {
                outputs.push((path, io::rows_csv_bytes(&schedule.resolved)?));
            }
            if let Some(path) = out_json {
                outputs.push((path, io::schedule_json_bytes(&schedule)?));
            }
            write_all_atomic(&outputs)?;

            if !quiet {
                print!("{}", render_table(&schedule.resolved));
            }
            println!("{} turno(s) written to {}", schedule.len(), out.display());

            if schedule.is_empty() {
                eprintln!("Warning: no weekend or holiday in {start} .. {end}");
                // Code 2 = WARNING/INCOMPLETE
                2
            } else {
                0
            }
        }
        Commands::Dates {
            holidays,
            start,
            end,
        } => {
            let holidays = load_optional_holidays(holidays.as_deref(), &config)?;
            for date in filter_applicable_dates(start, end, &holidays) {
                println!("{} | {}", date.format("%d/%m/%Y"), label_day(date, &holidays));
            }
            0
        }
    };

    std::process::exit(code);
}

fn load_optional_holidays(path: Option<&Path>, config: &RunConfig) -> Result<HolidaySet> {
    match path {
        Some(path) => io::import_holidays_csv(path, config)
            .with_context(|| format!("loading holidays from {}", path.display())),
        None => Ok(HolidaySet::new()),
    }
}
