//! Command-line front end for molexport.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use molexport::export::{xyz, ExportFormat, ExportRequest};
use molexport::molecule::molfile::read_molfile;
use molexport::molecule::pdb::read_pdb;
use molexport::{ExportOptions, Molecule};

/// Export a molecule as an XYZ atom list, an OBJ mesh or an X3D scene.
#[derive(Parser)]
#[command(name = "molexport", version, about)]
struct Cli {
    /// Input structure (.mol/.sdf molfile, .pdb/.ent file or .json atom list)
    #[arg(value_name = "INPUT", required_unless_present = "schema")]
    input: Option<PathBuf>,

    /// Output format (defaults to the output extension, else obj)
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<ExportFormat>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Include hydrogen atoms and their bonds
    #[arg(long)]
    hydrogens: bool,

    /// TOML options preset
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Write the effective options to a TOML preset and continue
    #[arg(long, value_name = "FILE")]
    save_options: Option<PathBuf>,

    /// Print the options JSON schema and exit
    #[arg(long)]
    schema: bool,
}

enum Input {
    Molfile(String),
    Pdb(String),
    Json(String),
}

impl Input {
    fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        Ok(match ext.as_deref() {
            Some("json") => Self::Json(text),
            Some("pdb" | "ent") => Self::Pdb(text),
            _ => Self::Molfile(text),
        })
    }

    fn molecule(&self) -> Result<Molecule> {
        let molecule = match self {
            Self::Molfile(text) => read_molfile(text)?,
            Self::Pdb(text) => read_pdb(text)?,
            Self::Json(text) => Molecule::from_json(text)?,
        };
        Ok(molecule)
    }
}

fn load_options(cli: &Cli) -> Result<ExportOptions> {
    let mut options = match &cli.options {
        Some(path) => ExportOptions::load(path).with_context(|| {
            format!("failed to load options from {}", path.display())
        })?,
        None => ExportOptions::default(),
    };
    if cli.hydrogens {
        options.display.show_hydrogens = true;
    }
    Ok(options)
}

fn write_output(path: Option<&Path>, body: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, body)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(body.as_bytes())
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    if cli.schema {
        let schema = serde_json::to_string_pretty(&ExportOptions::json_schema())?;
        return write_output(None, &format!("{schema}\n"));
    }

    let options = load_options(cli)?;
    if let Some(path) = &cli.save_options {
        options.save(path).with_context(|| {
            format!("failed to save options to {}", path.display())
        })?;
    }

    let Some(input_path) = &cli.input else {
        anyhow::bail!("no input structure given");
    };
    let format = cli
        .format
        .or_else(|| cli.output.as_deref().and_then(ExportFormat::from_path))
        .unwrap_or(ExportFormat::Obj);

    let input = Input::read(input_path)?;
    let body = match (&input, format) {
        // Molfile text converts straight to XYZ without building adjacency.
        (Input::Molfile(text), ExportFormat::Xyz) => {
            xyz::write_from_molfile(text, &options.output.xyz_comment)
        }
        _ => {
            let molecule = input.molecule().with_context(|| {
                format!("failed to load {}", input_path.display())
            })?;
            log::info!(
                "loaded {} atoms from {}",
                molecule.len(),
                input_path.display()
            );
            ExportRequest {
                token: 0,
                format,
                molecule: &molecule,
            }
            .run(&options)
            .body
        }
    };

    write_output(cli.output.as_deref(), &body)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
