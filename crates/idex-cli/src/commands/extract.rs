//! Extract command - parse fields from a single recognized-text file.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::debug;

use idex_core::identity::FieldParser;
use idex_core::models::config::IdexConfig;
use idex_core::models::record::ExtractionRecord;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file with recognized OCR output ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Disable the fuzzy country fallback
    #[arg(long)]
    no_country_fallback: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let text = read_input(&args.input)?;
    if text.trim().is_empty() {
        anyhow::bail!("Input is empty: {}", args.input.display());
    }

    debug!("Parsing {} characters of recognized text", text.len());

    let mut parser = FieldParser::from_config(&config.extraction);
    if args.no_country_fallback {
        parser = parser.with_country_fallback(false);
    }

    let record = parser.parse(&text);

    if record.id_no.is_empty() {
        eprintln!(
            "{} No ID number detected; fields are positional guesses.",
            style("!").yellow()
        );
    }

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    Ok(fs::read_to_string(path)?)
}

/// Load the pipeline configuration, falling back to defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<IdexConfig> {
    Ok(match config_path {
        Some(path) => IdexConfig::from_file(Path::new(path))?,
        None => IdexConfig::default(),
    })
}

pub(crate) fn format_record(
    record: &ExtractionRecord,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &ExtractionRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["id_no", "name", "address", "gender", "country"])?;
    wtr.write_record([
        &record.id_no,
        &record.name,
        &record.address,
        &record.gender,
        &record.country,
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ExtractionRecord) -> String {
    fn or_dash(s: &str) -> &str {
        if s.is_empty() { "-" } else { s }
    }

    let mut output = String::new();
    output.push_str(&format!("ID number: {}\n", or_dash(&record.id_no)));
    output.push_str(&format!("Name:      {}\n", or_dash(&record.name)));
    output.push_str(&format!("Address:   {}\n", or_dash(&record.address)));
    output.push_str(&format!("Gender:    {}\n", or_dash(&record.gender)));
    output.push_str(&format!("Country:   {}\n", or_dash(&record.country)));
    output
}
