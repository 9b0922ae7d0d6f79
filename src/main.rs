/*!
 * create_manifest - generate an archive ingest manifest for one HLS product
 *
 * Example:
 *   create_manifest ./hlsdata hlsmanifest.json s3://hls-global HLSS30 \
 *       HLS.S30.T01LAH.2020097T222759.v1.5 aeere-33-cssdr false
 */

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use hls_manifest::{
    config::{LogLevel, ManifestConfig},
    error::{Result, EXIT_SUCCESS},
    generate_manifest, logging, ManifestJob,
};
use hls_core_manifest::{Collection, Layout};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "create_manifest")]
#[command(version, about = "Generate an archive ingest manifest for an HLS product directory", long_about = None)]
struct Cli {
    /// Directory containing the product files
    #[arg(value_name = "INPUTDIR")]
    inputdir: PathBuf,

    /// Path of the manifest to write
    #[arg(value_name = "OUTPUTFILE")]
    outputfile: PathBuf,

    /// Target storage location for the files, e.g. s3://hls-global
    #[arg(value_name = "BUCKET")]
    bucket: String,

    /// Product collection
    #[arg(value_name = "COLLECTION", value_enum)]
    collection: CollectionArg,

    /// Root product identifier with no extension
    #[arg(value_name = "PRODUCT")]
    product: String,

    /// Job identifier
    #[arg(value_name = "JOBID")]
    jobid: String,

    /// Use GIBS collection names and file classification
    #[arg(
        value_name = "GIBS",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        default_value = "false"
    )]
    gibs: bool,

    /// Manifest layout
    #[arg(long, value_enum, default_value = "nested")]
    layout: LayoutArg,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long = "log", value_name = "FILE")]
    log: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum)]
    log_level: Option<LogLevelArg>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Indent the written manifest
    #[arg(long)]
    pretty: bool,

    /// Read size in bytes while hashing
    #[arg(long, value_name = "BYTES")]
    chunk_size: Option<usize>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum CollectionArg {
    #[value(name = "HLSS30")]
    HlsS30,
    #[value(name = "HLSL30")]
    HlsL30,
    #[value(name = "HLSS30_VI")]
    HlsS30Vi,
    #[value(name = "HLSL30_VI")]
    HlsL30Vi,
}

impl From<CollectionArg> for Collection {
    fn from(arg: CollectionArg) -> Self {
        match arg {
            CollectionArg::HlsS30 => Collection::HlsS30,
            CollectionArg::HlsL30 => Collection::HlsL30,
            CollectionArg::HlsS30Vi => Collection::HlsS30Vi,
            CollectionArg::HlsL30Vi => Collection::HlsL30Vi,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum LayoutArg {
    /// product { name, dataVersion, id, files }
    Nested,
    /// product { name, filegroups: [{ id, files }] }
    Flat,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

fn main() {
    let code = match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => ManifestConfig::from_file(path)?,
        None => ManifestConfig::default(),
    };

    // CLI flags win over the config file
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    if cli.log.is_some() {
        config.log_file = cli.log.clone();
    }
    config.verbose |= cli.verbose;
    config.pretty |= cli.pretty;
    if let Some(chunk_size) = cli.chunk_size {
        config.chunk_size = chunk_size;
    }
    config.validate()?;

    if let Err(e) = logging::init_logging(&config) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let layout = match cli.layout {
        LayoutArg::Nested => Layout::Nested { gibs: cli.gibs },
        LayoutArg::Flat if cli.gibs => {
            return Err(hls_manifest::HlsError::Config(
                "GIBS naming requires the nested layout".to_string(),
            ));
        }
        LayoutArg::Flat => Layout::Flat,
    };

    let job = ManifestJob {
        input_dir: cli.inputdir,
        output_file: cli.outputfile,
        bucket: cli.bucket,
        collection: cli.collection.into(),
        product: cli.product,
        job_id: cli.jobid,
        layout,
    };

    generate_manifest(&job, &config)?;
    Ok(())
}
