//! `lumatable`: build and query brightness lookup tables.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lt_codec::CodecKind;
use lt_core::{unpack_rgb, TableConfig};
use lt_store::{FileStore, TableBuilder, TableReader};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "lumatable", version, about = "Brightness lookup tables over the 24-bit RGB space")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Partition the RGB space and write one compressed file per level.
    Build {
        /// Output directory (overrides the config file).
        #[arg(long)]
        out: Option<PathBuf>,
        /// JSON config file.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Size floor for serialized levels.
        #[arg(long)]
        min_buffer: Option<usize>,
        /// Codec: lz4 or none.
        #[arg(long, default_value = "lz4")]
        codec: String,
        /// Encode levels on a single thread.
        #[arg(long)]
        sequential: bool,
        /// Write the build report as JSON.
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// List the colors of one brightness level.
    Query {
        #[arg(long)]
        dir: PathBuf,
        #[arg(long)]
        level: u8,
        /// Print at most this many colors.
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long, default_value = "lz4")]
        codec: String,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the count index and verify every level decodes.
    Inspect {
        #[arg(long)]
        dir: PathBuf,
        #[arg(long, default_value = "lz4")]
        codec: String,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<TableConfig> {
    match path {
        Some(p) => TableConfig::load(p).with_context(|| format!("loading config {}", p.display())),
        None => Ok(TableConfig::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    match Cli::parse().command {
        Command::Build { out, config, min_buffer, codec, sequential, report } => {
            let mut cfg = load_config(config.as_ref())?;
            if let Some(out) = out {
                cfg.out_dir = out;
            }
            if let Some(len) = min_buffer {
                cfg.min_buffer_len = len;
            }
            if sequential {
                cfg.parallel = false;
            }
            let codec = CodecKind::from_str_loose(&codec).build();
            let result = TableBuilder::new(cfg, codec.as_ref())
                .build()
                .context("building brightness table")?;
            if let Some(path) = report {
                std::fs::write(&path, serde_json::to_vec_pretty(&result)?)
                    .with_context(|| format!("writing report {}", path.display()))?;
                info!(path = %path.display(), "wrote build report");
            }
            println!(
                "{} colors, {} levels, {} -> {} bytes ({:.1}%), {} ms",
                result.total_colors,
                result.levels.len(),
                result.total_input_bytes,
                result.total_compressed_bytes,
                result.ratio() * 100.0,
                result.elapsed_ms
            );
        }
        Command::Query { dir, level, limit, codec, config } => {
            let cfg = load_config(config.as_ref())?;
            let codec = CodecKind::from_str_loose(&codec).build();
            let store = FileStore::new(&dir);
            let reader = TableReader::open(&store, codec.as_ref(), cfg)
                .with_context(|| format!("opening table in {}", dir.display()))?;
            let colors = reader.colors(level)?;
            println!("level {level}: {} colors", colors.len());
            for rgb in colors.iter().take(limit.unwrap_or(colors.len())) {
                let (r, g, b) = unpack_rgb(*rgb);
                println!("#{rgb:06x}  rgb({r}, {g}, {b})");
            }
        }
        Command::Inspect { dir, codec, config } => {
            let cfg = load_config(config.as_ref())?;
            let codec = CodecKind::from_str_loose(&codec).build();
            let store = FileStore::new(&dir);
            let reader = TableReader::open(&store, codec.as_ref(), cfg)
                .with_context(|| format!("opening table in {}", dir.display()))?;
            for (level, count) in reader.index().as_slice().iter().enumerate() {
                println!("{level:>3} {count:>8}");
            }
            reader.verify().context("verifying table")?;
            println!("total {} colors, all levels verified", reader.index().total());
        }
    }
    Ok(())
}
