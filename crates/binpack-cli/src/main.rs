use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, anyhow};
use binpack_core::pipeline::LayoutItem;
use binpack_core::{AlgorithmFamily, Layout, PackerConfig, export, pack_layout_items};
use clap::{ArgAction, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "binpack",
    about = "Lay out rectangles into bins or canvases",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack a JSON list of `{ key, w, h }` items and export the layout
    Pack(PackArgs),
    /// Pack randomly generated items and print time + occupancy
    Bench(BenchArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    /// Input JSON file: an array of `{ "key": .., "w": .., "h": .., "rotate"?: .. }`
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output file for the layout JSON (stdout when absent)
    #[arg(short, long, help_heading = "Input/Output")]
    out: Option<PathBuf>,
    /// YAML config file path (overrides the layout options below)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,

    /// Bin/canvas width
    #[arg(long, default_value_t = 1024, help_heading = "Layout")]
    width: u32,
    /// Bin/canvas height
    #[arg(long, default_value_t = 1024, help_heading = "Layout")]
    height: u32,
    /// Algorithm: guillotine | multibin | canvas
    #[arg(long, value_parser = ["guillotine", "multibin", "canvas"], default_value = "multibin", help_heading = "Layout")]
    algorithm: String,
    /// Keep input order for the canvas algorithm instead of sorting largest first
    #[arg(long, default_value_t = false, help_heading = "Layout")]
    no_sort: bool,

    /// Export packing stats (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_stats: Option<PathBuf>,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Export")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Export")]
    print_config_format: String,
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Number of random items
    #[arg(long, default_value_t = 500)]
    count: usize,
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Minimum item side
    #[arg(long, default_value_t = 8)]
    min: u32,
    /// Maximum item side
    #[arg(long, default_value_t = 128)]
    max: u32,
    /// Bin/canvas width
    #[arg(long, default_value_t = 1024)]
    width: u32,
    /// Bin/canvas height
    #[arg(long, default_value_t = 1024)]
    height: u32,
    /// Algorithm: guillotine | multibin | canvas
    #[arg(long, value_parser = ["guillotine", "multibin", "canvas"], default_value = "multibin")]
    algorithm: String,
}

#[derive(Debug, Deserialize)]
struct InputItem {
    key: String,
    w: u32,
    h: u32,
    #[serde(default)]
    rotate: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::Bench(b) => run_bench(b),
    }
}

fn run_pack(args: &PackArgs) -> anyhow::Result<()> {
    let mut cfg = PackerConfig::builder()
        .with_dimensions(args.width, args.height)
        .family(parse_family(&args.algorithm)?)
        .sort_contents(!args.no_sort)
        .build();

    if let Some(path) = &args.config {
        let file = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg = y.into_packer_config(cfg)?;
    }

    if args.print_config {
        match args.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(());
    }

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("read input {}", args.input.display()))?;
    let inputs: Vec<InputItem> = serde_json::from_str(&raw)
        .with_context(|| format!("parse input {}", args.input.display()))?;
    info!(count = inputs.len(), "loaded input items");

    let items: Vec<LayoutItem<String>> = inputs
        .into_iter()
        .map(|it| LayoutItem {
            key: it.key,
            w: it.w,
            h: it.h,
            rotate: it.rotate,
        })
        .collect();
    let layout = pack_layout_items(items, cfg)?;

    let value = export::to_json(&layout);
    let text = serde_json::to_string_pretty(&value)?;
    match &args.out {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
            info!(?path, pages = layout.pages.len(), "layout written");
        }
        None => println!("{text}"),
    }

    let stats = layout.stats();
    info!("{}", stats.summary());
    if let Some(stats_path) = &args.export_stats {
        write_stats(&layout, stats_path)?;
        info!(?stats_path, "stats exported");
    }
    Ok(())
}

fn write_stats(layout: &Layout<String>, path: &Path) -> anyhow::Result<()> {
    let stats = layout.stats();
    let value = serde_json::json!({
        "pages": stats.num_pages,
        "frames": stats.num_frames,
        "used_area": stats.used_frame_area,
        "total_area": stats.total_page_area,
        "wasted_area": stats.wasted_area(),
        "occupancy": stats.occupancy,
        "rotated": stats.num_rotated,
    });
    fs::write(path, serde_json::to_string_pretty(&value)?)
        .with_context(|| format!("write {}", path.display()))
}

fn run_bench(b: &BenchArgs) -> anyhow::Result<()> {
    if b.min == 0 || b.min > b.max {
        anyhow::bail!("invalid size range {}..={}", b.min, b.max);
    }
    let mut rng = StdRng::seed_from_u64(b.seed);
    let items: Vec<LayoutItem<String>> = (0..b.count)
        .map(|i| {
            let w = rng.gen_range(b.min..=b.max);
            let h = rng.gen_range(b.min..=b.max);
            LayoutItem::new(format!("item{i}"), w, h)
        })
        .collect();
    debug!(count = items.len(), seed = b.seed, "generated items");

    let cfg = PackerConfig::builder()
        .with_dimensions(b.width, b.height)
        .family(parse_family(&b.algorithm)?)
        .build();
    let start = Instant::now();
    let layout = pack_layout_items(items, cfg)?;
    let dur = start.elapsed();
    let stats = layout.stats();
    println!(
        "pages={} frames={} occupancy={:.2}% time={}",
        stats.num_pages,
        stats.num_frames,
        stats.occupancy * 100.0,
        fmt_dur(dur)
    );
    Ok(())
}

fn fmt_dur(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms >= 1.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{}us", d.as_micros())
    }
}

fn parse_family(s: &str) -> anyhow::Result<AlgorithmFamily> {
    s.parse::<AlgorithmFamily>()
        .map_err(|_| anyhow!("unknown algorithm: {}", s))
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    family: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    sort_contents: Option<bool>,
}

impl YamlConfig {
    fn into_packer_config(self, mut cfg: PackerConfig) -> anyhow::Result<PackerConfig> {
        if let Some(v) = self.width {
            cfg.width = v;
        }
        if let Some(v) = self.height {
            cfg.height = v;
        }
        if let Some(v) = self.sort_contents {
            cfg.sort_contents = v;
        }
        if let Some(v) = self.family {
            cfg.family = parse_family(&v)?;
        }
        Ok(cfg)
    }
}
