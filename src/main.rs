use clap::Parser;
use map_webp::config::{self, Overrides};
use map_webp::imaging::RustBackend;
use map_webp::{output, run};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status for an unusable configuration, same as clap's usage errors.
const EXIT_CONFIG: u8 = 2;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // leaked once, called once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "map-webp")]
#[command(about = "Convert high-resolution map PNGs to WebP")]
#[command(long_about = "\
Convert high-resolution map PNGs to WebP

Converts *_High_Res.png (with text) found directly inside --src. Skips the
*_No_Text_* and Low_Res variants and never descends into subdirectories.
Images whose longest side exceeds --max-size are scaled down (Lanczos3).

Examples:
  map-webp --src Assets/Maps --out webp-maps --quality 70 --max-size 4096
  map-webp --src Assets/Maps --out webp-maps-lossless --lossless

Settings can also come from a TOML file (--config); flags given on the
command line win. Run 'map-webp --print-config' for a documented template.")]
#[command(version = version_string())]
struct Cli {
    /// Source directory containing *_High_Res.png [default: api-assets-master/Assets/Maps]
    #[arg(long)]
    src: Option<PathBuf>,

    /// Output directory [default: converted-webp]
    #[arg(long)]
    out: Option<PathBuf>,

    /// WebP quality, lossy or lossless (0-100) [default: 70]
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    quality: Option<u32>,

    /// Clamp longest side (0 = no resize) [default: 8192]
    #[arg(long, allow_negative_numbers = true)]
    max_size: Option<i64>,

    /// Use WebP lossless mode (larger files)
    #[arg(long)]
    lossless: bool,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,

    /// TOML file with default settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print a stock config file with all options documented, then exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            src: self.src.clone(),
            out: self.out.clone(),
            quality: self.quality,
            // negative means "no clamp", like 0
            max_size: self
                .max_size
                .map(|n| u32::try_from(n.max(0)).unwrap_or(u32::MAX)),
            lossless: self.lossless.then_some(true),
            progress: self.no_progress.then_some(false),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return ExitCode::SUCCESS;
    }

    let config = match config::resolve(cli.config.as_deref(), &cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            output::print_error(&e);
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    match run::run(&config, &RustBackend::new()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
