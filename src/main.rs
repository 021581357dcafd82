use batchimg::imaging::{OutputFormat, Quality, ResizeOptions, RustBackend, SizeSpec};
use batchimg::{batch, output};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "batchimg")]
#[command(about = "Batch resize images in a folder")]
#[command(long_about = "\
Batch resize images in a folder

Reads every supported image in INPUT_DIR, resizes it, optionally converts
the format, and writes the result to OUTPUT_DIR (created if missing).

Sizing rules, first match wins:

  --scale              both axes scaled by the given percentage
  --width + --height   exact dimensions, aspect ratio not preserved
  --width              height derived to keep the aspect ratio
  --height             width derived to keep the aspect ratio
  (none)               re-encode at the original size

Supported input formats: jpg, jpeg, png, bmp, gif, tiff, webp.
Quality applies to JPEG and WebP output; other formats use codec defaults.
Converting transparent images to JPEG flattens them onto a white
background.")]
#[command(version)]
struct Cli {
    /// Folder containing images to resize
    input_dir: PathBuf,

    /// Folder to write resized images to (created if absent)
    output_dir: PathBuf,

    /// Target width in pixels
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Target height in pixels
    #[arg(short = 'H', long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// Scale percentage (e.g. 50 for half size)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    scale: Option<u32>,

    /// Output format (default: keep each file's own format)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Quality for JPEG/WebP output (1-100)
    #[arg(short, long, default_value_t = 95, value_parser = clap::value_parser!(u32).range(1..=100))]
    quality: u32,
}

/// CLI spellings for --format. `jpg` and `jpeg` are the same format.
#[derive(Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Jpg,
    Jpeg,
    Png,
    Webp,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Jpg | FormatArg::Jpeg => OutputFormat::Jpeg,
            FormatArg::Png => OutputFormat::Png,
            FormatArg::Webp => OutputFormat::WebP,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = ResizeOptions {
        size: SizeSpec {
            width: cli.width,
            height: cli.height,
            scale_percent: cli.scale,
        },
        format: cli.format.map(OutputFormat::from),
        quality: Quality::new(cli.quality),
    };

    let backend = RustBackend::new();
    match batch::run(
        &backend,
        &cli.input_dir,
        &cli.output_dir,
        &options,
        output::print_file_event,
    ) {
        Ok(report) => {
            output::print_summary(&report, &cli.output_dir);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
