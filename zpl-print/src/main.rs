use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_verbosity::Verbosity;
use image::ImageFormat;
use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};
use zpl::{Converter, Options};

#[derive(Parser)]
#[command(about = "Convert an image into a ZPL graphic label")]
struct Cli {
    /// Path to the image to be converted, `-` reads stdin.
    file: PathBuf,

    /// Label width in dots. Rounded up to a multiple of 8, the height is half of it.
    #[arg(short, long, default_value_t = Options::DEFAULT_WIDTH, allow_negative_numbers = true)]
    width: i64,

    /// Write the label to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of copies.
    #[arg(short, long, default_value_t = 1)]
    num: usize,

    /// Show the thresholded image instead of emitting the label.
    #[arg(short, long)]
    show: bool,

    #[command(flatten)]
    verbose: Verbosity,
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut data = Vec::new();
        std::io::stdin()
            .read_to_end(&mut data)
            .context("failed to read stdin")?;
        Ok(data)
    } else {
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::builder()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    if cli.num == 0 {
        bail!("number of copies must be at least 1");
    }

    let converter = Converter::new(Options::with_width(cli.width))?;
    let dims = converter.dimensions();
    log::info!("label size: {}x{}", dims.width, dims.height);

    let data = read_input(&cli.file)?;
    let img = zpl::gray::decode(&data)?;
    let bitmap = converter.bitmap(&img)?;

    if cli.show {
        let temppath = std::env::temp_dir().join("zpl-preview.png");
        bitmap
            .to_image()
            .save_with_format(&temppath, ImageFormat::Png)
            .context("failed to save preview")?;
        open::that(&temppath)?;
        return Ok(());
    }

    log::trace!("assembling...");
    let label = bitmap.to_command();

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };

    for i in 0..cli.num {
        log::trace!("writing copy {i}...");
        out.write_all(label.as_bytes())?;
    }
    out.flush()?;

    Ok(())
}
