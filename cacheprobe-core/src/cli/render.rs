use crate::conf::ImageArgs;
use crate::synth::{ImageGenerator, SeedDigest};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use owo_colors::OwoColorize;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Seed driving colours and pattern
    #[arg(long)]
    pub seed: u64,

    /// Output file (defaults to cache-test-<seed>.png)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Timestamp drawn on the image, RFC 3339 (defaults to now)
    #[arg(long)]
    pub timestamp: Option<DateTime<Utc>>,

    #[command(flatten)]
    pub image: ImageArgs,
}

#[derive(Debug)]
pub struct Rendered {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Generate one image and write it to disk.
pub fn render(args: &RenderArgs) -> Result<Rendered> {
    args.image.validate()?;

    let generated_at = args.timestamp.unwrap_or_else(Utc::now);
    let generator = ImageGenerator::new(args.image.spec());
    let png = generator
        .generate(args.seed, generated_at)
        .with_context(|| format!("failed to generate image for seed {}", args.seed))?;

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("cache-test-{}.png", args.seed)));
    fs::write(&path, &png).with_context(|| format!("failed to write {}", path.display()))?;

    Ok(Rendered {
        path,
        bytes: png.len(),
    })
}

pub fn run(args: RenderArgs) -> Result<()> {
    let rendered = render(&args)?;
    let digest = SeedDigest::new(args.seed);

    println!(
        "{} {} ({:.2} MB, digest {})",
        "✔ wrote".green(),
        rendered.path.display(),
        rendered.bytes as f64 / 1024.0 / 1024.0,
        digest.hex()
    );

    Ok(())
}
