//! Renders one piece of network art to a PNG.
//!
//! Run with:
//!   cargo run --release -- --width 512 --height 512 --hidden 4 --output art.png

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ferrite_art::{render_image_with_rng, save_png, ArtConfig, ArtResult};

#[derive(Parser)]
#[command(name = "ferrite-art")]
#[command(about = "Paint abstract images with an untrained neural network")]
#[command(version)]
struct Cli {
    /// JSON config file; command-line values override it
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Width of every network layer
    #[arg(long)]
    input: Option<usize>,

    /// Number of hidden layers
    #[arg(long)]
    hidden: Option<usize>,

    #[arg(long)]
    max_r: Option<f64>,

    #[arg(long)]
    max_g: Option<f64>,

    #[arg(long)]
    max_b: Option<f64>,

    /// Seed for the weights and noise; random when omitted
    #[arg(short = 'S', long)]
    seed: Option<u64>,

    /// Output PNG path
    #[arg(short, long, default_value = "art.png")]
    output: PathBuf,
}

impl Cli {
    fn art_config(&self) -> ArtResult<ArtConfig> {
        let mut config = match &self.config {
            Some(path) => ArtConfig::load_json(path)?,
            None => ArtConfig::default(),
        };
        config.width = self.width.unwrap_or(config.width);
        config.height = self.height.unwrap_or(config.height);
        config.input = self.input.unwrap_or(config.input);
        config.hidden = self.hidden.unwrap_or(config.hidden);
        config.max_r = self.max_r.unwrap_or(config.max_r);
        config.max_g = self.max_g.unwrap_or(config.max_g);
        config.max_b = self.max_b.unwrap_or(config.max_b);
        Ok(config)
    }
}

fn main() -> ArtResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ferrite_art=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.art_config()?;
    let seed = cli.seed.unwrap_or_else(rand::random);

    tracing::info!(
        width = config.width,
        height = config.height,
        input = config.input,
        hidden = config.hidden,
        seed,
        "generating"
    );

    let buffer = render_image_with_rng(&config, &mut StdRng::seed_from_u64(seed))?;
    save_png(&config, buffer, &cli.output)?;

    tracing::info!(path = %cli.output.display(), "saved");
    Ok(())
}
