//! CLI parser
use clap::Parser;
use std::path::PathBuf;

use crate::constants::DEFAULT_SERVICE_URL;

#[derive(Parser, Debug)]
#[command(name = "memegen", about = "Generate a meme from a topic via the local generation service")]
/// CLI Options
pub struct CliOptions {
    /// What the meme should be about
    pub topic: String,

    #[clap(long, default_value = "")]
    /// Text for the top of the image, left to the service when blank
    pub top_text: String,

    #[clap(long, default_value = "")]
    /// Text for the bottom of the image, left to the service when blank
    pub bottom_text: String,

    #[clap(long, help = "Enable debug logging", env = "MEMEGEN_DEBUG")]
    /// Enable debug logging. Env: MEMEGEN_DEBUG
    pub debug: bool,

    #[clap(long, short, default_value = DEFAULT_SERVICE_URL, env = "MEMEGEN_SERVICE_URL")]
    /// Generation endpoint, defaults to `http://localhost:8000/generate`.
    /// Env: MEMEGEN_SERVICE_URL
    pub service_url: String,

    #[clap(long, short)]
    /// Save the generated image as `meme.png` in `--out-dir`
    pub download: bool,

    #[clap(long, short, default_value = ".", env = "MEMEGEN_OUT_DIR")]
    /// Directory downloads are saved to.
    /// Env: MEMEGEN_OUT_DIR
    pub out_dir: PathBuf,
}
