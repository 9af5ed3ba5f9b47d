use std::path::PathBuf;

use clap::Args;
use log::info;
use stegano_lsb::commands::DEMO_MESSAGE;

use crate::CliResult;

/// Hides a message in a PNG, saves it, loads it again and prints the recovered secret
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// RGBA PNG input image
    #[arg(short = 'i', long = "in", value_name = "input png", required = true)]
    pub input: PathBuf,

    /// PNG image with the hidden message
    #[arg(short = 'o', long = "out", value_name = "output png", required = true)]
    pub output: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", default_value = DEMO_MESSAGE)]
    pub message: String,
}

impl DemoArgs {
    pub fn run(self) -> CliResult<()> {
        let secret = stegano_lsb::commands::demo(&self.input, &self.output, &self.message)?;

        println!("Attempt to recover secret:");
        println!("{}", String::from_utf8_lossy(&secret));
        info!("Done.");

        Ok(())
    }
}
