use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides a text message in a PNG or PPM image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image (`.png` or `.ppm`), used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file (`.png` or `.ppm`)
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    /// Channels per pixel of PPM carriers, PNG carriers are always RGBA
    #[arg(long, value_name = "channels")]
    pub channels: Option<NonZeroUsize>,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        stegano_lsb::commands::hide(
            &self.media,
            &self.write_to_file,
            &self.message,
            self.channels.map(NonZeroUsize::get),
        )?;
        println!("Secret hidden.");

        Ok(())
    }
}
