use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils a text message from a PNG or PPM image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Length of the secret in bytes
    #[arg(short, long, value_name = "length", required = true)]
    pub length: usize,

    /// Channels per pixel of PPM carriers, PNG carriers are always RGBA
    #[arg(long, value_name = "channels")]
    pub channels: Option<NonZeroUsize>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let secret = stegano_lsb::commands::unveil(
            &self.media,
            self.length,
            self.channels.map(NonZeroUsize::get),
        )?;
        println!("{}", String::from_utf8_lossy(&secret));

        Ok(())
    }
}
