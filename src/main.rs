use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod icon_gen;
mod manifest;
mod shield;

#[derive(Debug, Parser)]
#[clap(
    name = "shield-icons",
    about = "Generate the shield-with-checkmark browser-extension icon set"
)]
struct Args {
    /// Output directory for the generated icons.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Also write an icons.json snippet mapping pixel sizes to icon files.
    #[clap(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(args)
}
