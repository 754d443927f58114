use crate::manifest;
use crate::shield::render_icon;
use crate::Args;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
};

/// Browser-extension icon sizes, smallest first.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

pub fn generate_icons(args: Args) -> Result<()> {
    create_dir_all(&args.output)
        .with_context(|| format!("can't create output directory {}", args.output.display()))?;

    for size in ICON_SIZES {
        let icon =
            render_icon(size).with_context(|| format!("failed to render the {size}px icon"))?;
        let path = args.output.join(format!("icon{size}.png"));
        save_png(&icon, &path)?;
    }

    if args.manifest {
        manifest::write_icons_json(&args.output, &ICON_SIZES)?;
    }

    println!("Icons created successfully!");
    Ok(())
}

fn save_png(icon: &RgbaImage, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_png(icon.as_raw(), &mut out, icon.width())?;
    out.flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
