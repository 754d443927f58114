//! Shield-with-checkmark glyph rendering.
//!
//! The glyph is designed on a 128x128 grid and scaled linearly to the
//! requested pixel size, so every output size is the same drawing at a
//! different resolution.

use anyhow::{anyhow, bail, Result};
use image::RgbaImage;
use tiny_skia::{FillRule, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

/// Side length of the base design grid.
const BASE_SIZE: f32 = 128.0;

/// Closed shield outline on the base grid, starting at the top point.
const SHIELD_POINTS: [(f32, f32); 6] = [
    (64.0, 10.0),
    (20.0, 30.0),
    (20.0, 70.0),
    (64.0, 118.0),
    (108.0, 70.0),
    (108.0, 30.0),
];

/// Checkmark polyline on the base grid, two connected segments.
const CHECK_POINTS: [(f32, f32); 3] = [(45.0, 64.0), (56.0, 75.0), (85.0, 46.0)];

const SHIELD_FILL: (u8, u8, u8) = (102, 126, 234);
const SHIELD_OUTLINE: (u8, u8, u8) = (86, 107, 198);

/// Checkmark stroke width on the base grid.
const CHECK_WIDTH: f32 = 8.0;

/// Render the glyph onto a transparent `size`x`size` RGBA canvas.
///
/// Pure and deterministic: the same `size` always produces byte-identical
/// pixel content. A degenerate size fails loudly instead of yielding an
/// empty buffer.
pub fn render_icon(size: u32) -> Result<RgbaImage> {
    if size == 0 {
        bail!("icon size must be a positive number of pixels");
    }

    let mut pixmap =
        Pixmap::new(size, size).ok_or_else(|| anyhow!("can't allocate a {size}x{size} canvas"))?;

    let s = size as f32 / BASE_SIZE;

    let mut paint = Paint::default();
    paint.anti_alias = true;

    let shield = polyline_path(&scale_points(&SHIELD_POINTS, s), true)?;
    paint.set_color_rgba8(SHIELD_FILL.0, SHIELD_FILL.1, SHIELD_FILL.2, 255);
    pixmap.fill_path(
        &shield,
        &paint,
        FillRule::Winding,
        Transform::identity(),
        None,
    );

    paint.set_color_rgba8(SHIELD_OUTLINE.0, SHIELD_OUTLINE.1, SHIELD_OUTLINE.2, 255);
    pixmap.stroke_path(
        &shield,
        &paint,
        &Stroke::default(),
        Transform::identity(),
        None,
    );

    // The checkmark goes on top of the shield, never underneath it.
    let check = polyline_path(&scale_points(&CHECK_POINTS, s), false)?;
    paint.set_color_rgba8(255, 255, 255, 255);
    let stroke = Stroke {
        width: (CHECK_WIDTH * s).round(),
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    pixmap.stroke_path(&check, &paint, &stroke, Transform::identity(), None);

    Ok(demultiplied(&pixmap))
}

fn scale_points<const N: usize>(base: &[(f32, f32); N], s: f32) -> [(f32, f32); N] {
    base.map(|(x, y)| (x * s, y * s))
}

fn polyline_path(points: &[(f32, f32)], close: bool) -> Result<Path> {
    let mut pb = PathBuilder::new();
    let (x0, y0) = points[0];
    pb.move_to(x0, y0);
    for &(x, y) in &points[1..] {
        pb.line_to(x, y);
    }
    if close {
        pb.close();
    }
    pb.finish().ok_or_else(|| anyhow!("degenerate glyph path"))
}

// Pixmap stores premultiplied alpha; the returned canvas uses straight RGBA.
fn demultiplied(pixmap: &Pixmap) -> RgbaImage {
    let mut canvas = RgbaImage::new(pixmap.width(), pixmap.height());
    for (premultiplied, pixel) in pixmap.pixels().iter().zip(canvas.pixels_mut()) {
        let color = premultiplied.demultiply();
        *pixel = image::Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }
    canvas
}
