//! Generate the application icon set from a base logo.
//!
//! Renders rounded-corner PNG icons at the standard bundle sizes. The logo
//! is fitted inside an inner padding and centered; if it cannot be read, a
//! solid primary-blue fill is used instead.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-icons [logo.png] [out_dir]
//! ```
//!
//! Defaults are `assets/logo.png` and `assets/icons`.

use std::env;
use std::fs;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use thiserror::Error;

/// Icon sizes required by the app bundle, with their file names.
/// The @2x variants share files with the next size up.
const ICON_SIZES: &[(u32, &str)] = &[
    (16, "app_icon_16.png"),
    (32, "app_icon_32.png"),
    (64, "app_icon_64.png"),
    (128, "app_icon_128.png"),
    (256, "app_icon_256.png"),
    (512, "app_icon_512.png"),
    (1024, "app_icon_1024.png"),
];

/// Fraction of the icon size left as padding around the logo.
const PADDING_PERCENT: f32 = 0.25;

/// Corner radius as a fraction of the icon size.
const CORNER_RADIUS_PERCENT: f32 = 0.20;

/// Fallback fill when the logo is unreadable (primary blue, #007AFF).
const FALLBACK_FILL: Rgba<u8> = Rgba([0, 122, 255, 255]);

#[derive(Debug, Error)]
enum IconGenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

fn main() {
    let mut args = env::args().skip(1);
    let logo_path = args.next().unwrap_or_else(|| "assets/logo.png".to_string());
    let out_dir = args.next().unwrap_or_else(|| "assets/icons".to_string());

    if let Err(e) = run(Path::new(&logo_path), Path::new(&out_dir)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(logo_path: &Path, out_dir: &Path) -> Result<(), IconGenError> {
    fs::create_dir_all(out_dir)?;

    let logo = match image::open(logo_path) {
        Ok(img) => Some(img.to_rgba8()),
        Err(e) => {
            eprintln!(
                "Could not read logo at {}: {} (falling back to solid fill)",
                logo_path.display(),
                e
            );
            None
        }
    };

    println!("Generating app icons in {}...", out_dir.display());
    for &(size, file_name) in ICON_SIZES {
        let icon = render_icon(size, logo.as_ref());
        let path = out_dir.join(file_name);
        icon.save(&path)?;
        println!("  wrote {} ({}x{})", path.display(), size, size);
    }
    println!("Done: {} icons.", ICON_SIZES.len());

    Ok(())
}

/// Render one icon: the logo centered inside the padded content area (or
/// the fallback fill), then the rounded-corner mask.
fn render_icon(size: u32, logo: Option<&RgbaImage>) -> RgbaImage {
    let mut icon = RgbaImage::new(size, size);

    let padding = (size as f32 * PADDING_PERCENT) as u32;
    let mut area = size - padding * 2;
    // Keep the content area even so the logo centers on whole pixels
    if area % 2 != 0 {
        area -= 1;
    }
    let offset = (size - area) / 2;

    match logo {
        Some(logo) => {
            let fitted = fit_into(logo, area);
            let x = offset + (area - fitted.width()) / 2;
            let y = offset + (area - fitted.height()) / 2;
            imageops::overlay(&mut icon, &fitted, i64::from(x), i64::from(y));
        }
        None => {
            for pixel in icon.pixels_mut() {
                *pixel = FALLBACK_FILL;
            }
        }
    }

    apply_rounded_corners(&mut icon, size as f32 * CORNER_RADIUS_PERCENT);
    icon
}

/// Scale the logo to fit inside a square area, preserving aspect ratio.
fn fit_into(logo: &RgbaImage, area: u32) -> RgbaImage {
    let scale =
        (area as f32 / logo.width() as f32).min(area as f32 / logo.height() as f32);
    let width = ((logo.width() as f32 * scale) as u32).max(1);
    let height = ((logo.height() as f32 * scale) as u32).max(1);
    imageops::resize(logo, width, height, FilterType::Lanczos3)
}

/// Multiply the image's alpha by a rounded-rectangle mask with a one-pixel
/// antialiased edge.
fn apply_rounded_corners(image: &mut RgbaImage, radius: f32) {
    let width = image.width();
    let height = image.height();

    for y in 0..height {
        for x in 0..width {
            let coverage = mask_coverage(x, y, width, height, radius);
            if coverage < 1.0 {
                let pixel = image.get_pixel_mut(x, y);
                pixel.0[3] = (f32::from(pixel.0[3]) * coverage).round() as u8;
            }
        }
    }
}

/// Coverage of a pixel under the rounded-rectangle mask: 1.0 inside, 0.0
/// outside, linear ramp across the corner arc.
fn mask_coverage(x: u32, y: u32, width: u32, height: u32, radius: f32) -> f32 {
    let px = x as f32 + 0.5;
    let py = y as f32 + 0.5;

    // Outside the corner squares the pixel is fully covered
    let cx = if px < radius {
        radius
    } else if px > width as f32 - radius {
        width as f32 - radius
    } else {
        return 1.0;
    };
    let cy = if py < radius {
        radius
    } else if py > height as f32 - radius {
        height as f32 - radius
    } else {
        return 1.0;
    };

    let distance = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
    (radius - distance + 0.5).clamp(0.0, 1.0)
}
