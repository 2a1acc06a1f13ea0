use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::{ImageBuffer, ImageResult, Rgb};

use super::math::Vec3;
use super::render::Framebuffer;

/// Converts a color channel to [0, 255], truncating.
/// NaN and infinities are written as 0.
pub fn channel_to_u8(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

impl From<Vec3> for Rgb<u8> {
    fn from(value: Vec3) -> Self {
        Rgb([
            channel_to_u8(value.x),
            channel_to_u8(value.y),
            channel_to_u8(value.z),
        ])
    }
}

/// Writes the frame as a plain text PPM (`P3`), one pixel per line,
/// rows from top to bottom.
pub fn write_ppm<W: Write>(frame: &Framebuffer, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", frame.width, frame.height)?;
    writeln!(writer, "255")?;
    for pixel in &frame.pixels {
        let Rgb([r, g, b]) = Rgb::<u8>::from(*pixel);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }
    Ok(())
}

pub fn save_ppm(frame: &Framebuffer, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_ppm(frame, &mut writer)?;
    writer.flush()
}

/// Saves the frame in the format given by the file extension, e.g. PNG.
pub fn save_image(frame: &Framebuffer, path: &Path) -> ImageResult<()> {
    let mut buffer: ImageBuffer<Rgb<u8>, Vec<_>> = ImageBuffer::new(frame.width, frame.height);
    for (x, y, pixel) in buffer.enumerate_pixels_mut() {
        *pixel = frame.get(x, y).into();
    }
    buffer.save(path)
}
