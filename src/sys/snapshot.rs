use crate::config::Config;
use crate::gui::circle::{self, State, Viewport};
use crate::gui::theme::ThemeColors;
use cairo::{Context, Format, ImageSurface};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Invalid image size {0}")]
    InvalidSize(i32),
    #[error(transparent)]
    Cairo(#[from] cairo::Error),
    #[error(transparent)]
    Png(#[from] cairo::IoError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Renders the circle as it looks `time` seconds into the animation.
pub fn render(config: &Config, size: i32, time: f64) -> Result<ImageSurface, SnapshotError> {
    if size <= 0 {
        return Err(SnapshotError::InvalidSize(size));
    }
    let surface = ImageSurface::create(Format::ARgb32, size, size)?;
    {
        let cr = Context::new(&surface)?;
        let state = State::still(
            config.clone(),
            Viewport::new(size as f64, size as f64),
            time,
        );
        let colors = ThemeColors::default().with_opacity(config.window.opacity);
        circle::draw(&cr, &state, &colors)?;
    }
    surface.flush();
    Ok(surface)
}

/// Encodes the frame in memory; `path` is only touched once the PNG is complete.
pub fn write_png(
    config: &Config,
    size: i32,
    time: f64,
    path: &Path,
) -> Result<(), SnapshotError> {
    let png = encode_png(&render(config, size, time)?)?;
    fs_err::write(path, &png)?;
    log::info!("Wrote {}x{} frame at {:.2}s to {}", size, size, time, path.display());
    Ok(())
}

fn encode_png(surface: &ImageSurface) -> Result<Vec<u8>, SnapshotError> {
    let mut buf = Vec::new();
    surface.write_to_png(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(config: &Config, size: i32, time: f64) -> Vec<u8> {
        encode_png(&render(config, size, time).unwrap()).unwrap()
    }

    fn temp_png(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("gnostic-circle-{}-{}.png", name, std::process::id()))
    }

    #[test]
    fn test_render_is_repeatable() {
        let config = Config::default();
        assert_eq!(png_bytes(&config, 160, 3.3), png_bytes(&config, 160, 3.3));
    }

    #[test]
    fn test_render_rejects_empty_image() {
        assert!(matches!(
            render(&Config::default(), 0, 0.0),
            Err(SnapshotError::InvalidSize(0))
        ));
    }

    #[test]
    fn test_write_png() {
        let path = temp_png("write");
        write_png(&Config::default(), 64, 1.0, &path).unwrap();
        let bytes = fs_err::read(&path).unwrap();
        let _ = fs_err::remove_file(&path);
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(bytes, png_bytes(&Config::default(), 64, 1.0));
    }

    #[test]
    fn test_failed_write_leaves_no_file() {
        let path = temp_png("failed");
        let _ = fs_err::remove_file(&path);
        assert!(write_png(&Config::default(), 0, 1.0, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_write_keeps_previous_image() {
        let path = temp_png("previous");
        write_png(&Config::default(), 32, 0.0, &path).unwrap();
        let before = fs_err::read(&path).unwrap();
        assert!(write_png(&Config::default(), -5, 0.0, &path).is_err());
        let after = fs_err::read(&path).unwrap();
        let _ = fs_err::remove_file(&path);
        assert_eq!(before, after);
    }
}
