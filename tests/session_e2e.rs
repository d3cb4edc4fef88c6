//! End-to-end tests for loading image files and saving rendered text.

use ascii_image::ascii::{LineEnding, Sampling};
use ascii_image::cli::{run_convert, Interactive, RenderOptions};
use ascii_image::config::Config;
use ascii_image::error::ConvertError;
use ascii_image::session::{Session, SessionSettings};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a test image with the given pattern and format, return its path.
fn write_image(dir: &Path, name: &str, format: ImageFormat, pattern: &str) -> PathBuf {
    let (w, h) = (64u32, 32u32);
    let img = RgbImage::from_fn(w, h, |x, y| match pattern {
        "black" => Rgb([0, 0, 0]),
        "white" => Rgb([255, 255, 255]),
        "gray" => Rgb([128, 128, 128]),
        // Left half dark, right half light
        "split" => {
            if x < w / 2 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        }
        _ => {
            let v = ((x + y) * 255 / (w + h)) as u8;
            Rgb([v, v, v])
        }
    });
    let path = dir.join(name);
    DynamicImage::ImageRgb8(img)
        .save_with_format(&path, format)
        .unwrap();
    path
}

#[test]
fn test_load_png_shape() {
    let dir = TempDir::new().unwrap();
    let path = write_image(dir.path(), "split.png", ImageFormat::Png, "split");

    let mut session = Session::default();
    let art = session.load(&path, 16).unwrap();
    // 32 / 64 * 16 * 0.5 = 4
    assert_eq!(art.height(), 4);
    assert_eq!(art.width(), 16);
    for line in art.lines() {
        assert_eq!(line, &format!("{}{}", "@".repeat(8), " ".repeat(8)));
    }
}

#[test]
fn test_formats_decode_the_same() {
    let dir = TempDir::new().unwrap();
    let formats = [
        ("a.png", ImageFormat::Png),
        ("a.bmp", ImageFormat::Bmp),
        ("a.gif", ImageFormat::Gif),
    ];

    let mut outputs = Vec::new();
    for (name, format) in formats {
        let path = write_image(dir.path(), name, format, "split");
        let mut session = Session::default();
        session.load(&path, 20).unwrap();
        outputs.push(session.text().to_string());
    }
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_format_guessed_from_contents() {
    let dir = TempDir::new().unwrap();
    // PNG bytes behind a misleading extension
    let path = write_image(dir.path(), "picture.dat", ImageFormat::Png, "black");
    let mut session = Session::default();
    session.load(&path, 4).unwrap();
    assert_eq!(session.text(), "@@@@\n");
}

#[test]
fn test_save_then_reload_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let img = write_image(dir.path(), "grad.png", ImageFormat::Png, "gradient");
    let out = dir.path().join("grad.txt");

    for line_ending in [LineEnding::Lf, LineEnding::Crlf] {
        let mut session = Session::new(SessionSettings {
            sampling: Sampling::Average,
            line_ending,
        });
        session.load(&img, 40).unwrap();
        session.save(&out).unwrap();

        let saved = std::fs::read(&out).unwrap();
        assert_eq!(saved, session.text().as_bytes());
    }
}

#[test]
fn test_not_an_image_is_decode_error_and_keeps_text() {
    let dir = TempDir::new().unwrap();
    let good = write_image(dir.path(), "white.png", ImageFormat::Png, "white");
    let bad = dir.path().join("notes.png");
    std::fs::write(&bad, "definitely not a png").unwrap();

    let mut session = Session::default();
    session.load(&good, 6).unwrap();
    let before = session.text().to_string();

    let err = session.load(&bad, 6).unwrap_err();
    assert!(matches!(err, ConvertError::ImageDecode { .. }));
    assert!(err.to_string().contains("notes.png"));
    assert_eq!(session.text(), before);
}

#[test]
fn test_unwritable_destination_keeps_text() {
    let dir = TempDir::new().unwrap();
    let img = write_image(dir.path(), "gray.png", ImageFormat::Png, "gray");

    let mut session = Session::default();
    session.load(&img, 10).unwrap();
    let before = session.text().to_string();

    let dest = dir.path().join("no-such-dir").join("out.txt");
    let err = session.save(&dest).unwrap_err();
    assert!(matches!(err, ConvertError::FileWrite { .. }));
    assert_eq!(session.text(), before);
    assert!(before.chars().all(|c| c == '+' || c == '\n'));
}

#[test]
fn test_run_convert_prints_and_saves() {
    let dir = TempDir::new().unwrap();
    let img = write_image(dir.path(), "split.png", ImageFormat::Png, "split");
    let dest = dir.path().join("split.txt");
    let opts = RenderOptions {
        width: Some(8),
        ..Default::default()
    };

    let mut stdout = Vec::new();
    run_convert(&img, Some(dest.as_path()), false, &opts, &Config::default(), &mut stdout).unwrap();

    let printed = String::from_utf8(stdout).unwrap();
    assert_eq!(printed, "@@@@    \n@@@@    \n");
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), printed);
}

#[test]
fn test_run_convert_quiet_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let img = write_image(dir.path(), "black.png", ImageFormat::Png, "black");

    let mut stdout = Vec::new();
    run_convert(&img, None, true, &RenderOptions::default(), &Config::default(), &mut stdout)
        .unwrap();
    assert!(stdout.is_empty());
}

#[test]
fn test_run_convert_uses_config_columns() {
    let dir = TempDir::new().unwrap();
    let img = write_image(dir.path(), "black.png", ImageFormat::Png, "black");
    let config = Config::parse("[render]\ncolumns = 12\n[output]\nline_ending = \"crlf\"\n").unwrap();

    let mut stdout = Vec::new();
    run_convert(&img, None, false, &RenderOptions::default(), &config, &mut stdout).unwrap();
    // 32 / 64 * 12 * 0.5 = 3
    assert_eq!(String::from_utf8(stdout).unwrap(), "@@@@@@@@@@@@\r\n".repeat(3));
}

#[test]
fn test_run_convert_rejects_oversized_width() {
    let dir = TempDir::new().unwrap();
    let img = write_image(dir.path(), "white.png", ImageFormat::Png, "white");
    let dest = dir.path().join("white.txt");
    let opts = RenderOptions {
        width: Some(u32::MAX),
        ..Default::default()
    };

    let mut stdout = Vec::new();
    let err = run_convert(&img, Some(dest.as_path()), false, &opts, &Config::default(), &mut stdout)
        .unwrap_err();
    assert!(err.to_string().contains("exceeds the limit"));
    assert!(stdout.is_empty());
    assert!(!dest.exists());
}

#[test]
fn test_interactive_session_survives_failures() {
    let dir = TempDir::new().unwrap();
    let img = write_image(dir.path(), "split.png", ImageFormat::Png, "split");
    let dest = dir.path().join("out.txt");
    let script = format!(
        "load {missing}\nload {img}\nsave {bad}\nwidth 4\nload {img}\nsave {dest}\nquit\n",
        missing = dir.path().join("missing.png").display(),
        img = img.display(),
        bad = dir.path().join("nope").join("x.txt").display(),
        dest = dest.display(),
    );

    let mut app = Interactive::new(Session::default(), 8);
    let mut out = Vec::new();
    app.run(script.as_bytes(), &mut out).unwrap();

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.contains("Error loading image"));
    assert!(transcript.contains("Error saving file"));
    assert!(transcript.contains("@@@@    \n"));
    assert!(transcript.contains("Saved to"));
    // 32 / 64 * 4 * 0.5 = 1
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "@@  \n");
}
