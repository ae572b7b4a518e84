use std::fs;
use std::path::Path;
use std::process::{Command, Output};

// 16x16 RGBA PNG header followed by an IEND chunk; the pixel data is never inspected.
const PNG_16: [u8; 45] = [
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A,
    0, 0, 0, 13, b'I', b'H', b'D', b'R',
    0, 0, 0, 16, 0, 0, 0, 16, 8, 6, 0, 0, 0,
    0x1F, 0xF3, 0xFF, 0x61,
    0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82,
];

fn png2ico(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_png2ico"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run png2ico")
}

#[test]
fn converts_png_to_ico() {
    let dir = tempfile::tempdir().expect("tempdir");
    let src = dir.path().join("logo.png");
    let dst = dir.path().join("favicon.ico");
    fs::write(&src, PNG_16).expect("write png");

    let output = png2ico(&[src.as_path(), dst.as_path()]);
    assert!(
        output.status.success(),
        "expected success\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );

    let ico = fs::read(&dst).expect("read ico");
    assert_eq!(ico.len(), 22 + PNG_16.len());
    assert_eq!(&ico[..6], &[0, 0, 1, 0, 1, 0]);
    assert_eq!(&ico[6..22], &[16, 16, 0, 0, 0, 0, 32, 0, 45, 0, 0, 0, 22, 0, 0, 0]);
    assert_eq!(&ico[22..], &PNG_16);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("favicon.ico"), "unexpected stdout: {stdout}");
    assert!(stdout.contains("(67 bytes)"), "unexpected stdout: {stdout}");
}

#[test]
fn overwrites_existing_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let src = dir.path().join("logo.png");
    let dst = dir.path().join("favicon.ico");
    fs::write(&src, PNG_16).expect("write png");
    fs::write(&dst, b"stale").expect("write stale ico");

    assert!(png2ico(&[src.as_path(), dst.as_path()]).status.success());
    assert_eq!(fs::read(&dst).expect("read ico").len(), 67);
}

#[test]
fn wrong_argument_count_prints_usage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let src = dir.path().join("logo.png");

    for args in [&[][..], &[src.as_path()][..]] {
        let output = png2ico(args);
        assert_eq!(output.status.code(), Some(2));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Usage:"), "unexpected stdout: {stdout}");
    }
    assert!(!src.exists());
}

#[test]
fn rejects_non_png_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let src = dir.path().join("logo.png");
    let dst = dir.path().join("favicon.ico");
    fs::write(&src, b"GIF89a not a png at all, but long enough").expect("write input");

    let output = png2ico(&[src.as_path(), dst.as_path()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a PNG"), "unexpected stderr: {stderr}");
    assert!(!dst.exists());
}

#[test]
fn rejects_truncated_png_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let src = dir.path().join("logo.png");
    let dst = dir.path().join("favicon.ico");

    // 32 bytes keeps the IHDR data but cuts its crc short
    for len in [10, 32] {
        fs::write(&src, &PNG_16[..len]).expect("write input");

        let output = png2ico(&[src.as_path(), dst.as_path()]);
        assert!(!output.status.success(), "{len}-byte input was accepted");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("too small"), "unexpected stderr: {stderr}");
        assert!(stderr.contains(&format!("detected {len} bytes")), "unexpected stderr: {stderr}");
        assert!(!dst.exists());
    }
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let src = dir.path().join("missing.png");
    let dst = dir.path().join("favicon.ico");

    let output = png2ico(&[src.as_path(), dst.as_path()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.png"), "unexpected stderr: {stderr}");
    assert!(!dst.exists());
}
