use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn lzbase62(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lzbase62"))
        .args(args)
        .output()
        .expect("failed to run lzbase62")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is not UTF-8")
}

#[test]
fn test_cli_text_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    let packed = dir.path().join("input.lz62");
    let restored = dir.path().join("restored.txt");
    let text = "hello hello hello\nこんにちは 😀\n".repeat(50);
    fs::write(&input, &text).unwrap();

    let out = lzbase62(&["compress", path_str(&input), path_str(&packed)]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let compressed = fs::read_to_string(&packed).unwrap();
    assert!(compressed.bytes().all(|b| b.is_ascii_alphanumeric()));
    assert!(compressed.len() < text.len());

    let out = lzbase62(&["decompress", path_str(&packed), path_str(&restored)]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read_to_string(&restored).unwrap(), text);
}

#[test]
fn test_cli_bytes_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.bin");
    let packed = dir.path().join("input.lz62");
    let restored = dir.path().join("restored.bin");
    let data: Vec<u8> = (0..=255u8).cycle().take(3000).collect();
    fs::write(&input, &data).unwrap();

    let out = lzbase62(&["compress", "--bytes", path_str(&input), path_str(&packed)]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let out = lzbase62(&["decompress", "--bytes", path_str(&packed), path_str(&restored)]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(&restored).unwrap(), data);
}

#[test]
fn test_cli_small_chunks() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    let packed = dir.path().join("input.lz62");
    let restored = dir.path().join("restored.txt");
    let text = "chunk boundaries 😀 ".repeat(200);
    fs::write(&input, &text).unwrap();

    let out = lzbase62(&["--chunk-size", "7", "compress", path_str(&input), path_str(&packed)]);
    assert!(out.status.success());
    let out = lzbase62(&["decompress", "--chunk-size", "3", path_str(&packed), path_str(&restored)]);
    assert!(out.status.success());
    assert_eq!(fs::read_to_string(&restored).unwrap(), text);
}

#[test]
fn test_cli_stdout() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "hello hello hello").unwrap();

    let out = lzbase62(&["-v", "compress", path_str(&input), "-"]);
    assert!(out.status.success());
    // Logging goes to stderr, so stdout is exactly the stream.
    assert_eq!(out.stdout, b"tYVccfxGM");
}

#[test]
fn test_cli_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lzbase62"))
        .args(["decompress", "-", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    // Trailing newline, as `echo` would add.
    child.stdin.take().unwrap().write_all(b"tYVccfxGM\n").unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, b"hello hello hello");
}

#[test]
fn test_cli_rejects_invalid_symbols() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.lz62");
    let output = dir.path().join("out.txt");
    fs::write(&input, "tY!V").unwrap();

    let out = lzbase62(&["decompress", path_str(&input), path_str(&output)]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("out of range symbol"), "{}", stderr);
}

#[test]
fn test_cli_rejects_binary_in_text_mode() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.bin");
    let output = dir.path().join("out.lz62");
    fs::write(&input, [0xFF, 0xFE, 0x00]).unwrap();

    let out = lzbase62(&["compress", path_str(&input), path_str(&output)]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--bytes"));
}

#[test]
fn test_cli_missing_input() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let output = dir.path().join("out.lz62");

    let out = lzbase62(&["compress", path_str(&missing), path_str(&output)]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to open input file"));
}
