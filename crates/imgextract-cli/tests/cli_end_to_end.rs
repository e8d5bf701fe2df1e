//! End-to-end tests: run the `imgextract` binary inside a temp site checkout
//! and check exit codes, console output and the written image.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Temp dir with `pages/mapa-mental.html` holding `html` and an empty `assets/`.
fn site(html: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("pages")).unwrap();
    fs::create_dir_all(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("pages").join("mapa-mental.html"), html).unwrap();
    dir
}

fn run(cwd: &Path, args: &[&str]) -> Output {
    let xdg = cwd.join(".xdg");
    Command::new(env!("CARGO_BIN_EXE_imgextract"))
        .args(args)
        .current_dir(cwd)
        .env("HOME", &xdg)
        .env("XDG_CONFIG_HOME", xdg.join("config"))
        .env("XDG_STATE_HOME", xdg.join("state"))
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn imgextract")
}

fn output_png(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("assets").join("mapa-mental.png")
}

#[test]
fn bare_run_extracts_with_fixed_paths() {
    let dir = site(r#"<img src="data:image/png;base64,iVBORw0KGgo=">"#);
    let out = run(dir.path(), &[]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(output_png(&dir)).unwrap(), PNG_SIGNATURE);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Length of extracted data: 12"));
    assert!(stdout.contains("Image extracted and saved to assets/mapa-mental.png"));
}

#[test]
fn missing_marker_exits_one() {
    let dir = site("<html><body>no image here</body></html>");
    let out = run(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr)
        .contains("Could not find the base64 image data."));
    assert!(!output_png(&dir).exists());
}

#[test]
fn unterminated_data_uri_exits_one_without_output() {
    let dir = site("<img src=data:image/png;base64,iVBORw0KGgo=>");
    let out = run(dir.path(), &["extract"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr)
        .contains("Could not find the end of the image data."));
    assert!(!output_png(&dir).exists());
}

#[test]
fn bad_base64_exits_one_without_output() {
    let dir = site(r#"src="data:image/png;base64,QUJDR""#);
    let out = run(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Trying to fix padding..."));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error decoding or saving image"));
    assert!(!output_png(&dir).exists());
}

#[test]
fn missing_input_exits_one() {
    let dir = tempdir().unwrap();
    let out = run(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("mapa-mental.html"));
}

#[test]
fn extract_with_path_overrides() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("index.html"),
        r#"<img src="data:image/png;base64,iVBORw0KGgo">"#,
    )
    .unwrap();
    let out = run(
        dir.path(),
        &["extract", "--input", "index.html", "--output", "logo.png"],
    );

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(dir.path().join("logo.png")).unwrap(), PNG_SIGNATURE);
}

#[test]
fn inspect_reports_without_writing() {
    let dir = site(r#"<img src="data:image/png;base64,iVBORw0KGgo=">"#);
    let out = run(dir.path(), &["inspect"]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Decoded size: 8 bytes"));
    assert!(stdout.contains("PNG signature: yes"));
    assert!(!output_png(&dir).exists());
}

#[test]
fn checksum_of_extracted_image() {
    let dir = site(r#"<img src="data:image/png;base64,iVBORw0KGgo=">"#);
    assert!(run(dir.path(), &[]).status.success());

    let out = run(dir.path(), &["checksum", "assets/mapa-mental.png"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let digest = stdout.split_whitespace().next().unwrap();
    assert_eq!(digest.len(), 64);
    assert!(stdout.contains("assets/mapa-mental.png"));
}

#[test]
fn config_file_is_created_on_first_run() {
    let dir = site(r#"<img src="data:image/png;base64,iVBORw0KGgo=">"#);
    assert!(run(dir.path(), &[]).status.success());
    let cfg = dir
        .path()
        .join(".xdg")
        .join("config")
        .join("imgextract")
        .join("config.toml");
    let text = fs::read_to_string(cfg).unwrap();
    assert!(text.contains("pages/mapa-mental.html"));
}

#[test]
fn unparsable_config_fails_before_reading_input() {
    let dir = site(r#"<img src="data:image/png;base64,iVBORw0KGgo=">"#);
    let cfg_dir = dir.path().join(".xdg").join("config").join("imgextract");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("config.toml"), "tail_preview_chars = \"fifty\"").unwrap();

    let out = run(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid config"));
    assert!(out.stdout.is_empty());
    assert!(!output_png(&dir).exists());
}

#[test]
fn config_paths_redirect_bare_run() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("index.html"),
        r#"<img src="data:image/png;base64,iVBORw0KGgo=">"#,
    )
    .unwrap();
    let cfg_dir = dir.path().join(".xdg").join("config").join("imgextract");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(
        cfg_dir.join("config.toml"),
        "input_path = \"index.html\"\noutput_path = \"logo.png\"\n",
    )
    .unwrap();

    let out = run(dir.path(), &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(dir.path().join("logo.png")).unwrap(), PNG_SIGNATURE);
}
