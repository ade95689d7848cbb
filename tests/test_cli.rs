use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cooklang-html"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "error") // Suppress debug logs
        .env_remove("COOKLANG_HTML__AUTHOR")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_no_argument_prints_usage() {
    let dir = tempdir().unwrap();

    let output = run_cli(dir.path(), &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Usage: cooklang-html recipe.cook"));
    assert!(stdout.contains("Output: recipe.html"));
}

#[test]
fn test_missing_input_reports_not_found() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("nope.cook");

    let output = run_cli(dir.path(), &[input.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout.trim_end(),
        format!("Error: File '{}' not found", input.display())
    );
    assert!(!dir.path().join("nope.html").exists());
}

#[test]
fn test_missing_input_wins_over_broken_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cooklang-html.toml"), "author = [").unwrap();

    let output = run_cli(dir.path(), &["nope.cook"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout.trim_end(), "Error: File 'nope.cook' not found");
}

#[test]
fn test_converts_file_and_prints_summary() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("pancakes.cook");
    fs::write(
        &input,
        "# Pancakes\n## Ingredients\n- @flour{250%g}\n## Tools\n- #whisk{}\n## Instructions\nWhisk and fry.\n",
    )
    .unwrap();

    let output = run_cli(dir.path(), &[input.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains(&format!(
        "✅ Converted {} → {}",
        input.display(),
        dir.path().join("pancakes.html").display()
    )));
    assert!(stdout.contains("📊 Ingredients: 1"));
    assert!(stdout.contains("🔧 Tools: 1"));
    assert!(stdout.contains("📝 Steps: 1"));

    let html = fs::read_to_string(dir.path().join("pancakes.html")).unwrap();
    assert!(html.contains("<h1>Pancakes</h1>"));
    assert!(html.contains("<li>250 g flour</li>"));
}

#[test]
fn test_reads_site_config_from_working_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("cooklang-html.toml"),
        "author = \"Jane Doe\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("tea.cook"), "# Tea\n").unwrap();

    let output = run_cli(dir.path(), &["tea.cook"]);

    assert_eq!(output.status.code(), Some(0));
    let html = fs::read_to_string(dir.path().join("tea.html")).unwrap();
    assert!(html.contains("<title>Tea - Jane Doe</title>"));
}

#[test]
fn test_broken_config_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cooklang-html.toml"), "author = [").unwrap();
    fs::write(dir.path().join("tea.cook"), "# Tea\n").unwrap();

    let output = run_cli(dir.path(), &["tea.cook"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.starts_with("Error: Configuration error:"));
    assert!(!dir.path().join("tea.html").exists());
}
