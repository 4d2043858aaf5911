use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn lectern(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_lectern"))
		.args(args)
		.env_remove("RUST_LOG")
		.output()
		.unwrap()
}

fn stdout(output: &Output) -> String {
	String::from_utf8(output.stdout.clone()).unwrap()
}

fn seed_file(contents: &str) -> tempfile::NamedTempFile {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	write!(file, "{contents}").unwrap();
	file
}

fn path_arg(path: &Path) -> &str {
	path.to_str().unwrap()
}

#[test]
fn default_run_prints_reference_scenario() {
	let output = lectern(&[]);
	assert!(output.status.success());
	assert_eq!(stdout(&output), "1\n3\n0\n");
}

#[test]
fn absent_id_exits_non_zero_with_error_on_stderr() {
	let output = lectern(&["index-of", "9"]);
	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
	let stderr = String::from_utf8(output.stderr).unwrap();
	assert!(stderr.contains("record not found: id=9"), "stderr: {stderr}");
}

#[test]
fn unreadable_seed_exits_non_zero() {
	let output = lectern(&["list", "--seed", "/nonexistent/lectern.toml"]);
	assert!(!output.status.success());
	let stderr = String::from_utf8(output.stderr).unwrap();
	assert!(stderr.contains("failed to load seed file"), "stderr: {stderr}");
}

#[test]
fn list_and_index_of_agree_with_unidentified_records() {
	let seed = seed_file(
		r#"
[[record]]
title = "draft"
pages = 10

[[record]]
id = 4
title = "final"
pages = 20
"#,
	);
	let seed_path = path_arg(seed.path());

	let list = lectern(&["list", "--seed", seed_path]);
	assert!(list.status.success());
	assert_eq!(stdout(&list), "0\t-\tdraft\t10\n1\t4\tfinal\t20\n");

	let index = lectern(&["index-of", "4", "--seed", seed_path]);
	assert!(index.status.success());
	assert_eq!(stdout(&index), "1\n");
}
