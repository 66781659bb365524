/* tests/stdin.rs */
#![allow(missing_docs)]

//! Reads from a real piped stdin. The test binary re-runs itself with
//! [`READER_ENV`] set so that one test in the child process reads the pipe.

use std::io::Write;
use std::process::{Command, Stdio};

use unicode_console::{Console, facade};

const READER_ENV: &str = "UNICODE_CONSOLE_STDIN_READER";

/// Run `test_name` from this binary in a child process fed `input` on stdin
/// and return what it printed.
fn run_with_stdin(test_name: &str, input: &[u8]) -> String {
	let exe = std::env::current_exe().expect("locate test binary");
	let mut child = Command::new(exe)
		.args([test_name, "--exact", "--nocapture", "--test-threads=1"])
		.env(READER_ENV, "1")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::null())
		.spawn()
		.expect("spawn test binary");

	child
		.stdin
		.take()
		.expect("open stdin pipe")
		.write_all(input)
		.expect("write stdin");
	let output = child.wait_with_output().expect("wait for test binary");
	assert!(output.status.success(), "reader process failed");
	String::from_utf8(output.stdout).expect("reader output is UTF-8")
}

#[test]
fn facade_then_new_console_share_stdin() {
	let out = run_with_stdin("reads_through_facade_then_console", b"1\nhello\nlast\n");
	assert!(out.contains("facade read 1\n"), "{out}");
	assert!(out.contains("console line \"\"\n"), "{out}");
	assert!(out.contains("console line \"hello\"\n"), "{out}");
	assert!(out.contains("facade line \"last\"\n"), "{out}");
	assert!(out.contains("facade end of input\n"), "{out}");
}

#[test]
fn crlf_piped_lines_are_trimmed() {
	let out = run_with_stdin("reads_validated_line", b"no\r\nyes\r\n");
	assert!(out.contains("validated line \"yes\"\n"), "{out}");
}

#[test]
fn reads_through_facade_then_console() {
	if std::env::var_os(READER_ENV).is_none() {
		return;
	}
	let n: i32 = facade::read().unwrap();
	println!("facade read {n}");

	let mut console = Console::stdio();
	// the newline after "1" is still pending
	for _ in 0..2 {
		let line = console.read_line().unwrap();
		println!("console line {line:?}");
	}
	drop(console);

	let line = facade::read_line().unwrap();
	println!("facade line {line:?}");
	if facade::read_line().is_err_and(|e| e.is_end_of_input()) {
		println!("facade end of input");
	}
}

#[test]
fn reads_validated_line() {
	if std::env::var_os(READER_ENV).is_none() {
		return;
	}
	let line = facade::read_line_validated(|l| l == "yes", "say yes").unwrap();
	println!("validated line {line:?}");
}
