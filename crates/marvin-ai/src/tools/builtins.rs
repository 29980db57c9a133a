//! The six built-in tools.
//!
//! Handlers speak the protocol's result strings directly: expected
//! failures (missing file, bad expression, I/O errors) are reported as
//! output text, matching what the model is told to expect. Only arity
//! mismatches surface as dispatch errors.

use std::fs;
use std::path::Path;

use chrono::Local;

use super::calc;
use super::ToolError;

/// Longest file prefix returned by `read_file`, in characters.
const READ_LIMIT: usize = 1000;

/// Characters `calculate` accepts before the expression reaches the
/// evaluator.
const ALLOWED_MATH_CHARS: &str = "0123456789+-*/.() ";

pub(crate) fn get_current_time(args: &[String]) -> Result<String, ToolError> {
    expect_args("get_current_time", args, 0)?;
    Ok(Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
}

pub(crate) fn read_file(args: &[String]) -> Result<String, ToolError> {
    expect_args("read_file", args, 1)?;
    let path = &args[0];

    if !Path::new(path).exists() {
        return Ok(match cwd_listing() {
            Ok(listing) => {
                format!("File '{path}' does not exist. Available files: {listing}")
            }
            Err(err) => format!("Error reading file: {err}"),
        });
    }

    Ok(match fs::read_to_string(path) {
        Ok(content) => clip(&content),
        Err(err) => format!("Error reading file: {err}"),
    })
}

pub(crate) fn write_file(args: &[String]) -> Result<String, ToolError> {
    expect_args("write_file", args, 2)?;
    let (path, content) = (&args[0], &args[1]);

    Ok(match fs::write(path, content) {
        Ok(()) => format!("Successfully wrote to {path}"),
        Err(err) => format!("Error writing file: {err}"),
    })
}

pub(crate) fn list_directory(args: &[String]) -> Result<String, ToolError> {
    let path = match args {
        [] => ".",
        [path] => path.as_str(),
        _ => return Err(arity_error("list_directory", "at most 1", args.len())),
    };

    Ok(match dir_entries(path) {
        Ok(mut items) => {
            if items.is_empty() {
                "Directory is empty".to_string()
            } else {
                items.sort();
                let listing: Vec<String> =
                    items.iter().map(|item| format!("- {item}")).collect();
                format!("Files and folders:\n{}", listing.join("\n"))
            }
        }
        Err(err) => format!("Error listing directory: {err}"),
    })
}

pub(crate) fn file_exists(args: &[String]) -> Result<String, ToolError> {
    expect_args("file_exists", args, 1)?;
    let path = &args[0];
    let verdict = if Path::new(path).exists() {
        "exists"
    } else {
        "does not exist"
    };
    Ok(format!("File '{path}' {verdict}"))
}

pub(crate) fn calculate(args: &[String]) -> Result<String, ToolError> {
    expect_args("calculate", args, 1)?;
    let expression = &args[0];

    // Allowlist check comes first; anything else never reaches the
    // evaluator.
    if !expression.chars().all(|c| ALLOWED_MATH_CHARS.contains(c)) {
        return Ok("Error: Only basic math operations allowed".to_string());
    }

    Ok(match calc::evaluate(expression) {
        Ok(value) => calc::format_value(value),
        Err(err) => format!("Error calculating: {err}"),
    })
}

fn expect_args(name: &str, args: &[String], count: usize) -> Result<(), ToolError> {
    if args.len() != count {
        return Err(arity_error(name, &count.to_string(), args.len()));
    }
    Ok(())
}

fn arity_error(name: &str, expected: &str, got: usize) -> ToolError {
    ToolError::Execution(format!(
        "{name}() expects {expected} argument(s), got {got}"
    ))
}

/// Unsorted name listing of the current directory, comma-joined.
fn cwd_listing() -> std::io::Result<String> {
    Ok(dir_entries(".")?.join(", "))
}

fn dir_entries(path: &str) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(path)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// First `READ_LIMIT` characters, with an ellipsis when clipped.
fn clip(content: &str) -> String {
    if content.chars().count() > READ_LIMIT {
        let head: String = content.chars().take(READ_LIMIT).collect();
        format!("{head}...")
    } else {
        content.to_string()
    }
}
