//! User input utilities for interactive command-line prompts.
//!
//! Every prompt has a reader-generic variant so the parsing rules can be
//! exercised without a terminal.

use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};

/// Reads one trimmed line. End of input is an error so prompt loops terminate.
fn read_line_from<R: BufRead>(reader: &mut R, prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush prompt")?;

    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .context("Failed to read user input")?;
    if read == 0 {
        bail!("Input closed");
    }
    Ok(input.trim().to_string())
}

/// Prompts the user for a string input.
///
/// # Errors
///
/// Returns an error if reading from stdin fails or stdin is closed.
pub fn prompt_string(prompt: &str) -> Result<String> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

fn prompt_string_with_default_from<R: BufRead>(
    reader: &mut R,
    prompt: &str,
    default: Option<&str>,
) -> Result<String> {
    let input = match default {
        Some(default_val) => read_line_from(reader, &format!("{prompt} [{default_val}]"))?,
        None => read_line_from(reader, prompt)?,
    };

    if input.is_empty() {
        Ok(default.unwrap_or_default().to_string())
    } else {
        Ok(input)
    }
}

/// Prompts the user for a string input with a default value.
///
/// If the user just presses Enter, the default value is returned.
pub fn prompt_string_with_default(prompt: &str, default: Option<&str>) -> Result<String> {
    prompt_string_with_default_from(&mut io::stdin().lock(), prompt, default)
}

fn prompt_optional_with_default_from<R: BufRead>(
    reader: &mut R,
    prompt: &str,
    default: Option<&str>,
) -> Result<Option<String>> {
    let input = match default {
        Some(default_val) => {
            read_line_from(reader, &format!("{prompt} [{default_val}] ('-' to clear)"))?
        }
        None => read_line_from(reader, prompt)?,
    };

    Ok(match input.as_str() {
        "" => default.map(str::to_string),
        "-" => None,
        _ => Some(input),
    })
}

/// Prompts for an optional value. Enter keeps the default, `-` clears it.
pub fn prompt_optional_with_default(prompt: &str, default: Option<&str>) -> Result<Option<String>> {
    prompt_optional_with_default_from(&mut io::stdin().lock(), prompt, default)
}

fn prompt_confirmation_from<R: BufRead>(reader: &mut R, prompt: &str) -> Result<bool> {
    loop {
        let input = read_line_from(reader, &format!("{prompt} (y/N)"))?;
        match input.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => {
                eprintln!("Please enter 'y' for yes or 'n' for no.");
            }
        }
    }
}

/// Prompts the user for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input is treated as 'no'.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    prompt_confirmation_from(&mut io::stdin().lock(), prompt)
}

fn prompt_integer_with_default_from<R: BufRead>(
    reader: &mut R,
    prompt: &str,
    default: i64,
) -> Result<i64> {
    loop {
        let input = read_line_from(reader, &format!("{prompt} [{default}]"))?;
        if input.is_empty() {
            return Ok(default);
        }

        match input.parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                eprintln!("Please enter a whole number.");
            }
        }
    }
}

/// Prompts for a whole number, re-prompting until the input parses.
///
/// Range checks are left to the caller's validation.
pub fn prompt_integer_with_default(prompt: &str, default: i64) -> Result<i64> {
    prompt_integer_with_default_from(&mut io::stdin().lock(), prompt, default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_default_used_on_empty_input() {
        let mut input = Cursor::new("\n");
        let value = prompt_string_with_default_from(&mut input, "Name", Some("Lamp")).unwrap();
        assert_eq!(value, "Lamp");
    }

    #[test]
    fn test_input_replaces_default() {
        let mut input = Cursor::new("  Desk lamp \n");
        let value = prompt_string_with_default_from(&mut input, "Name", Some("Lamp")).unwrap();
        assert_eq!(value, "Desk lamp");
    }

    #[test]
    fn test_optional_dash_clears() {
        let mut input = Cursor::new("-\n");
        let value = prompt_optional_with_default_from(&mut input, "Description", Some("old"))
            .unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_optional_enter_keeps_default() {
        let mut input = Cursor::new("\n");
        let value = prompt_optional_with_default_from(&mut input, "Description", Some("old"))
            .unwrap();
        assert_eq!(value.as_deref(), Some("old"));
    }

    #[test]
    fn test_confirmation_retries_until_answer() {
        let mut input = Cursor::new("maybe\nYES\n");
        assert!(prompt_confirmation_from(&mut input, "Delete?").unwrap());
    }

    #[test]
    fn test_confirmation_defaults_to_no() {
        let mut input = Cursor::new("\n");
        assert!(!prompt_confirmation_from(&mut input, "Delete?").unwrap());
    }

    #[test]
    fn test_integer_reprompts_on_garbage() {
        let mut input = Cursor::new("abc\n-5\n");
        let value = prompt_integer_with_default_from(&mut input, "Price", 100).unwrap();
        assert_eq!(value, -5);
    }

    #[test]
    fn test_closed_input_is_error() {
        let mut input = Cursor::new("");
        assert!(prompt_confirmation_from(&mut input, "Delete?").is_err());
    }
}
