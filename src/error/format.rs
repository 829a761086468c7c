use crate::error::{ApkInfoError, ErrorContext};
use std::error::Error as _;

/// Render an error with its context and the chain of underlying causes.
pub fn format_error_chain(error: &ApkInfoError) -> String {
    let mut output = ErrorContext::new(error).to_string();

    let mut causes = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }

    // thiserror already folds the first cause into the message
    if causes.len() > 1 {
        output.push_str("\n\nCaused by:");
        for cause in &causes[1..] {
            output.push_str(&format!("\n  - {cause}"));
        }
    }

    output
}

/// Format error for a terminal, optionally with ANSI colors
pub fn format_error_with_color(error: &ApkInfoError, use_color: bool) -> String {
    if !use_color {
        return format_error_chain(error);
    }

    let red = "\x1b[31m";
    let yellow = "\x1b[33m";
    let cyan = "\x1b[36m";
    let bold = "\x1b[1m";
    let reset = "\x1b[0m";

    let context = ErrorContext::new(error);
    let mut output = format!("{red}{bold}Error:{reset} {error}\n");

    if let Some(details) = &context.details {
        output.push_str(&format!("\n{details}\n"));
    }

    if let Some(suggestion) = &context.suggestion {
        output.push_str(&format!("\n{yellow}{bold}Suggestions:{reset}\n"));
        for line in suggestion.lines().filter(|line| !line.trim().is_empty()) {
            output.push_str(&format!("{cyan}• {line}{reset}\n"));
        }
    }

    output.push_str(reset);
    output
}
