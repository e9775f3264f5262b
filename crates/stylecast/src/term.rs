//! Styled terminal output.
//!
//! Progress and results go to stdout; problems and cancellations go
//! to stderr so generated noise stays pipeable.

use console::style;

pub fn intro(text: &str) {
    println!("{}", style(format!(" {} ", text)).white().on_blue());
}

pub fn success(message: &str) {
    println!("{}", style(message).green());
}

pub fn warn(message: &str) {
    eprintln!("{}", style(format!("warning: {}", message)).yellow());
}

pub fn error(message: &str) {
    eprintln!("{}", style(message).red());
}

pub fn cancel(message: &str) {
    eprintln!("{}", style(message).dim());
}

pub fn outro(message: &str) {
    println!("\n{}", style(message).blue().bold().underlined());
}
