use std::io::{BufRead, IsTerminal, Write};

use crossterm::style::Stylize;

/// Asks for a line on stdin, falling back to `default` when the answer is
/// blank or stdin is not a terminal.
pub fn ask(question: &str, default: Option<&str>) -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return default
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("{question} is required when stdin is not a terminal"));
    }

    let mut stderr = std::io::stderr();
    match default {
        Some(d) => write!(stderr, "{} [{}]: ", question.bold(), d.dim())?,
        None => write!(stderr, "{}: ", question.bold())?,
    }
    stderr.flush()?;

    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(pick(&answer, default)?.to_string())
}

fn pick<'a>(answer: &'a str, default: Option<&'a str>) -> anyhow::Result<&'a str> {
    match (answer.trim(), default) {
        ("", Some(d)) => Ok(d),
        ("", None) => anyhow::bail!("no answer given"),
        (answer, _) => Ok(answer),
    }
}

pub fn list(title: &str, items: &[String]) {
    eprintln!("{}", title.bold());
    for item in items {
        eprintln!("  {item}");
    }
}

pub fn success(message: &str) {
    eprintln!("{} {message}", "✓".green());
}
