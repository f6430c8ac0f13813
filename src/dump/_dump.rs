use std::io::Read;

use anyhow::Context;

use super::token::{tokenize, Token};

/// The captured output of `:highlight`, one declaration per line.
pub struct Dump {
    pub source: Option<String>,
    pub lines: Vec<String>,
}

/// Splits on `\n` and drops whatever follows the last newline, even if it
/// is not empty. `:redir` output always ends its lines, so a dangling
/// fragment is never a complete declaration.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = content.split('\n').collect();
    lines.pop();
    lines
}

impl Dump {
    pub fn new(source: Option<String>, content: &str) -> Self {
        let lines = split_lines(content)
            .into_iter()
            .map(|s| s.to_string())
            .collect();
        Self { source, lines }
    }

    /// Reads a dump from `file`, or from stdin when `file` is `-`.
    pub fn from_file(file: &str) -> anyhow::Result<Self> {
        let content = if file == "-" {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("reading highlight dump from stdin")?;
            content
        } else {
            std::fs::read_to_string(file)
                .with_context(|| format!("reading highlight dump {file}"))?
        };

        Ok(Self::new(Some(file.to_string()), &content))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Token sequences for every line, in dump order.
    pub fn tokenized(&self) -> impl Iterator<Item = Vec<Token>> + '_ {
        self.lines.iter().map(|line| tokenize(line))
    }
}
