use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::Context;
use tracing::{debug, info};

const SCHEME_EXTENSIONS: [&str; 2] = ["vim", "lua"];

/// Names of the colorschemes found in `dirs`, sorted and deduplicated.
pub fn available(dirs: &[PathBuf]) -> Vec<String> {
    let mut names = BTreeSet::new();

    for dir in dirs {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping colors directory");
                continue;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let is_scheme = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| SCHEME_EXTENSIONS.contains(&ext));
            if !is_scheme || !path.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.insert(stem.to_string());
            }
        }
    }

    names.into_iter().collect()
}

/// Runs `vim` headless with `scheme` loaded and returns its `:highlight`
/// listing.
pub fn capture(vim: &str, scheme: &str) -> anyhow::Result<String> {
    let out = tempfile::NamedTempFile::new().context("creating capture file")?;
    let out_path = out.path().display().to_string();

    info!(vim, scheme, "capturing highlight groups");

    let status = Command::new(vim)
        .args(["-N", "-u", "NONE", "-i", "NONE", "-es"])
        .arg("-c")
        .arg(format!("colorscheme {scheme}"))
        .arg("-c")
        .arg(format!("redir! > {out_path}"))
        .args(["-c", "silent highlight", "-c", "redir END", "-c", "qa!"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .with_context(|| format!("running {vim}"))?;

    if !status.success() {
        anyhow::bail!("{vim} exited with {status} while loading colorscheme {scheme}");
    }

    let dump = std::fs::read_to_string(out.path())
        .with_context(|| format!("reading captured highlights from {out_path}"))?;
    debug!(bytes = dump.len(), "captured highlight dump");

    Ok(dump)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_schemes_across_dirs() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(first.path().join("desert.vim"), "").unwrap();
        std::fs::write(first.path().join("README.md"), "").unwrap();
        std::fs::write(second.path().join("tokyonight.lua"), "").unwrap();
        std::fs::write(second.path().join("desert.vim"), "").unwrap();
        std::fs::create_dir(second.path().join("blue.vim")).unwrap();

        let names = available(&[
            first.path().to_path_buf(),
            second.path().to_path_buf(),
            first.path().join("missing"),
        ]);
        assert_eq!(names, vec!["desert".to_string(), "tokyonight".to_string()]);
    }

    #[test]
    fn no_dirs_no_schemes() {
        assert!(available(&[]).is_empty());
    }

    #[test]
    fn missing_binary_is_an_error() {
        let err = capture("/definitely/not/a/vim", "desert").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/a/vim"));
    }
}
