use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use crate::colorscheme::_colorscheme::{available, capture};
use crate::config::_config::{Config, VERSION};
use crate::dump::_dump::Dump;
use crate::theme::vim::{convert, Mappings};

use super::prompt;

/// Convert a Vim colorscheme into an Emacs theme
#[derive(Parser, Debug)]
#[command(name = "vim2emacs")]
#[command(version = VERSION)]
#[command(about = "Convert a Vim colorscheme into an Emacs theme", long_about = None)]
pub struct Cli {
    /// Colorscheme to load in vim and convert
    pub colorscheme: Option<String>,

    /// Read a saved `:highlight` listing instead of running vim ("-" for stdin)
    #[arg(long, value_name = "FILE", conflicts_with = "colorscheme")]
    pub dump: Option<String>,

    /// Name of the generated Emacs theme
    #[arg(long)]
    pub name: Option<String>,

    /// Directory to write `<name>-theme.el` into
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Print the theme instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Print the face specifications as JSON
    #[arg(long)]
    pub json: bool,

    /// List the colorschemes that can be converted
    #[arg(long)]
    pub list: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Theme names become a file name and a Lisp symbol, so they may not
/// contain whitespace, path separators, or characters Lisp reads specially.
fn validate_name(name: &str) -> anyhow::Result<()> {
    if name.is_empty() || name == "." || name == ".." {
        anyhow::bail!("theme name {name:?} is not usable");
    }
    if let Some(c) = name
        .chars()
        .find(|c| c.is_whitespace() || "/\\()\"';#`,".contains(*c))
    {
        anyhow::bail!("theme name {name:?} may not contain {c:?}");
    }
    Ok(())
}

/// Default theme name: the scheme, or the dump file's stem.
fn default_name(cli: &Cli, scheme: Option<&str>) -> Option<String> {
    if let Some(name) = scheme {
        return Some(name.to_string());
    }
    cli.dump
        .as_deref()
        .filter(|d| *d != "-")
        .and_then(|d| Path::new(d).file_stem())
        .and_then(|s| s.to_str())
        .map(str::to_string)
}

fn load_dump(cli: &Cli, config: &Config) -> anyhow::Result<(Dump, Option<String>)> {
    if let Some(file) = &cli.dump {
        return Ok((Dump::from_file(file)?, None));
    }

    let scheme = match &cli.colorscheme {
        Some(scheme) => scheme.clone(),
        None => {
            prompt::list("Available colorschemes:", &available(&config.colors_dirs));
            prompt::ask("Colorscheme", None)?
        }
    };

    let content = capture(&config.vim, &scheme)?;
    Ok((Dump::new(Some(scheme.clone()), &content), Some(scheme)))
}

pub fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    if cli.list {
        for name in available(&config.colors_dirs) {
            println!("{name}");
        }
        return Ok(());
    }

    let (dump, scheme) = load_dump(&cli, &config)?;
    if dump.is_empty() {
        warn!(source = dump.source.as_deref().unwrap_or("-"), "highlight dump has no lines");
    }

    let name = match &cli.name {
        Some(name) => name.clone(),
        None => prompt::ask("Theme name", default_name(&cli, scheme.as_deref()).as_deref())?,
    };
    validate_name(&name)?;

    let mappings = Mappings::with_groups(&config.groups);
    let theme = convert(&name, &config.source_url, &dump, &mappings);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&theme.faces)?);
        return Ok(());
    }

    let rendered = theme.render();
    if cli.stdout {
        print!("{rendered}");
        return Ok(());
    }

    let dir = cli.out_dir.unwrap_or(config.output_dir);
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(theme.file_name());
    std::fs::write(&path, rendered).with_context(|| format!("writing {}", path.display()))?;

    info!(path = %path.display(), faces = theme.faces.len(), "wrote theme");
    prompt::success(&format!(
        "wrote {} faces to {}",
        theme.faces.len(),
        path.display()
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vim2emacs").chain(args.iter().copied())).unwrap()
    }

    fn test_config(dir: &Path) -> Config {
        Config {
            output_dir: dir.to_path_buf(),
            colors_dirs: vec![],
            source_url: "https://example.invalid/vim2emacs".into(),
            ..Config::default()
        }
    }

    #[test]
    fn dump_and_colorscheme_conflict() {
        let result = Cli::try_parse_from(["vim2emacs", "desert", "--dump", "hi.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn default_name_prefers_scheme() {
        let cli = parse(&["--dump", "/tmp/saved/desert.txt"]);
        assert_eq!(default_name(&cli, None).as_deref(), Some("desert"));
        assert_eq!(default_name(&cli, Some("blue")).as_deref(), Some("blue"));

        let stdin = parse(&["--dump", "-"]);
        assert_eq!(default_name(&stdin, None), None);
    }

    #[test]
    fn writes_theme_file_from_dump() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("night.txt");
        std::fs::write(&dump, "\nNormal xxx guifg=#ffffff guibg=#000000 gui=bold\n").unwrap();
        let out = dir.path().join("themes");

        let cli = parse(&[
            "--dump",
            dump.to_str().unwrap(),
            "--name",
            "night",
            "--out-dir",
            out.to_str().unwrap(),
        ]);
        run(cli, test_config(dir.path())).unwrap();

        let written = std::fs::read_to_string(out.join("night-theme.el")).unwrap();
        assert!(written.starts_with(";;; night-theme.el"));
        assert!(written.contains(
            "'(default ((t (:weight bold :background \"#000000\" :foreground \"#ffffff\"))))"
        ));
    }

    #[test]
    fn configured_groups_reach_the_mapper() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("folded.txt");
        std::fs::write(&dump, "Folded xxx guibg=#222222\n").unwrap();

        let mut config = test_config(dir.path());
        config
            .groups
            .insert("Folded".to_string(), vec!["shadow".to_string()]);

        let cli = parse(&["--dump", dump.to_str().unwrap(), "--name", "folded"]);
        run(cli, config).unwrap();

        let written = std::fs::read_to_string(dir.path().join("folded-theme.el")).unwrap();
        assert!(written.contains("'(shadow ((t (:background \"#222222\"))))"));
    }

    #[test]
    fn names_that_escape_or_break_lisp_are_rejected() {
        for name in ["../x", "a/b", "a\\b", "two words", "tab\tname", "", "..", "(x)", "q\"uote"] {
            assert!(validate_name(name).is_err(), "{name:?}");
        }
        for name in ["desert", "tokyo-night", "solarized_dark", "gruvbox.v2"] {
            assert!(validate_name(name).is_ok(), "{name:?}");
        }
    }

    #[test]
    fn traversing_name_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("night.txt");
        std::fs::write(&dump, "Normal xxx guifg=#ffffff\n").unwrap();
        let out = dir.path().join("themes");

        let cli = parse(&[
            "--dump",
            dump.to_str().unwrap(),
            "--name",
            "../escaped",
            "--out-dir",
            out.to_str().unwrap(),
        ]);
        assert!(run(cli, test_config(dir.path())).is_err());
        assert!(!dir.path().join("escaped-theme.el").exists());
        assert!(!out.exists());
    }

    #[test]
    fn missing_dump_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse(&["--dump", "/definitely/not/here.txt", "--name", "x"]);
        assert!(run(cli, test_config(dir.path())).is_err());
    }
}
