use std::fmt::{self, Write};

use super::_theme::{lisp_string, FaceProperties, Theme};

const GENERATOR: &str = "vim2emacs";

fn plist(properties: &FaceProperties) -> String {
    if properties.is_empty() {
        return "nil".to_string();
    }
    let items: Vec<String> = properties
        .iter()
        .map(|(key, value)| format!(":{key} {}", value.to_lisp()))
        .collect();
    format!("({})", items.join(" "))
}

impl Theme {
    /// Renders the theme as an Emacs Lisp `deftheme` file. Clause order is
    /// fixed so regenerated files diff cleanly.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out).unwrap();
        out
    }

    pub fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        let name = &self.name;
        let file = self.file_name();

        writeln!(out, ";;; {file} --- {name} theme converted from Vim")?;
        writeln!(out)?;
        writeln!(out, ";; Generated by {GENERATOR}")?;
        writeln!(out, ";; Source: {}", self.source_url)?;
        writeln!(out)?;

        let doc = lisp_string(&format!("{name} theme, converted from a Vim colorscheme."));
        writeln!(out, "(deftheme {name}")?;
        writeln!(out, "  {doc})")?;
        writeln!(out)?;

        write!(out, "(custom-theme-set-faces\n '{name}")?;
        for spec in &self.faces {
            write!(
                out,
                "\n '({} ((t {})))",
                spec.face,
                plist(&spec.properties)
            )?;
        }
        writeln!(out, ")")?;
        writeln!(out)?;

        writeln!(out, "(provide-theme '{name})")?;
        writeln!(out)?;
        writeln!(out, ";; Local Variables:")?;
        writeln!(out, ";; no-byte-compile: t")?;
        writeln!(out, ";; End:")?;
        writeln!(out)?;
        writeln!(out, ";;; {file} ends here")
    }
}
