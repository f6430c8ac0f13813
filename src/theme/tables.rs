//! Built-in lookup tables, version 1. User configuration may add to the
//! group table at startup; neither table changes afterwards.

/// Vim highlight group to the Emacs faces it styles.
pub const GROUP_FACES: &[(&str, &[&str])] = &[
    ("Normal", &["default"]),
    ("Cursor", &["cursor"]),
    ("CursorLine", &["hl-line"]),
    ("Visual", &["region"]),
    ("Search", &["lazy-highlight"]),
    ("IncSearch", &["isearch"]),
    ("MatchParen", &["show-paren-match"]),
    ("LineNr", &["line-number", "linum"]),
    ("CursorLineNr", &["line-number-current-line"]),
    ("StatusLine", &["mode-line"]),
    ("StatusLineNC", &["mode-line-inactive"]),
    ("VertSplit", &["vertical-border"]),
    ("NonText", &["fringe"]),
    ("Pmenu", &["company-tooltip"]),
    ("PmenuSel", &["company-tooltip-selection"]),
    ("Directory", &["dired-directory"]),
    ("ErrorMsg", &["error"]),
    ("WarningMsg", &["warning"]),
    ("ModeMsg", &["minibuffer-prompt"]),
    (
        "Comment",
        &["font-lock-comment-face", "font-lock-comment-delimiter-face"],
    ),
    ("Constant", &["font-lock-constant-face"]),
    ("String", &["font-lock-string-face"]),
    ("Identifier", &["font-lock-variable-name-face"]),
    ("Function", &["font-lock-function-name-face"]),
    ("Statement", &["font-lock-keyword-face"]),
    ("Keyword", &["font-lock-keyword-face"]),
    ("PreProc", &["font-lock-preprocessor-face"]),
    ("Type", &["font-lock-type-face"]),
    ("Special", &["font-lock-builtin-face"]),
    ("Underlined", &["link"]),
    ("Error", &["error"]),
    ("Todo", &["font-lock-warning-face"]),
    ("DiffAdd", &["diff-added"]),
    ("DiffChange", &["diff-changed"]),
    ("DiffDelete", &["diff-removed"]),
    ("SpellBad", &["flyspell-incorrect"]),
    ("SpellCap", &["flyspell-duplicate"]),
];

/// `gui=`/`cterm=` keyword to face properties, values as Lisp symbols.
pub const ATTRIBUTE_PROPERTIES: &[(&str, &[(&str, &str)])] = &[
    ("bold", &[("weight", "bold")]),
    ("italic", &[("slant", "italic")]),
    ("underline", &[("underline", "t")]),
    ("undercurl", &[("underline", "(:style wave)")]),
    ("reverse", &[("inverse-video", "t")]),
    ("inverse", &[("inverse-video", "t")]),
    ("standout", &[("inverse-video", "t")]),
    ("strikethrough", &[("strike-through", "t")]),
    ("nocombine", &[]),
];
