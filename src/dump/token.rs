/// One whitespace-separated field of a highlight declaration: `key` or
/// `key=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub key: String,
    pub value: Option<String>,
}

impl Token {
    /// Only the first `=` delimits; later ones stay in the value.
    pub fn parse(field: &str) -> Self {
        match field.split_once('=') {
            Some((key, value)) => Self {
                key: key.to_string(),
                value: Some(value.to_string()),
            },
            None => Self {
                key: field.to_string(),
                value: None,
            },
        }
    }
}

pub fn tokenize(line: &str) -> Vec<Token> {
    line.split_whitespace().map(Token::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(key: &str, value: Option<&str>) -> Token {
        Token {
            key: key.to_string(),
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn splits_on_first_equals_only() {
        assert_eq!(Token::parse("a=b=c"), token("a", Some("b=c")));
    }

    #[test]
    fn bare_key_has_no_value() {
        assert_eq!(Token::parse("Normal"), token("Normal", None));
    }

    #[test]
    fn malformed_fields_do_not_fail() {
        assert_eq!(Token::parse("="), token("", Some("")));
        assert_eq!(Token::parse("=x"), token("", Some("x")));
        assert_eq!(Token::parse("guifg="), token("guifg", Some("")));
    }

    #[test]
    fn runs_of_whitespace_are_one_separator() {
        let tokens = tokenize("  Comment \t xxx   guifg=#808080  gui=italic  ");
        assert_eq!(
            tokens,
            vec![
                token("Comment", None),
                token("xxx", None),
                token("guifg", Some("#808080")),
                token("gui", Some("italic")),
            ]
        );
    }

    #[test]
    fn whitespace_only_line_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t \r").is_empty());
    }
}
