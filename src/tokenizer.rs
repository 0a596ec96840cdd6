//! Shell-like splitting of a command string into tokens.
//!
//! [`tokenize`] implements a small subset of POSIX shell word splitting:
//!
//! - **Whitespace**: unquoted spaces, tabs and newlines separate tokens
//! - **Quotes**: `'…'`, `"…"` and `` `…` `` group characters; the marks
//!   themselves are dropped and other quote kinds inside them are literal
//! - **Escapes**: a backslash makes the next character literal
//!
//! There is no variable expansion, globbing or command substitution. Empty
//! tokens are never produced, so `""` contributes nothing.
//!
//! ## Examples
//!
//! ```rust
//! use get_options::tokenize;
//!
//! assert_eq!(
//!     tokenize(r#"--foo "bar baz" --qux='a " b'"#),
//!     vec!["--foo", "bar baz", "--qux=a \" b"]
//! );
//! assert_eq!(tokenize(r"one\ two"), vec!["one two"]);
//! ```

/// Splits `input` into tokens.
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    Tokenizer::new(input).run()
}

struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
    quote: Option<char>,
    escaped: bool,
    current: String,
    tokens: Vec<String>,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Tokenizer {
            input,
            position: 0,
            quote: None,
            escaped: false,
            current: String::new(),
            tokens: Vec::new(),
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn finish_token(&mut self) {
        if !self.current.is_empty() {
            self.tokens.push(std::mem::take(&mut self.current));
        }
    }

    fn run(mut self) -> Vec<String> {
        while let Some(ch) = self.next_char() {
            if self.escaped {
                self.current.push(ch);
                self.escaped = false;
                continue;
            }

            if self.quote.is_none() && matches!(ch, ' ' | '\t' | '\n') {
                self.finish_token();
                continue;
            }

            match ch {
                '\\' => {
                    self.escaped = true;
                    if self.swallows_backslash() {
                        continue;
                    }
                }
                '\'' | '"' | '`' if self.quote.map_or(true, |q| q == ch) => {
                    self.quote = match self.quote {
                        Some(_) => None,
                        None => Some(ch),
                    };
                    continue;
                }
                _ => {}
            }

            self.current.push(ch);
        }

        self.finish_token();
        self.tokens
    }

    /// Whether the backslash just read escapes a metacharacter and should be dropped.
    fn swallows_backslash(&self) -> bool {
        let Some(next) = self.peek_char() else {
            return false;
        };
        match self.quote {
            Some(quote) => next == quote || next == '\\',
            None => matches!(next, '-' | ' ' | '\t' | '\n' | '\\' | '\'' | '"' | '`'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_splitting() {
        assert_eq!(tokenize("  --foo\tbar\n baz  "), vec!["--foo", "bar", "baz"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n").is_empty());
    }

    #[test]
    fn test_quotes_group_and_disappear() {
        assert_eq!(tokenize(r#""--foo" "--bar""#), vec!["--foo", "--bar"]);
        assert_eq!(tokenize(r#""--foo --bar""#), vec!["--foo --bar"]);
        assert_eq!(tokenize("ab'c d'e"), vec!["abc de"]);
        assert_eq!(tokenize("`a 'b' c`"), vec!["a 'b' c"]);
    }

    #[test]
    fn test_nested_quotes_are_literal() {
        assert_eq!(
            tokenize(r#"--foo "--bar='qux'""#),
            vec!["--foo", "--bar='qux'"]
        );
        assert_eq!(
            tokenize(r#"--bar='qux " " qul' 123"#),
            vec!["--bar=qux \" \" qul", "123"]
        );
    }

    #[test]
    fn test_empty_quotes_produce_nothing() {
        assert_eq!(tokenize(r#"a "" b"#), vec!["a", "b"]);
    }

    #[test]
    fn test_escapes_outside_quotes() {
        assert_eq!(tokenize(r"a\ b"), vec!["a b"]);
        assert_eq!(tokenize(r#"\"quoted\""#), vec!["\"quoted\""]);
        assert_eq!(tokenize(r"\-\-foo"), vec!["--foo"]);
        assert_eq!(tokenize(r"a\\b"), vec![r"a\b"]);
        // Not a metacharacter: the backslash stays
        assert_eq!(tokenize(r"a\nb"), vec![r"a\nb"]);
    }

    #[test]
    fn test_escapes_inside_quotes() {
        assert_eq!(tokenize(r#""a \" b""#), vec!["a \" b"]);
        assert_eq!(tokenize(r#"'a \\ b'"#), vec![r"a \ b"]);
        assert_eq!(tokenize(r#""a \' b""#), vec![r"a \' b"]);
    }

    #[test]
    fn test_trailing_backslash_is_kept() {
        assert_eq!(tokenize(r"abc\"), vec![r"abc\"]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(tokenize("'a b"), vec!["a b"]);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(tokenize("--naïve 'héllo wörld'"), vec!["--naïve", "héllo wörld"]);
    }
}
