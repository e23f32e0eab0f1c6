use super::token::SelectorToken;
use crate::error::SelectorError;

/// Tokenizer over selector text.
///
/// Whitespace is emitted as a token of its own because it is the
/// descendant combinator; the parser decides where it is significant.
pub struct SelectorTokenizer {
    /// The input string being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Collected tokens
    tokens: Vec<SelectorToken>,
}

impl SelectorTokenizer {
    /// Create a new tokenizer with the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into().chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole input.
    ///
    /// # Errors
    ///
    /// Fails on the first character that has no meaning in the selector
    /// grammar, on a bare `!` not followed by `=`, on `#` not followed by
    /// a plain identifier, or on an unterminated string.
    pub fn run(&mut self) -> Result<(), SelectorError> {
        loop {
            let token = self.consume_token()?;
            let is_eof = token == SelectorToken::Eof;
            self.tokens.push(token);
            if is_eof {
                return Ok(());
            }
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<SelectorToken> {
        self.tokens
    }

    fn consume_token(&mut self) -> Result<SelectorToken, SelectorError> {
        let position = self.position;
        let Some(c) = self.consume() else {
            return Ok(SelectorToken::Eof);
        };

        match c {
            c if c.is_whitespace() => {
                self.consume_whitespace();
                Ok(SelectorToken::Whitespace)
            }

            '"' | '\'' => self.consume_string_token(c),

            '#' => {
                // Ids are plain identifiers only. `#a.b` stops at the
                // dot and the parser rejects the leftover.
                if self.peek().is_some_and(is_ident_start) {
                    Ok(SelectorToken::Hash(self.consume_ident_sequence(false)))
                } else {
                    Err(SelectorError::ExpectedIdName)
                }
            }

            ',' => Ok(SelectorToken::Comma),
            '>' => Ok(SelectorToken::Greater),
            ':' => Ok(SelectorToken::Colon),
            '[' => Ok(SelectorToken::LeftBracket),
            ']' => Ok(SelectorToken::RightBracket),
            '(' => Ok(SelectorToken::LeftParen),
            ')' => Ok(SelectorToken::RightParen),
            '=' => Ok(SelectorToken::Eq),

            '!' => {
                if self.peek() == Some('=') {
                    let _ = self.consume();
                    Ok(SelectorToken::NotEq)
                } else {
                    Err(SelectorError::UnexpectedChar { ch: '!', position })
                }
            }

            '^' => {
                if self.peek() == Some('=') {
                    let _ = self.consume();
                    Ok(SelectorToken::PrefixMatch)
                } else {
                    Err(SelectorError::UnexpectedChar { ch: '^', position })
                }
            }

            c if is_ident_start(c) => {
                self.reconsume();
                Ok(SelectorToken::Ident(self.consume_ident_sequence(true)))
            }

            c => Err(SelectorError::UnexpectedChar { ch: c, position }),
        }
    }

    /// Consume a quoted string, `quote` already consumed.
    fn consume_string_token(&mut self, quote: char) -> Result<SelectorToken, SelectorError> {
        let mut value = String::new();
        loop {
            match self.consume() {
                None => return Err(SelectorError::UnterminatedString),
                Some(c) if c == quote => return Ok(SelectorToken::String(value)),
                Some(c) => value.push(c),
            }
        }
    }

    /// Consume an identifier sequence. When `dotted` is set, `.` is
    /// accepted as a continuation character so module paths like
    /// `os.path` form a single token.
    fn consume_ident_sequence(&mut self, dotted: bool) -> String {
        let mut value = String::new();
        while let Some(c) = self.peek() {
            if is_ident_continue(c) || (dotted && c == '.') {
                value.push(c);
                let _ = self.consume();
            } else {
                break;
            }
        }
        value
    }

    fn consume_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            let _ = self.consume();
        }
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    fn reconsume(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
