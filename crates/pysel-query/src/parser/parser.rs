use crate::error::SelectorError;
use crate::selector::{
    AttrOp, AttrPredicate, Combinator, Compound, PseudoClass, SelectorChain, SelectorList,
};
use crate::tokenizer::{SelectorToken, SelectorTokenizer};

/// Parse selector text into a [`SelectorList`].
///
/// # Errors
///
/// Returns a [`SelectorError`] describing the first problem found: a
/// tokenization failure, an empty selector or alternative, a malformed
/// attribute predicate, an unknown pseudo-class, or an empty `:not()` /
/// `:has()` argument.
pub fn parse_selector(text: &str) -> Result<SelectorList, SelectorError> {
    let mut tokenizer = SelectorTokenizer::new(text);
    tokenizer.run()?;

    let mut parser = SelectorParser::new(tokenizer.into_tokens());
    let list = parser.parse_list(false)?;
    parser.expect(&SelectorToken::Eof)?;

    if list.chains.is_empty() {
        return Err(SelectorError::EmptySelector);
    }
    Ok(list)
}

/// Recursive-descent parser over a selector token stream.
pub struct SelectorParser {
    tokens: Vec<SelectorToken>,
    position: usize,
}

impl SelectorParser {
    /// Create a parser over the given tokens. The stream must end with
    /// [`SelectorToken::Eof`].
    #[must_use]
    pub fn new(tokens: Vec<SelectorToken>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse a comma-separated list of selector chains up to the current
    /// terminator (`)` when `nested`, end of input otherwise).
    ///
    /// An empty list is only legal when `nested` (the `:extends()` rule);
    /// the top-level caller checks for emptiness itself.
    fn parse_list(&mut self, nested: bool) -> Result<SelectorList, SelectorError> {
        let mut chains = Vec::new();

        self.skip_whitespace();
        if nested && *self.peek() == SelectorToken::RightParen {
            return Ok(SelectorList { chains });
        }
        if !nested && *self.peek() == SelectorToken::Eof {
            return Err(SelectorError::EmptySelector);
        }

        loop {
            chains.push(self.parse_chain(nested)?);
            self.skip_whitespace();
            if *self.peek() == SelectorToken::Comma {
                self.advance();
                self.skip_whitespace();
            } else {
                return Ok(SelectorList { chains });
            }
        }
    }

    /// Parse one alternative: compounds joined by combinators, with an
    /// optional leading `>` anchoring the chain to its scope.
    fn parse_chain(&mut self, nested: bool) -> Result<SelectorChain, SelectorError> {
        let mut anchor = None;

        self.skip_whitespace();
        if *self.peek() == SelectorToken::Greater {
            self.advance();
            self.skip_whitespace();
            anchor = Some(Combinator::Child);
        }

        // Compounds left-to-right; each entry after the first carries
        // the combinator joining it to the compound on its left.
        let first = self.parse_compound()?;
        let mut rest: Vec<(Combinator, Compound)> = Vec::new();

        loop {
            let mut combinator = None;
            if *self.peek() == SelectorToken::Whitespace {
                self.advance();
                combinator = Some(Combinator::Descendant);
            }
            if *self.peek() == SelectorToken::Greater {
                self.advance();
                self.skip_whitespace();
                combinator = Some(Combinator::Child);
            }

            let at_end = match self.peek() {
                SelectorToken::Eof | SelectorToken::Comma => true,
                SelectorToken::RightParen if nested => true,
                _ => false,
            };
            if at_end {
                // Trailing whitespace is harmless; a dangling `>` is not.
                if combinator == Some(Combinator::Child) {
                    return Err(SelectorError::EmptyCompound);
                }
                break;
            }

            match combinator {
                Some(combinator) => rest.push((combinator, self.parse_compound()?)),
                None => {
                    let token = self.peek().clone();
                    return Err(SelectorError::UnexpectedToken(token.to_string()));
                }
            }
        }

        Ok(chain_from_compounds(first, rest, anchor))
    }

    /// Parse one compound: `tag`, `#id`, `[...]`, and `:pseudo(...)`
    /// terms with no whitespace between them. The tag, when present,
    /// must come first.
    fn parse_compound(&mut self) -> Result<Compound, SelectorError> {
        let mut compound = Compound::default();

        loop {
            match self.peek() {
                SelectorToken::Ident(name) => {
                    if !compound.is_empty() {
                        return Err(SelectorError::UnexpectedToken(format!(
                            "identifier '{name}'"
                        )));
                    }
                    compound.tag = Some(name.clone());
                    self.advance();
                }

                SelectorToken::Hash(name) => {
                    if compound.id.is_some() {
                        return Err(SelectorError::UnexpectedToken(format!("'#{name}'")));
                    }
                    compound.id = Some(name.clone());
                    self.advance();
                }

                SelectorToken::LeftBracket => {
                    self.advance();
                    compound.attrs.push(self.parse_attr_predicate()?);
                }

                SelectorToken::Colon => {
                    self.advance();
                    compound.pseudos.push(self.parse_pseudo_class()?);
                }

                _ => break,
            }
        }

        if compound.is_empty() {
            return Err(SelectorError::EmptyCompound);
        }
        Ok(compound)
    }

    /// Parse the inside of `[...]`, the `[` already consumed.
    fn parse_attr_predicate(&mut self) -> Result<AttrPredicate, SelectorError> {
        self.skip_whitespace();
        let name = self.expect_ident()?;

        self.skip_whitespace();
        let op = match self.peek() {
            SelectorToken::Eq => AttrOp::Eq,
            SelectorToken::NotEq => AttrOp::NotEq,
            SelectorToken::PrefixMatch => AttrOp::StartsWith,
            token => return Err(SelectorError::UnexpectedToken(token.to_string())),
        };
        self.advance();

        self.skip_whitespace();
        let value = match self.peek() {
            SelectorToken::Ident(value) | SelectorToken::String(value) => value.clone(),
            token => return Err(SelectorError::UnexpectedToken(token.to_string())),
        };
        self.advance();

        self.skip_whitespace();
        self.expect(&SelectorToken::RightBracket)?;

        Ok(AttrPredicate { name, op, value })
    }

    /// Parse a pseudo-class, the `:` already consumed. All supported
    /// pseudo-classes take a parenthesized selector-list argument.
    fn parse_pseudo_class(&mut self) -> Result<PseudoClass, SelectorError> {
        let name = self.expect_ident()?;
        self.expect(&SelectorToken::LeftParen)?;
        let argument = self.parse_list(true)?;
        self.expect(&SelectorToken::RightParen)?;

        match name.as_str() {
            "not" | "has" => {
                // Emptiness means something for :extends (a class with
                // no bases) but nothing coherent here.
                if argument.chains.is_empty() {
                    return Err(SelectorError::EmptyCompound);
                }
                if name == "not" {
                    Ok(PseudoClass::Not(argument))
                } else {
                    Ok(PseudoClass::Has(argument))
                }
            }
            "extends" => Ok(PseudoClass::Extends(argument)),
            _ => Err(SelectorError::UnknownPseudoClass(name)),
        }
    }

    fn expect_ident(&mut self) -> Result<String, SelectorError> {
        match self.peek() {
            SelectorToken::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            token => Err(SelectorError::ExpectedIdentifier(token.to_string())),
        }
    }

    fn expect(&mut self, token: &SelectorToken) -> Result<(), SelectorError> {
        if self.peek() == token {
            self.advance();
            Ok(())
        } else if *self.peek() == SelectorToken::Eof {
            Err(SelectorError::UnexpectedEof)
        } else {
            Err(SelectorError::UnexpectedToken(self.peek().to_string()))
        }
    }

    fn skip_whitespace(&mut self) {
        while *self.peek() == SelectorToken::Whitespace {
            self.advance();
        }
    }

    fn peek(&self) -> &SelectorToken {
        self.tokens.get(self.position).unwrap_or(&SelectorToken::Eof)
    }

    fn advance(&mut self) {
        self.position += 1;
    }
}

/// Assemble a subject-first chain from left-to-right compounds.
///
/// The rightmost compound becomes the subject; each compound to its left
/// becomes an ancestor entry carrying the combinator that joined it to
/// the compound on its right.
fn chain_from_compounds(
    first: Compound,
    rest: Vec<(Combinator, Compound)>,
    anchor: Option<Combinator>,
) -> SelectorChain {
    let mut subject = first;
    let mut ancestors = Vec::with_capacity(rest.len());

    for (combinator, compound) in rest {
        ancestors.push((combinator, std::mem::replace(&mut subject, compound)));
    }
    ancestors.reverse();

    SelectorChain {
        subject,
        ancestors,
        anchor,
    }
}
