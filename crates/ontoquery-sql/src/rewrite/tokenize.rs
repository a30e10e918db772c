use ontoquery_core::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Token<'a> {
    /// Whitespace, punctuation, numbers and placeholders
    Text(&'a str),

    /// A string literal, quotes included
    Literal(&'a str),

    /// A quoted identifier
    Quoted {
        /// The identifier with quotes removed and escapes resolved
        ident: String,

        /// Source text, quotes included
        raw: &'a str,
    },

    /// A bare word: keyword or unquoted identifier
    Word(&'a str),
}

/// Splits `sql` into tokens. Concatenating the `raw` text of every token
/// gives back `sql`.
pub(super) fn tokenize(sql: &str, quote: char, backslash_escapes: bool) -> Result<Vec<Token<'_>>> {
    let mut tokens = vec![];
    let mut chars = sql.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if ch == '\'' {
            let end = loop {
                match chars.next() {
                    Some((_, '\\')) if backslash_escapes => {
                        chars.next();
                    }
                    Some((i, '\'')) => {
                        if matches!(chars.peek(), Some((_, '\''))) {
                            chars.next();
                        } else {
                            break i + 1;
                        }
                    }
                    Some(_) => {}
                    None => return Err(unterminated("string literal", start)),
                }
            };
            tokens.push(Token::Literal(&sql[start..end]));
        } else if ch == quote {
            let mut ident = String::new();
            let end = loop {
                match chars.next() {
                    Some((i, c)) if c == quote => {
                        if matches!(chars.peek(), Some((_, c)) if *c == quote) {
                            chars.next();
                            ident.push(quote);
                        } else {
                            break i + c.len_utf8();
                        }
                    }
                    Some((_, c)) => ident.push(c),
                    None => return Err(unterminated("quoted identifier", start)),
                }
            };
            tokens.push(Token::Quoted {
                ident,
                raw: &sql[start..end],
            });
        } else if is_word_char(ch) {
            let mut end = start + ch.len_utf8();
            while let Some((i, c)) = chars.peek().copied() {
                if !is_word_char(c) {
                    break;
                }
                end = i + c.len_utf8();
                chars.next();
            }

            let text = &sql[start..end];
            if ch.is_ascii_digit() {
                tokens.push(Token::Text(text));
            } else {
                tokens.push(Token::Word(text));
            }
        } else {
            tokens.push(Token::Text(&sql[start..start + ch.len_utf8()]));
        }
    }

    Ok(tokens)
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn unterminated(what: &str, offset: usize) -> Error {
    Error::rewrite_ambiguity(format!("unterminated {what} at offset {offset}"))
}
