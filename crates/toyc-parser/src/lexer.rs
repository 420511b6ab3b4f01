use crate::error::ParseError;
use crate::token::{keyword, Token, TokenKind};

/// Turns source text into a token stream.
///
/// Single pass over the bytes of `source` (ToyC has no non-ASCII lexical
/// elements), tracking 1-indexed line/column for diagnostics. Comments
/// (`// ...` and non-nested `/* ... */`) are stripped here rather than
/// passed through as tokens.
pub struct Lexer<'a> {
    bytes: &'a [u8],
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            bytes: source.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_trivia()?;
            let (line, column) = (self.line, self.column);
            let Some(c) = self.peek() else {
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    line,
                    column,
                });
                break;
            };

            let kind = if c.is_ascii_digit() {
                self.lex_number()?
            } else if c == b'_' || c.is_ascii_alphabetic() {
                self.lex_ident_or_keyword()
            } else {
                self.lex_operator()?
            };

            tokens.push(Token { kind, line, column });
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.pos += 1;
        if c == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match self.peek() {
                Some(c) if c == b' ' || c == b'\t' || c == b'\r' || c == b'\n' => {
                    self.advance();
                }
                Some(b'/') if self.peek_at(1) == Some(b'/') => {
                    while !matches!(self.peek(), None | Some(b'\n')) {
                        self.advance();
                    }
                }
                Some(b'/') if self.peek_at(1) == Some(b'*') => {
                    let (start_line, start_col) = (self.line, self.column);
                    self.advance();
                    self.advance();
                    loop {
                        match (self.peek(), self.peek_at(1)) {
                            (Some(b'*'), Some(b'/')) => {
                                self.advance();
                                self.advance();
                                break;
                            }
                            (Some(_), _) => {
                                self.advance();
                            }
                            (None, _) => {
                                return Err(ParseError::Lexical {
                                    line: start_line,
                                    column: start_col,
                                    detail: "unterminated block comment".into(),
                                })
                            }
                        }
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn lex_number(&mut self) -> Result<TokenKind, ParseError> {
        let (line, column) = (self.line, self.column);
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos]).unwrap();
        text.parse::<i32>()
            .map(TokenKind::IntLit)
            .map_err(|_| ParseError::Lexical {
                line,
                column,
                detail: format!("integer literal '{text}' out of range for a 32-bit value"),
            })
    }

    fn lex_ident_or_keyword(&mut self) -> TokenKind {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c == b'_' || c.is_ascii_alphanumeric()) {
            self.advance();
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos]).unwrap();
        keyword(text).unwrap_or_else(|| TokenKind::Ident(text.to_string()))
    }

    fn lex_operator(&mut self) -> Result<TokenKind, ParseError> {
        let (line, column) = (self.line, self.column);
        let c = self.advance().unwrap();
        let kind = match c {
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'%' => TokenKind::Percent,
            b';' => TokenKind::Semi,
            b',' => TokenKind::Comma,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'=' => {
                if self.peek() == Some(b'=') {
                    self.advance();
                    TokenKind::EqEq
                } else {
                    TokenKind::Eq
                }
            }
            b'!' => {
                if self.peek() == Some(b'=') {
                    self.advance();
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                }
            }
            b'<' => {
                if self.peek() == Some(b'=') {
                    self.advance();
                    TokenKind::Le
                } else {
                    TokenKind::Lt
                }
            }
            b'>' => {
                if self.peek() == Some(b'=') {
                    self.advance();
                    TokenKind::Ge
                } else {
                    TokenKind::Gt
                }
            }
            b'&' if self.peek() == Some(b'&') => {
                self.advance();
                TokenKind::AndAnd
            }
            b'|' if self.peek() == Some(b'|') => {
                self.advance();
                TokenKind::OrOr
            }
            other => {
                return Err(ParseError::Lexical {
                    line,
                    column,
                    detail: format!("unexpected character '{}'", other as char),
                })
            }
        };
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn tokenizes_keywords_and_identifiers() {
        assert_eq!(
            kinds("int x"),
            vec![TokenKind::KwInt, TokenKind::Ident("x".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn tokenizes_two_char_operators_greedily() {
        assert_eq!(
            kinds("<= >= == != && ||"),
            vec![
                TokenKind::Le,
                TokenKind::Ge,
                TokenKind::EqEq,
                TokenKind::NotEq,
                TokenKind::AndAnd,
                TokenKind::OrOr,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn strips_line_and_block_comments() {
        assert_eq!(
            kinds("1 // trailing\n/* block\n comment */ 2"),
            vec![TokenKind::IntLit(1), TokenKind::IntLit(2), TokenKind::Eof]
        );
    }

    #[test]
    fn tracks_line_and_column() {
        let tokens = Lexer::new("int\n  x").tokenize().unwrap();
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
    }

    #[test]
    fn unterminated_block_comment_is_lexical_error() {
        let err = Lexer::new("/* never closed").tokenize().unwrap_err();
        assert!(matches!(err, ParseError::Lexical { line: 1, column: 1, .. }));
    }

    #[test]
    fn unexpected_character_is_lexical_error() {
        let err = Lexer::new("int x @ y").tokenize().unwrap_err();
        match err {
            ParseError::Lexical { detail, .. } => assert!(detail.contains('@')),
            other => panic!("expected lexical error, got {other:?}"),
        }
    }
}
