use std::fmt;

/// A lexical token together with the 1-indexed source position where it
/// starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
}

/// The complete token vocabulary for ToyC (spec §6).
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals & identifiers
    IntLit(i32),
    Ident(String),

    // Keywords
    KwInt,
    KwVoid,
    KwIf,
    KwElse,
    KwWhile,
    KwBreak,
    KwContinue,
    KwReturn,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    EqEq,
    NotEq,
    Lt,
    Le,
    Gt,
    Ge,
    AndAnd,
    OrOr,
    Bang,
    Eq,

    // Punctuation
    Semi,
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,

    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::IntLit(n) => return write!(f, "integer literal '{n}'"),
            TokenKind::Ident(name) => return write!(f, "identifier '{name}'"),
            TokenKind::KwInt => "'int'",
            TokenKind::KwVoid => "'void'",
            TokenKind::KwIf => "'if'",
            TokenKind::KwElse => "'else'",
            TokenKind::KwWhile => "'while'",
            TokenKind::KwBreak => "'break'",
            TokenKind::KwContinue => "'continue'",
            TokenKind::KwReturn => "'return'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Percent => "'%'",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::Lt => "'<'",
            TokenKind::Le => "'<='",
            TokenKind::Gt => "'>'",
            TokenKind::Ge => "'>='",
            TokenKind::AndAnd => "'&&'",
            TokenKind::OrOr => "'||'",
            TokenKind::Bang => "'!'",
            TokenKind::Eq => "'='",
            TokenKind::Semi => "';'",
            TokenKind::Comma => "','",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Eof => "end of input",
        };
        write!(f, "{s}")
    }
}

pub fn keyword(ident: &str) -> Option<TokenKind> {
    Some(match ident {
        "int" => TokenKind::KwInt,
        "void" => TokenKind::KwVoid,
        "if" => TokenKind::KwIf,
        "else" => TokenKind::KwElse,
        "while" => TokenKind::KwWhile,
        "break" => TokenKind::KwBreak,
        "continue" => TokenKind::KwContinue,
        "return" => TokenKind::KwReturn,
        _ => return None,
    })
}
