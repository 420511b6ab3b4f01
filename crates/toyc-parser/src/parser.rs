use toyc_core::{BinOp, CompilationUnit, Expr, FunctionDef, Param, Stmt, Type, UnOp};

use crate::error::ParseError;
use crate::token::{Token, TokenKind};

/// Recursive-descent parser over a pre-lexed token stream.
///
/// Implements the grammar and precedence ladder from spec §6: `||` < `&&`
/// < `==`/`!=` < relational < `+`/`-` < `*`/`/`/`%` < unary < primary/call,
/// with dangling-`else` bound to the nearest `if` (the natural result of
/// `parse_if` eagerly consuming a trailing `else` if present).
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

type PResult<T> = Result<T, ParseError>;

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    pub fn parse_compilation_unit(mut self) -> PResult<CompilationUnit> {
        let mut functions = Vec::new();
        while !self.at(&TokenKind::Eof) {
            functions.push(self.parse_function_def()?);
        }
        Ok(CompilationUnit { functions })
    }

    // -- token stream helpers -------------------------------------------

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_kind(&self, offset: usize) -> &TokenKind {
        &self.tokens[(self.pos + offset).min(self.tokens.len() - 1)].kind
    }

    fn at(&self, kind: &TokenKind) -> bool {
        &self.peek().kind == kind
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, kind: TokenKind) -> PResult<Token> {
        if self.peek().kind == kind {
            Ok(self.advance())
        } else {
            let tok = self.peek().clone();
            Err(ParseError::Syntax {
                line: tok.line,
                column: tok.column,
                detail: format!("expected {kind}, found {}", tok.kind),
            })
        }
    }

    fn expect_ident(&mut self) -> PResult<String> {
        match self.peek().kind.clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            other => {
                let tok = self.peek().clone();
                Err(ParseError::Syntax {
                    line: tok.line,
                    column: tok.column,
                    detail: format!("expected identifier, found {other}"),
                })
            }
        }
    }

    fn syntax_err(&self, detail: impl Into<String>) -> ParseError {
        let tok = self.peek();
        ParseError::Syntax {
            line: tok.line,
            column: tok.column,
            detail: detail.into(),
        }
    }

    // -- top level --------------------------------------------------------

    fn parse_type(&mut self) -> PResult<Type> {
        match self.peek().kind {
            TokenKind::KwInt => {
                self.advance();
                Ok(Type::Int)
            }
            TokenKind::KwVoid => {
                self.advance();
                Ok(Type::Void)
            }
            _ => Err(self.syntax_err(format!("expected a type, found {}", self.peek().kind))),
        }
    }

    fn parse_function_def(&mut self) -> PResult<FunctionDef> {
        let return_type = self.parse_type()?;
        let name = self.expect_ident()?;
        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.at(&TokenKind::RParen) {
            loop {
                let ty = self.parse_type()?;
                let name = self.expect_ident()?;
                params.push(Param { ty, name });
                if self.at(&TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(FunctionDef {
            return_type,
            name,
            params,
            body,
        })
    }

    // -- statements ---------------------------------------------------------

    fn parse_block(&mut self) -> PResult<Stmt> {
        self.expect(TokenKind::LBrace)?;
        let mut stmts = Vec::new();
        while !self.at(&TokenKind::RBrace) {
            stmts.push(self.parse_stmt()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(Stmt::Block(stmts))
    }

    fn parse_stmt(&mut self) -> PResult<Stmt> {
        match &self.peek().kind {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::Semi => {
                self.advance();
                Ok(Stmt::Empty)
            }
            TokenKind::KwIf => self.parse_if(),
            TokenKind::KwWhile => self.parse_while(),
            TokenKind::KwBreak => {
                self.advance();
                self.expect(TokenKind::Semi)?;
                Ok(Stmt::Break)
            }
            TokenKind::KwContinue => {
                self.advance();
                self.expect(TokenKind::Semi)?;
                Ok(Stmt::Continue)
            }
            TokenKind::KwReturn => {
                self.advance();
                let expr = if self.at(&TokenKind::Semi) {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                self.expect(TokenKind::Semi)?;
                Ok(Stmt::Return(expr))
            }
            TokenKind::KwInt | TokenKind::KwVoid => self.parse_var_decl(),
            TokenKind::Ident(_) if matches!(self.peek_kind(1), TokenKind::Eq) => {
                self.parse_assign()
            }
            _ => {
                let expr = self.parse_expr()?;
                self.expect(TokenKind::Semi)?;
                Ok(Stmt::ExprStmt(expr))
            }
        }
    }

    fn parse_var_decl(&mut self) -> PResult<Stmt> {
        let ty = self.parse_type()?;
        let name = self.expect_ident()?;
        let init = if self.at(&TokenKind::Eq) {
            self.advance();
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(TokenKind::Semi)?;
        Ok(Stmt::VarDecl { ty, name, init })
    }

    fn parse_assign(&mut self) -> PResult<Stmt> {
        let name = self.expect_ident()?;
        self.expect(TokenKind::Eq)?;
        let value = self.parse_expr()?;
        self.expect(TokenKind::Semi)?;
        Ok(Stmt::Assign { name, value })
    }

    fn parse_if(&mut self) -> PResult<Stmt> {
        self.expect(TokenKind::KwIf)?;
        self.expect(TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        let then_branch = Box::new(self.parse_stmt()?);
        // Dangling else binds to the nearest `if`: we are that nearest `if`
        // by construction (recursive descent naturally nests this way), so
        // just consume a trailing `else` eagerly if one is present.
        let else_branch = if self.at(&TokenKind::KwElse) {
            self.advance();
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };
        Ok(Stmt::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    fn parse_while(&mut self) -> PResult<Stmt> {
        self.expect(TokenKind::KwWhile)?;
        self.expect(TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        let body = Box::new(self.parse_stmt()?);
        Ok(Stmt::While { cond, body })
    }

    // -- expressions (precedence climbing) -----------------------------------

    fn parse_expr(&mut self) -> PResult<Expr> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_and()?;
        while self.at(&TokenKind::OrOr) {
            self.advance();
            let rhs = self.parse_and()?;
            lhs = Expr::binary(BinOp::Or, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_equality()?;
        while self.at(&TokenKind::AndAnd) {
            self.advance();
            let rhs = self.parse_equality()?;
            lhs = Expr::binary(BinOp::And, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_equality(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_relational()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::EqEq => BinOp::Eq,
                TokenKind::NotEq => BinOp::Ne,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_relational()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_relational(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_additive()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Lt => BinOp::Lt,
                TokenKind::Le => BinOp::Le,
                TokenKind::Gt => BinOp::Gt,
                TokenKind::Ge => BinOp::Ge,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_additive()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_additive(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_multiplicative()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_multiplicative()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_multiplicative(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                TokenKind::Percent => BinOp::Mod,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> PResult<Expr> {
        let op = match self.peek().kind {
            TokenKind::Minus => UnOp::Neg,
            TokenKind::Bang => UnOp::Not,
            TokenKind::Plus => UnOp::Pos,
            _ => return self.parse_primary(),
        };
        self.advance();
        let operand = self.parse_unary()?;
        Ok(Expr::unary(op, operand))
    }

    fn parse_primary(&mut self) -> PResult<Expr> {
        match self.peek().kind.clone() {
            TokenKind::IntLit(n) => {
                self.advance();
                Ok(Expr::IntLit(n))
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::Ident(name) => {
                self.advance();
                if self.at(&TokenKind::LParen) {
                    self.advance();
                    let mut args = Vec::new();
                    if !self.at(&TokenKind::RParen) {
                        loop {
                            args.push(self.parse_expr()?);
                            if self.at(&TokenKind::Comma) {
                                self.advance();
                            } else {
                                break;
                            }
                        }
                    }
                    self.expect(TokenKind::RParen)?;
                    Ok(Expr::Call { callee: name, args })
                } else {
                    Ok(Expr::Var(name))
                }
            }
            other => Err(self.syntax_err(format!("expected an expression, found {other}"))),
        }
    }
}
