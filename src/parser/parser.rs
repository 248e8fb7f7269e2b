use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::ast::{Ast, AstNode};

/// Recursive-descent parser over the token stream.
///
/// S-expressions need no precedence handling: `(` opens a subtree, `)`
/// closes it and every other token becomes a leaf.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    file: Rc<String>,
}

impl Parser {
    fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
        }
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len() || self.current().kind == TokenKind::EOF
    }

    fn parse_node(&mut self) -> Result<AstNode, Error> {
        match self.current().kind {
            TokenKind::OpenParen => {
                self.advance();

                let mut children = vec![];
                loop {
                    if self.at_eof() {
                        return Err(Error::new(
                            ErrorImpl::UnexpectedEof,
                            Position(self.current().span.start.0, Rc::clone(&self.file)),
                        ));
                    }
                    if self.current().kind == TokenKind::CloseParen {
                        self.advance();
                        break;
                    }
                    children.push(self.parse_node()?);
                }

                Ok(AstNode::Tree(children))
            }
            TokenKind::CloseParen => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: self.current().value.clone(),
                },
                Position(self.current().span.start.0, Rc::clone(&self.file)),
            )),
            _ => Ok(AstNode::Leaf(self.advance())),
        }
    }
}

/// Parses a token stream into a generic syntax tree.
///
/// The stream must end with an EOF token, as produced by `tokenize`.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Ast, Error> {
    let mut parser = Parser::new(tokens, file);

    let mut ast = Ast { children: vec![] };
    while !parser.at_eof() {
        ast.children.push(parser.parse_node()?);
    }

    Ok(ast)
}
