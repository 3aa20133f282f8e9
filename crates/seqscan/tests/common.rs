#![allow(missing_docs, dead_code)]

use core::{fmt::Write, ops::Range};

use seqscan::{ScanError, Scanner};

const WHITESPACE: &str = " \t\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Ident,
    Number,
    Str,
    Punct,
    Comment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: Kind,
    pub text: &'a str,
    pub span: Range<usize>,
}

/// A toy lexer for a C-like language, enough to drive every scanner family.
pub fn lex(src: &str) -> Result<Vec<Token<'_>>, ScanError> {
    let mut s = Scanner::new(src);
    let mut tokens = Vec::new();
    loop {
        s.skip_set(WHITESPACE);
        let Some(c) = s.peek() else { break };
        let start = s.checkpoint();
        let (kind, text) = if c.is_alphabetic() || c == '_' {
            let text = s.scan_while(|c| c.is_alphanumeric() || c == '_');
            (Kind::Ident, text)
        } else if c.is_ascii_digit() {
            (Kind::Number, s.scan_set('0'..='9'))
        } else if s.starts_with("//") {
            s.skip(2);
            (Kind::Comment, s.scan_up_to('\n').trim())
        } else if s.starts_with("/*") {
            s.skip(2);
            let body = s.scan_up_to_collection("*/");
            s.expect_collection("*/")?;
            (Kind::Comment, body.trim())
        } else if c == '"' {
            s.advance();
            let body = s.scan_up_to('"');
            s.expect_element('"')?;
            (Kind::Str, body)
        } else {
            (Kind::Punct, s.scan(1))
        };
        tokens.push(Token {
            kind,
            text,
            span: start.position()..s.position(),
        });
    }
    Ok(tokens)
}

pub fn render(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for t in tokens {
        writeln!(
            out,
            "{:?} {:?} {}..{}",
            t.kind, t.text, t.span.start, t.span.end
        )
        .unwrap();
    }
    out
}
