//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! identifier folding, string interning and final token conversion.

use logos::Logos;

/// Raw token from logos (before interning).
///
/// Reserved words match case-insensitively. Comments in both `{ ... }` and
/// `(* ... *)` form are skipped along with whitespace.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"\{[^}]*\}")]
#[logos(skip r"\(\*([^*]|\*+[^*)])*\*+\)")]
pub(crate) enum RawToken {
    #[token("and", ignore(ascii_case))]
    And,
    #[token("array", ignore(ascii_case))]
    Array,
    #[token("const", ignore(ascii_case))]
    Const,
    #[token("div", ignore(ascii_case))]
    Div,
    #[token("in", ignore(ascii_case))]
    In,
    #[token("mod", ignore(ascii_case))]
    Mod,
    #[token("not", ignore(ascii_case))]
    Not,
    #[token("of", ignore(ascii_case))]
    Of,
    #[token("or", ignore(ascii_case))]
    Or,
    #[token("set", ignore(ascii_case))]
    Set,
    #[token("type", ignore(ascii_case))]
    Type,
    #[token("var", ignore(ascii_case))]
    Var,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Eq,
    #[token("<>")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token(":=")]
    Assign,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,

    /// Unsigned integer; `None` from the callback (overflow) becomes a lex error.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    /// A real needs a digit after the point, so `1..9` lexes as `1`, `..`, `9`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Real(f64),

    /// Quoted string; a doubled quote stands for one quote character.
    #[regex(r"'([^'\n]|'')*'")]
    Str,

    /// String missing its closing quote before end of line.
    #[regex(r"'([^'\n]|'')*")]
    UnterminatedStr,

    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Ident,
}
