use logos::Logos;

use crate::resource::rep::OpKind;

///Enum for command keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos)]
pub enum Tk {
    #[token("READ")]
    TkKwRead,
    #[token("WRITE")]
    TkKwWrite,
    #[token("DECSTMT")]
    TkKwDecStmt,
    #[token("DECDAT")]
    TkKwDecDat,
}

impl Tk {
    /// Lexes a whole word as a keyword. Returns `None` unless the keyword spans the entire word.
    pub fn keyword(word: &str) -> Option<Self> {
        let mut lex = Self::lexer(word);
        match lex.next() {
            Some(Ok(tk)) if lex.span() == (0..word.len()) => Some(tk),
            _ => None,
        }
    }
}

impl From<Tk> for OpKind {
    fn from(value: Tk) -> Self {
        match value {
            Tk::TkKwRead => Self::Read,
            Tk::TkKwWrite => Self::Write,
            Tk::TkKwDecStmt => Self::DecStmt,
            Tk::TkKwDecDat => Self::DecDat,
        }
    }
}
