//! Lexical analysis of ISBM chart lines.
//!
//! A chart line is a run of delimiter-separated fields with all space
//! characters removed up front. The first fields are usually directive
//! keywords; everything unrecognized is a positional argument for the
//! note(s) declared on that line.

/// Field constants of the ISBM chart syntax.
///
/// The defaults match the charts shipped with the original game. Pass a
/// customized value to
/// [`parse_chart_with_syntax`](super::parse_chart_with_syntax) for chart
/// sets authored with different constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    /// Delimiter between fields on a line.
    pub delimiter: String,
    /// Prefix marking a whole line as a comment.
    pub comment_prefix: String,
    /// Keyword declaring a new note.
    pub note_key: String,
    /// Keyword declaring the beatmap name.
    pub name_key: String,
    /// Keyword declaring a new default tempo.
    pub tempo_key: String,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            delimiter: ";".into(),
            comment_prefix: "//".into(),
            note_key: "note".into(),
            name_key: "beatname".into(),
            tempo_key: "bpm".into(),
        }
    }
}

/// A recognized directive keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// Declares a new note on the current line.
    Note,
    /// Arms the beatmap-name assignment for the end of the line.
    Name,
    /// Arms the default-tempo assignment for the end of the line.
    Tempo,
}

/// How the parser should treat one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A leading keyword that changes parser state.
    Directive(Directive),
    /// A plain positional argument.
    Argument,
}

/// One delimiter-separated field of a chart line, with spaces removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The field text.
    pub text: String,
    /// The field classification.
    pub kind: TokenKind,
}

impl Token {
    fn classify(text: String, syntax: &Syntax) -> Self {
        // Keywords are matched by prefix, the way the original client
        // compared only the first keyword-length characters of a field.
        let kind = if text.starts_with(&syntax.note_key) {
            TokenKind::Directive(Directive::Note)
        } else if text.starts_with(&syntax.name_key) {
            TokenKind::Directive(Directive::Name)
        } else if text.starts_with(&syntax.tempo_key) {
            TokenKind::Directive(Directive::Tempo)
        } else {
            TokenKind::Argument
        };
        Self { text, kind }
    }
}

/// Tokenizes one physical chart line.
///
/// Returns `None` when the line carries nothing for the parser: it is empty,
/// whitespace-only, or begins with the comment prefix once spaces are
/// stripped. Otherwise every field between delimiters becomes a [`Token`],
/// including the leftover after the last delimiter and including empty
/// fields (which classify as arguments).
#[must_use]
pub fn tokenize_line(line: &str, syntax: &Syntax) -> Option<Vec<Token>> {
    if line.chars().all(char::is_whitespace) {
        return None;
    }
    let stripped: String = line.chars().filter(|&c| c != ' ').collect();
    if stripped.is_empty() || stripped.starts_with(&syntax.comment_prefix) {
        return None;
    }

    let mut tokens = Vec::new();
    let mut rest = stripped.as_str();
    if !syntax.delimiter.is_empty() {
        while let Some(pos) = rest.find(&syntax.delimiter) {
            let (field, remaining) = rest.split_at(pos);
            tokens.push(Token::classify(field.to_owned(), syntax));
            rest = remaining
                .get(syntax.delimiter.len()..)
                .unwrap_or_default();
        }
    }
    tokens.push(Token::classify(rest.to_owned(), syntax));
    Some(tokens)
}
