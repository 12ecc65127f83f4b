use crate::io::{CommentMode, KeywordMatch};

/// Keywords the reader extracts data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Element,
    Species,
    Phase,
    Constituent,
}

impl Keyword {
    /// Dispatch order; matters for [`KeywordMatch::Legacy`].
    pub const ALL: [Keyword; 4] = [
        Keyword::Element,
        Keyword::Species,
        Keyword::Phase,
        Keyword::Constituent,
    ];

    pub fn literal(&self) -> &'static str {
        match self {
            Keyword::Element => "ELEMENTS",
            Keyword::Species => "SPECIES",
            Keyword::Phase => "PHASE",
            Keyword::Constituent => "CONSTITUENT",
        }
    }

    /// Name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Keyword::Element => "ELEMENT",
            Keyword::Species => "SPECIES",
            Keyword::Phase => "PHASE",
            Keyword::Constituent => "CONSTITUENT",
        }
    }

    fn singular(&self) -> &'static str {
        match self {
            Keyword::Element => "ELEMENT",
            Keyword::Species => "SPECIE",
            Keyword::Phase => "PHASE",
            Keyword::Constituent => "CONSTITUENT",
        }
    }

    /// Resolves the leading token of a statement, or `None` for commands
    /// the reader does not handle (`FUNCTION`, `PARAMETER`, ...).
    pub fn classify(token: &str, mode: KeywordMatch) -> Option<Keyword> {
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.matches(token, mode))
    }

    fn matches(&self, token: &str, mode: KeywordMatch) -> bool {
        let literal = self.literal();
        match mode {
            KeywordMatch::Abbreviation => {
                token.len() >= 3
                    && token.len() <= literal.len()
                    && literal.as_bytes()[..token.len()].eq_ignore_ascii_case(token.as_bytes())
            }
            KeywordMatch::Exact => {
                token.eq_ignore_ascii_case(literal) || token.eq_ignore_ascii_case(self.singular())
            }
            KeywordMatch::Legacy => literal.contains(token),
        }
    }
}

/// One `!`-terminated command with its whitespace-separated tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// 1-based source line of the first token.
    pub line: usize,
    pub tokens: Vec<String>,
}

impl Statement {
    pub fn keyword(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or_default()
    }
}

/// Drops comment lines and splits the remaining text into statements.
///
/// Statements may span several lines; tokens never do. Empty statements are
/// not returned. Trailing text without a closing `!` still forms a statement.
pub fn split_statements(source: &str, comments: CommentMode) -> Vec<Statement> {
    let mut statements = Vec::new();
    let mut current = Statement {
        line: 0,
        tokens: Vec::new(),
    };

    for (idx, line) in source.lines().enumerate() {
        if comments.is_comment(line) {
            continue;
        }

        let line_no = idx + 1;
        let mut segments = line.split('!').peekable();
        while let Some(segment) = segments.next() {
            for token in segment.split_whitespace() {
                if current.tokens.is_empty() {
                    current.line = line_no;
                }
                current.tokens.push(token.to_string());
            }

            // every segment but the last one was closed by a '!'
            if segments.peek().is_some() && !current.tokens.is_empty() {
                statements.push(std::mem::replace(
                    &mut current,
                    Statement {
                        line: 0,
                        tokens: Vec::new(),
                    },
                ));
            }
        }
    }

    if !current.tokens.is_empty() {
        statements.push(current);
    }

    statements
}
