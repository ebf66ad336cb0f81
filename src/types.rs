use core::fmt;

/// Set of characters, any one of which separates fields.
///
/// Matching is by `char` (Unicode scalar value), never by encoded byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delimiters {
    chars: Vec<char>,
}

impl Delimiters {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut set = Delimiters::default();
        for c in chars {
            if !set.chars.contains(&c) {
                set.chars.push(c);
            }
        }
        set
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for Delimiters {
    fn from(value: &str) -> Self {
        Delimiters::new(value.chars())
    }
}

impl From<&String> for Delimiters {
    fn from(value: &String) -> Self {
        Delimiters::from(value.as_str())
    }
}

impl From<char> for Delimiters {
    fn from(value: char) -> Self {
        Delimiters::new([value])
    }
}

impl From<&[char]> for Delimiters {
    fn from(value: &[char]) -> Self {
        Delimiters::new(value.iter().copied())
    }
}

impl From<&Delimiters> for Delimiters {
    fn from(value: &Delimiters) -> Self {
        value.clone()
    }
}

/// How a line is tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Delimiters only, no quote or escape handling.
    Plain,
    /// Quote- and backslash-aware splitting.
    Quoted { quote: char },
}

/// Reason a quoted split was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    UnterminatedQuote,
    DanglingEscape,
    InvalidEscape(char),
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedQuote => write!(f, "unterminated quote"),
            Self::DanglingEscape => write!(f, "input ends after escape marker"),
            Self::InvalidEscape(c) => write!(f, "character {:?} cannot be escaped", c),
        }
    }
}

/// Outcome of a numeric conversion.
///
/// `value` holds whatever prefix could be read (0 if none); `success` is set
/// only when the whole input was consumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion<T> {
    pub value: T,
    pub success: bool,
}

impl<T> Conversion<T> {
    pub fn is_ok(&self) -> bool {
        self.success
    }

    pub fn into_option(self) -> Option<T> {
        self.success.then_some(self.value)
    }
}
