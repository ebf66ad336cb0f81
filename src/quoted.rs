//! Разбиение строки на поля с учётом кавычек и экранирования.
//!
//! Поля разделяются любым символом из набора [`Delimiters`]. Символ кавычки
//! открывает и закрывает участок, внутри которого разделители считаются
//! обычными символами. Обратный слэш делает следующий символ буквальным;
//! вне кавычек экранировать можно только кавычку, сам слэш и разделители.

use std::mem;

use tracing::{debug, trace};

use crate::error::SplitError;
use crate::splitter::Splitter;
use crate::types::{Delimiters, MalformedKind};

const ESCAPE: char = '\\';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    InQuote,
    EscapeOutsideQuote,
    EscapeInsideQuote,
}

/// Готовые поля и поле, которое сейчас накапливается.
#[derive(Default)]
struct Fields {
    done: Vec<String>,
    current: String,
}

impl Fields {
    fn push(&mut self, c: char) {
        self.current.push(c);
    }

    /// Пустые поля никогда не попадают в результат.
    fn emit(&mut self) {
        if self.current.is_empty() {
            return;
        }
        trace!(index = self.done.len(), field = %self.current, "field");
        self.done.push(mem::take(&mut self.current));
    }

    fn finish(mut self) -> Vec<String> {
        self.emit();
        self.done
    }
}

/// Разбиватель с поддержкой одного символа кавычки и экранирования обратным слэшем.
///
/// # Пример
///
/// ```rust
/// use strutil::{QuotedSplitter, Splitter};
///
/// let splitter = QuotedSplitter::new(",", '"');
/// let fields = splitter.split(r#"a,"b,c",d"#).expect("Ошибка разбора");
/// assert_eq!(fields, vec!["a", "b,c", "d"]);
/// ```
#[derive(Debug, Clone)]
pub struct QuotedSplitter {
    delimiters: Delimiters,
    quote: char,
}

impl QuotedSplitter {
    pub fn new(delimiters: impl Into<Delimiters>, quote: char) -> Self {
        QuotedSplitter {
            delimiters: delimiters.into(),
            quote,
        }
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    pub fn quote(&self) -> char {
        self.quote
    }

    fn escapable(&self, c: char) -> bool {
        c == self.quote || c == ESCAPE || self.delimiters.contains(c)
    }

    fn reject(&self, kind: MalformedKind, position: usize) -> SplitError {
        debug!(%kind, position, "rejecting input");
        SplitError::malformed(kind, position)
    }

    fn step(&self, state: State, c: char, fields: &mut Fields) -> Option<State> {
        let next = match state {
            State::Start => {
                if self.delimiters.contains(c) {
                    fields.emit();
                    State::Start
                } else if c == ESCAPE {
                    State::EscapeOutsideQuote
                } else if c == self.quote {
                    State::InQuote
                } else {
                    fields.push(c);
                    State::Start
                }
            }
            State::InQuote => {
                if c == ESCAPE {
                    State::EscapeInsideQuote
                } else if c == self.quote {
                    State::Start
                } else {
                    fields.push(c);
                    State::InQuote
                }
            }
            State::EscapeOutsideQuote | State::EscapeInsideQuote => {
                if !self.escapable(c) {
                    return None;
                }
                fields.push(c);
                if state == State::EscapeOutsideQuote {
                    State::Start
                } else {
                    State::InQuote
                }
            }
        };
        Some(next)
    }
}

impl Splitter for QuotedSplitter {
    fn split(&self, input: &str) -> Result<Vec<String>, SplitError> {
        let mut state = State::Start;
        let mut fields = Fields::default();

        for (position, c) in input.char_indices() {
            state = match self.step(state, c, &mut fields) {
                Some(next) => next,
                None => return Err(self.reject(MalformedKind::InvalidEscape(c), position)),
            };
        }

        match state {
            State::Start => Ok(fields.finish()),
            State::InQuote => Err(self.reject(MalformedKind::UnterminatedQuote, input.len())),
            State::EscapeOutsideQuote | State::EscapeInsideQuote => {
                Err(self.reject(MalformedKind::DanglingEscape, input.len()))
            }
        }
    }
}

/// Разбивает `input` по разделителям `delimiters` с учётом кавычки `quote`
/// и экранирования обратным слэшем.
///
/// Пустые поля отбрасываются, поэтому подряд идущие разделители схлопываются.
/// Закрывающая кавычка сама по себе поле не завершает: `"ab"cd` даёт одно
/// поле `abcd`.
///
/// ## Ошибки
///
/// Возвращает [`SplitError::Malformed`], если:
/// * строка закончилась внутри кавычек;
/// * строка закончилась сразу после `\`;
/// * после `\` стоит символ, который нельзя экранировать.
///
/// # Пример
///
/// ```rust
/// use strutil::{split_quoted, types::MalformedKind};
///
/// let fields = split_quoted(r#"x "a\"b" y"#, " ", '"').expect("Ошибка разбора");
/// assert_eq!(fields, vec!["x", "a\"b", "y"]);
///
/// let err = split_quoted(r#""abc"#, ",", '"').unwrap_err();
/// assert_eq!(err.kind(), MalformedKind::UnterminatedQuote);
/// assert_eq!(err.position(), 4);
/// ```
pub fn split_quoted(
    input: &str,
    delimiters: impl Into<Delimiters>,
    quote: char,
) -> Result<Vec<String>, SplitError> {
    QuotedSplitter::new(delimiters, quote).split(input)
}
