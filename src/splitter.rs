//! Модуль верхнего уровня для разбиения и склейки строк.
//!
//! Предоставляет единый интерфейс для обоих способов разбиения через трейт
//! [`Splitter`] и функцию [`split_with`].

use crate::error::SplitError;
use crate::quoted::QuotedSplitter;
use crate::types::{Delimiters, SplitMode};
use crate::utils::wrap_with_quotes;

/// Трейт, который реализуют все способы разбиения строки на поля.
pub trait Splitter {
    /// Разбивает строку на непустые поля.
    fn split(&self, input: &str) -> Result<Vec<String>, SplitError>;
}

/// Разбиение только по разделителям, без кавычек и экранирования.
#[derive(Debug, Clone)]
pub struct PlainSplitter {
    delimiters: Delimiters,
}

impl PlainSplitter {
    pub fn new(delimiters: impl Into<Delimiters>) -> Self {
        PlainSplitter {
            delimiters: delimiters.into(),
        }
    }

    fn fields(&self, input: &str) -> Vec<String> {
        input
            .split(|c: char| self.delimiters.contains(c))
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Splitter for PlainSplitter {
    fn split(&self, input: &str) -> Result<Vec<String>, SplitError> {
        Ok(self.fields(input))
    }
}

/// Разбивает строку по любому из символов `delimiters`.
///
/// Пустые поля отбрасываются, как и в [`crate::split_quoted`].
///
/// # Пример
///
/// ```rust
/// use strutil::split;
///
/// assert_eq!(split(",a,,b,", ","), vec!["a", "b"]);
/// assert_eq!(split("a b\tc", " \t"), vec!["a", "b", "c"]);
/// ```
pub fn split(input: &str, delimiters: impl Into<Delimiters>) -> Vec<String> {
    PlainSplitter::new(delimiters).fields(input)
}

/// Разбивает строку способом, заданным `mode`.
///
/// ## Аргументы
///
/// * `input` - Исходная строка.
/// * `delimiters` - Набор символов-разделителей.
/// * `mode` - Способ разбиения ([`SplitMode`]).
///
/// # Пример
///
/// ```rust
/// use strutil::{split_with, types::SplitMode};
///
/// let line = r#"a,"b,c""#;
/// let plain = split_with(line, ",", SplitMode::Plain).expect("Ошибка разбора");
/// assert_eq!(plain, vec!["a", "\"b", "c\""]);
///
/// let quoted = split_with(line, ",", SplitMode::Quoted { quote: '"' }).expect("Ошибка разбора");
/// assert_eq!(quoted, vec!["a", "b,c"]);
/// ```
pub fn split_with(
    input: &str,
    delimiters: impl Into<Delimiters>,
    mode: SplitMode,
) -> Result<Vec<String>, SplitError> {
    splitter_for(delimiters, mode).split(input)
}

/// Создаёт разбиватель для заданного режима.
pub fn splitter_for(delimiters: impl Into<Delimiters>, mode: SplitMode) -> Box<dyn Splitter> {
    match mode {
        SplitMode::Plain => Box::new(PlainSplitter::new(delimiters)),
        SplitMode::Quoted { quote } => Box::new(QuotedSplitter::new(delimiters, quote)),
    }
}

/// Склеивает поля через разделитель `delim`.
///
/// Для пустого набора полей возвращает пустую строку.
///
/// # Пример
///
/// ```rust
/// use strutil::join;
///
/// assert_eq!(join(", ", &["a", "b", "c"]), "a, b, c");
/// assert_eq!(join(",", &[] as &[&str]), "");
/// ```
pub fn join<S: AsRef<str>>(delim: &str, fields: &[S]) -> String {
    let Some((first, rest)) = fields.split_first() else {
        return String::new();
    };

    let len = fields.iter().map(|f| f.as_ref().len()).sum::<usize>() + delim.len() * rest.len();
    let mut joined = String::with_capacity(len);
    joined.push_str(first.as_ref());
    for field in rest {
        joined.push_str(delim);
        joined.push_str(field.as_ref());
    }
    joined
}

/// Склеивает поля через `delim`, заключая каждое в кавычки `quote`.
///
/// [`crate::split_quoted`] с тем же разделителем и кавычкой вернёт исходные
/// поля, кроме пустых. `quote` не должна совпадать с `delim` или `\`.
///
/// # Пример
///
/// ```rust
/// use strutil::{join_quoted, split_quoted};
///
/// let fields = ["a,b", r#"c"d"#];
/// let line = join_quoted(',', &fields, '"');
/// assert_eq!(line, r#""a,b","c\"d""#);
/// assert_eq!(split_quoted(&line, ",", '"').expect("Ошибка разбора"), fields);
/// ```
pub fn join_quoted<S: AsRef<str>>(delim: char, fields: &[S], quote: char) -> String {
    let wrapped: Vec<String> = fields
        .iter()
        .map(|field| wrap_with_quotes(field.as_ref(), quote))
        .collect();
    join(delim.encode_utf8(&mut [0; 4]), &wrapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quoted::split_quoted;
    use proptest::prelude::*;

    #[test]
    fn test_plain_split() {
        assert_eq!(split("a,b,c", ","), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_plain_split_collapses_delimiters() {
        assert_eq!(split("a,,b", ","), vec!["a", "b"]);
        assert_eq!(split(",a,b,", ","), vec!["a", "b"]);
    }

    #[test]
    fn test_plain_split_empty() {
        assert!(split("", ",").is_empty());
        assert!(split(";;;", ";").is_empty());
    }

    #[test]
    fn test_plain_split_ignores_quotes() {
        assert_eq!(split(r#""a,b""#, ","), vec!["\"a", "b\""]);
    }

    #[test]
    fn test_plain_split_no_delimiters() {
        assert_eq!(split("a,b", ""), vec!["a,b"]);
    }

    #[test]
    fn test_split_with_dispatch() {
        let got = split_with(r"a\,b", ",", SplitMode::Plain).unwrap();
        assert_eq!(got, vec![r"a\", "b"]);

        let got = split_with(r"a\,b", ",", SplitMode::Quoted { quote: '"' }).unwrap();
        assert_eq!(got, vec!["a,b"]);
    }

    #[test]
    fn test_split_with_propagates_error() {
        let got = split_with("\"a", ",", SplitMode::Quoted { quote: '"' });
        assert!(matches!(got, Err(SplitError::Malformed { .. })));
    }

    #[test]
    fn test_join() {
        assert_eq!(join(",", &["a", "b", "c"]), "a,b,c");
        assert_eq!(join("", &["a", "b"]), "ab");
    }

    #[test]
    fn test_join_single() {
        assert_eq!(join(",", &["only"]), "only");
    }

    #[test]
    fn test_join_empty() {
        let fields: Vec<String> = Vec::new();
        assert_eq!(join(",", &fields), "");
    }

    #[test]
    fn test_join_quoted_empty() {
        assert_eq!(join_quoted(',', &[] as &[&str], '"'), "");
    }

    #[test]
    fn test_join_owned_strings() {
        let fields = vec!["x".to_string(), "y".to_string()];
        assert_eq!(join(" | ", &fields), "x | y");
    }

    fn plain_field() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .;:]{1,12}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_quoted_matches_plain_without_quotes(input in "[a-z,;]{0,40}") {
            let plain = split(&input, ",;");
            let quoted = split_quoted(&input, ",;", '"');
            prop_assert_eq!(quoted, Ok(plain));
        }

        #[test]
        fn prop_join_then_split_round_trips(fields in prop::collection::vec(plain_field(), 0..8)) {
            let joined = join(",", &fields);
            prop_assert_eq!(split(&joined, ","), fields.clone());
            prop_assert_eq!(split_quoted(&joined, ",", '"'), Ok(fields));
        }

        #[test]
        fn prop_delimiter_runs_collapse(
            fields in prop::collection::vec("[a-z]{1,5}", 0..6),
            run in 1usize..4,
        ) {
            let delim = ",".repeat(run);
            let joined = format!("{delim}{}{delim}", fields.join(&delim));
            prop_assert_eq!(split_quoted(&joined, ",", '"'), Ok(fields.clone()));
            prop_assert_eq!(split(&joined, ","), fields);
        }

        #[test]
        fn prop_join_quoted_round_trips(fields in prop::collection::vec("[a-z,;\"\\\\ ]{1,8}", 0..8)) {
            let line = join_quoted(',', &fields, '"');
            prop_assert_eq!(split_quoted(&line, ",", '"'), Ok(fields));
        }

        #[test]
        fn prop_split_never_yields_empty_fields(input in "[a-c,\"\\\\]{0,30}") {
            if let Ok(fields) = split_quoted(&input, ",", '"') {
                prop_assert!(fields.iter().all(|f| !f.is_empty()));
            }
            prop_assert!(split(&input, ",").iter().all(|f| !f.is_empty()));
        }
    }
}
