//! # strutil
//!
//! Небольшой набор утилит для работы со строками.
//!
//! Главное в крейте - разбиение строки на поля с учётом кавычек и
//! экранирования ([`split_quoted`]). Вокруг него:
//! * **Разбиение и склейка**: [`split`], [`split_with`], [`join`], [`join_quoted`]
//! * **Обрезка**: [`trim`], [`ltrim`], [`rtrim`], а также [`contained`]
//! * **Числа**: [`to_int`], [`to_double`], [`format`], [`to_string`]
//!
//! ## Быстрый старт
//!
//! ```rust
//! use strutil::{split_quoted, trim, to_int};
//!
//! let line = r#" 1001, "Initial, funding" ,42 "#;
//! let fields = split_quoted(line, ",", '"').expect("Ошибка разбора");
//! let fields: Vec<&str> = fields.iter().map(|f| trim(f)).collect();
//! assert_eq!(fields, vec!["1001", "Initial, funding", "42"]);
//!
//! assert_eq!(to_int(fields[0]).into_option(), Some(1001));
//! ```
//!
//! ## Обработка ошибок
//! Разбиение с кавычками возвращает [`Result`] с ошибкой [`error::SplitError`],
//! форматирование - с ошибкой [`error::FormatError`]. Преобразование в число
//! не падает: результат несёт флаг успеха ([`types::Conversion`]).

pub mod error;
pub mod types;

mod format;
mod numeric;
mod quoted;
mod splitter;
mod trim;
mod utils;

pub use quoted::{QuotedSplitter, split_quoted};

pub use splitter::{PlainSplitter, Splitter, join, join_quoted, split, split_with, splitter_for};

pub use trim::{Needle, contained, ltrim, rtrim, trim};

pub use numeric::{to_double, to_int};

pub use format::{MAX_WIDTH, PrintfArg, format, to_string};

pub use utils::wrap_with_quotes;
