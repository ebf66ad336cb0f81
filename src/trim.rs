//! Обрезка пробельных символов и проверка вхождения подстроки.

const BLANKS: [char; 4] = [' ', '\t', '\n', '\r'];

fn is_blank(c: char) -> bool {
    BLANKS.contains(&c)
}

/// Удаляет пробелы, табуляции, `\n` и `\r` справа.
pub fn rtrim(s: &str) -> &str {
    s.trim_end_matches(is_blank)
}

/// Удаляет пробелы, табуляции, `\n` и `\r` слева.
pub fn ltrim(s: &str) -> &str {
    s.trim_start_matches(is_blank)
}

/// Удаляет пробелы, табуляции, `\n` и `\r` с обеих сторон.
///
/// Другие пробельные символы Unicode не трогает.
///
/// # Пример
///
/// ```rust
/// use strutil::trim;
///
/// assert_eq!(trim(" \t value\r\n"), "value");
/// assert_eq!(trim("\u{a0}x\u{a0}"), "\u{a0}x\u{a0}");
/// ```
pub fn trim(s: &str) -> &str {
    ltrim(rtrim(s))
}

/// То, что можно искать в строке через [`contained`]: подстрока или символ.
pub trait Needle {
    fn is_in(&self, haystack: &str) -> bool;
}

impl Needle for &str {
    fn is_in(&self, haystack: &str) -> bool {
        haystack.contains(*self)
    }
}

impl Needle for String {
    fn is_in(&self, haystack: &str) -> bool {
        haystack.contains(self.as_str())
    }
}

impl Needle for &String {
    fn is_in(&self, haystack: &str) -> bool {
        haystack.contains(self.as_str())
    }
}

impl Needle for char {
    fn is_in(&self, haystack: &str) -> bool {
        haystack.contains(*self)
    }
}

/// Проверяет, входит ли `needle` в `haystack`.
///
/// # Пример
///
/// ```rust
/// use strutil::contained;
///
/// assert!(contained("ell", "hello"));
/// assert!(contained('o', "hello"));
/// assert!(!contained('z', "hello"));
/// ```
pub fn contained(needle: impl Needle, haystack: &str) -> bool {
    needle.is_in(haystack)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtrim() {
        assert_eq!(rtrim("  a b \t\r\n"), "  a b");
        assert_eq!(rtrim("\t\n"), "");
    }

    #[test]
    fn test_ltrim() {
        assert_eq!(ltrim("\r\n\t a b  "), "a b  ");
        assert_eq!(ltrim("   "), "");
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim("  value  "), "value");
        assert_eq!(trim(""), "");
        assert_eq!(trim("no-blanks"), "no-blanks");
    }

    #[test]
    fn test_trim_keeps_other_whitespace() {
        assert_eq!(trim("\u{b}x\u{c}"), "\u{b}x\u{c}");
    }

    #[test]
    fn test_contained_str() {
        assert!(contained("b,c", "a,b,c"));
        assert!(contained("", "abc"));
        assert!(!contained("abcd", "abc"));
    }

    #[test]
    fn test_contained_char() {
        assert!(contained(',', "a,b"));
        assert!(!contained(';', "a,b"));
        assert!(contained('я', "таблица я"));
    }

    #[test]
    fn test_contained_string() {
        let needle = String::from("lo w");
        assert!(contained(&needle, "hello world"));
        assert!(contained(needle, "hello world"));
    }
}
