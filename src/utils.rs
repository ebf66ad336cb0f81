/// Заключает поле в кавычки `quote`, экранируя внутри кавычку и `\`.
///
/// Результат [`crate::split_quoted`] читает обратно как одно поле `s`
/// (если `s` не пустое).
///
/// # Пример
///
/// ```rust
/// use strutil::wrap_with_quotes;
///
/// assert_eq!(wrap_with_quotes(r#"say "hi""#, '"'), r#""say \"hi\"""#);
/// ```
pub fn wrap_with_quotes(s: &str, quote: char) -> String {
    let mut wrapped = String::with_capacity(s.len() + 2);
    wrapped.push(quote);
    for c in s.chars() {
        if c == quote || c == '\\' {
            wrapped.push('\\');
        }
        wrapped.push(c);
    }
    wrapped.push(quote);
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_plain() {
        assert_eq!(wrap_with_quotes("a,b", '"'), "\"a,b\"");
    }

    #[test]
    fn test_wrap_escapes_quote_and_backslash() {
        assert_eq!(wrap_with_quotes(r"a'b\c", '\''), r"'a\'b\\c'");
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_with_quotes("", '"'), "\"\"");
    }
}
