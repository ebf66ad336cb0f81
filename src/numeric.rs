//! Преобразование строк в числа в духе `strtol`/`strtod`.
//!
//! Читается самый длинный допустимый префикс; успешным преобразование
//! считается только тогда, когда префикс совпал со всей строкой.

use crate::types::Conversion;

/// Пробельные символы, которые пропускаются перед числом (как `isspace` в C).
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(s: &'a str) -> Self {
        Scanner {
            bytes: s.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_space(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.pos += 1;
        }
    }

    /// Returns true for '-'.
    fn sign(&mut self) -> bool {
        match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                true
            }
            Some(b'+') => {
                self.pos += 1;
                false
            }
            _ => false,
        }
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn keyword(&mut self, word: &str) -> bool {
        let end = self.pos + word.len();
        match self.bytes.get(self.pos..end) {
            Some(candidate) if candidate.eq_ignore_ascii_case(word.as_bytes()) => {
                self.pos = end;
                true
            }
            _ => false,
        }
    }

    fn at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }
}

/// Преобразует строку в десятичное целое.
///
/// # Пример
///
/// ```rust
/// use strutil::to_int;
///
/// assert_eq!(to_int("42").into_option(), Some(42));
///
/// let partial = to_int("42x");
/// assert!(!partial.success);
/// assert_eq!(partial.value, 42);
/// ```
pub fn to_int(s: &str) -> Conversion<i32> {
    let mut scanner = Scanner::new(s);
    scanner.skip_space();
    let negative = scanner.sign();
    let start = scanner.pos;
    if scanner.digits() == 0 {
        return Conversion {
            value: 0,
            success: false,
        };
    }

    let mut overflow = false;
    let mut value: i64 = 0;
    for &b in &scanner.bytes[start..scanner.pos] {
        value = value * 10 + i64::from(b - b'0');
        if value > i64::from(i32::MAX) + 1 {
            overflow = true;
            break;
        }
    }
    let value = if negative { -value } else { value };
    let clamped = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    overflow |= clamped != value;

    Conversion {
        value: clamped as i32,
        success: scanner.at_end() && !overflow,
    }
}

/// Преобразует строку в число с плавающей точкой.
///
/// Понимает десятичную запись с дробной частью и экспонентой, а также `inf`,
/// `infinity` и `nan` в любом регистре.
///
/// # Пример
///
/// ```rust
/// use strutil::to_double;
///
/// assert_eq!(to_double("3.14").into_option(), Some(3.14));
/// assert!(!to_double("1.5kg").success);
/// assert!(to_double("-INF").value.is_infinite());
/// ```
pub fn to_double(s: &str) -> Conversion<f64> {
    let mut scanner = Scanner::new(s);
    scanner.skip_space();
    let number_start = scanner.pos;
    let negative = scanner.sign();

    let special = if scanner.keyword("infinity") || scanner.keyword("inf") {
        Some(f64::INFINITY)
    } else if scanner.keyword("nan") {
        skip_nan_payload(&mut scanner);
        Some(f64::NAN)
    } else {
        None
    };

    let value = match special {
        Some(v) if negative => Some(-v),
        Some(v) => Some(v),
        None => decimal(&mut scanner, number_start),
    };

    match value {
        Some(value) => Conversion {
            value,
            success: scanner.at_end(),
        },
        None => Conversion {
            value: 0.0,
            success: false,
        },
    }
}

/// Читает `digits[.digits][e[sign]digits]`; `number_start` указывает на знак.
fn decimal(scanner: &mut Scanner<'_>, number_start: usize) -> Option<f64> {
    let mut digits = scanner.digits();
    if scanner.peek() == Some(b'.') {
        scanner.pos += 1;
        digits += scanner.digits();
    }
    if digits == 0 {
        return None;
    }
    exponent(scanner);

    let text = std::str::from_utf8(&scanner.bytes[number_start..scanner.pos]).ok()?;
    text.parse::<f64>().ok()
}

/// Экспонента читается только целиком: `1e` и `1e+` оставляют `e` непрочитанным.
fn exponent(scanner: &mut Scanner<'_>) {
    if !matches!(scanner.peek(), Some(b'e' | b'E')) {
        return;
    }
    let mark = scanner.pos;
    scanner.pos += 1;
    scanner.sign();
    if scanner.digits() == 0 {
        scanner.pos = mark;
    }
}

/// `nan(chars)`, где chars - буквы, цифры и `_`.
fn skip_nan_payload(scanner: &mut Scanner<'_>) {
    if scanner.peek() != Some(b'(') {
        return;
    }
    let mark = scanner.pos;
    scanner.pos += 1;
    while scanner
        .peek()
        .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
    {
        scanner.pos += 1;
    }
    if scanner.peek() == Some(b')') {
        scanner.pos += 1;
    } else {
        scanner.pos = mark;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_int_valid() {
        assert_eq!(
            to_int("42"),
            Conversion {
                value: 42,
                success: true
            }
        );
        assert_eq!(to_int("-17").into_option(), Some(-17));
        assert_eq!(to_int("+5").into_option(), Some(5));
        assert_eq!(to_int("  \t8").into_option(), Some(8));
    }

    #[test]
    fn test_to_int_trailing_garbage() {
        let got = to_int("42x");
        assert_eq!(got.value, 42);
        assert!(!got.success);
        assert!(!to_int("42 ").success);
        assert!(!to_int("4.2").success);
    }

    #[test]
    fn test_to_int_no_digits() {
        for input in ["", "   ", "-", "+", "abc", "x42"] {
            let got = to_int(input);
            assert_eq!(got.value, 0, "input {:?}", input);
            assert!(!got.success, "input {:?}", input);
        }
    }

    #[test]
    fn test_to_int_limits() {
        assert_eq!(to_int("2147483647").into_option(), Some(i32::MAX));
        assert_eq!(to_int("-2147483648").into_option(), Some(i32::MIN));
    }

    #[test]
    fn test_to_int_overflow_saturates() {
        let got = to_int("2147483648");
        assert_eq!(got.value, i32::MAX);
        assert!(!got.success);

        let got = to_int("-99999999999999999999999");
        assert_eq!(got.value, i32::MIN);
        assert!(!got.success);
    }

    #[test]
    fn test_to_double_valid() {
        assert_eq!(to_double("3.14").into_option(), Some(3.14));
        assert_eq!(to_double("-0.5").into_option(), Some(-0.5));
        assert_eq!(to_double("10").into_option(), Some(10.0));
        assert_eq!(to_double(".5").into_option(), Some(0.5));
        assert_eq!(to_double("5.").into_option(), Some(5.0));
        assert_eq!(to_double(" 1e3").into_option(), Some(1000.0));
        assert_eq!(to_double("2.5E-1").into_option(), Some(0.25));
    }

    #[test]
    fn test_to_double_partial() {
        let got = to_double("1.5kg");
        assert_eq!(got.value, 1.5);
        assert!(!got.success);

        let got = to_double("2e");
        assert_eq!(got.value, 2.0);
        assert!(!got.success);

        let got = to_double("2e+");
        assert_eq!(got.value, 2.0);
        assert!(!got.success);
    }

    #[test]
    fn test_to_double_no_digits() {
        for input in ["", ".", "-.", "e5", "abc"] {
            let got = to_double(input);
            assert_eq!(got.value, 0.0, "input {:?}", input);
            assert!(!got.success, "input {:?}", input);
        }
    }

    #[test]
    fn test_to_double_specials() {
        assert_eq!(to_double("inf").into_option(), Some(f64::INFINITY));
        assert_eq!(to_double("-Infinity").into_option(), Some(f64::NEG_INFINITY));
        assert!(to_double("NaN").value.is_nan());
        assert!(to_double("nan(0x1)").success);
        assert!(!to_double("nan(").success);

        let got = to_double("infinit");
        assert_eq!(got.value, f64::INFINITY);
        assert!(!got.success);
    }

    #[test]
    fn test_to_double_huge_is_infinite() {
        let got = to_double("1e999");
        assert!(got.success);
        assert!(got.value.is_infinite());
    }
}
