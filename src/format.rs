//! Форматирование чисел по шаблону в стиле `printf`.
//!
//! Шаблон содержит обычный текст, экранирование `%%` и ровно одну
//! подстановку вида `%[флаги][ширина][.точность]тип`.

use tracing::debug;

use crate::error::FormatError;

/// Число, которое можно подставить в шаблон.
pub trait PrintfArg: Copy {
    /// Тип подстановки, который использует [`to_string`].
    const DEFAULT_CONVERSION: char;

    fn as_signed(self) -> i64;
    fn as_unsigned(self) -> u64;
    fn as_float(self) -> f64;
}

impl PrintfArg for i32 {
    const DEFAULT_CONVERSION: char = 'd';

    fn as_signed(self) -> i64 {
        i64::from(self)
    }

    // %u/%x/%o видят 32-битное беззнаковое, как в C.
    fn as_unsigned(self) -> u64 {
        u64::from(self as u32)
    }

    fn as_float(self) -> f64 {
        f64::from(self)
    }
}

impl PrintfArg for i64 {
    const DEFAULT_CONVERSION: char = 'd';

    fn as_signed(self) -> i64 {
        self
    }

    fn as_unsigned(self) -> u64 {
        self as u64
    }

    fn as_float(self) -> f64 {
        self as f64
    }
}

impl PrintfArg for f64 {
    const DEFAULT_CONVERSION: char = 'f';

    // Дробная часть отбрасывается; NaN даёт 0, бесконечности насыщаются.
    fn as_signed(self) -> i64 {
        self as i64
    }

    fn as_unsigned(self) -> u64 {
        self as i64 as u64
    }

    fn as_float(self) -> f64 {
        self
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Flags {
    left_align: bool,
    plus_sign: bool,
    space_sign: bool,
    zero_pad: bool,
    alternate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Spec {
    flags: Flags,
    width: usize,
    precision: Option<usize>,
    conversion: char,
}

impl Spec {
    fn bare(conversion: char) -> Self {
        Spec {
            flags: Flags::default(),
            width: 0,
            precision: None,
            conversion,
        }
    }
}

#[derive(Debug, PartialEq)]
enum Piece {
    Literal(String),
    Conversion(Spec),
}

const CONVERSIONS: &str = "diuxXofFeEgG";
const LENGTH_MODIFIERS: &str = "hlLqjzt";

/// Наибольшие допустимые ширина и точность.
pub const MAX_WIDTH: usize = 4096;

fn parse_template(fmt: &str) -> Result<Vec<Piece>, FormatError> {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut seen_conversion = false;
    let mut chars = fmt.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }
        if chars.next_if(|&(_, c)| c == '%').is_some() {
            literal.push('%');
            continue;
        }
        if seen_conversion {
            return Err(FormatError::ExtraConversion(position));
        }
        seen_conversion = true;

        let mut flags = Flags::default();
        while let Some((_, c)) = chars.next_if(|&(_, c)| "-+ 0#".contains(c)) {
            match c {
                '-' => flags.left_align = true,
                '+' => flags.plus_sign = true,
                ' ' => flags.space_sign = true,
                '0' => flags.zero_pad = true,
                _ => flags.alternate = true,
            }
        }

        let width = read_number(&mut chars)?.unwrap_or(0);
        let precision = match chars.next_if(|&(_, c)| c == '.') {
            Some(_) => Some(read_number(&mut chars)?.unwrap_or(0)),
            None => None,
        };
        while chars.next_if(|&(_, c)| LENGTH_MODIFIERS.contains(c)).is_some() {}

        let Some((_, conversion)) = chars.next() else {
            return Err(FormatError::Incomplete);
        };
        if !CONVERSIONS.contains(conversion) {
            return Err(FormatError::UnknownConversion(conversion));
        }

        if !literal.is_empty() {
            pieces.push(Piece::Literal(std::mem::take(&mut literal)));
        }
        pieces.push(Piece::Conversion(Spec {
            flags,
            width,
            precision,
            conversion,
        }));
    }

    if !seen_conversion {
        return Err(FormatError::MissingConversion);
    }
    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }
    Ok(pieces)
}

fn read_number<I>(chars: &mut std::iter::Peekable<I>) -> Result<Option<usize>, FormatError>
where
    I: Iterator<Item = (usize, char)>,
{
    let mut value: Option<usize> = None;
    while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
        let digit = c as usize - '0' as usize;
        let next = value.unwrap_or(0) * 10 + digit;
        if next > MAX_WIDTH {
            return Err(FormatError::OutOfRange(MAX_WIDTH));
        }
        value = Some(next);
    }
    Ok(value)
}

/// Форматирует `value` по шаблону `fmt` в стиле `printf`.
///
/// Целое, подставленное в `%f`/`%e`/`%g`, приводится к `f64`; дробное,
/// подставленное в `%d`/`%x`/..., усекается к нулю.
///
/// ## Ошибки
///
/// Возвращает [`FormatError`], если в шаблоне нет подстановки, их больше
/// одной, тип подстановки неизвестен или шаблон оборван посреди подстановки.
/// Ширина или точность больше [`MAX_WIDTH`] дают [`FormatError::OutOfRange`].
///
/// # Пример
///
/// ```rust
/// use strutil::format;
///
/// assert_eq!(format("%.2f", 3.14159).expect("Ошибка шаблона"), "3.14");
/// assert_eq!(format("[%05d]", 42).expect("Ошибка шаблона"), "[00042]");
/// assert_eq!(format("%#x", 255).expect("Ошибка шаблона"), "0xff");
/// assert!(format("100%", 1).is_err());
/// ```
pub fn format<V: PrintfArg>(fmt: &str, value: V) -> Result<String, FormatError> {
    let pieces = parse_template(fmt)
        .inspect_err(|err| debug!(template = fmt, %err, "rejecting format"))?;

    let mut out = String::with_capacity(fmt.len() + 16);
    for piece in &pieces {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Conversion(spec) => out.push_str(&render(spec, value)),
        }
    }
    Ok(out)
}

/// Переводит число в строку: `%d` для целых, `%f` для дробных.
///
/// # Пример
///
/// ```rust
/// use strutil::to_string;
///
/// assert_eq!(to_string(7), "7");
/// assert_eq!(to_string(1.5), "1.500000");
/// ```
pub fn to_string<V: PrintfArg>(value: V) -> String {
    render(&Spec::bare(V::DEFAULT_CONVERSION), value)
}

fn render<V: PrintfArg>(spec: &Spec, value: V) -> String {
    match spec.conversion {
        'd' | 'i' => {
            let v = value.as_signed();
            let sign = sign_of(v < 0, &spec.flags);
            let digits = int_digits(v.unsigned_abs().to_string(), spec.precision);
            pad(sign, "", &digits, spec, spec.precision.is_none())
        }
        'u' => {
            let digits = int_digits(value.as_unsigned().to_string(), spec.precision);
            pad("", "", &digits, spec, spec.precision.is_none())
        }
        'o' => {
            let mut digits = int_digits(format!("{:o}", value.as_unsigned()), spec.precision);
            if spec.flags.alternate && !digits.starts_with('0') {
                digits.insert(0, '0');
            }
            pad("", "", &digits, spec, spec.precision.is_none())
        }
        'x' | 'X' => {
            let v = value.as_unsigned();
            let upper = spec.conversion == 'X';
            let digits = if upper { format!("{:X}", v) } else { format!("{:x}", v) };
            let digits = int_digits(digits, spec.precision);
            let prefix = match (spec.flags.alternate && v != 0, upper) {
                (false, _) => "",
                (true, false) => "0x",
                (true, true) => "0X",
            };
            pad("", prefix, &digits, spec, spec.precision.is_none())
        }
        _ => render_float(spec, value.as_float()),
    }
}

fn render_float(spec: &Spec, v: f64) -> String {
    let upper = spec.conversion.is_ascii_uppercase();
    let negative = v.is_sign_negative() && !v.is_nan();
    let sign = sign_of(negative, &spec.flags);

    if !v.is_finite() {
        let body = match (v.is_nan(), upper) {
            (true, false) => "nan",
            (true, true) => "NAN",
            (false, false) => "inf",
            (false, true) => "INF",
        };
        return pad(sign, "", body, spec, false);
    }

    let abs = v.abs();
    let precision = spec.precision.unwrap_or(6);
    let alternate = spec.flags.alternate;
    let mut body = match spec.conversion {
        'f' | 'F' => format!("{:.*}", precision, abs),
        'e' | 'E' => scientific(abs, precision),
        _ => general(abs, precision, alternate),
    };
    if alternate && !body.contains('.') {
        let at = body.find('e').unwrap_or(body.len());
        body.insert(at, '.');
    }
    if upper {
        body = body.to_ascii_uppercase();
    }
    pad(sign, "", &body, spec, true)
}

/// `d.ddde±XX`: экспонента со знаком и минимум двумя цифрами.
fn scientific(abs: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, abs);
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let exp_sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, exp_sign, exp.unsigned_abs())
}

/// `%g`: выбор между `%e` и `%f` по десятичному порядку числа.
fn general(abs: f64, precision: usize, keep_zeros: bool) -> String {
    let precision = precision.max(1);
    let exp = if abs == 0.0 {
        0
    } else {
        let raw = format!("{:.*e}", precision - 1, abs);
        raw.split_once('e')
            .and_then(|(_, e)| e.parse::<i64>().ok())
            .unwrap_or(0)
    };

    let body = if exp < -4 || exp >= precision as i64 {
        scientific(abs, precision - 1)
    } else {
        let decimals = (precision as i64 - 1 - exp).max(0) as usize;
        format!("{:.*}", decimals, abs)
    };

    if keep_zeros {
        body
    } else {
        trim_fraction_zeros(&body)
    }
}

fn trim_fraction_zeros(s: &str) -> String {
    let (mantissa, exponent) = match s.find('e') {
        Some(at) => s.split_at(at),
        None => (s, ""),
    };
    if !mantissa.contains('.') {
        return s.to_string();
    }
    let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", mantissa, exponent)
}

fn sign_of(negative: bool, flags: &Flags) -> &'static str {
    if negative {
        "-"
    } else if flags.plus_sign {
        "+"
    } else if flags.space_sign {
        " "
    } else {
        ""
    }
}

/// Для целых точность задаёт минимальное число цифр; `%.0d` для нуля пуст.
fn int_digits(digits: String, precision: Option<usize>) -> String {
    match precision {
        Some(0) if digits == "0" => String::new(),
        Some(p) if digits.len() < p => format!("{}{}", "0".repeat(p - digits.len()), digits),
        _ => digits,
    }
}

fn pad(sign: &str, prefix: &str, body: &str, spec: &Spec, zero_allowed: bool) -> String {
    let len = sign.len() + prefix.len() + body.len();
    if len >= spec.width {
        return format!("{}{}{}", sign, prefix, body);
    }
    let fill = spec.width - len;
    if spec.flags.left_align {
        format!("{}{}{}{}", sign, prefix, body, " ".repeat(fill))
    } else if spec.flags.zero_pad && zero_allowed {
        format!("{}{}{}{}", sign, prefix, "0".repeat(fill), body)
    } else {
        format!("{}{}{}{}", " ".repeat(fill), sign, prefix, body)
    }
}
