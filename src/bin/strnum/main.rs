use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{Parser, Subcommand};
use strutil::{error, types::Conversion};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Преобразовать значения в целые
    Int {
        /// Значения; если не заданы, читаются строки из stdin
        values: Vec<String>,
    },
    /// Преобразовать значения в числа с плавающей точкой
    Double {
        /// Значения; если не заданы, читаются строки из stdin
        values: Vec<String>,
    },
    /// Отформатировать значения по шаблону printf
    Format {
        /// Шаблон с одной подстановкой, например "%8.3f"
        #[arg(long, short)]
        spec: String,

        /// Читать значения как целые, а не дробные
        #[arg(long)]
        int: bool,

        /// Значения; если не заданы, читаются строки из stdin
        values: Vec<String>,
    },
}

#[derive(Debug)]
enum Error {
    Parse(String),
    Format(String),
    IO(String),
}

impl Error {
    fn code(&self) -> i32 {
        match self {
            Self::Parse(_) => 1,
            Self::Format(_) => 2,
            Self::IO(_) => 4,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) | Self::Format(msg) => write!(f, "{}", msg),
            Self::IO(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl From<error::FormatError> for Error {
    fn from(value: error::FormatError) -> Self {
        Error::Format(format!("неверный шаблон: {}", value))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IO(format!("ошибка ввода-вывода: {}", err))
    }
}

fn collect_values(values: Vec<String>) -> Result<Vec<String>, Error> {
    if !values.is_empty() {
        return Ok(values);
    }
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = strutil::trim(&line);
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

fn describe<T: fmt::Display>(input: &str, conversion: Conversion<T>) -> String {
    let status = if conversion.is_ok() { "ok" } else { "partial" };
    format!("{} -> {} ({})", input, conversion.value, status)
}

fn format_value(spec: &str, input: &str, as_int: bool) -> Result<String, Error> {
    let formatted = if as_int {
        let conversion = strutil::to_int(input);
        check_full(input, conversion.success)?;
        strutil::format(spec, conversion.value)?
    } else {
        let conversion = strutil::to_double(input);
        check_full(input, conversion.success)?;
        strutil::format(spec, conversion.value)?
    };
    Ok(formatted)
}

fn check_full(input: &str, success: bool) -> Result<(), Error> {
    if success {
        return Ok(());
    }
    Err(Error::Parse(format!("не число: {:?}", input)))
}

fn run() -> Result<(), Error> {
    let args = Args::parse();
    let mut out = io::stdout().lock();

    match args.command {
        Command::Int { values } => {
            for value in collect_values(values)? {
                writeln!(out, "{}", describe(&value, strutil::to_int(&value)))?;
            }
        }
        Command::Double { values } => {
            for value in collect_values(values)? {
                writeln!(out, "{}", describe(&value, strutil::to_double(&value)))?;
            }
        }
        Command::Format { spec, int, values } => {
            debug!(spec = %spec, int, "formatting");
            for value in collect_values(values)? {
                writeln!(out, "{}", format_value(&spec, &value, int)?)?;
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(describe("42", strutil::to_int("42")), "42 -> 42 (ok)");
        assert_eq!(describe("42x", strutil::to_int("42x")), "42x -> 42 (partial)");
        assert_eq!(describe("2.5", strutil::to_double("2.5")), "2.5 -> 2.5 (ok)");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value("%6.2f", "3.14159", false).unwrap(), "  3.14");
        assert_eq!(format_value("%04d", "7", true).unwrap(), "0007");
    }

    #[test]
    fn test_format_value_rejects_partial_number() {
        let err = format_value("%d", "7up", true).unwrap_err();
        assert_eq!(err.code(), 1);
    }

    #[test]
    fn test_format_value_rejects_bad_template() {
        let err = format_value("%q", "1", true).unwrap_err();
        assert_eq!(err.code(), 2);
    }

    #[test]
    fn test_format_value_rejects_oversized_template() {
        let err = format_value("%.70000f", "1", false).unwrap_err();
        assert_eq!(err.code(), 2);
        let err = format_value("%99999999999999999999d", "1", true).unwrap_err();
        assert_eq!(err.code(), 2);
    }
}
