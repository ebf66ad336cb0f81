use std::{fmt, io};

use clap::Parser;
use strutil::{
    error,
    types::{Delimiters, SplitMode},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Символы-разделители (каждый символ строки - отдельный разделитель)
    #[arg(long, short, default_value = ",")]
    delimiters: String,

    /// Символ кавычки
    #[arg(long, short, default_value_t = '"')]
    quote: char,

    /// Разбивать только по разделителям, без кавычек и экранирования
    #[arg(long, conflicts_with = "quote")]
    plain: bool,

    /// Обрезать пробелы по краям каждого поля
    #[arg(long)]
    trim: bool,
}

impl Args {
    fn mode(&self) -> SplitMode {
        if self.plain {
            SplitMode::Plain
        } else {
            SplitMode::Quoted { quote: self.quote }
        }
    }
}

#[derive(Debug)]
enum Error {
    Parse(String),
    Usage(String),
    IO(String),
}

impl Error {
    fn code(&self) -> i32 {
        match self {
            Self::Parse(_) => 1,
            Self::Usage(_) => 3,
            Self::IO(_) => 4,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) | Self::Usage(msg) => write!(f, "{}", msg),
            Self::IO(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl From<error::SplitError> for Error {
    fn from(value: error::SplitError) -> Self {
        Error::Parse(format!("ошибка разбора строки: {}", value))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IO(format!("ошибка ввода-вывода: {}", err))
    }
}

fn read_line(reader: &mut impl io::BufRead) -> Result<String, Error> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::Usage("пустой ввод: ожидалась одна строка".to_string()));
    }
    let end = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(end);
    Ok(line)
}

fn print_fields(
    writer: &mut impl io::Write,
    line: &str,
    fields: &[String],
    trim: bool,
) -> io::Result<()> {
    writeln!(writer, "input:[{}]", line)?;
    for (i, field) in fields.iter().enumerate() {
        let field = if trim { strutil::trim(field) } else { field.as_str() };
        writeln!(writer, "{} : {}", i, field)?;
    }
    Ok(())
}

fn run() -> Result<(), Error> {
    let args = Args::parse();
    let delimiters = Delimiters::from(&args.delimiters);
    if delimiters.is_empty() {
        return Err(Error::Usage("нужен хотя бы один разделитель".to_string()));
    }

    let line = read_line(&mut io::stdin().lock())?;
    debug!(line = %line, delimiters = ?delimiters.chars(), mode = ?args.mode(), "splitting");

    let fields = strutil::split_with(&line, &delimiters, args.mode())?;
    print_fields(&mut io::stdout().lock(), &line, &fields, args.trim)?;

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
