//! Reformat an XML document in the canonical indented layout.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use xmlfactory::{Error, XmlData};

const EXIT_PARSE_ERROR: u8 = 1;
const EXIT_IO_ERROR: u8 = 2;

/// xmlpretty -- pretty print an XML document.
#[derive(Parser, Debug)]
#[command(name = "xmlpretty", version, about, long_about = None)]
struct Cli {
    /// Input file (use `-` or leave out for stdin).
    input: Option<PathBuf>,

    /// Output file; stdout if left out. An existing file is overwritten.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Start the output with an XML declaration.
    #[arg(long)]
    xml_header: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("xmlpretty: {e}");
            match e {
                Error::Io(_) => ExitCode::from(EXIT_IO_ERROR),
                _ => ExitCode::from(EXIT_PARSE_ERROR),
            }
        }
    }
}

fn open_input(input: Option<&PathBuf>) -> Result<Box<dyn Read>, Error> {
    Ok(match input {
        Some(path) if path.as_os_str() != "-" => Box::new(BufReader::new(File::open(path)?)),
        _ => Box::new(io::stdin().lock()),
    })
}

fn open_output(output: Option<&PathBuf>) -> Result<Box<dyn Write>, Error> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}

fn run(cli: &Cli) -> Result<(), Error> {
    let input = open_input(cli.input.as_ref())?;
    let mut data = XmlData::new();
    let root = data.parse_reader(input)?;
    let mut w = open_output(cli.output.as_ref())?;
    data.write_document(root, &mut w, cli.xml_header)?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}
