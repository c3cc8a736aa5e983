use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::PathBuf;

use pdf_to_text::{Capabilities, ExtractError, Extraction, TextExtractor, validate_input};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pdf-to-text", version)]
#[command(about = "Extract the text of a PDF file into <name>_text/", long_about = None)]
struct Args {
    /// PDF file to extract text from
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Program used for raw extraction when structured extraction is unavailable
    #[arg(
        long,
        value_name = "PROGRAM",
        env = "PDF_TO_TEXT_STRINGS",
        default_value = pdf_to_text::DEFAULT_RAW_PROGRAM
    )]
    strings: OsString,

    /// Skip structured extraction and only scan the raw bytes
    #[arg(long, env = "PDF_TO_TEXT_RAW_ONLY")]
    raw_only: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    // Any argument error, including a wrong number of files, exits with 1.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    init_logging();

    if let Err(e) = validate_input(&args.file) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let capabilities = if args.raw_only {
        Capabilities::raw_only()
    } else {
        Capabilities::detect()
    };
    let extractor = TextExtractor::builder()
        .capabilities(capabilities)
        .raw_program(args.strings)
        .build();
    let raw_program = extractor.raw_extractor().program().to_string_lossy().into_owned();

    let structured = extractor.capabilities().has_structured();
    if structured {
        println!("Using lopdf to extract text from {}", args.file.display());
    } else {
        println!(
            "Structured extraction not available. Using '{}' to extract text (limited formatting)",
            raw_program
        );
    }

    let extraction = match extractor.run(&args.file) {
        Ok(extraction) => extraction,
        Err(e @ ExtractError::MissingInput(_)) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error extracting text: {}", e);
            eprintln!("Failed to extract text from PDF");
            std::process::exit(1);
        }
    };

    match &extraction {
        Extraction::Structured { pages, .. } => {
            for page in pages {
                println!("{}", page);
            }
        }
        Extraction::Raw { .. } if structured => {
            println!(
                "Could not decode the PDF. Used '{}' to extract text instead (limited formatting)",
                raw_program
            );
        }
        Extraction::Raw { .. } => {}
    }
    println!("{}", extraction);
}
