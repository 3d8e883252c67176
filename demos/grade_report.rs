//! Grade Report Example
//!
//! Analyzes a CSV file (or a set of built-in samples when no file is given),
//! prints the decoded rows and, for grade sheets, the computed CAL/RED
//! columns.
//!
//! Run with: cargo run --example grade-report -- [FILE] [--config CONFIG.json] [--save OUT.csv]

use gradecsv::{analyze, Analysis, Config, CsvWriter, SheetError};
use std::process::ExitCode;

const GRADE_SHEET: &str = "\
,,PA,Q1,Q2,PA,PA,LAB,EXA,PA,CAL,RED
1,ANAYA CERVANTES DAVID FELIPE,0,2,0,0,10,0,7.0,0,,
2,APARICIO VIVAR SAUL ELISEO,10,3,5.3,10,10,10,7.24,10,,
3,ARIAS FLORES RAFAEL,10,6,4.6,10,10,10,6.75,10,,
4,ARIAS HERNÁNDEZ MARIO DE JESÚS,0,0,4,10,10,10,7.0,10,,
5,ARMENTA FUENTES LOBSANG LEONARDO,10,3,3,10,10,10,7.0,10,,";

const SAMPLES: &[(&str, &str)] = &[
    ("Grade sheet", GRADE_SHEET),
    (
        "Simple CSV",
        "nombre,edad,estado\nCristian Echevarria,24,Nayarit\nOscar Teran,28,",
    ),
    ("Empty file", ""),
    ("Whitespace only", "   \n        \n        "),
    (
        "Badly escaped quotes",
        "nombre,comentario\nCristian,\"Dijo: \"hola\" y se fue\"\nOscar,Normal",
    ),
    (
        "HTML",
        "<!DOCTYPE html>\n<html>\n<head><title>Test</title></head>\n<body>\n</body>\n</html>",
    ),
    (
        "Special characters",
        "nombre,edad\nCristian@#$%,24\nOscar,27",
    ),
    (
        "Python structure",
        "data = {\n    'nombre': 'Cristian',\n    'edad': 24,\n    'estado': 'Nayarit'\n}",
    ),
];

struct Options {
    file: Option<String>,
    config: Option<String>,
    save: Option<String>,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        file: None,
        config: None,
        save: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                options.config = Some(args.next().ok_or("--config needs a path")?);
            }
            "--save" => {
                options.save = Some(args.next().ok_or("--save needs a path")?);
            }
            _ if options.file.is_none() => options.file = Some(arg),
            _ => return Err(format!("unexpected argument `{}`", arg)),
        }
    }

    Ok(options)
}

fn print_analysis(analysis: &Analysis) {
    let summary = &analysis.summary;
    println!("Total rows: {}", summary.total_rows);
    println!("Total columns: {}", summary.total_columns);
    println!("Total fields: {}", summary.total_fields);
    println!("Empty fields: {}", summary.empty_fields);

    let document = &analysis.document;
    println!("\n--- DATA ---");
    println!("Row 1 (header): {:?}", document.header());
    for (i, row) in document.rows().iter().enumerate() {
        println!("Row {}: {:?}", i + 2, row);
    }

    for warning in document.warnings() {
        println!("Warning: {}", warning);
    }
}

fn run(input: &str, config: &Config, save: Option<&str>) -> Result<(), SheetError> {
    let analysis = analyze(input, config)?;
    print_analysis(&analysis);

    println!("\n--- GRADES ---");
    let report = match analysis.grades(&config.grades) {
        Ok(report) => report,
        Err(SheetError::MissingColumns(e)) => {
            println!("Skipped: {}", e);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    for (i, (row, grade)) in report.rows.iter().zip(&report.grades).enumerate() {
        println!(
            "Row {}: CAL {:.2} RED {:.1} {:?}",
            i + 2,
            grade.grade,
            grade.rounded,
            row
        );
    }

    if let Some(path) = save {
        report.save(path, &CsvWriter::new())?;
        println!("Saved {}", path);
    }

    Ok(())
}

fn report_error(input: &str, error: &SheetError) {
    match error {
        SheetError::InvalidStructure { .. } => println!("Invalid format: {}", error),
        _ => println!("{}", error.format_with_source(input)),
    }
}

fn main() -> ExitCode {
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let config = match options.config.as_deref().map(Config::from_json_file) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
        None => Config::default(),
    };

    match options.file {
        Some(path) => {
            let input = match std::fs::read_to_string(&path) {
                Ok(input) => input,
                Err(e) => {
                    eprintln!("Cannot read '{}': {}", path, e);
                    return ExitCode::FAILURE;
                }
            };

            println!("=== {} ===\n", path);
            if let Err(e) = run(&input, &config, options.save.as_deref()) {
                report_error(&input, &e);
                return ExitCode::FAILURE;
            }
        }
        None => {
            for (name, input) in SAMPLES {
                println!("\n=== {} ===\n", name);
                if let Err(e) = run(input, &config, None) {
                    report_error(input, &e);
                }
            }
        }
    }

    ExitCode::SUCCESS
}
