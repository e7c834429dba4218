use std::fs::File;
use std::io;
use std::process::ExitCode;
use std::{env, io::BufReader};

use tracing_subscriber::EnvFilter;

use retorno::bank::Bank;
use retorno::processor::process_csv_stream;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args: Vec<String> = env::args().collect();
    let program = args.remove(0);

    let strict = args.first().is_some_and(|arg| arg == "--strict");
    if strict {
        args.remove(0);
    }

    let [bank_code, filename] = args.as_slice() else {
        eprintln!("Usage: {} [--strict] <bank-code> fields.csv", program);
        return ExitCode::FAILURE;
    };

    let Ok(bank_code) = bank_code.parse::<u16>() else {
        eprintln!("Invalid bank code: {}", bank_code);
        return ExitCode::FAILURE;
    };
    let bank = Bank::from_code(bank_code);

    let file = match File::open(filename) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open {}: {}", filename, e);
            return ExitCode::FAILURE;
        }
    };

    match process_csv_stream(bank, BufReader::new(file), io::stdout().lock(), strict) {
        Ok(count) => {
            tracing::info!("Decoded {} detail records for bank {}", count, bank);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error processing {}: {}", filename, e);
            ExitCode::FAILURE
        }
    }
}
