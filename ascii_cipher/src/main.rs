use clap::{Parser, ValueEnum};


// Defining the command-line arguments.
#[derive(Parser, Debug)]
struct Cli {
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    #[arg(short, long, help = "Key for the cipher (shift, any sign)")]
    key: i32,

    #[arg(short, long, help = "Path to the output file")]
    output: Option<String>,

    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: Option<OperationMode>,
}

#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    Encrypt,
    Decrypt,
}

fn main() {
    let cli: Cli = Cli::parse();

    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read the input file");
    // Line endings are control characters and the cipher rejects them.
    let content = content.trim_end_matches(['\r', '\n']);

    let result = match cli.mode.unwrap_or(OperationMode::Encrypt) {
        OperationMode::Encrypt => caesar_cipher::encrypt(content, cli.key),
        OperationMode::Decrypt => caesar_cipher::decrypt(content, cli.key),
    };

    let transformed = match result {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    match cli.output {
        Some(path) => std::fs::write(&path, transformed)
            .expect("Failed to write the output file"),
        None => println!("{}", transformed),
    }
}
