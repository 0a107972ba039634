use caesar_cipher::ReferenceTable;
use clap::Parser;

/// Command-line arguments for the Caesar cracker program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: String,
}


/// Main entry point for the Caesar cracker.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Read the encrypted content from the input file
    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read the input file");
    let content = content.trim_end_matches(['\r', '\n']);

    // Recover the shift by frequency analysis against English statistics
    let result = match caesar_cipher::crack(content, &ReferenceTable::english()) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    println!("Detected cipher key: {}", result.shift);

    // Write the decrypted text to the output file
    std::fs::write(&cli.output, result.plaintext)
        .expect("Failed to write the output file");
}
