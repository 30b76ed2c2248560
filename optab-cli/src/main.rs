use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "optab",
    about = "Convert an opcode description JSON file into an 8'h constant listing"
)]
struct Cli {
    /// Opcode description file
    #[arg(short, long, default_value = optab::DEFAULT_INPUT)]
    input: PathBuf,
    /// Listing file to create (truncated if it exists)
    #[arg(short, long, default_value = optab::DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Do not echo the listing to stdout
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = if cli.quiet {
        optab::convert(&cli.input, &cli.output, None::<&mut io::Stdout>)
    } else {
        optab::convert(&cli.input, &cli.output, Some(&mut io::stdout().lock()))
    };

    match result {
        Ok(count) => log::debug!("Converted {count} opcodes"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
