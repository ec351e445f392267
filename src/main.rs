// HanulLang: an interpreter for the 한울랭 esoteric language

mod interpreter;
mod memory;
mod parser;

use std::fs;
use std::path::Path;

use interpreter::engine::Interpreter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("hanullang");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <program.hanul> [input-file]", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!(
            "  {} demos/default.hanul     # Run the bundled demo",
            program_name
        );
        eprintln!(
            "  {} myprogram.hanul in.txt  # Feed 키움아래 statements from in.txt",
            program_name
        );
        std::process::exit(1);
    }

    let program_file = &args[1];
    if !Path::new(program_file).exists() {
        eprintln!("Error: File '{}' not found", program_file);
        std::process::exit(1);
    }
    let source = fs::read_to_string(program_file)?;
    // Editors end files with a newline; the language's tail delimiter check
    // looks at the literal last line, so drop one trailing line ending.
    let source = source.strip_suffix('\n').unwrap_or(&source);
    let source = source.strip_suffix('\r').unwrap_or(source);

    let input = match args.get(2) {
        Some(input_file) => {
            if !Path::new(input_file).exists() {
                eprintln!("Error: File '{}' not found", input_file);
                std::process::exit(1);
            }
            fs::read_to_string(input_file)?
        }
        None => String::new(),
    };

    let mut interpreter = Interpreter::new(&input);
    interpreter.compile(source);

    print!("{}", interpreter.output());
    eprint!("{}", interpreter.log());

    Ok(())
}
