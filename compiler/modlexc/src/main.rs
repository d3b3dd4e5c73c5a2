//! modlex CLI
//!
//! Prints the token stream of a module source file.

use modlexc::{init_tracing, run, Options, USAGE};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Options::parse(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(e.exit_code());
        }
    };

    if options.help {
        println!("{USAGE}");
        return;
    }

    let stdout = std::io::stdout();
    if let Err(e) = run(&options, &mut stdout.lock()) {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}
