use clap::Parser;

mod commands;
mod output;

use commands::update::{self, UpdateArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "manifest-uuid")]
#[command(version = VERSION)]
#[command(about = "Regenerate the UUID identifier fields of a JSON manifest")]
struct Cli {
    #[command(flatten)]
    update: UpdateArgs,
}

fn main() {
    let cli = Cli::parse();

    let code = match update::run(&cli.update) {
        Ok(code) => code,
        Err(err) => {
            if !cli.update.quiet {
                eprintln!("{err}");
            }
            output::exit_code_for_error(&err)
        }
    };
    std::process::exit(code);
}
