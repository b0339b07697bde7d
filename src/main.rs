use clap::Parser;
use pdfsplit::cli::Cli;
use pdfsplit::split;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Usage errors exit 1; --help and --version exit 0.
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match split::run(&cli.input, cli.pages_per_file, cli.output_dir.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("[ERROR] {err:#}");
            ExitCode::FAILURE
        }
    }
}
