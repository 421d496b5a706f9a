use clap::Parser;
use kvscan::app;
use kvscan::args::Args;
use kvscan::presentation;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help / --version are reported through the same path.
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    app::init_logging(args.behavior.verbose);

    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            presentation::print_fatal(&e);
            ExitCode::FAILURE
        }
    }
}
