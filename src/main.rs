use clap::error::ErrorKind;
use clap::Parser;
use hey_report::{Cli, HeyReport, HeyReportError, OutputFormatter, OutputMode};
use std::process;

fn main() {
    let exit_code = run(std::env::args_os());
    process::exit(exit_code);
}

fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => return handle_argument_error(e),
    };

    let app = match HeyReport::from_cli(&cli) {
        Ok(app) => app,
        Err(e) => {
            print_startup_error(&e);
            return e.exit_code();
        }
    };

    match app.process_file(&cli.input) {
        Ok(outcome) => {
            app.output_formatter().print_extraction_summary(&outcome);
            0
        }
        Err(e) => {
            app.handle_error(&e);
            e.exit_code()
        }
    }
}

fn handle_argument_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => match error.print() {
            Ok(()) => 0,
            Err(_) => 1,
        },
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => print_usage(),
        _ => {
            // The usage line on stdout is what callers rely on; clap's detail is extra.
            if let Err(e) = error.print() {
                eprintln!("Failed to print argument error: {}", e);
            }
            print_usage()
        }
    }
}

fn print_usage() -> i32 {
    let usage = HeyReportError::Usage {
        usage: hey_report::cli::USAGE.to_string(),
    };
    println!("{}", usage);
    usage.exit_code()
}

fn print_startup_error(error: &HeyReportError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
