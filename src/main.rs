use std::process::ExitCode;

use cmdgraph::ui::output;

fn main() -> ExitCode {
    match cmdgraph::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
