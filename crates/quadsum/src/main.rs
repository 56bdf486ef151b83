use std::process::ExitCode;

use clap::Parser;
use cli::app::App;

mod cli;
mod logging;
mod output;

fn main() -> anyhow::Result<ExitCode> {
    let app = App::parse();
    logging::init(app.verbose)?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let summary = cli::run::run(&app, &mut stdout.lock(), &mut stderr.lock())?;

    if app.strict && summary.failed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
