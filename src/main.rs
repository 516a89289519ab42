mod checkstyle;
mod output;
mod report;
mod severity;
mod violation;

use log::debug;
use report::ReportSet;
use std::error::Error;
use std::io::{self, IsTerminal, Write};
use std::process;
use structopt::StructOpt;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Condense checkstyle XML reports read from stdin into file:line:column: lines
#[derive(Debug, StructOpt)]
#[structopt(name = "checkstyle-digest")]
struct Opt {
    /// Output severity (default: false)
    #[structopt(short, long)]
    severity: bool,
}

fn run(opt: &Opt) -> Result<usize, Box<dyn Error>> {
    let mut reports = ReportSet::new();
    let stdin = io::stdin();
    checkstyle::read_reports(stdin.lock(), &mut reports)?;
    if reports.is_empty() {
        debug!("nothing to report");
    } else {
        debug!("retained {} violation(s)", reports.len());
    }

    let stdout = io::stdout();
    let n = output::display_violations(&reports, opt.severity, stdout.lock())?;
    Ok(n)
}

fn report_error(e: &dyn Error) -> io::Result<()> {
    let choice = if io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(&mut stderr, "error:")?;
    stderr.reset()?;
    writeln!(&mut stderr, " {}", e)?;
    stderr.flush()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opt = Opt::from_args();
    match run(&opt) {
        Ok(n) => debug!("wrote {} line(s)", n),
        Err(e) => {
            if report_error(&*e).is_err() {
                eprintln!("error: {}", e);
            }
            process::exit(1);
        }
    }
}
