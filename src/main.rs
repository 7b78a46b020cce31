use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

use anotlisp::{execute, Outcome};

/// Integer calculator over nested prefix expressions, e.g. `(+ 1 (* 2 3))`.
#[derive(Parser, Debug)]
#[command(name = "anotlisp", version, about)]
struct Args {
    /// Evaluate one expression and exit instead of starting the REPL
    #[arg(short, long, value_name = "EXPR")]
    eval: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Print the expression as read before its result
    #[arg(long)]
    show_tree: bool,

    /// Log file; the filter comes from RUST_LOG
    #[arg(long, env = "ANOTLISP_LOG_FILE", default_value = "anotlisp.log")]
    log_file: PathBuf,
}

fn init_tracing(path: &Path) -> WorkerGuard {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file = path.file_name().unwrap_or(OsStr::new("anotlisp.log"));
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_timer(ChronoLocal::rfc_3339())
        .with_ansi(false)
        .with_writer(writer)
        .init();
    guard
}

fn print_outcome(outcome: &Outcome, args: &Args) -> io::Result<()> {
    match (args.json, args.show_tree) {
        (true, true) => println!("{}", serde_json::to_string(outcome).map_err(io::Error::other)?),
        (true, false) => println!("{}", serde_json::to_string(&outcome.result).map_err(io::Error::other)?),
        (false, true) => {
            println!("{}", outcome.expression);
            println!("{}", outcome);
        }
        (false, false) => println!("{}", outcome),
    }
    Ok(())
}

/// Returns false when the line did not reduce to a number.
fn run_line(line: &str, args: &Args) -> io::Result<bool> {
    match execute(line) {
        Ok(outcome) => {
            print_outcome(&outcome, args)?;
            Ok(!outcome.is_error())
        }
        Err(e) => {
            warn!("run_line / {:?}: {}", line, e);
            println!("error: {}", e);
            Ok(false)
        }
    }
}

fn repl(args: &Args) -> io::Result<()> {
    println!("Anotlisp version {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+C to Exit\n");

    let mut line_editor = Reedline::create();
    let prompt = DefaultPrompt::new(DefaultPromptSegment::Basic("Anotlisp".to_string()), DefaultPromptSegment::Empty);

    loop {
        match line_editor.read_line(&prompt)? {
            Signal::Success(buffer) => {
                if buffer.trim().is_empty() {
                    continue;
                }
                run_line(&buffer, args)?;
            }
            Signal::CtrlC | Signal::CtrlD => {
                info!("repl / exit");
                return Ok(());
            }
        }
    }
}

fn main() -> io::Result<ExitCode> {
    let args = Args::parse();
    let _guard = init_tracing(&args.log_file);

    match args.eval {
        Some(ref expr) => {
            let ok = run_line(expr, &args)?;
            Ok(if ok { ExitCode::SUCCESS } else { ExitCode::from(1) })
        }
        None => {
            repl(&args)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
