mod output;

use clap::Parser;
use command_args_core::{ArgumentList, ArgumentParser, FlagCell, ValueCell};
use tracing_subscriber::EnvFilter;

use crate::output::{DemoReport, OutputFormat, format_report};

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
    Yaml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(fmt: CliOutputFormat) -> Self {
        match fmt {
            CliOutputFormat::Text => Self::Text,
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Yaml => Self::Yaml,
        }
    }
}

/// Demo settings. Read from the environment only, so every command-line
/// token reaches the argument parser untouched.
#[derive(Debug, Parser)]
#[command(name = "args-demo")]
#[command(about = "Run the command-args parser over sample options")]
struct DemoSettings {
    /// Output format.
    #[arg(long, env = "ARGS_DEMO_FORMAT", default_value = "text")]
    format: CliOutputFormat,
    /// Log parser decisions to stderr.
    #[arg(long, env = "ARGS_DEMO_DEBUG")]
    debug: bool,
}

fn main() {
    let settings = DemoSettings::parse_from([env!("CARGO_BIN_NAME")]);
    init_tracing(settings.debug);

    if let Err(err) = run_demo(&settings) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(debug: bool) {
    let default = if debug {
        "command_args_core=debug,args_demo=debug"
    } else {
        "command_args_core=info,args_demo=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo(settings: &DemoSettings) -> Result<(), String> {
    let a_option = FlagCell::new(false);
    let b_option = FlagCell::new(true);
    let c_value = ValueCell::default();
    let arguments = ArgumentList::new();

    let mut parser = ArgumentParser::new();
    parser.set_argument_sink(&arguments);
    parser.add_on_option(Some('a'), Some("a-option"), Some(&a_option));
    parser.add_off_option(Some('b'), Some("b-option"), Some(&b_option));
    parser.register_value(Some('c'), Some("c-option"), Some(&c_value));

    for problem in parser.validate() {
        tracing::warn!(error = %problem, "Suspicious option registration");
    }

    parser.parse_env();
    if parser.has_errors() {
        // A real program would exit with failure here; the demo keeps going.
        tracing::info!(count = parser.errors().len(), "Parse reported errors");
    }

    let report = DemoReport::collect(&a_option, &b_option, &c_value, &arguments, &parser);
    let rendered = format_report(&report, settings.format.into())?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
