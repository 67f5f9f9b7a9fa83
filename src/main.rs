use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;
use maxlength_prompt::core::config::{self, CliOverrides, NamedFilter, ProcessEnv};
use maxlength_prompt::{Answers, MaxLengthPrompt, PromptError};
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "maxlength-prompt", about = "Ask for a line of text with a character limit")]
struct Args {
    /// Question shown before the input
    #[arg(short, long)]
    message: Option<String>,

    /// Maximum number of characters accepted
    #[arg(short = 'n', long)]
    max_length: Option<usize>,

    /// Text the line is pre-filled with
    #[arg(short, long)]
    default: Option<String>,

    /// Answer key used by --json
    #[arg(long)]
    name: Option<String>,

    /// Filter applied before counting and answering
    #[arg(short, long, value_enum)]
    filter: Option<NamedFilter>,

    /// Reject blank answers
    #[arg(short, long, overrides_with = "no_required")]
    required: bool,

    /// Accept blank answers even if the config file sets `required`
    #[arg(long, overrides_with = "required")]
    no_required: bool,

    /// Print `{"<name>": "<answer>"}` instead of the bare answer
    #[arg(long)]
    json: bool,

    /// Config file (default: ~/.maxlength-prompt/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_parser = parse_level)]
    log_level: Option<LevelFilter>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            name: self.name.clone(),
            message: self.message.clone(),
            max_length: self.max_length,
            default: self.default.clone(),
            filter: self.filter,
            required: match (self.required, self.no_required) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            log_file: self.log_file.clone(),
            log_level: self.log_level,
        }
    }
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(s).map_err(|_| format!("unknown log level {s:?}"))
}

fn init_logging(path: &Path, level: LevelFilter) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(level, log_config, log_file);
        }
        Err(e) => eprintln!("warning: cannot open log file {}: {e}", path.display()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&file_config, &args.overrides(), &ProcessEnv);

    if let Some(path) = &resolved.log_file {
        init_logging(path, resolved.log_level);
    }
    log::info!("maxlength-prompt starting: {:?}", resolved);

    let mut prompt = match MaxLengthPrompt::new(resolved.prompt_options()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut answers = Answers::new();
    match maxlength_prompt::tui::ask(&mut prompt, &mut answers).await {
        Ok(answer) => {
            if args.json {
                println!("{}", serde_json::Value::Object(answers));
            } else {
                println!("{answer}");
            }
            ExitCode::SUCCESS
        }
        Err(PromptError::Interrupted) => {
            eprintln!();
            ExitCode::from(130)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
