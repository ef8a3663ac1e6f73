use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use stashkit::text::{file_size, format_file_size, resolution, seconds_to_timestamp, timestamp_to_seconds};
use stashkit::{
    ConfigError, FileObject, Fingerprint, Gallery, HashError, MatchConfig, RemoteScene, StashId, duration_status,
    gallery_path, gallery_title, match_phashes, merge_stash_ids, object_path, object_title, stashbox, try_distance,
};
use tracing::Level;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {source_name}: {error}")]
    Read { source_name: String, error: io::Error },
    #[error("failed to parse {source_name}: {error}")]
    Parse { source_name: String, error: serde_json::Error },
    #[error("hashes are incomparable: {0}")]
    Incomparable(#[from] HashError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),
    #[error("no stash-box base URL in {0:?}")]
    NoStashboxBase(String),
    #[error("only one input may be read from stdin")]
    StdinTwice,
    #[error("failed to render output: {0}")]
    Output(serde_json::Error),
}

impl CliError {
    /// Input documents that could not be loaded, as opposed to bad arguments or data.
    fn is_load_failure(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } | Self::Parse { .. } => "E_LOAD",
            Self::Incomparable(_) => "E_INCOMPARABLE",
            Self::Config(error) => error.error_code(),
            Self::InvalidTimestamp(_) => "E_INVALID_TIMESTAMP",
            Self::NoStashboxBase(_) => "E_NO_STASHBOX_BASE",
            Self::StdinTwice => "E_STDIN_TWICE",
            Self::Output(_) => "E_OUTPUT",
        }
    }

    fn exit_code(&self) -> u8 {
        if self.is_load_failure() { 2 } else { 1 }
    }
}

#[derive(Parser, Debug)]
#[command(name = "stashkit", about = "Media catalogue fingerprint, identifier and display helpers")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bit distance between two hex perceptual hashes.
    Distance { a: String, b: String },
    /// Match local phashes against a remote scene's fingerprints.
    MatchPhashes(MatchPhashesArgs),
    /// Compare a local duration against a remote scene.
    Duration(DurationArgs),
    /// Merge two stash id lists; entries from --src win per endpoint.
    MergeIds {
        #[arg(long)]
        dest: String,
        #[arg(long)]
        src: String,
    },
    /// Display title and path of a scene, image or gallery.
    Title {
        #[arg(long, value_enum, default_value_t = EntityKind::Object)]
        kind: EntityKind,
        #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
    },
    /// Web base URL of a stash-box GraphQL endpoint.
    StashboxBase { endpoint: String },
    Timestamp { seconds: u64 },
    Seconds { timestamp: String },
    FileSize { bytes: u64 },
    Resolution { width: u32, height: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum EntityKind {
    Object,
    Gallery,
}

#[derive(Args, Debug)]
struct MatchPhashesArgs {
    #[arg(long = "phash", required = true)]
    phashes: Vec<String>,

    #[arg(long, default_value = "-", help = "Remote scene JSON path, or - for stdin")]
    input: String,

    #[arg(long, help = "Override STASHKIT_PHASH_THRESHOLD")]
    threshold: Option<u32>,
}

#[derive(Args, Debug)]
struct DurationArgs {
    #[arg(long)]
    local: f64,

    #[arg(long, default_value = "-", help = "Remote scene JSON path, or - for stdin")]
    input: String,

    #[arg(long, help = "Override STASHKIT_DURATION_TOLERANCE_SECS")]
    tolerance: Option<f64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(code = error.error_code(), load_failure = error.is_load_failure(), "command failed");
            eprintln!("error[{}]: {error}", error.error_code());
            ExitCode::from(error.exit_code())
        }
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt().with_writer(io::stderr).with_max_level(log_level(verbose)).init();
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Distance { a, b } => {
            let bits = try_distance(&a, &b)?;
            println!("{bits}");
            Ok(())
        }
        Command::MatchPhashes(args) => run_match_phashes(args),
        Command::Duration(args) => run_duration(args),
        Command::MergeIds { dest, src } => {
            if dest == "-" && src == "-" {
                return Err(CliError::StdinTwice);
            }
            let dest: Vec<StashId> = load_json(&dest)?;
            let src: Vec<StashId> = load_json(&src)?;
            print_json(&serde_json::to_value(merge_stash_ids(&dest, &src)).map_err(CliError::Output)?)
        }
        Command::Title { kind, input } => print_json(&title_and_path(kind, &read_input(&input)?, &input)?),
        Command::StashboxBase { endpoint } => {
            let base = stashbox::endpoint_base(&endpoint).ok_or_else(|| CliError::NoStashboxBase(endpoint.clone()))?;
            println!("{base}");
            Ok(())
        }
        Command::Timestamp { seconds } => {
            println!("{}", seconds_to_timestamp(seconds));
            Ok(())
        }
        Command::Seconds { timestamp } => {
            let seconds = timestamp_to_seconds(&timestamp).ok_or(CliError::InvalidTimestamp(timestamp))?;
            println!("{seconds}");
            Ok(())
        }
        Command::FileSize { bytes } => {
            let size = file_size(bytes);
            print_json(&json!({
                "size": size.size,
                "unit": size.unit.short(),
                "display": format_file_size(bytes),
            }))
        }
        Command::Resolution { width, height } => {
            println!("{}", resolution(width, height).unwrap_or("-"));
            Ok(())
        }
    }
}

fn run_match_phashes(args: MatchPhashesArgs) -> Result<(), CliError> {
    let config = MatchConfig::from_env()?.with_phash_threshold(args.threshold);
    let remote: RemoteScene = load_json(&args.input)?;
    let local: Vec<Fingerprint> =
        args.phashes.into_iter().map(|value| Fingerprint { kind: "phash".to_owned(), value }).collect();

    let matches = match_phashes(&local, &remote.fingerprints, &config);
    tracing::debug!(
        remote = remote.fingerprints.len(),
        matched = matches.len(),
        threshold = config.phash_threshold,
        "phash match"
    );
    print_json(&serde_json::to_value(matches).map_err(CliError::Output)?)
}

fn run_duration(args: DurationArgs) -> Result<(), CliError> {
    let config = MatchConfig::from_env()?.with_duration_tolerance(args.tolerance);
    let remote: RemoteScene = load_json(&args.input)?;
    let status = duration_status(&remote, Some(args.local), &config);

    let mut rendered = serde_json::to_value(status).map_err(CliError::Output)?;
    if let Value::Object(map) = &mut rendered {
        map.insert("confidence".to_owned(), serde_json::to_value(status.confidence()).map_err(CliError::Output)?);
    }
    print_json(&rendered)
}

fn title_and_path(kind: EntityKind, raw: &str, source_name: &str) -> Result<Value, CliError> {
    let (title, path) = match kind {
        EntityKind::Object => {
            let object: FileObject = parse_json(raw, source_name)?;
            (object_title(&object), object_path(&object))
        }
        EntityKind::Gallery => {
            let gallery: Gallery = parse_json(raw, source_name)?;
            (gallery_title(&gallery), gallery_path(&gallery))
        }
    };
    Ok(json!({ "title": title, "path": path }))
}

fn read_input(path: &str) -> Result<String, CliError> {
    let source_name = path.to_owned();
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(|error| CliError::Read { source_name, error })?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|error| CliError::Read { source_name, error })
}

fn parse_json<T: DeserializeOwned>(raw: &str, source_name: &str) -> Result<T, CliError> {
    serde_json::from_str(raw).map_err(|error| CliError::Parse { source_name: source_name.to_owned(), error })
}

fn load_json<T: DeserializeOwned>(path: &str) -> Result<T, CliError> {
    let raw = read_input(path)?;
    tracing::trace!(path, bytes = raw.len(), "loaded input");
    parse_json(&raw, path)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value).map_err(CliError::Output)?;
    println!("{rendered}");
    Ok(())
}
