//! stream-titles
//!
//! Lists the streams of a media part, as exported by the media server in
//! JSON, with the titles a player would show for them.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plex_streams::config::ToolConfig;
use plex_streams::config_file::{generate_default_config, ConfigFile};
use plex_streams::{MediaPart, Result, Stream, StreamError, StreamType};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "stream-titles";

/// Show display titles for the streams of a media part.
#[derive(Parser, Debug, Clone)]
#[command(name = "stream-titles")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with the part's streams.
    #[arg(required_unless_present = "generate_config")]
    input: Option<PathBuf>,

    /// Configuration file (TOML).
    #[arg(short, long, default_value = "stream-titles.toml")]
    config: PathBuf,

    /// Only list streams of this type (video, audio, subtitle, lyrics).
    #[arg(short = 't', long = "type", value_parser = parse_stream_type)]
    stream_type: Option<StreamType>,

    /// Select the stream with this id before listing.
    #[arg(short, long)]
    select: Option<i64>,

    /// Write a default configuration file to this path and exit.
    #[arg(long)]
    generate_config: Option<PathBuf>,
}

fn parse_stream_type(s: &str) -> std::result::Result<StreamType, String> {
    StreamType::from_name(s).ok_or_else(|| format!("unknown stream type {:?}", s))
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.generate_config {
        generate_default_config(path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let (config, load_error) = load_config(&args.config);
    config.validate()?;

    init_logging(&config);
    tracing::debug!("{} v{} starting", APP_NAME, VERSION);
    if let Some(e) = load_error {
        tracing::warn!(
            "Failed to load config file {}: {}. Using defaults.",
            args.config.display(),
            e
        );
    }
    tracing::debug!("Configuration loaded: {:?}", config);

    let input = args
        .input
        .as_ref()
        .ok_or_else(|| StreamError::Config("no input file given".to_string()))?;
    let json = std::fs::read_to_string(input)?;
    let mut part = MediaPart::from_json(&json)?;

    if let Some(id) = args.select {
        let target = part
            .stream_by_id(id)
            .cloned()
            .ok_or_else(|| StreamError::StreamNotFound(format!("id={}", id)))?;
        part.set_selected_stream(&target);
        tracing::info!("Selected {} stream {}: {}", target.stream_type(), id, target);
    }

    print_part(&part, &config, args.stream_type);
    Ok(())
}

/// Load the configuration file, falling back to defaults.
///
/// A missing file is not an error; an unreadable one is returned so it can
/// be logged once logging is up.
fn load_config(path: &Path) -> (ToolConfig, Option<StreamError>) {
    if !path.exists() {
        return (ToolConfig::default(), None);
    }
    match ConfigFile::from_file(path) {
        Ok(cf) => (cf.into_tool_config(), None),
        Err(e) => (ToolConfig::default(), Some(e)),
    }
}

/// Initialize logging with tracing
fn init_logging(config: &ToolConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "plex_streams={0},stream_titles={0}",
            config.log_level
        )
        .into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout carries the listing.
    if config.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_part(part: &MediaPart, config: &ToolConfig, only: Option<StreamType>) {
    const ORDER: [StreamType; 4] = [
        StreamType::Video,
        StreamType::Audio,
        StreamType::Subtitle,
        StreamType::Lyrics,
    ];

    for stream_type in ORDER {
        if only.is_some_and(|t| t != stream_type) {
            continue;
        }

        if stream_type == StreamType::Subtitle && config.show_none_subtitle {
            let subtitles_off = part.selected_stream(StreamType::Subtitle).is_none();
            for (pos, stream) in part.subtitle_choices().iter().enumerate() {
                let selected = if pos == 0 { subtitles_off } else { stream.is_selected() };
                print_stream(stream, selected, config);
            }
        } else {
            for stream in part.streams_of_type(stream_type) {
                print_stream(stream, stream.is_selected(), config);
            }
        }
    }

    // Types without a place in the ordering, listed as they come.
    for stream in part.streams() {
        let stream_type = stream.stream_type();
        if ORDER.contains(&stream_type) || only.is_some_and(|t| t != stream_type) {
            continue;
        }
        print_stream(stream, stream.is_selected(), config);
    }
}

fn print_stream(stream: &Stream, selected: bool, config: &ToolConfig) {
    let marker = if selected { "*" } else { " " };
    let id = stream
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{} {:>8} {:<8} {}",
        marker,
        id,
        stream.stream_type().to_string(),
        stream
    );

    if stream.stream_type() == StreamType::Subtitle && !stream.is_embedded() {
        match config.subtitle_url(stream) {
            Ok(url) => println!("  {:>8} {:<8} {}", "", "", url),
            Err(e) => tracing::warn!("no subtitle url for {}: {}", stream, e),
        }
    }
}
