//! Background music playback via rodio
//!
//! One looping track, paused and resumed by the music toggle. The
//! track lives in the user's music directory and is resolved by name,
//! trying a few common extensions.

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::config::Config;

const TRACK_EXTENSIONS: &[&str] = &["ogg", "mp3", "wav", "flac"];

/// Owns the output stream and the looping sink for the background track
pub struct MusicPlayer {
    // Dropping the stream kills the sink, so it rides along here
    _stream: OutputStream,
    sink: Sink,
}

impl MusicPlayer {
    /// Open the track and start (or pre-pause) infinite playback
    pub fn new(track: &Path, volume: f32, start_playing: bool) -> Result<Self> {
        let (stream, stream_handle) =
            OutputStream::try_default().context("No audio output device available")?;

        let file = File::open(track)
            .with_context(|| format!("Failed to open music track {:?}", track))?;
        let source = Decoder::new(BufReader::new(file))
            .with_context(|| format!("Unsupported audio format in {:?}", track))?
            .repeat_infinite();

        let sink = Sink::try_new(&stream_handle).context("Failed to create audio sink")?;
        sink.set_volume(volume.clamp(0.0, 1.0));
        sink.append(source);
        if !start_playing {
            sink.pause();
        }

        Ok(Self {
            _stream: stream,
            sink,
        })
    }

    pub fn pause(&self) {
        self.sink.pause();
    }

    pub fn resume(&self) {
        self.sink.play();
    }
}

/// Resolve a track name inside the music directory
///
/// A name with an extension is taken as-is; otherwise the known
/// extensions are tried in order.
pub fn find_track(dir: &Path, name: &str) -> Option<PathBuf> {
    let direct = dir.join(name);
    if direct.extension().is_some() && direct.is_file() {
        return Some(direct);
    }

    for ext in TRACK_EXTENSIONS {
        let candidate = dir.join(format!("{}.{}", name, ext));
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}

/// Create the music directory on first run, with a README explaining
/// what to drop there
pub fn ensure_music_directory() -> Result<PathBuf> {
    let dir = Config::music_dir()?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create music directory {:?}", dir))?;

        let readme = dir.join("README.txt");
        let body = "Drop an audio file named 'background.ogg' (or .mp3, .wav, .flac)\n\
                    in this directory to enable the background music toggle.\n\
                    The track name can be changed in config.toml under [music].\n";
        if let Err(e) = std::fs::write(&readme, body) {
            warn!("Could not write music README: {}", e);
        }
    }
    Ok(dir)
}
