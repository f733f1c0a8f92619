//! Kinetic Decks headless driver
//!
//! Runs a short scripted session and prints the final frame as JSON.

use std::path::PathBuf;

use clap::Parser;

use kinetic_decks::input::command_for_key;
use kinetic_decks::library::TrackLibrary;
use kinetic_decks::renderer::{WheelStyle, wheel_vertices};
use kinetic_decks::wheel::DeckId;
use kinetic_decks::{Command, Session, Settings};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Settings JSON file (defaults apply when omitted)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Track library JSON file with `deck_a` and `deck_b` lists
    #[arg(short, long)]
    library: Option<PathBuf>,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 180)]
    frames: u64,
}

fn main() {
    env_logger::init();
    log::info!("Kinetic Decks (headless) starting...");

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> kinetic_decks::Result<()> {
    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let library = match &args.library {
        Some(path) => TrackLibrary::load(path)?,
        None => TrackLibrary::default(),
    };

    let mut session = Session::new(library, settings, 1280.0, 720.0)?;

    // (frame, command) script: spin, load tracks, switch modes, fade across, resize
    let script: Vec<(u64, Command)> = [
        (10, Command::Scroll { delta_x: 0.0, delta_y: 120.0 }),
        (30, Command::SelectTrack { deck: DeckId::A, index: 2 }),
        (45, Command::SelectMode(3)),
        (60, Command::Scroll { delta_x: 250.0, delta_y: 0.0 }),
        (75, Command::SelectMode(6)),
        (90, Command::SetLooping { deck: DeckId::B, looping: true }),
        (120, Command::Resize { width: 1920.0, height: 1080.0 }),
    ]
    .into_iter()
    .chain(['k', '2'].into_iter().filter_map(command_for_key).map(|cmd| (150, cmd)))
    .collect();

    let style = WheelStyle::default();
    let mut last = None;
    for _ in 0..args.frames {
        let frame = session.frame_count();
        for (_, command) in script.iter().filter(|(at, _)| *at == frame) {
            session.apply(*command);
        }

        let out = session.frame();
        if !out.cues.is_empty() {
            log::debug!("frame {}: cues {:?}", out.frame, out.cues);
        }
        last = Some(out);
    }

    if let Some(out) = last {
        for deck in DeckId::BOTH {
            if let Some(wheel) = out.wheel(deck) {
                log::info!(
                    "{}: mode {}, {} sensors, {} vertices",
                    deck.name(),
                    wheel.mode.number(),
                    wheel.sensors.len(),
                    wheel_vertices(wheel, &style).len()
                );
            }
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_paths_are_optional() {
        let args = Args::try_parse_from(["kinetic-decks"]).unwrap();
        assert!(args.settings.is_none());
        assert!(args.library.is_none());
        assert_eq!(args.frames, 180);

        let args = Args::try_parse_from([
            "kinetic-decks",
            "--settings",
            "s.json",
            "-l",
            "lib.json",
            "--frames",
            "10",
        ])
        .unwrap();
        assert_eq!(args.settings, Some(PathBuf::from("s.json")));
        assert_eq!(args.library, Some(PathBuf::from("lib.json")));
        assert_eq!(args.frames, 10);
    }

    #[test]
    fn test_stray_positional_rejected() {
        assert!(Args::try_parse_from(["kinetic-decks", "extra.json"]).is_err());
    }
}
