//! Laser Pong entry point
//!
//! Headless native driver: paces the simulation, feeds it key frames from a
//! replay file and forwards its events to the audio layer.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use laser_pong::audio::AudioManager;
use laser_pong::sim::{GameEvent, MatchState, ScoreReason, tick};
use laser_pong::{InputMapper, Settings};

/// Maximum ticks per wake-up to prevent spiral of death
const MAX_SUBSTEPS: u32 = 8;
/// Default match length: one minute at 60 Hz
const DEFAULT_TICKS: u64 = 3600;

const USAGE: &str =
    "usage: laser-pong [--ticks N] [--seed S] [--settings FILE] [--replay FILE] [--snapshot]";

#[derive(Debug, Default)]
struct Options {
    ticks: Option<u64>,
    seed: Option<u64>,
    settings: Option<PathBuf>,
    replay: Option<PathBuf>,
    snapshot: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        let mut value = |name: &str| args.next().ok_or_else(|| format!("{} needs a value", name));
        match arg.as_str() {
            "--ticks" => {
                let v = value("--ticks")?;
                opts.ticks = Some(v.parse().map_err(|_| format!("bad tick count: {}", v))?);
            }
            "--seed" => {
                let v = value("--seed")?;
                opts.seed = Some(v.parse().map_err(|_| format!("bad seed: {}", v))?);
            }
            "--settings" => opts.settings = Some(PathBuf::from(value("--settings")?)),
            "--replay" => opts.replay = Some(PathBuf::from(value("--replay")?)),
            "--snapshot" => opts.snapshot = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            other => return Err(format!("unknown argument: {}\n{}", other, USAGE)),
        }
    }
    Ok(opts)
}

/// Replay files are a JSON array of frames; each frame lists the keys held
/// during that tick, e.g. `[["q", "a"], [], ["p"]]`
fn load_replay(path: &Path) -> Result<Vec<Vec<String>>, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read replay {}: {}", path.display(), e))?;
    serde_json::from_str(&json).map_err(|e| format!("invalid replay {}: {}", path.display(), e))
}

/// Game instance holding all state
struct Game {
    state: MatchState,
    input: InputMapper,
    audio: AudioManager,
    replay: Vec<Vec<String>>,
}

impl Game {
    fn new(seed: u64, settings: &Settings, replay: Vec<Vec<String>>) -> Self {
        let mut audio = AudioManager::default();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        Self {
            state: MatchState::new(seed),
            input: InputMapper::new(settings.bindings.clone()),
            audio,
            replay,
        }
    }

    /// Run exactly one simulation tick
    fn step_once(&mut self) {
        let frame = self.state.time_ticks as usize;
        match self.replay.get(frame) {
            Some(keys) => self.input.set_pressed(keys),
            None if frame == self.replay.len() => self.input.release_all(),
            None => {}
        }

        let input = self.input.tick_input();
        let events = tick(&mut self.state, &input);
        self.audio.handle_events(&events);
        self.report(&events);
    }

    /// Log goals and paddle wipes at info, everything else at trace
    fn report(&self, events: &[GameEvent]) {
        let at = self.state.time_ticks;
        for event in events {
            match event {
                GameEvent::PaddleFullyDestroyed { side, bonus, .. } => {
                    log::info!(
                        "Tick {}: {} {:?} (+{} to opponent)",
                        at,
                        event.name(),
                        side,
                        bonus
                    );
                }
                GameEvent::Score {
                    side,
                    total,
                    reason: ScoreReason::Goal,
                    ..
                } => {
                    log::info!("Tick {}: goal for {:?} (total {})", at, side, total);
                }
                _ => log::trace!("Tick {}: {}", at, event.name()),
            }
        }
    }

    /// Run as fast as possible
    fn run_unpaced(&mut self, ticks: u64) {
        while self.state.time_ticks < ticks {
            self.step_once();
        }
    }

    /// Run at `rate_hz` with a fixed-step accumulator
    fn run_realtime(&mut self, ticks: u64, rate_hz: u32) {
        let step = Duration::from_secs_f64(1.0 / rate_hz as f64);
        let mut accumulator = Duration::ZERO;
        let mut last = Instant::now();

        while self.state.time_ticks < ticks {
            let now = Instant::now();
            accumulator += (now - last).min(Duration::from_millis(100));
            last = now;

            let mut substeps = 0;
            while accumulator >= step && substeps < MAX_SUBSTEPS && self.state.time_ticks < ticks {
                self.step_once();
                accumulator -= step;
                substeps += 1;
            }

            std::thread::sleep(step.saturating_sub(accumulator));
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Laser Pong (headless) starting...");

    let opts = match parse_args(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::FAILURE;
        }
    };

    let settings = match &opts.settings {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let replay = match &opts.replay {
        Some(path) => match load_replay(path) {
            Ok(frames) => {
                log::info!("Loaded {} replay frames", frames.len());
                frames
            }
            Err(msg) => {
                eprintln!("{}", msg);
                return ExitCode::FAILURE;
            }
        },
        None => Vec::new(),
    };

    let seed = opts.seed.or(settings.seed).unwrap_or_else(rand::random);
    let ticks = opts.ticks.unwrap_or(DEFAULT_TICKS);
    log::info!("Match initialized with seed: {}", seed);

    let mut game = Game::new(seed, &settings, replay);
    if settings.realtime {
        game.run_realtime(ticks, settings.tick_rate_hz);
    } else {
        game.run_unpaced(ticks);
    }

    let state = &game.state;
    log::info!("Match over after {} ticks", state.time_ticks);
    println!("Left {} - {} Right", state.left.score, state.right.score);

    if opts.snapshot {
        let mut snapshot = state.snapshot();
        if !settings.effective_screen_flash() {
            snapshot.overlay.flash = None;
        }
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::warn!("Could not serialize snapshot: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
