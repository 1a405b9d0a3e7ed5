//! Mini Putt entry point
//!
//! The browser build is driven from JavaScript through `platform::web`.
//! Natively this runs a headless autoplay through the course and logs how
//! each level went.
//!
//! Usage: `mini-putt [putt|kick] [settings.json] [course.json]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;

    use anyhow::{Context, Result, bail};

    use mini_putt::Settings;
    use mini_putt::autoplay::Autoplayer;
    use mini_putt::sim::{GameMode, GameSession, SessionHooks, course_from_json, default_course};

    /// Frame time fed to the session (60 Hz)
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Give up on a level after this many frames
    const MAX_FRAMES_PER_LEVEL: u32 = 60 * 60 * 5;
    const AUTOPLAY_SEED: u64 = 0x5eed;

    /// Prints what a page would show
    #[derive(Default)]
    struct ConsoleHooks {
        wins: u32,
        finished: bool,
    }

    impl SessionHooks for ConsoleHooks {
        fn on_win(&mut self, attempts: u32, stars: u8) {
            self.wins += 1;
            println!(
                "  Hole in {} shot(s): {}{}",
                attempts,
                "*".repeat(stars as usize),
                "-".repeat(3 - stars.min(3) as usize)
            );
        }

        fn on_all_levels_complete(&mut self) {
            self.finished = true;
            println!("All levels complete!");
        }

        fn on_level_loaded(&mut self, index: usize) {
            println!("Level {}", index + 1);
        }
    }

    fn parse_mode(arg: Option<&String>) -> Result<GameMode> {
        match arg.map(String::as_str) {
            None | Some("putt") => Ok(GameMode::Putt),
            Some("kick") => Ok(GameMode::Kick),
            Some(other) => bail!("unknown mode {:?} (expected putt or kick)", other),
        }
    }

    pub fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let args: Vec<String> = std::env::args().skip(1).collect();
        let mode = parse_mode(args.first())?;

        let settings = match args.get(1) {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading settings from {}", path))?;
                Settings::from_json(&json).with_context(|| format!("parsing settings {}", path))?
            }
            None => Settings::load(),
        };

        let levels = match args.get(2) {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading course from {}", path))?;
                course_from_json(&json).with_context(|| format!("parsing course {}", path))?
            }
            None => default_course(mode),
        };
        if levels.is_empty() {
            bail!("course has no levels");
        }

        log::info!("Mini Putt (native) starting in {:?} mode", mode);

        // The caller owns level advancement: let the session do it after each win
        let settings = Settings {
            auto_advance: true,
            ..settings
        };
        let level_count = levels.len();
        let mut session = GameSession::new(mode, settings, levels, ConsoleHooks::default());
        let mut player = Autoplayer::new(AUTOPLAY_SEED);

        let mut frames_on_level = 0;
        let mut level = session.current_level();
        while !session.hooks().finished {
            player.take_shot(&mut session);
            session.tick(FRAME_DT);

            if session.current_level() != level || session.hooks().finished {
                level = session.current_level();
                frames_on_level = 0;
                continue;
            }
            frames_on_level += 1;
            if frames_on_level > MAX_FRAMES_PER_LEVEL {
                log::warn!("Autoplay stuck on level {}, skipping", level + 1);
                session.advance_to_next_level();
                level = session.current_level();
                frames_on_level = 0;
            }
        }

        println!("Cleared {} of {} levels", session.hooks().wins, level_count);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
