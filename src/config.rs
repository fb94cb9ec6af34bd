use std::env;
use std::path::PathBuf;

/// Runtime options. No CLI framework — a single optional path argument
/// (or `DESKCAT_SPRITE`) swaps the sprite sheet, and one env flag exists
/// so the reduced-motion gate can be bypassed while testing.
#[derive(Debug, Default)]
pub struct Config {
    /// Replacement sprite sheet; `None` uses the bundled one.
    pub sprite_path: Option<PathBuf>,
    /// `DESKCAT_FORCE_MOTION=1` ignores the OS reduced-motion preference.
    pub force_motion: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let sprite_path = env::args_os()
            .nth(1)
            .map(PathBuf::from)
            .or_else(|| env::var_os("DESKCAT_SPRITE").map(PathBuf::from));
        let force_motion = env::var_os("DESKCAT_FORCE_MOTION").is_some_and(|v| v == "1");

        Self {
            sprite_path,
            force_motion,
        }
    }
}
