//! Build script for checkers-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates game.toml at compile time
//! - Generates the game configuration constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Longest game the MM:SS clock can show
const MAX_TIME_LIMIT_S: i64 = 99 * 60 + 59;

/// Longest accepted button settle interval
const MAX_SETTLE_MS: i64 = 2000;

/// Values read from game.toml
struct GameSettings {
    time_limit_s: i64,
    settle_ms: i64,
    first_player: &'static str,
}

fn main() {
    setup_linker();
    let settings = validate_config();
    write_config(&settings);
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate game.toml and extract its settings
fn validate_config() -> GameSettings {
    println!("cargo:rerun-if-changed=game.toml");

    let config_path = Path::new("game.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: game.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a game.toml configuration file.           ║\n\
            ║  Please create one in the checkers-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read game.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in game.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    let settings = read_settings(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid settings in game.toml                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=game.toml validated successfully");
    settings
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read an optional integer key, checking its range
fn read_int(
    section: Option<&toml::Value>,
    path: &str,
    key: &str,
    default: i64,
    range: (i64, i64),
    errors: &mut Vec<String>,
) -> i64 {
    let Some(value) = section.and_then(|s| s.get(key)) else {
        return default;
    };
    match value.as_integer() {
        Some(n) if n >= range.0 && n <= range.1 => n,
        Some(n) => {
            errors.push(format!(
                "{}.{} = {} is outside {}..={}",
                path, key, n, range.0, range.1
            ));
            default
        }
        None => {
            errors.push(format!("{}.{} must be an integer", path, key));
            default
        }
    }
}

/// Collect the settings, reporting every problem found
fn read_settings(config: &toml::Value, errors: &mut Vec<String>) -> GameSettings {
    let game = config.get("game");
    let input = config.get("input");

    if game.is_none() {
        errors.push("Missing [game] section".to_string());
    }

    let time_limit_s = read_int(game, "game", "time_limit_s", 300, (1, MAX_TIME_LIMIT_S), errors);
    let settle_ms = read_int(input, "input", "settle_ms", 200, (0, MAX_SETTLE_MS), errors);

    let first_player = match game.and_then(|g| g.get("first_player")) {
        None => "Player1",
        Some(value) => match value.as_str() {
            Some("player1") => "Player1",
            Some("player2") => "Player2",
            _ => {
                errors.push("game.first_player must be \"player1\" or \"player2\"".to_string());
                "Player1"
            }
        },
    };

    GameSettings {
        time_limit_s,
        settle_ms,
        first_player,
    }
}

/// Write the settings as Rust constants into OUT_DIR
fn write_config(settings: &GameSettings) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("game_config.rs")).unwrap();
    write!(
        f,
        "pub const TIME_LIMIT_S: u32 = {};\n\
         pub const SETTLE_MS: u32 = {};\n\
         pub const FIRST_PLAYER: checkers_core::Player = checkers_core::Player::{};\n",
        settings.time_limit_s, settings.settle_ms, settings.first_player
    )
    .unwrap();
}
