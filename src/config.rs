use crate::color::{parse_hex_color, Rgb, BLACK};
use crate::error::CliError;
use crate::sound::SoundKind;
use std::path::PathBuf;

pub const DEFAULT_SCALE: f32 = 8.0;
/// Keeps the logical viewport of any real terminal finite.
pub const MAX_SCALE: f32 = 1000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub bg_color: Rgb,
    /// Logical pixels per raster pixel.
    pub scale: f32,
    pub seed: Option<u64>,
    pub sound: SoundKind,
    pub log_file: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bg_color: BLACK,
            scale: DEFAULT_SCALE,
            seed: None,
            sound: SoundKind::Bell,
            log_file: None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Run(Options),
    Help,
}

pub fn print_usage() {
    eprintln!("skyburst - Click-to-launch fireworks over a twinkling night sky");
    eprintln!();
    eprintln!("Usage: skyburst [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --bg-color RRGGBB  Sky color as hex (e.g., --bg-color 1a1b26)");
    eprintln!("  --scale N          Logical pixels per terminal pixel, up to 1000 (default 8)");
    eprintln!("  --seed N           Seed the random generator for a repeatable show");
    eprintln!("  --sound KIND       bell (default), mute, or speaker (needs the `audio` feature)");
    eprintln!("  --mute             Same as --sound mute");
    eprintln!("  --log PATH         Write diagnostics to PATH (filter with RUST_LOG)");
    eprintln!();
    eprintln!("Click anywhere to launch a firework.");
    eprintln!("Press 'q', ESC, or Ctrl+C to exit");
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    let mut options = Options::default();

    let mut i = 0;
    while i < args.len() {
        let arg: &str = args[i].as_ref();
        match arg {
            "help" | "--help" | "-h" => return Ok(Command::Help),
            "--mute" => {
                options.sound = SoundKind::Mute;
                i += 1;
                continue;
            }
            _ => {}
        }

        let option: &'static str = match arg {
            "--bg-color" => "--bg-color",
            "--scale" => "--scale",
            "--seed" => "--seed",
            "--sound" => "--sound",
            "--log" => "--log",
            other => return Err(CliError::UnknownOption(other.to_string())),
        };
        let value = args
            .get(i + 1)
            .map(AsRef::<str>::as_ref)
            .ok_or(CliError::MissingValue(option))?;
        let invalid = || CliError::InvalidValue {
            option,
            value: value.to_string(),
        };

        match option {
            "--bg-color" => {
                options.bg_color =
                    parse_hex_color(value).ok_or_else(|| CliError::InvalidColor(value.to_string()))?;
            }
            "--scale" => {
                let scale: f32 = value.parse().map_err(|_| invalid())?;
                if !(scale > 0.0 && scale <= MAX_SCALE) {
                    return Err(invalid());
                }
                options.scale = scale;
            }
            "--seed" => options.seed = Some(value.parse().map_err(|_| invalid())?),
            "--sound" => options.sound = SoundKind::parse(value).ok_or_else(invalid)?,
            _ => options.log_file = Some(PathBuf::from(value)),
        }
        i += 2;
    }

    Ok(Command::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Options {
        match parse_args(args.iter().copied()) {
            Ok(Command::Run(options)) => options,
            other => panic!("expected options, got {other:?}"),
        }
    }

    #[test]
    fn defaults_without_arguments() {
        assert_eq!(run(&[]), Options::default());
    }

    #[test]
    fn reads_every_option() {
        let options = run(&[
            "--bg-color", "#1a1b26", "--scale", "4.5", "--seed", "77", "--sound", "mute", "--log",
            "/tmp/skyburst.log",
        ]);
        assert_eq!(options.bg_color, (0x1a, 0x1b, 0x26));
        assert_eq!(options.scale, 4.5);
        assert_eq!(options.seed, Some(77));
        assert_eq!(options.sound, SoundKind::Mute);
        assert_eq!(options.log_file, Some(PathBuf::from("/tmp/skyburst.log")));
    }

    #[test]
    fn largest_scale_keeps_viewport_finite() {
        let options = run(&["--scale", "1000"]);
        assert_eq!(options.scale, MAX_SCALE);
        let width = u16::MAX as f32 * options.scale;
        let height = u16::MAX as f32 * 2.0 * options.scale;
        assert!(width.is_finite() && height.is_finite());
    }

    #[test]
    fn mute_flag_takes_no_value() {
        let options = run(&["--mute", "--seed", "1"]);
        assert_eq!(options.sound, SoundKind::Mute);
        assert_eq!(options.seed, Some(1));
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse_args(["--seed", "3", "-h"]), Ok(Command::Help));
        assert_eq!(parse_args(["help"]), Ok(Command::Help));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(parse_args(["--bg-color"]), Err(CliError::MissingValue("--bg-color")));
        assert_eq!(
            parse_args(["--bg-color", "red"]),
            Err(CliError::InvalidColor("red".to_string()))
        );
        assert_eq!(
            parse_args(["--scale", "0"]),
            Err(CliError::InvalidValue { option: "--scale", value: "0".to_string() })
        );
        for huge in ["1e38", "1000.5", "inf", "NaN"] {
            assert_eq!(
                parse_args(["--scale", huge]),
                Err(CliError::InvalidValue { option: "--scale", value: huge.to_string() })
            );
        }
        assert_eq!(
            parse_args(["--seed", "-4"]),
            Err(CliError::InvalidValue { option: "--seed", value: "-4".to_string() })
        );
        assert_eq!(
            parse_args(["--sound", "loud"]),
            Err(CliError::InvalidValue { option: "--sound", value: "loud".to_string() })
        );
        assert_eq!(parse_args(["fireworks"]), Err(CliError::UnknownOption("fireworks".to_string())));
    }
}
