// SPDX-License-Identifier: MPL-2.0
use card_gallery::app::{self, Flags};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: card-gallery [OPTIONS]

Options:
  --lang <TAG>         Interface language (e.g. en-US, ja)
  --count <N>          Number of cards in the gallery
  --assets <DIR>       Directory containing card<i>.<ext> images
  --config-dir <DIR>   Directory containing settings.toml
  -v, --verbose        Echo user actions to stderr
  -h, --help           Print this help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, String> {
    let flags = Flags {
        lang: args
            .opt_value_from_str("--lang")
            .map_err(|err| err.to_string())?,
        count: args
            .opt_value_from_str("--count")
            .map_err(|err| err.to_string())?,
        assets: args
            .opt_value_from_os_str("--assets", |s| Ok::<_, String>(PathBuf::from(s)))
            .map_err(|err| err.to_string())?,
        config_dir: args
            .opt_value_from_os_str("--config-dir", |s| Ok::<_, String>(PathBuf::from(s)))
            .map_err(|err| err.to_string())?,
        verbose: args.contains(["-v", "--verbose"]),
    };

    if flags.count == Some(0) {
        return Err("--count must be at least 1".into());
    }
    if flags.lang.as_deref().is_some_and(|lang| lang.trim().is_empty()) {
        return Err("--lang must not be empty".into());
    }

    let rest = args.finish();
    if let Some(extra) = rest.first() {
        return Err(format!("unexpected argument: {}", extra.to_string_lossy()));
    }

    Ok(flags)
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
