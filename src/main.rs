// SPDX-License-Identifier: MPL-2.0
use seek_overlay::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
seek_overlay: touch-gesture overlay demo over a simulated player

USAGE:
  seek_overlay [OPTIONS] [MEDIA_PATH]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --duration <SECONDS>   Length of the simulated media (default 300)
  -h, --help             Print this help

GESTURES:
  tap                    pause / resume, toggle the seek bar
  hold                   fast playback while held
  swipe left / right     scrub
  swipe up / down        jump forward / back
  tap a side edge        show the video title
  arrow up / down        change the volume
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    Ok(Some(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        duration_secs: args.opt_value_from_str("--duration")?,
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    }))
}

fn main() -> iced::Result {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seek_overlay=info")),
        )
        .try_init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(e) => {
            eprintln!("seek_overlay: {e}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
