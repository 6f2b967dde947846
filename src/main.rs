// SPDX-License-Identifier: MPL-2.0
use iced_notify::app::{self, Flags};
use iced_notify::config::{self, paths};

const USAGE: &str = "\
Usage: iced_notify [OPTIONS]

Options:
  --config-dir DIR   Read settings.toml from DIR
  --duration MS      Display time for every demo toast, in milliseconds
  -h, --help         Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let (config_dir, duration_ms) = match parse_args(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(config_dir);
    let (config, config_warning) = config::load();

    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(config.general.level_filter())
        .with_local_timestamps()
        .init()
    {
        eprintln!("failed to initialize logger: {err}");
    }

    app::run(Flags {
        config,
        config_warning,
        duration_ms,
    })
}

fn parse_args(
    mut args: pico_args::Arguments,
) -> Result<(Option<String>, Option<u64>), pico_args::Error> {
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let duration_ms = args.opt_value_from_str("--duration")?;

    let rest = args.finish();
    if let Some(unexpected) = rest.first() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected argument {}", unexpected.to_string_lossy()),
        });
    }
    Ok((config_dir, duration_ms))
}
