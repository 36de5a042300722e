// SPDX-License-Identifier: MPL-2.0
use iced_sheet::app::{self, paths, Flags};
use iced_sheet::ui::theming::ThemeMode;
use std::process;

const HELP: &str = "\
iced_sheet - draggable bottom sheet demo

USAGE:
    iced_sheet [OPTIONS]

OPTIONS:
    --config-dir <DIR>    Directory holding settings.toml
                          (also ICED_SHEET_CONFIG_DIR)
    --theme <MODE>        light, dark or system
    -h, --help            Print this help
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    // Set RUST_LOG=debug to trace sheet phase transitions
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    log::info!("iced_sheet starting up");

    app::run(flags)
}
