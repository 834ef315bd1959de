// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use std::process;

use pico_args::Arguments;

const HELP: &str = "\
svg2vd converts an SVG icon set into Android vector drawables.

For every entry of the built-in icon mapping it reads
<icons-dir>/<source-name>.svg and writes
<drawable-dir>/<drawable-name>.xml, preserving the fill color of a
pre-existing drawable when there is one.

USAGE:
  svg2vd [OPTIONS] <icons-dir> <drawable-dir>

OPTIONS:
  -h, --help        Prints help information
  -V, --version     Prints version information

  --fill COLOR      Sets the fill used when no pre-existing drawable
                    provides one. Either an #AARRGGBB literal or a
                    resource reference
                    [default: #FF000000]

  --quiet           Disables warnings

ARGS:
  <icons-dir>       Directory with the source SVG icons
  <drawable-dir>    res/drawable directory to write into
";

#[derive(Debug)]
struct Args {
    fill: String,
    quiet: bool,
    icons_dir: PathBuf,
    drawable_dir: PathBuf,
}

fn collect_args() -> Result<Args, pico_args::Error> {
    let mut input = Arguments::from_env();

    if input.contains(["-h", "--help"]) {
        print!("{}", HELP);
        process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    Ok(Args {
        fill: input
            .opt_value_from_str("--fill")?
            .unwrap_or_else(|| svg2vd::DEFAULT_FILL.to_string()),
        quiet: input.contains("--quiet"),
        icons_dir: input.free_from_str()?,
        drawable_dir: input.free_from_str()?,
    })
}

fn main() {
    let args = match collect_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(1);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    if let Err(e) = process(args) {
        eprintln!("Error: {}.", e);
        process::exit(1);
    }
}

fn process(args: Args) -> Result<(), String> {
    if !args.icons_dir.exists() {
        return Err(format!(
            "icons directory not found: {}",
            args.icons_dir.display()
        ));
    }

    if !args.drawable_dir.exists() {
        return Err(format!(
            "drawable directory not found: {}",
            args.drawable_dir.display()
        ));
    }

    let mut converted = 0;
    let mut skipped = 0;
    let mut failed = 0;

    for &(drawable_name, source_name) in svg2vd::ICON_MAPPING {
        let source_name = match source_name {
            Some(name) => name,
            None => {
                println!("Skipping {} (no mapping)", drawable_name);
                skipped += 1;
                continue;
            }
        };

        let svg_path = args.icons_dir.join(format!("{}.svg", source_name));
        let out_path = args.drawable_dir.join(format!("{}.xml", drawable_name));

        if !svg_path.exists() {
            log::warn!("Icon not found: {}.", svg_path.display());
            failed += 1;
            continue;
        }

        let fill = svg2vd::probe_fill_color(&out_path, &args.fill);

        match svg2vd::convert_file(&svg_path, &out_path, &fill) {
            Ok(()) => {
                println!("Converted: {} <- {}.svg", drawable_name, source_name);
                converted += 1;
            }
            Err(e) => {
                log::warn!("Failed to convert {} cause {}.", svg_path.display(), e);
                failed += 1;
            }
        }
    }

    println!();
    println!("Converted: {}", converted);
    println!("Skipped: {}", skipped);
    println!("Failed: {}", failed);

    Ok(())
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if record.target().len() > 0 {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, record.args()),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, record.args()),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, record.args()),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, record.args()),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, record.args()),
            }
        }
    }

    fn flush(&self) {}
}
