// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! `log` backend for test drivers.
//!
//! Records go to standard error so that standard output only carries the test
//! progress trace and the final summary.

extern crate log;

use std::{
    fmt,
    io::{self, Write},
    str::FromStr,
};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
pub use log::{debug, error, info, trace, warn};

#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => {
        let _ = $crate::print_fmt(format_args!($($arg)*));
    }
}

#[macro_export]
macro_rules! kprintln {
    () => { $crate::kprint!("\n") };
    ($($arg:tt)*) => {
        let _ = $crate::print_fmt(format_args!("{}\n", format_args!($($arg)*)));
    }
}

macro_rules! color_fmt {
    ($color_code:expr, $($arg:tt)*) => {
        format_args!("\u{1B}[{}m{}\u{1B}[m", $color_code as u8, format_args!($($arg)*))
    };
}

#[repr(u8)]
#[allow(dead_code)]
enum AnsiColor {
    Black         = 30,
    Red           = 31,
    Green         = 32,
    Yellow        = 33,
    Blue          = 34,
    Magenta       = 35,
    Cyan          = 36,
    White         = 37,
    BrightBlack   = 90,
    BrightRed     = 91,
    BrightGreen   = 92,
    BrightYellow  = 93,
    BrightBlue    = 94,
    BrightMagenta = 95,
    BrightCyan    = 96,
    BrightWhite   = 97,
}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    #[inline]
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = record.level();
        let line = record.line().unwrap_or(0);
        let path = record.target();
        let color = level_color(level);

        let _ = print_fmt(color_fmt!(
            AnsiColor::White,
            "[{time} {path}:{line}] {args}\n",
            time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
            path = path,
            line = line,
            args = color_fmt!(color, "{}", record.args()),
        ));
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

fn level_color(level: Level) -> AnsiColor {
    match level {
        Level::Error => AnsiColor::Red,
        Level::Warn => AnsiColor::Yellow,
        Level::Info => AnsiColor::Green,
        Level::Debug => AnsiColor::Cyan,
        Level::Trace => AnsiColor::BrightBlack,
    }
}

/// Write formatted text to standard error under its lock.
pub fn print_fmt(args: fmt::Arguments) -> io::Result<()> {
    let mut err = io::stderr().lock();
    err.write_fmt(args)
}

/// Install the logger with the maximum level set to `Warn`.
///
/// Fails if another logger is already installed.
pub fn init_klogger() -> Result<(), SetLoggerError> {
    log::set_logger(&ConsoleLogger)?;
    log::set_max_level(LevelFilter::Warn);
    Ok(())
}

/// Parse a level name (`off`, `error`, ..., `trace`, case-insensitive).
///
/// Unknown names turn logging off.
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level)
        .ok()
        .unwrap_or(LevelFilter::Off)
}

pub fn set_log_level(level: &str) {
    log::set_max_level(parse_level(level));
}
