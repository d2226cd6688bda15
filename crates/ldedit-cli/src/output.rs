use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use ldedit_core::prelude::{ImportWarning, ValidationVerdict};
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

/// Print a command result. In human mode `human` renders it instead.
pub fn emit<T: Serialize>(value: &T, human: impl FnOnce(&T) -> anyhow::Result<()>) -> anyhow::Result<()> {
    if is_json() {
        let s = serde_json::to_string_pretty(value)?;
        println!("{s}");
        return Ok(());
    }
    human(value)
}

pub fn print_verdict(out: &mut impl WriteColor, verdict: &ValidationVerdict) -> anyhow::Result<()> {
    let (color, label) = if verdict.is_valid {
        (Color::Green, "valid")
    } else {
        (Color::Red, "invalid")
    };

    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{label}")?;
    out.reset()?;
    writeln!(out, ": {}", verdict.summary())?;
    Ok(())
}

pub fn print_warning(warning: &ImportWarning) {
    let mut err = stderr();
    let _ = err.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
    let _ = write!(err, "warning");
    let _ = err.reset();
    let _ = writeln!(err, ": {warning}");
}

pub fn stdout() -> StandardStream {
    StandardStream::stdout(color_choice(io::stdout().is_terminal()))
}

pub fn stderr() -> StandardStream {
    StandardStream::stderr(color_choice(io::stderr().is_terminal()))
}

fn color_choice(terminal: bool) -> ColorChoice {
    if terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
