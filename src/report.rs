//! Console report: banner, per-check lines, countdown

use std::io::{self, Write};

use tokio::time::{sleep, Duration};

use crate::locale::Messages;
use crate::probe::ProbeResult;

const BANNER: &str = "=========================";

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Windows consoles get plain text
pub fn use_color() -> bool {
    !cfg!(windows)
}

/// Success/error word, wrapped in ANSI green/red when `color` is set
pub fn status_text(reachable: bool, m: &Messages, color: bool) -> String {
    let (word, code) = if reachable {
        (m.success, GREEN)
    } else {
        (m.error, RED)
    };
    if color {
        format!("{code}{word}{RESET}")
    } else {
        word.to_string()
    }
}

pub fn header<W: Write>(out: &mut W, m: &Messages) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{}", m.title)?;
    writeln!(out, "{BANNER}")
}

pub fn footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{BANNER}")
}

/// In-progress line, overwritten by [`result_line`]
pub fn checking_line<W: Write>(out: &mut W, label: &str, m: &Messages) -> io::Result<()> {
    write!(out, "{label} : {}···\r", m.checking)?;
    out.flush()
}

pub fn result_line<W: Write>(
    out: &mut W,
    label: &str,
    result: &ProbeResult,
    m: &Messages,
    color: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "{label} : {} ({}: {:?})",
        status_text(result.reachable, m, color),
        m.response_time,
        result.elapsed
    )
}

/// Count down `secs` seconds on a single line, then end the line.
/// Every second is waited out even when writing fails; the first write error is returned.
pub async fn countdown<W: Write>(out: &mut W, secs: u64, m: &Messages) -> io::Result<()> {
    let width = secs.to_string().len();
    let mut first_err = None;
    for remaining in (1..=secs).rev() {
        let step = write!(out, "{remaining:>width$}{}\r", m.countdown_suffix)
            .and_then(|()| out.flush());
        if let Err(e) = step {
            first_err.get_or_insert(e);
        }
        sleep(Duration::from_secs(1)).await;
    }
    let end = writeln!(out);
    match first_err {
        Some(e) => Err(e),
        None => end,
    }
}
