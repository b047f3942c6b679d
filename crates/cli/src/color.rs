// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal palette shared by clap help and console output.

use std::io::IsTerminal;

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};

/// Named roles in the palette, each backed by one ANSI-256 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Heading,
    Literal,
    Muted,
    Pass,
    Fail,
}

impl Tone {
    pub const fn ansi256(self) -> u8 {
        match self {
            Tone::Heading => 74,
            Tone::Literal => 250,
            Tone::Muted => 245,
            Tone::Pass => 114,
            Tone::Fail => 174,
        }
    }

    fn style(self) -> Style {
        Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(self.ansi256()))))
    }
}

/// Output stream whose terminal-ness decides coloring.
#[derive(Clone, Copy, Debug)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// `NO_COLOR` (non-empty) wins, then `COLOR=1` forces, then the stream must be a TTY.
pub fn enabled(stream: Stream) -> bool {
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    match stream {
        Stream::Stdout => std::io::stdout().is_terminal(),
        Stream::Stderr => std::io::stderr().is_terminal(),
    }
}

pub fn styles() -> Styles {
    if !enabled(Stream::Stdout) {
        return Styles::plain();
    }
    Styles::styled()
        .header(Tone::Heading.style())
        .literal(Tone::Literal.style())
        .placeholder(Tone::Muted.style())
}

/// Wraps text in ANSI escapes when the target stream takes color.
#[derive(Clone, Copy, Debug)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn for_stream(stream: Stream) -> Self {
        Self { enabled: enabled(stream) }
    }

    pub fn paint(self, tone: Tone, text: &str) -> String {
        if self.enabled {
            format!("{}{text}{}", tone.style().render(), tone.style().render_reset())
        } else {
            text.to_string()
        }
    }

    pub fn heading(self, text: &str) -> String {
        self.paint(Tone::Heading, text)
    }

    pub fn muted(self, text: &str) -> String {
        self.paint(Tone::Muted, text)
    }

    /// `PASS` or `FAIL`, colored by outcome.
    pub fn status(self, passed: bool) -> String {
        if passed {
            self.paint(Tone::Pass, "PASS")
        } else {
            self.paint(Tone::Fail, "FAIL")
        }
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
