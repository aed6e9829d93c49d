use std::io::{self, IsTerminal, Write};

use crossterm::queue;
use crossterm::style::{Color as CtColor, Print, ResetColor, SetForegroundColor};
use ratatui::style::Color;
use ratatui::text::Line;

/// Writes each line followed by a newline. With `color` set, span foreground
/// colors are emitted as ANSI escapes; otherwise only the text is written.
pub fn write_lines<W: Write>(out: &mut W, lines: &[Line<'_>], color: bool) -> io::Result<()> {
    for line in lines {
        for span in &line.spans {
            match span.style.fg.filter(|_| color) {
                Some(fg) => queue!(
                    out,
                    SetForegroundColor(to_crossterm_color(fg)),
                    Print(span.content.as_ref()),
                    ResetColor
                )?,
                None => queue!(out, Print(span.content.as_ref()))?,
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

/// Color output is used for terminals unless `NO_COLOR` is set.
pub fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

pub fn to_crossterm_color(color: Color) -> CtColor {
    match color {
        Color::Reset => CtColor::Reset,
        Color::Black => CtColor::Black,
        Color::Red => CtColor::DarkRed,
        Color::Green => CtColor::DarkGreen,
        Color::Yellow => CtColor::DarkYellow,
        Color::Blue => CtColor::DarkBlue,
        Color::Magenta => CtColor::DarkMagenta,
        Color::Cyan => CtColor::DarkCyan,
        Color::Gray => CtColor::Grey,
        Color::DarkGray => CtColor::DarkGrey,
        Color::LightRed => CtColor::Red,
        Color::LightGreen => CtColor::Green,
        Color::LightYellow => CtColor::Yellow,
        Color::LightBlue => CtColor::Blue,
        Color::LightMagenta => CtColor::Magenta,
        Color::LightCyan => CtColor::Cyan,
        Color::White => CtColor::White,
        Color::Rgb(r, g, b) => CtColor::Rgb { r, g, b },
        Color::Indexed(index) => CtColor::AnsiValue(index),
    }
}
