use std::io::Result;
use std::thread;
use std::time::Duration;

use tinytty::{Color, Terminal};

const BANNER: &str = "*** tinytty ***";
const COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// Sweep a colored banner across the middle row, then wait for dismissal.
fn run(tty: &mut Terminal<tinytty::SysDevice>) -> Result<()> {
    tty.set_title("tinytty marquee")?;
    tty.set_echo(false)?;
    tty.hide_cursor()?;
    tty.clear_screen()?;

    let columns = tty.columns();
    let row = tty.rows() / 2;
    let width = BANNER.len() as u16;

    for (step, color) in (0..columns.saturating_sub(width)).zip(COLORS.iter().cycle()) {
        tty.set_bold(*color)?;
        tty.put_string(step, row, BANNER)?;
        thread::sleep(Duration::from_millis(50));
    }

    tty.reset_color()?;
    tty.show_warning("that was the whole show")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut tty = Terminal::open()?;
    let result = run(&mut tty);

    // Undo the modes even when the animation failed.
    tty.reset_color()?;
    tty.show_cursor()?;
    tty.set_echo(true)?;
    result
}
