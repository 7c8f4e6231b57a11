use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};

/// Owns the output writer while the game has the terminal.
///
/// Whatever setup step succeeded is undone when the guard is dropped, so an
/// error halfway through setup (or a panic in the game loop) still leaves the
/// shell usable.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw: bool,
    alternate: bool,
    keyboard_enhanced: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            raw: false,
            alternate: false,
            keyboard_enhanced: false,
        }
    }

    /// Raw mode, then the alternate screen.
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        self.enter_screen()
    }

    /// Switches to the alternate screen, hides the cursor and asks for
    /// key-release events.  Terminals without the kitty keyboard protocol
    /// simply keep sending presses and repeats.
    pub fn enter_screen(&mut self) -> io::Result<()> {
        self.out.execute(terminal::EnterAlternateScreen)?;
        self.alternate = true;
        self.out.execute(cursor::Hide)?;

        self.keyboard_enhanced = self
            .out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
        log::info!("keyboard enhancement: {}", self.keyboard_enhanced);
        Ok(())
    }

    pub fn keyboard_enhanced(&self) -> bool {
        self.keyboard_enhanced
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        if self.alternate {
            let _ = self.out.execute(cursor::Show);
            let _ = self.out.execute(terminal::LeaveAlternateScreen);
        }
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}
