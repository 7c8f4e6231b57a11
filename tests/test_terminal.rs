use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use asteroid_shooter::terminal::TerminalGuard;

/// Writer whose bytes stay readable after the guard that owns it is dropped.
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

const ENTER_ALT: &str = "\x1b[?1049h";
const LEAVE_ALT: &str = "\x1b[?1049l";
const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";

#[test]
fn drop_leaves_alternate_screen_and_shows_cursor() {
    let buf = SharedBuf::default();
    {
        let mut term = TerminalGuard::new(buf.clone());
        term.enter_screen().unwrap();
        let text = buf.text();
        assert!(text.contains(ENTER_ALT));
        assert!(text.contains(HIDE_CURSOR));
        assert!(!text.contains(LEAVE_ALT));
    }
    let text = buf.text();
    let shown = text.find(SHOW_CURSOR).unwrap();
    let left = text.find(LEAVE_ALT).unwrap();
    assert!(text.find(ENTER_ALT).unwrap() < shown);
    assert!(shown < left);
}

#[test]
fn untouched_guard_writes_nothing_on_drop() {
    let buf = SharedBuf::default();
    drop(TerminalGuard::new(buf.clone()));
    assert!(buf.text().is_empty());
}

#[test]
fn failed_setup_reports_error_and_drops_cleanly() {
    let mut term = TerminalGuard::new(BrokenPipe);
    assert!(term.enter_screen().is_err());
    assert!(!term.keyboard_enhanced());
    drop(term);
}

#[test]
fn writer_stays_usable_while_guarded() {
    let buf = SharedBuf::default();
    let mut term = TerminalGuard::new(buf.clone());
    term.out().write_all(b"frame").unwrap();
    assert_eq!(buf.text(), "frame");
}
