//! Scoped terminal state restoration

use std::io::{self, IsTerminal};

use crossterm::{cursor, execute};
use log::debug;

#[cfg(unix)]
use nix::sys::termios::Termios;

/// Restores the terminal when dropped.
///
/// Acquire one at the start of an invocation and keep it alive until the
/// end; drop runs on normal return, on `?` early returns and while unwinding.
/// On unix the termios settings of stdin are snapshotted on acquire and
/// written back on drop, so whatever mode the picker left the tty in is undone.
pub struct TerminalGuard {
    #[cfg(unix)]
    saved: Option<Termios>,
}

impl TerminalGuard {
    pub fn acquire() -> Self {
        #[cfg(unix)]
        {
            let saved = if io::stdin().is_terminal() {
                snapshot(io::stdin())
            } else {
                None
            };
            debug!("Terminal guard acquired (termios saved: {})", saved.is_some());
            Self { saved }
        }
        #[cfg(not(unix))]
        {
            debug!("Terminal guard acquired");
            Self {}
        }
    }

    /// Whether stdin settings were captured and will be restored on drop
    pub fn has_snapshot(&self) -> bool {
        #[cfg(unix)]
        {
            self.saved.is_some()
        }
        #[cfg(not(unix))]
        {
            false
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        #[cfg(unix)]
        if let Some(saved) = &self.saved {
            restore(io::stdin(), saved);
        }
        // The picker hides the cursor while it runs
        if io::stderr().is_terminal() {
            let _ = execute!(io::stderr(), cursor::Show);
        }
    }
}

#[cfg(unix)]
fn snapshot(fd: impl std::os::fd::AsFd) -> Option<Termios> {
    match nix::sys::termios::tcgetattr(fd) {
        Ok(termios) => Some(termios),
        Err(e) => {
            debug!("Failed to read terminal settings: {}", e);
            None
        }
    }
}

#[cfg(unix)]
fn restore(fd: impl std::os::fd::AsFd, saved: &Termios) {
    use nix::sys::termios::{tcsetattr, SetArg};

    if let Err(e) = tcsetattr(fd, SetArg::TCSANOW, saved) {
        debug!("Failed to restore terminal settings: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_follows_stdin_tty() {
        let guard = TerminalGuard::acquire();
        assert_eq!(guard.has_snapshot(), cfg!(unix) && io::stdin().is_terminal());
        drop(guard);
    }

    #[cfg(unix)]
    #[test]
    fn test_restore_undoes_raw_mode() {
        use nix::sys::termios::{cfmakeraw, tcgetattr, tcsetattr, LocalFlags, SetArg};

        let pty = nix::pty::openpty(None, None).unwrap();
        let saved = snapshot(&pty.slave).unwrap();
        assert!(saved.local_flags.contains(LocalFlags::ICANON));

        let mut raw = saved.clone();
        cfmakeraw(&mut raw);
        tcsetattr(&pty.slave, SetArg::TCSANOW, &raw).unwrap();
        assert!(!tcgetattr(&pty.slave)
            .unwrap()
            .local_flags
            .contains(LocalFlags::ICANON));

        restore(&pty.slave, &saved);
        let after = tcgetattr(&pty.slave).unwrap();
        assert!(after.local_flags.contains(LocalFlags::ICANON));
        assert!(after.local_flags.contains(LocalFlags::ECHO));
    }

    #[cfg(unix)]
    #[test]
    fn test_snapshot_of_non_tty_is_none() {
        let file = tempfile::tempfile().unwrap();
        assert!(snapshot(&file).is_none());
    }
}
