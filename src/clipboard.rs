use crate::error::Result;

/// Identifies one copy. A timed clear only runs while its ticket is still the newest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// Hands out a new ticket per copy, every new ticket supersedes the earlier ones.
#[derive(Debug, Default)]
pub struct CopyTracker {
    latest: u64,
}

impl CopyTracker {
    pub fn next(&mut self) -> CopyTicket {
        self.latest += 1;
        CopyTicket(self.latest)
    }

    pub fn is_current(&self, ticket: CopyTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// The system clipboard, held for as long as the session runs.
///
/// On X11 and Wayland the copied text is only served while its owner is alive, so one
/// `Clipboard` is created and kept instead of a fresh one per copy.
pub struct Clipboard {
    inner: arboard::Clipboard,
    copies: CopyTracker,
}

impl Clipboard {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
            copies: CopyTracker::default(),
        })
    }

    /// Puts `text` on the clipboard and returns the ticket a later clear has to present.
    pub fn copy(&mut self, text: &str) -> Result<CopyTicket> {
        self.inner.set_text(text.to_owned())?;
        Ok(self.copies.next())
    }

    /// Clears the clipboard, unless something was copied after `ticket`. Returns whether it
    /// cleared.
    pub fn clear_if_current(&mut self, ticket: CopyTicket) -> Result<bool> {
        if !self.copies.is_current(ticket) {
            return Ok(false);
        }

        self.inner.clear()?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "tests/clipboard.rs"]
mod test;
