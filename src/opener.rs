//! Hands a link to the platform's default handler.

use std::io;

pub trait Opener {
    fn open(&self, target: &str) -> io::Result<()>;
}

/// Opens links with the system handler (`xdg-open`, `open`, `start`).
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, target: &str) -> io::Result<()> {
        open::that(target)
    }
}
