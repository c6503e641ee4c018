//! Settings store backed by one flash page and a RAM copy of it.
//!
//! Loads are served from the copy. A save builds the updated page, programs
//! it, and only then replaces the copy, so the copy never holds bytes that
//! flash does not. Saves that change nothing skip the flash entirely.

use super::hardware::SettingsStore;

/// A flash page that is always rewritten whole.
pub trait PageFlash {
    type Error;

    /// Erase the page and program `page` into it.
    fn program(&mut self, page: &[u8]) -> Result<(), Self::Error>;
}

/// Errors from [`MirroredStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MirrorError<E> {
    /// The address is past the end of the page.
    OutOfRange,
    /// Programming the page failed. The RAM copy is unchanged.
    Flash(E),
}

/// [`SettingsStore`] over an `N`-byte [`PageFlash`] page.
pub struct MirroredStore<F, const N: usize> {
    flash: F,
    page: [u8; N],
}

impl<F: PageFlash, const N: usize> MirroredStore<F, N> {
    /// `contents` is the page as currently stored in flash.
    pub fn new(flash: F, contents: [u8; N]) -> Self {
        Self { flash, page: contents }
    }

    fn store(&mut self, address: u16, bytes: &[u8]) -> Result<(), MirrorError<F::Error>> {
        let start = address as usize;
        let end = start + bytes.len();
        let current = self.page.get(start..end).ok_or(MirrorError::OutOfRange)?;
        if current == bytes {
            return Ok(());
        }

        let mut updated = self.page;
        updated[start..end].copy_from_slice(bytes);
        self.flash.program(&updated).map_err(MirrorError::Flash)?;
        self.page = updated;
        Ok(())
    }
}

impl<F: PageFlash, const N: usize> SettingsStore for MirroredStore<F, N> {
    type Error = MirrorError<F::Error>;

    fn load_byte(&mut self, address: u16) -> Result<u8, Self::Error> {
        self.page
            .get(address as usize)
            .copied()
            .ok_or(MirrorError::OutOfRange)
    }

    fn save_byte(&mut self, address: u16, value: u8) -> Result<(), Self::Error> {
        self.store(address, &[value])
    }

    fn save_word(&mut self, address: u16, value: u16) -> Result<(), Self::Error> {
        self.store(address, &value.to_le_bytes())
    }
}
