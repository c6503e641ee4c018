//! Settings store in the last sector of the on-board QSPI flash.
//!
//! The first page of the sector is mirrored in RAM by [`MirroredStore`];
//! [`SectorFlash`] rewrites that page whenever a save changes it.

use defmt::*;
use embassy_rp::flash::{self, Blocking, Flash, ERASE_SIZE, WRITE_SIZE};
use embassy_rp::peripherals::FLASH;

use sidguts::control::{MirroredStore, PageFlash};

/// Pico 2 on-board flash size.
pub const FLASH_SIZE: usize = 4 * 1024 * 1024;

/// Offset of the settings sector from the start of flash.
const STORE_OFFSET: u32 = (FLASH_SIZE - ERASE_SIZE) as u32;

pub type FlashStore = MirroredStore<SectorFlash, WRITE_SIZE>;

/// The settings sector, erased and reprogrammed as a whole.
pub struct SectorFlash {
    flash: Flash<'static, FLASH, Blocking, FLASH_SIZE>,
}

impl PageFlash for SectorFlash {
    type Error = flash::Error;

    fn program(&mut self, page: &[u8]) -> Result<(), Self::Error> {
        let flash = &mut self.flash;
        critical_section::with(|_| {
            flash.blocking_erase(STORE_OFFSET, STORE_OFFSET + ERASE_SIZE as u32)?;
            flash.blocking_write(STORE_OFFSET, page)
        })?;
        debug!("settings committed to flash");
        Ok(())
    }
}

/// Read the settings page into RAM.
pub fn open(mut flash: Flash<'static, FLASH, Blocking, FLASH_SIZE>) -> Result<FlashStore, flash::Error> {
    let mut page = [0xFF; WRITE_SIZE];
    flash.blocking_read(STORE_OFFSET, &mut page)?;
    Ok(MirroredStore::new(SectorFlash { flash }, page))
}
