use log::{debug, trace};

use crate::error::CoreError;
use crate::memory::MemoryRegion;
use crate::ppu::Ppu;

/// Address-space router.
///
/// Owns the non-display memory regions and decodes every 16-bit address to
/// exactly one destination, delegating the VRAM, OAM, and register windows
/// to the [`Ppu`]. The boot overlay shadows the low 256 bytes of ROM until
/// execution first reaches 0x0100, after which it unmaps itself for the
/// rest of the session.
pub struct Mmu {
    boot: MemoryRegion,
    rom: MemoryRegion,
    external_ram: MemoryRegion,
    working_ram: MemoryRegion,
    zero_page: MemoryRegion,
    boot_mapped: bool,
    boot_loaded: bool,
    pub ppu: Ppu,
}

impl Mmu {
    pub fn new() -> Self {
        Self {
            boot: MemoryRegion::new(0x0000, 0x00FF, "boot"),
            rom: MemoryRegion::new(0x0000, 0x7FFF, "rom"),
            external_ram: MemoryRegion::new(0xA000, 0xBFFF, "external ram"),
            working_ram: MemoryRegion::new(0xC000, 0xDFFF, "working ram"),
            zero_page: MemoryRegion::new(0xFF80, 0xFFFF, "zero page"),
            boot_mapped: false,
            boot_loaded: false,
            ppu: Ppu::new(),
        }
    }

    /// Bulk-copy a cartridge image into the ROM region. The fixed mapper
    /// has no banking; anything past 0x8000 bytes is ignored.
    pub fn load_rom(&mut self, data: &[u8]) {
        self.rom.load(data);
    }

    /// Bulk-copy a boot image into the overlay region and map it over the
    /// low 256 bytes of ROM.
    pub fn load_boot_rom(&mut self, data: &[u8]) {
        self.boot.load(data);
        self.boot_mapped = true;
        self.boot_loaded = true;
    }

    /// True while the boot overlay still shadows 0x0000-0x00FF.
    pub fn boot_mapped(&self) -> bool {
        self.boot_mapped
    }

    /// Reset RAM regions and the display unit, preserving loaded ROM and
    /// boot images. The overlay is re-mapped if one was loaded.
    pub fn reset(&mut self) {
        self.external_ram.clear();
        self.working_ram.clear();
        self.zero_page.clear();
        self.ppu.reset();
        self.boot_mapped = self.boot_loaded;
    }

    pub fn read_byte(&mut self, addr: u16) -> Result<u8, CoreError> {
        match addr {
            0x0000..=0x00FF if self.boot_mapped => Ok(self.boot.read(addr)),
            0x0100..=0x0FFF if self.boot_mapped => {
                // First access past the overlay: the boot sequence is done
                // and the cartridge header becomes visible.
                self.unmap_boot(addr);
                Ok(self.rom.read(addr))
            }
            0x0000..=0x7FFF => Ok(self.rom.read(addr)),
            0x8000..=0x9FFF => self.ppu.read_byte(addr),
            0xA000..=0xBFFF => Ok(self.external_ram.read(addr)),
            0xC000..=0xDFFF => Ok(self.working_ram.read(addr)),
            // Echo of working RAM
            0xE000..=0xFDFF => Ok(self.working_ram.read(addr - 0x2000)),
            0xFE00..=0xFE9F => self.ppu.read_byte(addr),
            0xFEA0..=0xFEFF => Err(CoreError::InvalidMemoryAccess { addr }),
            0xFF00..=0xFF7F => self.ppu.read_byte(addr),
            0xFF80..=0xFFFF => Ok(self.zero_page.read(addr)),
        }
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) -> Result<(), CoreError> {
        match addr {
            0x0100..=0x0FFF if self.boot_mapped => {
                self.unmap_boot(addr);
                trace!("ignored write of {value:#04X} to rom at {addr:#06X}");
                Ok(())
            }
            // ROM (and the overlay shadowing it) is read-only to the
            // engine; the bulk loaders are the only writers.
            0x0000..=0x7FFF => {
                trace!("ignored write of {value:#04X} to rom at {addr:#06X}");
                Ok(())
            }
            0x8000..=0x9FFF => self.ppu.write_byte(addr, value),
            0xA000..=0xBFFF => {
                self.external_ram.write(addr, value);
                Ok(())
            }
            0xC000..=0xDFFF => {
                self.working_ram.write(addr, value);
                Ok(())
            }
            0xE000..=0xFDFF => {
                self.working_ram.write(addr - 0x2000, value);
                Ok(())
            }
            0xFE00..=0xFE9F => self.ppu.write_byte(addr, value),
            0xFEA0..=0xFEFF => Err(CoreError::InvalidMemoryAccess { addr }),
            0xFF00..=0xFF7F => self.ppu.write_byte(addr, value),
            0xFF80..=0xFFFF => {
                self.zero_page.write(addr, value);
                Ok(())
            }
        }
    }

    /// Little-endian word read: low byte at `addr`, high byte at `addr + 1`.
    /// A pair entirely inside one display window goes through the display
    /// unit's word accessor.
    pub fn read_word(&mut self, addr: u16) -> Result<u16, CoreError> {
        let next = addr.wrapping_add(1);
        if Ppu::owns(addr) && Ppu::owns(next) {
            return self.ppu.read_word(addr);
        }
        let lo = self.read_byte(addr)? as u16;
        let hi = self.read_byte(next)? as u16;
        Ok((hi << 8) | lo)
    }

    /// Little-endian word write, the inverse of [`read_word`](Self::read_word).
    pub fn write_word(&mut self, addr: u16, value: u16) -> Result<(), CoreError> {
        let next = addr.wrapping_add(1);
        if Ppu::owns(addr) && Ppu::owns(next) {
            return self.ppu.write_word(addr, value);
        }
        self.write_byte(addr, value as u8)?;
        self.write_byte(next, (value >> 8) as u8)
    }

    fn unmap_boot(&mut self, addr: u16) {
        self.boot_mapped = false;
        debug!("boot overlay unmapped on access to {addr:#06X}");
    }
}

impl Default for Mmu {
    fn default() -> Self {
        Self::new()
    }
}
