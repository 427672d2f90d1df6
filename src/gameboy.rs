use crate::cpu::Cpu;
use crate::error::CoreError;
use crate::mmu::Mmu;
use crate::ppu::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// A complete machine: execution engine plus router (which owns the
/// display unit).
///
/// The host paces emulation by calling [`step`](Self::step); there is no
/// internal queuing or suspension, and stopping is simply ceasing to call
/// it. Both fatal conditions propagate out of `step` unchanged.
pub struct GameBoy {
    pub cpu: Cpu,
    pub mmu: Mmu,
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            mmu: Mmu::new(),
        }
    }

    /// Bulk-copy a cartridge image into ROM.
    pub fn load_rom(&mut self, data: &[u8]) {
        self.mmu.load_rom(data);
    }

    /// Bulk-copy a boot image into the overlay and map it.
    pub fn load_boot_rom(&mut self, data: &[u8]) {
        self.mmu.load_boot_rom(data);
    }

    /// Execute one instruction, advancing the display clock by its cost.
    pub fn step(&mut self) -> Result<(), CoreError> {
        self.cpu.step(&mut self.mmu)
    }

    /// Step until the display unit presents the next frame.
    pub fn step_frame(&mut self) -> Result<(), CoreError> {
        let target = self.mmu.ppu.frames() + 1;
        while self.mmu.ppu.frames() < target {
            self.step()?;
        }
        Ok(())
    }

    /// Reset to the initial power-on state, preserving loaded ROM and boot
    /// images (and registered frame observers).
    pub fn reset(&mut self) {
        self.cpu = Cpu::new();
        self.mmu.reset();
    }

    /// Register a callback fired once per frame, on VBlank entry.
    pub fn register_frame_observer(&mut self, callback: impl FnMut() + 'static) {
        self.mmu.ppu.register_observer(callback);
    }

    /// The most recently presented frame.
    pub fn framebuffer(&self) -> &[u8; SCREEN_WIDTH * SCREEN_HEIGHT] {
        self.mmu.ppu.framebuffer()
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}
