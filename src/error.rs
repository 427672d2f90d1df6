use thiserror::Error;

/// Fatal conditions raised while emulating.
///
/// Emulation is a deterministic replay of fixed code, so either variant
/// indicates an unimplemented feature or a genuine defect. The core never
/// retries or recovers; errors surface synchronously to the caller of
/// [`Cpu::step`](crate::cpu::Cpu::step) or of the router accessors, and the
/// host decides whether to halt or inspect-and-resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An opcode byte with no entry in its dispatch table was fetched.
    /// `addr` is the address the byte was fetched from; for extended
    /// opcodes it is the address of the byte following the 0xCB escape.
    #[error("unimplemented instruction {opcode:#04X} at {addr:#06X}")]
    UnimplementedInstruction { opcode: u8, addr: u16 },

    /// An address decoded to no mapped region, or to a display-window
    /// register the PPU does not recognize.
    #[error("invalid memory access at {addr:#06X}")]
    InvalidMemoryAccess { addr: u16 },
}
