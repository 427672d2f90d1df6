//! Opcode dispatch tables.
//!
//! Two fixed 256-entry arrays, indexed directly by opcode byte: one for the
//! primary instruction set and one for the 0xCB-prefixed extended set.
//! Entries are immutable after construction; a missing entry is a fatal
//! [`UnimplementedInstruction`](CoreError::UnimplementedInstruction) at
//! dispatch time. Handlers are plain function pointers into the engine's
//! generalized instruction methods, parameterized by register and condition
//! enums rather than by shared register objects.

use crate::cpu::{Condition, Cpu, Operand, R8, R16};
use crate::error::CoreError;
use crate::mmu::Mmu;

/// Escape byte selecting the extended opcode table.
pub const EXTENDED_ESCAPE: u8 = 0xCB;

pub type OpHandler = fn(&mut Cpu, &mut Mmu) -> Result<(), CoreError>;

/// One dispatch-table entry.
#[derive(Clone, Copy)]
pub struct OpCode {
    pub mnemonic: &'static str,
    pub handler: OpHandler,
    /// Cost in fine-clock units when the instruction runs to completion.
    pub base_cycles: u8,
    /// Cost billed instead when a conditional branch is not taken.
    pub reduced_cycles: u8,
}

/// Fixed array of optional entries, indexed by opcode byte.
pub struct OpcodeTable {
    entries: [Option<OpCode>; 256],
}

impl OpcodeTable {
    fn new() -> Self {
        Self {
            entries: [None; 256],
        }
    }

    #[inline]
    pub fn get(&self, opcode: u8) -> Option<&OpCode> {
        self.entries[opcode as usize].as_ref()
    }

    /// Register an unconditional instruction; the reduced cost equals the
    /// base cost so conditional billing is a no-op for it.
    fn op(&mut self, opcode: u8, mnemonic: &'static str, handler: OpHandler, cycles: u8) {
        self.entries[opcode as usize] = Some(OpCode {
            mnemonic,
            handler,
            base_cycles: cycles,
            reduced_cycles: cycles,
        });
    }

    /// Register a conditional instruction with a separate not-taken cost.
    fn cond(
        &mut self,
        opcode: u8,
        mnemonic: &'static str,
        handler: OpHandler,
        base_cycles: u8,
        reduced_cycles: u8,
    ) {
        self.entries[opcode as usize] = Some(OpCode {
            mnemonic,
            handler,
            base_cycles,
            reduced_cycles,
        });
    }
}

/// Build the primary instruction table.
///
/// Deliberately absent, and therefore fatal at dispatch: HALT, STOP, DAA,
/// RETI, ADD SP e8, LD HL SP+e8, and the opcodes the hardware leaves
/// undefined. 0xCB never reaches this table; the dispatcher consumes it as
/// the extended-table escape.
pub fn primary() -> OpcodeTable {
    use Condition::*;
    use Operand::*;
    use R8::*;
    use R16::*;

    let mut t = OpcodeTable::new();

    t.op(0x00, "NOP", |_, _| Ok(()), 4);
    t.op(0x01, "LD BC, nn", |c, m| c.ld_pair_imm(m, BC), 12);
    t.op(0x02, "LD (BC), A", |c, m| c.ld_to_pair(m, BC, A), 8);
    t.op(0x03, "INC BC", |c, m| c.inc_pair(m, BC), 8);
    t.op(0x04, "INC B", |c, m| c.inc(m, Reg(B)), 4);
    t.op(0x05, "DEC B", |c, m| c.dec(m, Reg(B)), 4);
    t.op(0x06, "LD B, n", |c, m| c.ld_imm(m, Reg(B)), 8);
    t.op(0x07, "RLCA", |c, m| c.rlca(m), 4);
    t.op(0x08, "LD (nn), SP", |c, m| c.ld_imm_addr_sp(m), 20);
    t.op(0x09, "ADD HL, BC", |c, m| c.add_hl_pair(m, BC), 8);
    t.op(0x0A, "LD A, (BC)", |c, m| c.ld_from_pair(m, A, BC), 8);
    t.op(0x0B, "DEC BC", |c, m| c.dec_pair(m, BC), 8);
    t.op(0x0C, "INC C", |c, m| c.inc(m, Reg(C)), 4);
    t.op(0x0D, "DEC C", |c, m| c.dec(m, Reg(C)), 4);
    t.op(0x0E, "LD C, n", |c, m| c.ld_imm(m, Reg(C)), 8);
    t.op(0x0F, "RRCA", |c, m| c.rrca(m), 4);
    t.op(0x11, "LD DE, nn", |c, m| c.ld_pair_imm(m, DE), 12);
    t.op(0x12, "LD (DE), A", |c, m| c.ld_to_pair(m, DE, A), 8);
    t.op(0x13, "INC DE", |c, m| c.inc_pair(m, DE), 8);
    t.op(0x14, "INC D", |c, m| c.inc(m, Reg(D)), 4);
    t.op(0x15, "DEC D", |c, m| c.dec(m, Reg(D)), 4);
    t.op(0x16, "LD D, n", |c, m| c.ld_imm(m, Reg(D)), 8);
    t.op(0x17, "RLA", |c, m| c.rla(m), 4);
    t.op(0x18, "JR n", |c, m| c.jump_relative(m, None), 12);
    t.op(0x19, "ADD HL, DE", |c, m| c.add_hl_pair(m, DE), 8);
    t.op(0x1A, "LD A, (DE)", |c, m| c.ld_from_pair(m, A, DE), 8);
    t.op(0x1B, "DEC DE", |c, m| c.dec_pair(m, DE), 8);
    t.op(0x1C, "INC E", |c, m| c.inc(m, Reg(E)), 4);
    t.op(0x1D, "DEC E", |c, m| c.dec(m, Reg(E)), 4);
    t.op(0x1E, "LD E, n", |c, m| c.ld_imm(m, Reg(E)), 8);
    t.op(0x1F, "RRA", |c, m| c.rra(m), 4);
    t.cond(0x20, "JR NZ, n", |c, m| c.jump_relative(m, Some(NotZero)), 12, 8);
    t.op(0x21, "LD HL, nn", |c, m| c.ld_pair_imm(m, HL), 12);
    t.op(0x22, "LDI (HL), A", |c, m| c.ld_hl_inc_a(m), 8);
    t.op(0x23, "INC HL", |c, m| c.inc_pair(m, HL), 8);
    t.op(0x24, "INC H", |c, m| c.inc(m, Reg(H)), 4);
    t.op(0x25, "DEC H", |c, m| c.dec(m, Reg(H)), 4);
    t.op(0x26, "LD H, n", |c, m| c.ld_imm(m, Reg(H)), 8);
    t.cond(0x28, "JR Z, n", |c, m| c.jump_relative(m, Some(Zero)), 12, 8);
    t.op(0x29, "ADD HL, HL", |c, m| c.add_hl_pair(m, HL), 8);
    t.op(0x2A, "LD A, (HL+)", |c, m| c.ld_a_hl_inc(m), 8);
    t.op(0x2B, "DEC HL", |c, m| c.dec_pair(m, HL), 8);
    t.op(0x2C, "INC L", |c, m| c.inc(m, Reg(L)), 4);
    t.op(0x2D, "DEC L", |c, m| c.dec(m, Reg(L)), 4);
    t.op(0x2E, "LD L, n", |c, m| c.ld_imm(m, Reg(L)), 8);
    t.op(0x2F, "CPL", |c, m| c.cpl(m), 4);
    t.cond(0x30, "JR NC, n", |c, m| c.jump_relative(m, Some(NotCarry)), 12, 8);
    t.op(0x31, "LD SP, nn", |c, m| c.ld_sp_imm(m), 12);
    t.op(0x32, "LDD (HL), A", |c, m| c.ld_hl_dec_a(m), 8);
    t.op(0x33, "INC SP", |c, m| c.inc_sp(m), 8);
    t.op(0x34, "INC (HL)", |c, m| c.inc(m, HlIndirect), 12);
    t.op(0x35, "DEC (HL)", |c, m| c.dec(m, HlIndirect), 12);
    t.op(0x36, "LD (HL), n", |c, m| c.ld_imm(m, HlIndirect), 12);
    t.op(0x37, "SCF", |c, m| c.scf(m), 4);
    t.cond(0x38, "JR C, n", |c, m| c.jump_relative(m, Some(Carry)), 12, 8);
    t.op(0x39, "ADD HL, SP", |c, m| c.add_hl_sp(m), 8);
    t.op(0x3A, "LD A, (HL-)", |c, m| c.ld_a_hl_dec(m), 8);
    t.op(0x3B, "DEC SP", |c, m| c.dec_sp(m), 8);
    t.op(0x3C, "INC A", |c, m| c.inc(m, Reg(A)), 4);
    t.op(0x3D, "DEC A", |c, m| c.dec(m, Reg(A)), 4);
    t.op(0x3E, "LD A, n", |c, m| c.ld_imm(m, Reg(A)), 8);
    t.op(0x3F, "CCF", |c, m| c.ccf(m), 4);

    t.op(0x40, "LD B, B", |c, m| c.ld(m, Reg(B), Reg(B)), 4);
    t.op(0x41, "LD B, C", |c, m| c.ld(m, Reg(B), Reg(C)), 4);
    t.op(0x42, "LD B, D", |c, m| c.ld(m, Reg(B), Reg(D)), 4);
    t.op(0x43, "LD B, E", |c, m| c.ld(m, Reg(B), Reg(E)), 4);
    t.op(0x44, "LD B, H", |c, m| c.ld(m, Reg(B), Reg(H)), 4);
    t.op(0x45, "LD B, L", |c, m| c.ld(m, Reg(B), Reg(L)), 4);
    t.op(0x46, "LD B, (HL)", |c, m| c.ld(m, Reg(B), HlIndirect), 8);
    t.op(0x47, "LD B, A", |c, m| c.ld(m, Reg(B), Reg(A)), 4);
    t.op(0x48, "LD C, B", |c, m| c.ld(m, Reg(C), Reg(B)), 4);
    t.op(0x49, "LD C, C", |c, m| c.ld(m, Reg(C), Reg(C)), 4);
    t.op(0x4A, "LD C, D", |c, m| c.ld(m, Reg(C), Reg(D)), 4);
    t.op(0x4B, "LD C, E", |c, m| c.ld(m, Reg(C), Reg(E)), 4);
    t.op(0x4C, "LD C, H", |c, m| c.ld(m, Reg(C), Reg(H)), 4);
    t.op(0x4D, "LD C, L", |c, m| c.ld(m, Reg(C), Reg(L)), 4);
    t.op(0x4E, "LD C, (HL)", |c, m| c.ld(m, Reg(C), HlIndirect), 8);
    t.op(0x4F, "LD C, A", |c, m| c.ld(m, Reg(C), Reg(A)), 4);
    t.op(0x50, "LD D, B", |c, m| c.ld(m, Reg(D), Reg(B)), 4);
    t.op(0x51, "LD D, C", |c, m| c.ld(m, Reg(D), Reg(C)), 4);
    t.op(0x52, "LD D, D", |c, m| c.ld(m, Reg(D), Reg(D)), 4);
    t.op(0x53, "LD D, E", |c, m| c.ld(m, Reg(D), Reg(E)), 4);
    t.op(0x54, "LD D, H", |c, m| c.ld(m, Reg(D), Reg(H)), 4);
    t.op(0x55, "LD D, L", |c, m| c.ld(m, Reg(D), Reg(L)), 4);
    t.op(0x56, "LD D, (HL)", |c, m| c.ld(m, Reg(D), HlIndirect), 8);
    t.op(0x57, "LD D, A", |c, m| c.ld(m, Reg(D), Reg(A)), 4);
    t.op(0x58, "LD E, B", |c, m| c.ld(m, Reg(E), Reg(B)), 4);
    t.op(0x59, "LD E, C", |c, m| c.ld(m, Reg(E), Reg(C)), 4);
    t.op(0x5A, "LD E, D", |c, m| c.ld(m, Reg(E), Reg(D)), 4);
    t.op(0x5B, "LD E, E", |c, m| c.ld(m, Reg(E), Reg(E)), 4);
    t.op(0x5C, "LD E, H", |c, m| c.ld(m, Reg(E), Reg(H)), 4);
    t.op(0x5D, "LD E, L", |c, m| c.ld(m, Reg(E), Reg(L)), 4);
    t.op(0x5E, "LD E, (HL)", |c, m| c.ld(m, Reg(E), HlIndirect), 8);
    t.op(0x5F, "LD E, A", |c, m| c.ld(m, Reg(E), Reg(A)), 4);
    t.op(0x60, "LD H, B", |c, m| c.ld(m, Reg(H), Reg(B)), 4);
    t.op(0x61, "LD H, C", |c, m| c.ld(m, Reg(H), Reg(C)), 4);
    t.op(0x62, "LD H, D", |c, m| c.ld(m, Reg(H), Reg(D)), 4);
    t.op(0x63, "LD H, E", |c, m| c.ld(m, Reg(H), Reg(E)), 4);
    t.op(0x64, "LD H, H", |c, m| c.ld(m, Reg(H), Reg(H)), 4);
    t.op(0x65, "LD H, L", |c, m| c.ld(m, Reg(H), Reg(L)), 4);
    t.op(0x66, "LD H, (HL)", |c, m| c.ld(m, Reg(H), HlIndirect), 8);
    t.op(0x67, "LD H, A", |c, m| c.ld(m, Reg(H), Reg(A)), 4);
    t.op(0x68, "LD L, B", |c, m| c.ld(m, Reg(L), Reg(B)), 4);
    t.op(0x69, "LD L, C", |c, m| c.ld(m, Reg(L), Reg(C)), 4);
    t.op(0x6A, "LD L, D", |c, m| c.ld(m, Reg(L), Reg(D)), 4);
    t.op(0x6B, "LD L, E", |c, m| c.ld(m, Reg(L), Reg(E)), 4);
    t.op(0x6C, "LD L, H", |c, m| c.ld(m, Reg(L), Reg(H)), 4);
    t.op(0x6D, "LD L, L", |c, m| c.ld(m, Reg(L), Reg(L)), 4);
    t.op(0x6E, "LD L, (HL)", |c, m| c.ld(m, Reg(L), HlIndirect), 8);
    t.op(0x6F, "LD L, A", |c, m| c.ld(m, Reg(L), Reg(A)), 4);
    t.op(0x70, "LD (HL), B", |c, m| c.ld(m, HlIndirect, Reg(B)), 8);
    t.op(0x71, "LD (HL), C", |c, m| c.ld(m, HlIndirect, Reg(C)), 8);
    t.op(0x72, "LD (HL), D", |c, m| c.ld(m, HlIndirect, Reg(D)), 8);
    t.op(0x73, "LD (HL), E", |c, m| c.ld(m, HlIndirect, Reg(E)), 8);
    t.op(0x74, "LD (HL), H", |c, m| c.ld(m, HlIndirect, Reg(H)), 8);
    t.op(0x75, "LD (HL), L", |c, m| c.ld(m, HlIndirect, Reg(L)), 8);
    t.op(0x77, "LD (HL), A", |c, m| c.ld(m, HlIndirect, Reg(A)), 8);
    t.op(0x78, "LD A, B", |c, m| c.ld(m, Reg(A), Reg(B)), 4);
    t.op(0x79, "LD A, C", |c, m| c.ld(m, Reg(A), Reg(C)), 4);
    t.op(0x7A, "LD A, D", |c, m| c.ld(m, Reg(A), Reg(D)), 4);
    t.op(0x7B, "LD A, E", |c, m| c.ld(m, Reg(A), Reg(E)), 4);
    t.op(0x7C, "LD A, H", |c, m| c.ld(m, Reg(A), Reg(H)), 4);
    t.op(0x7D, "LD A, L", |c, m| c.ld(m, Reg(A), Reg(L)), 4);
    t.op(0x7E, "LD A, (HL)", |c, m| c.ld(m, Reg(A), HlIndirect), 8);
    t.op(0x7F, "LD A, A", |c, m| c.ld(m, Reg(A), Reg(A)), 4);
    t.op(0x80, "ADD A, B", |c, m| c.add(m, Reg(B)), 4);
    t.op(0x81, "ADD A, C", |c, m| c.add(m, Reg(C)), 4);
    t.op(0x82, "ADD A, D", |c, m| c.add(m, Reg(D)), 4);
    t.op(0x83, "ADD A, E", |c, m| c.add(m, Reg(E)), 4);
    t.op(0x84, "ADD A, H", |c, m| c.add(m, Reg(H)), 4);
    t.op(0x85, "ADD A, L", |c, m| c.add(m, Reg(L)), 4);
    t.op(0x86, "ADD A, (HL)", |c, m| c.add(m, HlIndirect), 8);
    t.op(0x87, "ADD A, A", |c, m| c.add(m, Reg(A)), 4);
    t.op(0x88, "ADC A, B", |c, m| c.adc(m, Reg(B)), 4);
    t.op(0x89, "ADC A, C", |c, m| c.adc(m, Reg(C)), 4);
    t.op(0x8A, "ADC A, D", |c, m| c.adc(m, Reg(D)), 4);
    t.op(0x8B, "ADC A, E", |c, m| c.adc(m, Reg(E)), 4);
    t.op(0x8C, "ADC A, H", |c, m| c.adc(m, Reg(H)), 4);
    t.op(0x8D, "ADC A, L", |c, m| c.adc(m, Reg(L)), 4);
    t.op(0x8E, "ADC A, (HL)", |c, m| c.adc(m, HlIndirect), 8);
    t.op(0x8F, "ADC A, A", |c, m| c.adc(m, Reg(A)), 4);
    t.op(0x90, "SUB B", |c, m| c.sub(m, Reg(B)), 4);
    t.op(0x91, "SUB C", |c, m| c.sub(m, Reg(C)), 4);
    t.op(0x92, "SUB D", |c, m| c.sub(m, Reg(D)), 4);
    t.op(0x93, "SUB E", |c, m| c.sub(m, Reg(E)), 4);
    t.op(0x94, "SUB H", |c, m| c.sub(m, Reg(H)), 4);
    t.op(0x95, "SUB L", |c, m| c.sub(m, Reg(L)), 4);
    t.op(0x96, "SUB (HL)", |c, m| c.sub(m, HlIndirect), 8);
    t.op(0x97, "SUB A", |c, m| c.sub(m, Reg(A)), 4);
    t.op(0x98, "SBC A, B", |c, m| c.sbc(m, Reg(B)), 4);
    t.op(0x99, "SBC A, C", |c, m| c.sbc(m, Reg(C)), 4);
    t.op(0x9A, "SBC A, D", |c, m| c.sbc(m, Reg(D)), 4);
    t.op(0x9B, "SBC A, E", |c, m| c.sbc(m, Reg(E)), 4);
    t.op(0x9C, "SBC A, H", |c, m| c.sbc(m, Reg(H)), 4);
    t.op(0x9D, "SBC A, L", |c, m| c.sbc(m, Reg(L)), 4);
    t.op(0x9E, "SBC A, (HL)", |c, m| c.sbc(m, HlIndirect), 8);
    t.op(0x9F, "SBC A, A", |c, m| c.sbc(m, Reg(A)), 4);
    t.op(0xA0, "AND B", |c, m| c.and(m, Reg(B)), 4);
    t.op(0xA1, "AND C", |c, m| c.and(m, Reg(C)), 4);
    t.op(0xA2, "AND D", |c, m| c.and(m, Reg(D)), 4);
    t.op(0xA3, "AND E", |c, m| c.and(m, Reg(E)), 4);
    t.op(0xA4, "AND H", |c, m| c.and(m, Reg(H)), 4);
    t.op(0xA5, "AND L", |c, m| c.and(m, Reg(L)), 4);
    t.op(0xA6, "AND (HL)", |c, m| c.and(m, HlIndirect), 8);
    t.op(0xA7, "AND A", |c, m| c.and(m, Reg(A)), 4);
    t.op(0xA8, "XOR B", |c, m| c.xor(m, Reg(B)), 4);
    t.op(0xA9, "XOR C", |c, m| c.xor(m, Reg(C)), 4);
    t.op(0xAA, "XOR D", |c, m| c.xor(m, Reg(D)), 4);
    t.op(0xAB, "XOR E", |c, m| c.xor(m, Reg(E)), 4);
    t.op(0xAC, "XOR H", |c, m| c.xor(m, Reg(H)), 4);
    t.op(0xAD, "XOR L", |c, m| c.xor(m, Reg(L)), 4);
    t.op(0xAE, "XOR (HL)", |c, m| c.xor(m, HlIndirect), 8);
    t.op(0xAF, "XOR A", |c, m| c.xor(m, Reg(A)), 4);
    t.op(0xB0, "OR B", |c, m| c.or(m, Reg(B)), 4);
    t.op(0xB1, "OR C", |c, m| c.or(m, Reg(C)), 4);
    t.op(0xB2, "OR D", |c, m| c.or(m, Reg(D)), 4);
    t.op(0xB3, "OR E", |c, m| c.or(m, Reg(E)), 4);
    t.op(0xB4, "OR H", |c, m| c.or(m, Reg(H)), 4);
    t.op(0xB5, "OR L", |c, m| c.or(m, Reg(L)), 4);
    t.op(0xB6, "OR (HL)", |c, m| c.or(m, HlIndirect), 8);
    t.op(0xB7, "OR A", |c, m| c.or(m, Reg(A)), 4);
    t.op(0xB8, "CP B", |c, m| c.cp(m, Reg(B)), 4);
    t.op(0xB9, "CP C", |c, m| c.cp(m, Reg(C)), 4);
    t.op(0xBA, "CP D", |c, m| c.cp(m, Reg(D)), 4);
    t.op(0xBB, "CP E", |c, m| c.cp(m, Reg(E)), 4);
    t.op(0xBC, "CP H", |c, m| c.cp(m, Reg(H)), 4);
    t.op(0xBD, "CP L", |c, m| c.cp(m, Reg(L)), 4);
    t.op(0xBE, "CP (HL)", |c, m| c.cp(m, HlIndirect), 8);
    t.op(0xBF, "CP A", |c, m| c.cp(m, Reg(A)), 4);
    t.cond(0xC0, "RET NZ", |c, m| c.ret(m, Some(NotZero)), 20, 8);
    t.op(0xC1, "POP BC", |c, m| c.pop_pair(m, BC), 12);
    t.cond(0xC2, "JP NZ, nn", |c, m| c.jump_absolute(m, Some(NotZero)), 16, 12);
    t.op(0xC3, "JP nn", |c, m| c.jump_absolute(m, None), 16);
    t.cond(0xC4, "CALL NZ, nn", |c, m| c.call(m, Some(NotZero)), 24, 12);
    t.op(0xC5, "PUSH BC", |c, m| c.push_pair(m, BC), 16);
    t.op(0xC6, "ADD A, n", |c, m| c.add_imm(m), 8);
    t.op(0xC7, "RST 00H", |c, m| c.rst(m, 0x0000), 16);
    t.cond(0xC8, "RET Z", |c, m| c.ret(m, Some(Zero)), 20, 8);
    t.op(0xC9, "RET", |c, m| c.ret(m, None), 16);
    t.cond(0xCA, "JP Z, nn", |c, m| c.jump_absolute(m, Some(Zero)), 16, 12);
    t.cond(0xCC, "CALL Z, nn", |c, m| c.call(m, Some(Zero)), 24, 12);
    t.op(0xCD, "CALL nn", |c, m| c.call(m, None), 24);
    t.op(0xCE, "ADC A, n", |c, m| c.adc_imm(m), 8);
    t.op(0xCF, "RST 08H", |c, m| c.rst(m, 0x0008), 16);
    t.cond(0xD0, "RET NC", |c, m| c.ret(m, Some(NotCarry)), 20, 8);
    t.op(0xD1, "POP DE", |c, m| c.pop_pair(m, DE), 12);
    t.cond(0xD2, "JP NC, nn", |c, m| c.jump_absolute(m, Some(NotCarry)), 16, 12);
    t.cond(0xD4, "CALL NC, nn", |c, m| c.call(m, Some(NotCarry)), 24, 12);
    t.op(0xD5, "PUSH DE", |c, m| c.push_pair(m, DE), 16);
    t.op(0xD6, "SUB n", |c, m| c.sub_imm(m), 8);
    t.op(0xD7, "RST 10H", |c, m| c.rst(m, 0x0010), 16);
    t.cond(0xD8, "RET C", |c, m| c.ret(m, Some(Carry)), 20, 8);
    t.cond(0xDA, "JP C, nn", |c, m| c.jump_absolute(m, Some(Carry)), 16, 12);
    t.cond(0xDC, "CALL C, nn", |c, m| c.call(m, Some(Carry)), 24, 12);
    t.op(0xDE, "SBC A, n", |c, m| c.sbc_imm(m), 8);
    t.op(0xDF, "RST 18H", |c, m| c.rst(m, 0x0018), 16);
    t.op(0xE0, "LDH (n), A", |c, m| c.ldh_imm_a(m), 12);
    t.op(0xE1, "POP HL", |c, m| c.pop_pair(m, HL), 12);
    t.op(0xE2, "LDH (C), A", |c, m| c.ldh_c_a(m), 8);
    t.op(0xE5, "PUSH HL", |c, m| c.push_pair(m, HL), 16);
    t.op(0xE6, "AND n", |c, m| c.and_imm(m), 8);
    t.op(0xE7, "RST 20H", |c, m| c.rst(m, 0x0020), 16);
    t.op(0xE9, "JP (HL)", |c, m| c.jump_hl(m), 4);
    t.op(0xEA, "LD (nn), A", |c, m| c.ld_to_imm_addr(m, A), 16);
    t.op(0xEE, "XOR n", |c, m| c.xor_imm(m), 8);
    t.op(0xEF, "RST 28H", |c, m| c.rst(m, 0x0028), 16);
    t.op(0xF0, "LDH A, (n)", |c, m| c.ldh_a_imm(m), 12);
    t.op(0xF1, "POP AF", |c, m| c.pop_af(m), 12);
    t.op(0xF2, "LDH A, (C)", |c, m| c.ldh_a_c(m), 8);
    t.op(0xF3, "DI", |c, m| c.set_interrupts_enabled(m, false), 4);
    t.op(0xF5, "PUSH AF", |c, m| c.push_af(m), 16);
    t.op(0xF6, "OR n", |c, m| c.or_imm(m), 8);
    t.op(0xF7, "RST 30H", |c, m| c.rst(m, 0x0030), 16);
    t.op(0xF9, "LD SP, HL", |c, m| c.ld_sp_hl(m), 8);
    t.op(0xFA, "LD A, (nn)", |c, m| c.ld_from_imm_addr(m, A), 16);
    t.op(0xFB, "EI", |c, m| c.set_interrupts_enabled(m, true), 4);
    t.op(0xFE, "CP n", |c, m| c.cp_imm(m), 8);
    t.op(0xFF, "RST 38H", |c, m| c.rst(m, 0x0038), 16);

    t
}

/// Build the extended (0xCB-prefixed) table: rotates, shifts, swap, and the
/// single-bit test/reset/set families, for every register operand and (HL).
pub fn extended() -> OpcodeTable {
    use Operand::*;
    use R8::*;

    let mut t = OpcodeTable::new();

    t.op(0x00, "RLC B", |c, m| c.rlc(m, Reg(B)), 8);
    t.op(0x01, "RLC C", |c, m| c.rlc(m, Reg(C)), 8);
    t.op(0x02, "RLC D", |c, m| c.rlc(m, Reg(D)), 8);
    t.op(0x03, "RLC E", |c, m| c.rlc(m, Reg(E)), 8);
    t.op(0x04, "RLC H", |c, m| c.rlc(m, Reg(H)), 8);
    t.op(0x05, "RLC L", |c, m| c.rlc(m, Reg(L)), 8);
    t.op(0x06, "RLC (HL)", |c, m| c.rlc(m, HlIndirect), 16);
    t.op(0x07, "RLC A", |c, m| c.rlc(m, Reg(A)), 8);
    t.op(0x08, "RRC B", |c, m| c.rrc(m, Reg(B)), 8);
    t.op(0x09, "RRC C", |c, m| c.rrc(m, Reg(C)), 8);
    t.op(0x0A, "RRC D", |c, m| c.rrc(m, Reg(D)), 8);
    t.op(0x0B, "RRC E", |c, m| c.rrc(m, Reg(E)), 8);
    t.op(0x0C, "RRC H", |c, m| c.rrc(m, Reg(H)), 8);
    t.op(0x0D, "RRC L", |c, m| c.rrc(m, Reg(L)), 8);
    t.op(0x0E, "RRC (HL)", |c, m| c.rrc(m, HlIndirect), 16);
    t.op(0x0F, "RRC A", |c, m| c.rrc(m, Reg(A)), 8);
    t.op(0x10, "RL B", |c, m| c.rl(m, Reg(B)), 8);
    t.op(0x11, "RL C", |c, m| c.rl(m, Reg(C)), 8);
    t.op(0x12, "RL D", |c, m| c.rl(m, Reg(D)), 8);
    t.op(0x13, "RL E", |c, m| c.rl(m, Reg(E)), 8);
    t.op(0x14, "RL H", |c, m| c.rl(m, Reg(H)), 8);
    t.op(0x15, "RL L", |c, m| c.rl(m, Reg(L)), 8);
    t.op(0x16, "RL (HL)", |c, m| c.rl(m, HlIndirect), 16);
    t.op(0x17, "RL A", |c, m| c.rl(m, Reg(A)), 8);
    t.op(0x18, "RR B", |c, m| c.rr(m, Reg(B)), 8);
    t.op(0x19, "RR C", |c, m| c.rr(m, Reg(C)), 8);
    t.op(0x1A, "RR D", |c, m| c.rr(m, Reg(D)), 8);
    t.op(0x1B, "RR E", |c, m| c.rr(m, Reg(E)), 8);
    t.op(0x1C, "RR H", |c, m| c.rr(m, Reg(H)), 8);
    t.op(0x1D, "RR L", |c, m| c.rr(m, Reg(L)), 8);
    t.op(0x1E, "RR (HL)", |c, m| c.rr(m, HlIndirect), 16);
    t.op(0x1F, "RR A", |c, m| c.rr(m, Reg(A)), 8);
    t.op(0x20, "SLA B", |c, m| c.sla(m, Reg(B)), 8);
    t.op(0x21, "SLA C", |c, m| c.sla(m, Reg(C)), 8);
    t.op(0x22, "SLA D", |c, m| c.sla(m, Reg(D)), 8);
    t.op(0x23, "SLA E", |c, m| c.sla(m, Reg(E)), 8);
    t.op(0x24, "SLA H", |c, m| c.sla(m, Reg(H)), 8);
    t.op(0x25, "SLA L", |c, m| c.sla(m, Reg(L)), 8);
    t.op(0x26, "SLA (HL)", |c, m| c.sla(m, HlIndirect), 16);
    t.op(0x27, "SLA A", |c, m| c.sla(m, Reg(A)), 8);
    t.op(0x28, "SRA B", |c, m| c.sra(m, Reg(B)), 8);
    t.op(0x29, "SRA C", |c, m| c.sra(m, Reg(C)), 8);
    t.op(0x2A, "SRA D", |c, m| c.sra(m, Reg(D)), 8);
    t.op(0x2B, "SRA E", |c, m| c.sra(m, Reg(E)), 8);
    t.op(0x2C, "SRA H", |c, m| c.sra(m, Reg(H)), 8);
    t.op(0x2D, "SRA L", |c, m| c.sra(m, Reg(L)), 8);
    t.op(0x2E, "SRA (HL)", |c, m| c.sra(m, HlIndirect), 16);
    t.op(0x2F, "SRA A", |c, m| c.sra(m, Reg(A)), 8);
    t.op(0x30, "SWAP B", |c, m| c.swap(m, Reg(B)), 8);
    t.op(0x31, "SWAP C", |c, m| c.swap(m, Reg(C)), 8);
    t.op(0x32, "SWAP D", |c, m| c.swap(m, Reg(D)), 8);
    t.op(0x33, "SWAP E", |c, m| c.swap(m, Reg(E)), 8);
    t.op(0x34, "SWAP H", |c, m| c.swap(m, Reg(H)), 8);
    t.op(0x35, "SWAP L", |c, m| c.swap(m, Reg(L)), 8);
    t.op(0x36, "SWAP (HL)", |c, m| c.swap(m, HlIndirect), 16);
    t.op(0x37, "SWAP A", |c, m| c.swap(m, Reg(A)), 8);
    t.op(0x38, "SRL B", |c, m| c.srl(m, Reg(B)), 8);
    t.op(0x39, "SRL C", |c, m| c.srl(m, Reg(C)), 8);
    t.op(0x3A, "SRL D", |c, m| c.srl(m, Reg(D)), 8);
    t.op(0x3B, "SRL E", |c, m| c.srl(m, Reg(E)), 8);
    t.op(0x3C, "SRL H", |c, m| c.srl(m, Reg(H)), 8);
    t.op(0x3D, "SRL L", |c, m| c.srl(m, Reg(L)), 8);
    t.op(0x3E, "SRL (HL)", |c, m| c.srl(m, HlIndirect), 16);
    t.op(0x3F, "SRL A", |c, m| c.srl(m, Reg(A)), 8);
    t.op(0x40, "BIT 0, B", |c, m| c.bit(m, 0, Reg(B)), 8);
    t.op(0x41, "BIT 0, C", |c, m| c.bit(m, 0, Reg(C)), 8);
    t.op(0x42, "BIT 0, D", |c, m| c.bit(m, 0, Reg(D)), 8);
    t.op(0x43, "BIT 0, E", |c, m| c.bit(m, 0, Reg(E)), 8);
    t.op(0x44, "BIT 0, H", |c, m| c.bit(m, 0, Reg(H)), 8);
    t.op(0x45, "BIT 0, L", |c, m| c.bit(m, 0, Reg(L)), 8);
    t.op(0x46, "BIT 0, (HL)", |c, m| c.bit(m, 0, HlIndirect), 12);
    t.op(0x47, "BIT 0, A", |c, m| c.bit(m, 0, Reg(A)), 8);
    t.op(0x48, "BIT 1, B", |c, m| c.bit(m, 1, Reg(B)), 8);
    t.op(0x49, "BIT 1, C", |c, m| c.bit(m, 1, Reg(C)), 8);
    t.op(0x4A, "BIT 1, D", |c, m| c.bit(m, 1, Reg(D)), 8);
    t.op(0x4B, "BIT 1, E", |c, m| c.bit(m, 1, Reg(E)), 8);
    t.op(0x4C, "BIT 1, H", |c, m| c.bit(m, 1, Reg(H)), 8);
    t.op(0x4D, "BIT 1, L", |c, m| c.bit(m, 1, Reg(L)), 8);
    t.op(0x4E, "BIT 1, (HL)", |c, m| c.bit(m, 1, HlIndirect), 12);
    t.op(0x4F, "BIT 1, A", |c, m| c.bit(m, 1, Reg(A)), 8);
    t.op(0x50, "BIT 2, B", |c, m| c.bit(m, 2, Reg(B)), 8);
    t.op(0x51, "BIT 2, C", |c, m| c.bit(m, 2, Reg(C)), 8);
    t.op(0x52, "BIT 2, D", |c, m| c.bit(m, 2, Reg(D)), 8);
    t.op(0x53, "BIT 2, E", |c, m| c.bit(m, 2, Reg(E)), 8);
    t.op(0x54, "BIT 2, H", |c, m| c.bit(m, 2, Reg(H)), 8);
    t.op(0x55, "BIT 2, L", |c, m| c.bit(m, 2, Reg(L)), 8);
    t.op(0x56, "BIT 2, (HL)", |c, m| c.bit(m, 2, HlIndirect), 12);
    t.op(0x57, "BIT 2, A", |c, m| c.bit(m, 2, Reg(A)), 8);
    t.op(0x58, "BIT 3, B", |c, m| c.bit(m, 3, Reg(B)), 8);
    t.op(0x59, "BIT 3, C", |c, m| c.bit(m, 3, Reg(C)), 8);
    t.op(0x5A, "BIT 3, D", |c, m| c.bit(m, 3, Reg(D)), 8);
    t.op(0x5B, "BIT 3, E", |c, m| c.bit(m, 3, Reg(E)), 8);
    t.op(0x5C, "BIT 3, H", |c, m| c.bit(m, 3, Reg(H)), 8);
    t.op(0x5D, "BIT 3, L", |c, m| c.bit(m, 3, Reg(L)), 8);
    t.op(0x5E, "BIT 3, (HL)", |c, m| c.bit(m, 3, HlIndirect), 12);
    t.op(0x5F, "BIT 3, A", |c, m| c.bit(m, 3, Reg(A)), 8);
    t.op(0x60, "BIT 4, B", |c, m| c.bit(m, 4, Reg(B)), 8);
    t.op(0x61, "BIT 4, C", |c, m| c.bit(m, 4, Reg(C)), 8);
    t.op(0x62, "BIT 4, D", |c, m| c.bit(m, 4, Reg(D)), 8);
    t.op(0x63, "BIT 4, E", |c, m| c.bit(m, 4, Reg(E)), 8);
    t.op(0x64, "BIT 4, H", |c, m| c.bit(m, 4, Reg(H)), 8);
    t.op(0x65, "BIT 4, L", |c, m| c.bit(m, 4, Reg(L)), 8);
    t.op(0x66, "BIT 4, (HL)", |c, m| c.bit(m, 4, HlIndirect), 12);
    t.op(0x67, "BIT 4, A", |c, m| c.bit(m, 4, Reg(A)), 8);
    t.op(0x68, "BIT 5, B", |c, m| c.bit(m, 5, Reg(B)), 8);
    t.op(0x69, "BIT 5, C", |c, m| c.bit(m, 5, Reg(C)), 8);
    t.op(0x6A, "BIT 5, D", |c, m| c.bit(m, 5, Reg(D)), 8);
    t.op(0x6B, "BIT 5, E", |c, m| c.bit(m, 5, Reg(E)), 8);
    t.op(0x6C, "BIT 5, H", |c, m| c.bit(m, 5, Reg(H)), 8);
    t.op(0x6D, "BIT 5, L", |c, m| c.bit(m, 5, Reg(L)), 8);
    t.op(0x6E, "BIT 5, (HL)", |c, m| c.bit(m, 5, HlIndirect), 12);
    t.op(0x6F, "BIT 5, A", |c, m| c.bit(m, 5, Reg(A)), 8);
    t.op(0x70, "BIT 6, B", |c, m| c.bit(m, 6, Reg(B)), 8);
    t.op(0x71, "BIT 6, C", |c, m| c.bit(m, 6, Reg(C)), 8);
    t.op(0x72, "BIT 6, D", |c, m| c.bit(m, 6, Reg(D)), 8);
    t.op(0x73, "BIT 6, E", |c, m| c.bit(m, 6, Reg(E)), 8);
    t.op(0x74, "BIT 6, H", |c, m| c.bit(m, 6, Reg(H)), 8);
    t.op(0x75, "BIT 6, L", |c, m| c.bit(m, 6, Reg(L)), 8);
    t.op(0x76, "BIT 6, (HL)", |c, m| c.bit(m, 6, HlIndirect), 12);
    t.op(0x77, "BIT 6, A", |c, m| c.bit(m, 6, Reg(A)), 8);
    t.op(0x78, "BIT 7, B", |c, m| c.bit(m, 7, Reg(B)), 8);
    t.op(0x79, "BIT 7, C", |c, m| c.bit(m, 7, Reg(C)), 8);
    t.op(0x7A, "BIT 7, D", |c, m| c.bit(m, 7, Reg(D)), 8);
    t.op(0x7B, "BIT 7, E", |c, m| c.bit(m, 7, Reg(E)), 8);
    t.op(0x7C, "BIT 7, H", |c, m| c.bit(m, 7, Reg(H)), 8);
    t.op(0x7D, "BIT 7, L", |c, m| c.bit(m, 7, Reg(L)), 8);
    t.op(0x7E, "BIT 7, (HL)", |c, m| c.bit(m, 7, HlIndirect), 12);
    t.op(0x7F, "BIT 7, A", |c, m| c.bit(m, 7, Reg(A)), 8);
    t.op(0x80, "RES 0, B", |c, m| c.res(m, 0, Reg(B)), 8);
    t.op(0x81, "RES 0, C", |c, m| c.res(m, 0, Reg(C)), 8);
    t.op(0x82, "RES 0, D", |c, m| c.res(m, 0, Reg(D)), 8);
    t.op(0x83, "RES 0, E", |c, m| c.res(m, 0, Reg(E)), 8);
    t.op(0x84, "RES 0, H", |c, m| c.res(m, 0, Reg(H)), 8);
    t.op(0x85, "RES 0, L", |c, m| c.res(m, 0, Reg(L)), 8);
    t.op(0x86, "RES 0, (HL)", |c, m| c.res(m, 0, HlIndirect), 16);
    t.op(0x87, "RES 0, A", |c, m| c.res(m, 0, Reg(A)), 8);
    t.op(0x88, "RES 1, B", |c, m| c.res(m, 1, Reg(B)), 8);
    t.op(0x89, "RES 1, C", |c, m| c.res(m, 1, Reg(C)), 8);
    t.op(0x8A, "RES 1, D", |c, m| c.res(m, 1, Reg(D)), 8);
    t.op(0x8B, "RES 1, E", |c, m| c.res(m, 1, Reg(E)), 8);
    t.op(0x8C, "RES 1, H", |c, m| c.res(m, 1, Reg(H)), 8);
    t.op(0x8D, "RES 1, L", |c, m| c.res(m, 1, Reg(L)), 8);
    t.op(0x8E, "RES 1, (HL)", |c, m| c.res(m, 1, HlIndirect), 16);
    t.op(0x8F, "RES 1, A", |c, m| c.res(m, 1, Reg(A)), 8);
    t.op(0x90, "RES 2, B", |c, m| c.res(m, 2, Reg(B)), 8);
    t.op(0x91, "RES 2, C", |c, m| c.res(m, 2, Reg(C)), 8);
    t.op(0x92, "RES 2, D", |c, m| c.res(m, 2, Reg(D)), 8);
    t.op(0x93, "RES 2, E", |c, m| c.res(m, 2, Reg(E)), 8);
    t.op(0x94, "RES 2, H", |c, m| c.res(m, 2, Reg(H)), 8);
    t.op(0x95, "RES 2, L", |c, m| c.res(m, 2, Reg(L)), 8);
    t.op(0x96, "RES 2, (HL)", |c, m| c.res(m, 2, HlIndirect), 16);
    t.op(0x97, "RES 2, A", |c, m| c.res(m, 2, Reg(A)), 8);
    t.op(0x98, "RES 3, B", |c, m| c.res(m, 3, Reg(B)), 8);
    t.op(0x99, "RES 3, C", |c, m| c.res(m, 3, Reg(C)), 8);
    t.op(0x9A, "RES 3, D", |c, m| c.res(m, 3, Reg(D)), 8);
    t.op(0x9B, "RES 3, E", |c, m| c.res(m, 3, Reg(E)), 8);
    t.op(0x9C, "RES 3, H", |c, m| c.res(m, 3, Reg(H)), 8);
    t.op(0x9D, "RES 3, L", |c, m| c.res(m, 3, Reg(L)), 8);
    t.op(0x9E, "RES 3, (HL)", |c, m| c.res(m, 3, HlIndirect), 16);
    t.op(0x9F, "RES 3, A", |c, m| c.res(m, 3, Reg(A)), 8);
    t.op(0xA0, "RES 4, B", |c, m| c.res(m, 4, Reg(B)), 8);
    t.op(0xA1, "RES 4, C", |c, m| c.res(m, 4, Reg(C)), 8);
    t.op(0xA2, "RES 4, D", |c, m| c.res(m, 4, Reg(D)), 8);
    t.op(0xA3, "RES 4, E", |c, m| c.res(m, 4, Reg(E)), 8);
    t.op(0xA4, "RES 4, H", |c, m| c.res(m, 4, Reg(H)), 8);
    t.op(0xA5, "RES 4, L", |c, m| c.res(m, 4, Reg(L)), 8);
    t.op(0xA6, "RES 4, (HL)", |c, m| c.res(m, 4, HlIndirect), 16);
    t.op(0xA7, "RES 4, A", |c, m| c.res(m, 4, Reg(A)), 8);
    t.op(0xA8, "RES 5, B", |c, m| c.res(m, 5, Reg(B)), 8);
    t.op(0xA9, "RES 5, C", |c, m| c.res(m, 5, Reg(C)), 8);
    t.op(0xAA, "RES 5, D", |c, m| c.res(m, 5, Reg(D)), 8);
    t.op(0xAB, "RES 5, E", |c, m| c.res(m, 5, Reg(E)), 8);
    t.op(0xAC, "RES 5, H", |c, m| c.res(m, 5, Reg(H)), 8);
    t.op(0xAD, "RES 5, L", |c, m| c.res(m, 5, Reg(L)), 8);
    t.op(0xAE, "RES 5, (HL)", |c, m| c.res(m, 5, HlIndirect), 16);
    t.op(0xAF, "RES 5, A", |c, m| c.res(m, 5, Reg(A)), 8);
    t.op(0xB0, "RES 6, B", |c, m| c.res(m, 6, Reg(B)), 8);
    t.op(0xB1, "RES 6, C", |c, m| c.res(m, 6, Reg(C)), 8);
    t.op(0xB2, "RES 6, D", |c, m| c.res(m, 6, Reg(D)), 8);
    t.op(0xB3, "RES 6, E", |c, m| c.res(m, 6, Reg(E)), 8);
    t.op(0xB4, "RES 6, H", |c, m| c.res(m, 6, Reg(H)), 8);
    t.op(0xB5, "RES 6, L", |c, m| c.res(m, 6, Reg(L)), 8);
    t.op(0xB6, "RES 6, (HL)", |c, m| c.res(m, 6, HlIndirect), 16);
    t.op(0xB7, "RES 6, A", |c, m| c.res(m, 6, Reg(A)), 8);
    t.op(0xB8, "RES 7, B", |c, m| c.res(m, 7, Reg(B)), 8);
    t.op(0xB9, "RES 7, C", |c, m| c.res(m, 7, Reg(C)), 8);
    t.op(0xBA, "RES 7, D", |c, m| c.res(m, 7, Reg(D)), 8);
    t.op(0xBB, "RES 7, E", |c, m| c.res(m, 7, Reg(E)), 8);
    t.op(0xBC, "RES 7, H", |c, m| c.res(m, 7, Reg(H)), 8);
    t.op(0xBD, "RES 7, L", |c, m| c.res(m, 7, Reg(L)), 8);
    t.op(0xBE, "RES 7, (HL)", |c, m| c.res(m, 7, HlIndirect), 16);
    t.op(0xBF, "RES 7, A", |c, m| c.res(m, 7, Reg(A)), 8);
    t.op(0xC0, "SET 0, B", |c, m| c.set(m, 0, Reg(B)), 8);
    t.op(0xC1, "SET 0, C", |c, m| c.set(m, 0, Reg(C)), 8);
    t.op(0xC2, "SET 0, D", |c, m| c.set(m, 0, Reg(D)), 8);
    t.op(0xC3, "SET 0, E", |c, m| c.set(m, 0, Reg(E)), 8);
    t.op(0xC4, "SET 0, H", |c, m| c.set(m, 0, Reg(H)), 8);
    t.op(0xC5, "SET 0, L", |c, m| c.set(m, 0, Reg(L)), 8);
    t.op(0xC6, "SET 0, (HL)", |c, m| c.set(m, 0, HlIndirect), 16);
    t.op(0xC7, "SET 0, A", |c, m| c.set(m, 0, Reg(A)), 8);
    t.op(0xC8, "SET 1, B", |c, m| c.set(m, 1, Reg(B)), 8);
    t.op(0xC9, "SET 1, C", |c, m| c.set(m, 1, Reg(C)), 8);
    t.op(0xCA, "SET 1, D", |c, m| c.set(m, 1, Reg(D)), 8);
    t.op(0xCB, "SET 1, E", |c, m| c.set(m, 1, Reg(E)), 8);
    t.op(0xCC, "SET 1, H", |c, m| c.set(m, 1, Reg(H)), 8);
    t.op(0xCD, "SET 1, L", |c, m| c.set(m, 1, Reg(L)), 8);
    t.op(0xCE, "SET 1, (HL)", |c, m| c.set(m, 1, HlIndirect), 16);
    t.op(0xCF, "SET 1, A", |c, m| c.set(m, 1, Reg(A)), 8);
    t.op(0xD0, "SET 2, B", |c, m| c.set(m, 2, Reg(B)), 8);
    t.op(0xD1, "SET 2, C", |c, m| c.set(m, 2, Reg(C)), 8);
    t.op(0xD2, "SET 2, D", |c, m| c.set(m, 2, Reg(D)), 8);
    t.op(0xD3, "SET 2, E", |c, m| c.set(m, 2, Reg(E)), 8);
    t.op(0xD4, "SET 2, H", |c, m| c.set(m, 2, Reg(H)), 8);
    t.op(0xD5, "SET 2, L", |c, m| c.set(m, 2, Reg(L)), 8);
    t.op(0xD6, "SET 2, (HL)", |c, m| c.set(m, 2, HlIndirect), 16);
    t.op(0xD7, "SET 2, A", |c, m| c.set(m, 2, Reg(A)), 8);
    t.op(0xD8, "SET 3, B", |c, m| c.set(m, 3, Reg(B)), 8);
    t.op(0xD9, "SET 3, C", |c, m| c.set(m, 3, Reg(C)), 8);
    t.op(0xDA, "SET 3, D", |c, m| c.set(m, 3, Reg(D)), 8);
    t.op(0xDB, "SET 3, E", |c, m| c.set(m, 3, Reg(E)), 8);
    t.op(0xDC, "SET 3, H", |c, m| c.set(m, 3, Reg(H)), 8);
    t.op(0xDD, "SET 3, L", |c, m| c.set(m, 3, Reg(L)), 8);
    t.op(0xDE, "SET 3, (HL)", |c, m| c.set(m, 3, HlIndirect), 16);
    t.op(0xDF, "SET 3, A", |c, m| c.set(m, 3, Reg(A)), 8);
    t.op(0xE0, "SET 4, B", |c, m| c.set(m, 4, Reg(B)), 8);
    t.op(0xE1, "SET 4, C", |c, m| c.set(m, 4, Reg(C)), 8);
    t.op(0xE2, "SET 4, D", |c, m| c.set(m, 4, Reg(D)), 8);
    t.op(0xE3, "SET 4, E", |c, m| c.set(m, 4, Reg(E)), 8);
    t.op(0xE4, "SET 4, H", |c, m| c.set(m, 4, Reg(H)), 8);
    t.op(0xE5, "SET 4, L", |c, m| c.set(m, 4, Reg(L)), 8);
    t.op(0xE6, "SET 4, (HL)", |c, m| c.set(m, 4, HlIndirect), 16);
    t.op(0xE7, "SET 4, A", |c, m| c.set(m, 4, Reg(A)), 8);
    t.op(0xE8, "SET 5, B", |c, m| c.set(m, 5, Reg(B)), 8);
    t.op(0xE9, "SET 5, C", |c, m| c.set(m, 5, Reg(C)), 8);
    t.op(0xEA, "SET 5, D", |c, m| c.set(m, 5, Reg(D)), 8);
    t.op(0xEB, "SET 5, E", |c, m| c.set(m, 5, Reg(E)), 8);
    t.op(0xEC, "SET 5, H", |c, m| c.set(m, 5, Reg(H)), 8);
    t.op(0xED, "SET 5, L", |c, m| c.set(m, 5, Reg(L)), 8);
    t.op(0xEE, "SET 5, (HL)", |c, m| c.set(m, 5, HlIndirect), 16);
    t.op(0xEF, "SET 5, A", |c, m| c.set(m, 5, Reg(A)), 8);
    t.op(0xF0, "SET 6, B", |c, m| c.set(m, 6, Reg(B)), 8);
    t.op(0xF1, "SET 6, C", |c, m| c.set(m, 6, Reg(C)), 8);
    t.op(0xF2, "SET 6, D", |c, m| c.set(m, 6, Reg(D)), 8);
    t.op(0xF3, "SET 6, E", |c, m| c.set(m, 6, Reg(E)), 8);
    t.op(0xF4, "SET 6, H", |c, m| c.set(m, 6, Reg(H)), 8);
    t.op(0xF5, "SET 6, L", |c, m| c.set(m, 6, Reg(L)), 8);
    t.op(0xF6, "SET 6, (HL)", |c, m| c.set(m, 6, HlIndirect), 16);
    t.op(0xF7, "SET 6, A", |c, m| c.set(m, 6, Reg(A)), 8);
    t.op(0xF8, "SET 7, B", |c, m| c.set(m, 7, Reg(B)), 8);
    t.op(0xF9, "SET 7, C", |c, m| c.set(m, 7, Reg(C)), 8);
    t.op(0xFA, "SET 7, D", |c, m| c.set(m, 7, Reg(D)), 8);
    t.op(0xFB, "SET 7, E", |c, m| c.set(m, 7, Reg(E)), 8);
    t.op(0xFC, "SET 7, H", |c, m| c.set(m, 7, Reg(H)), 8);
    t.op(0xFD, "SET 7, L", |c, m| c.set(m, 7, Reg(L)), 8);
    t.op(0xFE, "SET 7, (HL)", |c, m| c.set(m, 7, HlIndirect), 16);
    t.op(0xFF, "SET 7, A", |c, m| c.set(m, 7, Reg(A)), 8);

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_table_is_fully_populated() {
        let t = extended();
        let count = (0u16..=255).filter(|&op| t.get(op as u8).is_some()).count();
        assert_eq!(count, 256);
    }

    #[test]
    fn primary_gaps_are_exactly_the_unsupported_opcodes() {
        let t = primary();
        let gaps: Vec<u8> = (0u16..=255)
            .map(|op| op as u8)
            .filter(|&op| t.get(op).is_none())
            .collect();
        assert_eq!(
            gaps,
            vec![
                0x10, 0x27, 0x76, 0xCB, 0xD3, 0xD9, 0xDB, 0xDD, 0xE3, 0xE4, 0xE8, 0xEB, 0xEC,
                0xED, 0xF4, 0xF8, 0xFC, 0xFD,
            ]
        );
    }

    #[test]
    fn conditional_entries_carry_distinct_reduced_costs() {
        let t = primary();
        let jr_nz = t.get(0x20).unwrap();
        assert_eq!((jr_nz.base_cycles, jr_nz.reduced_cycles), (12, 8));
        let call_z = t.get(0xCC).unwrap();
        assert_eq!((call_z.base_cycles, call_z.reduced_cycles), (24, 12));
        let nop = t.get(0x00).unwrap();
        assert_eq!(nop.base_cycles, nop.reduced_cycles);
    }
}
