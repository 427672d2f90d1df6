use dmg_core::gameboy::GameBoy;

/// Build a machine with `program` placed at the cartridge entry point
/// (0x0100) and the program counter already there, boot overlay bypassed.
#[allow(dead_code)]
pub fn gb_with_program(program: &[u8]) -> GameBoy {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
    let mut gb = GameBoy::new();
    gb.load_rom(&rom);
    gb.cpu.pc = 0x0100;
    gb
}

#[allow(dead_code)]
pub fn step_n(gb: &mut GameBoy, n: usize) {
    for _ in 0..n {
        gb.step().expect("step failed");
    }
}
