use std::cell::Cell;
use std::rc::Rc;

use dmg_core::gameboy::GameBoy;
use dmg_core::ppu::{Mode, Ppu, SCREEN_WIDTH};

const LINE_CYCLES: u32 = 456;
const VISIBLE_LINES: u32 = 144;

#[test]
fn mode_machine_walks_one_scanline() {
    let mut ppu = Ppu::new();
    assert_eq!(ppu.mode(), Mode::OamScan);
    assert_eq!(ppu.scanline(), 0);

    ppu.advance(80);
    assert_eq!(ppu.mode(), Mode::VramRead);
    assert_eq!(ppu.mode_clock(), 0);

    ppu.advance(172);
    assert_eq!(ppu.mode(), Mode::HBlank);

    ppu.advance(204);
    assert_eq!(ppu.scanline(), 1);
    assert_eq!(ppu.mode(), Mode::OamScan);
    assert_eq!(ppu.mode_clock(), 0);
}

#[test]
fn frame_cadence_fires_exactly_one_notification() {
    let mut ppu = Ppu::new();
    let seen = Rc::new(Cell::new(0u32));
    let seen_by_observer = Rc::clone(&seen);
    ppu.register_observer(move || seen_by_observer.set(seen_by_observer.get() + 1));

    ppu.advance(LINE_CYCLES * VISIBLE_LINES);
    assert_eq!(ppu.mode(), Mode::VBlank);
    assert_eq!(seen.get(), 1);
    assert_eq!(ppu.frames(), 1);

    // The ten blanking lines complete the 154-line cycle.
    ppu.advance(LINE_CYCLES * 10);
    assert_eq!(ppu.scanline(), 0);
    assert_eq!(ppu.mode(), Mode::OamScan);
    assert_eq!(seen.get(), 1);

    ppu.advance(LINE_CYCLES * VISIBLE_LINES);
    assert_eq!(seen.get(), 2);
}

#[test]
fn ly_write_resets_the_scanline_counter() {
    let mut ppu = Ppu::new();
    ppu.advance(LINE_CYCLES);
    assert_eq!(ppu.scanline(), 1);

    ppu.write_byte(0xFF44, 0x55).unwrap();
    assert_eq!(ppu.scanline(), 0);
}

#[test]
fn display_registers_read_back() {
    let mut ppu = Ppu::new();
    ppu.write_byte(0xFF40, 0x91).unwrap();
    ppu.write_byte(0xFF42, 0x12).unwrap();
    ppu.write_byte(0xFF43, 0x34).unwrap();
    ppu.write_byte(0xFF47, 0xE4).unwrap();
    assert_eq!(ppu.read_byte(0xFF40).unwrap(), 0x91);
    assert_eq!(ppu.read_byte(0xFF42).unwrap(), 0x12);
    assert_eq!(ppu.read_byte(0xFF43).unwrap(), 0x34);
    assert_eq!(ppu.read_byte(0xFF47).unwrap(), 0xE4);
    assert_eq!(ppu.lcd_control(), 0x91);
    assert_eq!(ppu.background_palette(), 0xE4);
}

/// Identity palette: colour index n maps to shade n.
const IDENTITY_PALETTE: u8 = 0b1110_0100;

/// Install one tile whose first row decodes to the shades 0,1,2,3,0,1,2,3
/// and point the first tilemap cell at it.
fn install_test_tile(gb: &mut GameBoy) {
    // Tile 1, row 0: low plane 0x55, high plane 0x33.
    gb.mmu.write_byte(0x8010, 0x55).unwrap();
    gb.mmu.write_byte(0x8011, 0x33).unwrap();
    gb.mmu.write_byte(0x9800, 0x01).unwrap();
    // Unsigned tile addressing.
    gb.mmu.write_byte(0xFF40, 0x10).unwrap();
    gb.mmu.write_byte(0xFF47, IDENTITY_PALETTE).unwrap();
}

fn render_one_frame(gb: &mut GameBoy) {
    gb.mmu.ppu.advance(LINE_CYCLES * VISIBLE_LINES);
}

#[test]
fn scanline_combines_both_tile_planes_through_the_palette() {
    let mut gb = GameBoy::new();
    install_test_tile(&mut gb);
    render_one_frame(&mut gb);

    let fb = gb.framebuffer();
    assert_eq!(&fb[0..8], &[0, 1, 2, 3, 0, 1, 2, 3]);
    // The rest of the row comes from tile 0, which is blank.
    assert!(fb[8..SCREEN_WIDTH].iter().all(|&px| px == 0));
}

#[test]
fn palette_remaps_colour_indices() {
    let mut gb = GameBoy::new();
    install_test_tile(&mut gb);
    // Reversed palette: index n maps to shade 3 - n.
    gb.mmu.write_byte(0xFF47, 0b0001_1011).unwrap();
    render_one_frame(&mut gb);

    assert_eq!(&gb.framebuffer()[0..8], &[3, 2, 1, 0, 3, 2, 1, 0]);
}

#[test]
fn signed_tile_addressing_counts_down_from_the_shared_half() {
    let mut gb = GameBoy::new();
    // Tile -1 lives just below the signed base: 0x9000 - 16 = 0x8FF0.
    gb.mmu.write_byte(0x8FF0, 0xFF).unwrap();
    gb.mmu.write_byte(0x8FF1, 0xFF).unwrap();
    gb.mmu.write_byte(0x9800, 0xFF).unwrap();
    // LCDC bit 4 clear selects signed addressing.
    gb.mmu.write_byte(0xFF40, 0x00).unwrap();
    gb.mmu.write_byte(0xFF47, IDENTITY_PALETTE).unwrap();
    render_one_frame(&mut gb);

    assert_eq!(&gb.framebuffer()[0..8], &[3; 8]);
}

#[test]
fn scroll_x_offsets_into_the_tile_row() {
    let mut gb = GameBoy::new();
    install_test_tile(&mut gb);
    gb.mmu.write_byte(0xFF43, 4).unwrap();
    render_one_frame(&mut gb);

    // The first four pixels come from the second half of tile 1's row;
    // after that the fetcher advances to blank tile 0.
    assert_eq!(&gb.framebuffer()[0..8], &[0, 1, 2, 3, 0, 0, 0, 0]);
}

#[test]
fn scroll_y_selects_a_lower_tilemap_row() {
    let mut gb = GameBoy::new();
    // Put the test tile in tilemap row 1 instead of row 0.
    gb.mmu.write_byte(0x8010, 0x55).unwrap();
    gb.mmu.write_byte(0x8011, 0x33).unwrap();
    gb.mmu.write_byte(0x9820, 0x01).unwrap();
    gb.mmu.write_byte(0xFF40, 0x10).unwrap();
    gb.mmu.write_byte(0xFF42, 8).unwrap();
    gb.mmu.write_byte(0xFF47, IDENTITY_PALETTE).unwrap();
    render_one_frame(&mut gb);

    assert_eq!(&gb.framebuffer()[0..8], &[0, 1, 2, 3, 0, 1, 2, 3]);
}

#[test]
fn tilemap_one_is_selected_by_lcdc_bit_3() {
    let mut gb = GameBoy::new();
    gb.mmu.write_byte(0x8010, 0xFF).unwrap();
    gb.mmu.write_byte(0x8011, 0x00).unwrap();
    gb.mmu.write_byte(0x9C00, 0x01).unwrap();
    gb.mmu.write_byte(0xFF40, 0x18).unwrap();
    gb.mmu.write_byte(0xFF47, IDENTITY_PALETTE).unwrap();
    render_one_frame(&mut gb);

    assert_eq!(&gb.framebuffer()[0..8], &[1; 8]);
}

#[test]
fn front_buffer_only_changes_at_the_vblank_swap() {
    let mut gb = GameBoy::new();
    install_test_tile(&mut gb);

    // Render a handful of scanlines; the work buffer has content but the
    // front buffer must stay blank until the frame completes.
    gb.mmu.ppu.advance(LINE_CYCLES * 4);
    assert!(gb.framebuffer().iter().all(|&px| px == 0));

    gb.mmu.ppu.advance(LINE_CYCLES * (VISIBLE_LINES - 4));
    assert_eq!(&gb.framebuffer()[0..8], &[0, 1, 2, 3, 0, 1, 2, 3]);
}

#[test]
fn mode_clock_only_advances_through_the_step_interface() {
    let mut gb = GameBoy::new();
    // Writing display registers never disturbs timing state.
    gb.mmu.write_byte(0xFF40, 0x91).unwrap();
    gb.mmu.write_byte(0xFF42, 0x07).unwrap();
    assert_eq!(gb.mmu.ppu.mode_clock(), 0);
    assert_eq!(gb.mmu.ppu.mode(), Mode::OamScan);
}
