//! Byte-level encoding for an HT16K33-driven 8x16 LED matrix.
//!
//! The controller's display RAM is addressed by column rather than by row:
//! RAM word `k` drives matrix column `k` in its low byte and column `k + 8`
//! in its high byte, with matrix row `i` on bit `i` of each byte. Nothing
//! here talks to a bus; the functions only produce the bytes a driver would
//! write over I2C.

use crate::grid::{COLS, ROWS};

/// Number of 16-bit words in the display RAM.
pub const RAM_WORDS: usize = 8;

/// Length of a full display write: address byte plus two bytes per word.
pub const PAYLOAD_LEN: usize = 1 + 2 * RAM_WORDS;

/// System setup command that starts the internal oscillator.
pub const OSCILLATOR_ON: u8 = 0x21;

const DISPLAY_SETUP: u8 = 0x80;
const DISPLAY_ON: u8 = 0x01;
const DIMMING_SET: u8 = 0xE0;
const MAX_BRIGHTNESS: u8 = 15;

/// Blink rates supported by the display setup register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Blink {
    #[default]
    Off,
    Hz2,
    Hz1,
    HalfHz,
}

impl Blink {
    fn rate_bits(self) -> u8 {
        match self {
            Blink::Off => 0,
            Blink::Hz2 => 1,
            Blink::Hz1 => 2,
            Blink::HalfHz => 3,
        }
    }
}

/// Map packed bitmap rows to display RAM words.
pub fn display_ram(rows: &[u16; ROWS]) -> [u16; RAM_WORDS] {
    let mut ram = [0u16; RAM_WORDS];
    for (row, &value) in rows.iter().enumerate() {
        for col in 0..COLS {
            if (value >> (COLS - 1 - col)) & 1 == 0 {
                continue;
            }
            let (word, bit) = if col < RAM_WORDS {
                (col, row)
            } else {
                (col - RAM_WORDS, row + 8)
            };
            ram[word] |= 1 << bit;
        }
    }
    ram
}

/// The full I2C write that loads `rows` into display RAM, starting at
/// address 0x00. Each word goes out low byte first.
pub fn write_display_payload(rows: &[u16; ROWS]) -> [u8; PAYLOAD_LEN] {
    let mut payload = [0u8; PAYLOAD_LEN];
    for (i, word) in display_ram(rows).iter().enumerate() {
        let [lo, hi] = word.to_le_bytes();
        payload[1 + 2 * i] = lo;
        payload[2 + 2 * i] = hi;
    }
    payload
}

/// Dimming command. Levels above 15 are clamped.
pub fn brightness_command(level: u8) -> u8 {
    DIMMING_SET | level.min(MAX_BRIGHTNESS)
}

/// Display setup command with the display on and the given blink rate.
pub fn blink_command(blink: Blink) -> u8 {
    DISPLAY_SETUP | DISPLAY_ON | (blink.rate_bits() << 1)
}

/// The writes a driver issues to bring the controller up: oscillator on,
/// blank display RAM, blink rate, then brightness.
pub fn init_sequence(brightness: u8, blink: Blink) -> Vec<Vec<u8>> {
    vec![
        vec![OSCILLATOR_ON],
        write_display_payload(&[0; ROWS]).to_vec(),
        vec![blink_command(blink)],
        vec![brightness_command(brightness)],
    ]
}
