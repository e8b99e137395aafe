//! Pastel slice colors.

/// Pinks, corals, and lilacs. Slice `i` uses `HUES[i % 12]`.
pub const HUES: [u16; 12] = [340, 350, 0, 10, 20, 330, 300, 280, 25, 15, 5, 355];

pub const SATURATION: u8 = 80;
pub const LIGHTNESS: u8 = 80;

/// CSS color for slice `index`.
pub fn pastel(index: usize) -> String {
    let hue = HUES[index % HUES.len()];
    format!("hsl({hue} {SATURATION}% {LIGHTNESS}%)")
}
