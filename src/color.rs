pub type Rgb = (u8, u8, u8);

pub const BLACK: Rgb = (0, 0, 0);
pub const WHITE: Rgb = (255, 255, 255);

// cornflower blue, coral, medium purple, hot pink, khaki,
// medium aquamarine, light salmon, turquoise, orchid, orange
pub const FIREWORK_COLORS: [Rgb; 10] = [
    (0x64, 0x95, 0xED),
    (0xFF, 0x7F, 0x50),
    (0x93, 0x70, 0xDB),
    (0xFF, 0x69, 0xB4),
    (0xF0, 0xE6, 0x8C),
    (0x66, 0xCD, 0xAA),
    (0xFF, 0xA0, 0x7A),
    (0x40, 0xE0, 0xD0),
    (0xDA, 0x70, 0xD6),
    (0xFF, 0xA5, 0x00),
];

pub fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}
