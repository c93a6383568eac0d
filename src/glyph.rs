//! Segment patterns for the characters a 7-segment digit can show.
//!
//! Bits are active-high in memory (`1` = lit). Output bindings apply the
//! wiring's real polarity when they drive the pins.
//!
//! ```text
//!    A
//!  F   B
//!    G
//!  E   C
//!    D   DP
//! ```

/// Constants and lookups for 7-segment LED glyphs.
pub struct Leds;

impl Leds {
    /// Segment A of the 7-segment display.
    pub const SEG_A: u8 = 0b_0000_0001;
    /// Segment B of the 7-segment display.
    pub const SEG_B: u8 = 0b_0000_0010;
    /// Segment C of the 7-segment display.
    pub const SEG_C: u8 = 0b_0000_0100;
    /// Segment D of the 7-segment display.
    pub const SEG_D: u8 = 0b_0000_1000;
    /// Segment E of the 7-segment display.
    pub const SEG_E: u8 = 0b_0001_0000;
    /// Segment F of the 7-segment display.
    pub const SEG_F: u8 = 0b_0010_0000;
    /// Segment G of the 7-segment display.
    pub const SEG_G: u8 = 0b_0100_0000;
    /// Decimal point of the 7-segment display.
    pub const DECIMAL: u8 = 0b_1000_0000;

    /// Nothing lit. Reserved for the space character.
    pub const BLANK: u8 = 0b_0000_0000;

    /// A question mark with its decimal point lit. Never produced by a table glyph.
    pub const ERROR: u8 = Self::SEG_A | Self::SEG_B | Self::SEG_G | Self::SEG_E | Self::DECIMAL;

    /// The character that lights the decimal point of the previous digit.
    pub const DECIMAL_POINT: char = '.';

    /// The character used as the degree marker.
    pub const DEGREE: char = '*';

    /// Every displayable character and its segment pattern. Each pattern appears once.
    const GLYPHS: [(char, u8); 33] = [
        ('0', 0b_0011_1111),
        ('1', 0b_0000_0110),
        ('2', 0b_0101_1011),
        ('3', 0b_0100_1111),
        ('4', 0b_0110_0110),
        ('5', 0b_0110_1101),
        ('6', 0b_0111_1101),
        ('7', 0b_0000_0111),
        ('8', 0b_0111_1111),
        ('9', 0b_0110_1111),
        (' ', Self::BLANK),
        ('-', Self::SEG_G),
        ('_', Self::SEG_D),
        (Self::DEGREE, Self::SEG_A | Self::SEG_B | Self::SEG_F | Self::SEG_G),
        ('A', 0b_0111_0111),
        ('b', 0b_0111_1100),
        ('C', 0b_0011_1001),
        ('c', 0b_0101_1000),
        ('d', 0b_0101_1110),
        ('E', 0b_0111_1001),
        ('F', 0b_0111_0001),
        ('H', 0b_0111_0110),
        ('h', 0b_0111_0100),
        ('J', 0b_0001_1110),
        ('L', 0b_0011_1000),
        ('n', 0b_0101_0100),
        ('o', 0b_0101_1100),
        ('P', 0b_0111_0011),
        ('r', 0b_0101_0000),
        ('t', 0b_0111_1000),
        ('U', 0b_0011_1110),
        ('u', 0b_0001_1100),
        ('y', 0b_0110_1110),
    ];

    /// Returns the segment pattern for `glyph`, or `None` if it cannot be shown.
    #[must_use]
    pub fn bits(glyph: char) -> Option<u8> {
        Self::GLYPHS
            .iter()
            .find(|&&(candidate, _)| candidate == glyph)
            .map(|&(_, bits)| bits)
    }

    /// Returns the character whose pattern is `bits`, ignoring the decimal point.
    #[must_use]
    pub fn glyph(bits: u8) -> Option<char> {
        let bits = bits & !Self::DECIMAL;
        Self::GLYPHS
            .iter()
            .find(|&&(_, candidate)| candidate == bits)
            .map(|&(glyph, _)| glyph)
    }

    /// Iterates over every supported character.
    pub fn glyphs() -> impl Iterator<Item = char> {
        Self::GLYPHS.iter().map(|&(glyph, _)| glyph)
    }
}
