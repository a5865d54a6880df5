//! Digit sprite tables.
//!
//! Row-major bitmaps for `FrameBuffer::draw_sprite`: one byte per row,
//! leftmost pixel in the highest used bit. The 7x7 face is the large
//! info-page font; the 5x7 face labels the graph axis gridlines.

/// 7x7 digits for the info page temperature fields.
pub const DIGITS_7X7: [[u8; 7]; 10] = [
    // 0
    [
        0b0011100, 0b0100010, 0b1000001, 0b1000001, 0b1000001, 0b0100010, 0b0011100,
    ],
    // 1
    [
        0b0001000, 0b0011000, 0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0111110,
    ],
    // 2
    [
        0b0111110, 0b1000001, 0b0000001, 0b0011110, 0b0100000, 0b1000000, 0b1111111,
    ],
    // 3
    [
        0b1111111, 0b0000010, 0b0000100, 0b0011110, 0b0000001, 0b1000001, 0b0111110,
    ],
    // 4
    [
        0b0000110, 0b0001010, 0b0010010, 0b0100010, 0b1111111, 0b0000010, 0b0000010,
    ],
    // 5
    [
        0b1111111, 0b1000000, 0b1111110, 0b0000001, 0b0000001, 0b1000001, 0b0111110,
    ],
    // 6
    [
        0b0011110, 0b0100000, 0b1000000, 0b1111110, 0b1000001, 0b1000001, 0b0111110,
    ],
    // 7
    [
        0b1111111, 0b0000001, 0b0000010, 0b0000100, 0b0001000, 0b0010000, 0b0100000,
    ],
    // 8
    [
        0b0111110, 0b1000001, 0b1000001, 0b0111110, 0b1000001, 0b1000001, 0b0111110,
    ],
    // 9
    [
        0b0111110, 0b1000001, 0b1000001, 0b0111111, 0b0000001, 0b0000010, 0b0111100,
    ],
];

/// 5x7 digits for the graph axis labels.
pub const DIGITS_5X7: [[u8; 7]; 10] = [
    // 0
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    // 1
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // 2
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    // 3
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    // 4
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    // 5
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    // 6
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    // 7
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    // 8
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    // 9
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];
