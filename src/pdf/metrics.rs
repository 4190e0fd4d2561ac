//! Helvetica-Bold text measurement
//!
//! Footer centering needs real glyph widths, not an average-width estimate.
//! These are the standard Adobe AFM widths for Helvetica-Bold, chars 32-126,
//! in 1/1000ths of the em square. Overlay text is sanitized to this range
//! before it is measured or drawn.

const FIRST_CHAR: usize = 32;

/// Fallback for characters outside the table (matches the digit width)
const DEFAULT_WIDTH: i64 = 556;

/// Helvetica-Bold widths for chars 32-126
const HELVETICA_BOLD_WIDTHS: [i64; 95] = [
    278,  // 32 space
    333,  // 33 !
    474,  // 34 "
    556,  // 35 #
    556,  // 36 $
    889,  // 37 %
    722,  // 38 &
    238,  // 39 '
    333,  // 40 (
    333,  // 41 )
    389,  // 42 *
    584,  // 43 +
    278,  // 44 ,
    333,  // 45 -
    278,  // 46 .
    278,  // 47 /
    556,  // 48 0
    556,  // 49 1
    556,  // 50 2
    556,  // 51 3
    556,  // 52 4
    556,  // 53 5
    556,  // 54 6
    556,  // 55 7
    556,  // 56 8
    556,  // 57 9
    333,  // 58 :
    333,  // 59 ;
    584,  // 60 <
    584,  // 61 =
    584,  // 62 >
    611,  // 63 ?
    975,  // 64 @
    722,  // 65 A
    722,  // 66 B
    722,  // 67 C
    722,  // 68 D
    667,  // 69 E
    611,  // 70 F
    778,  // 71 G
    722,  // 72 H
    278,  // 73 I
    556,  // 74 J
    722,  // 75 K
    611,  // 76 L
    833,  // 77 M
    722,  // 78 N
    778,  // 79 O
    667,  // 80 P
    778,  // 81 Q
    722,  // 82 R
    667,  // 83 S
    611,  // 84 T
    722,  // 85 U
    667,  // 86 V
    944,  // 87 W
    667,  // 88 X
    667,  // 89 Y
    611,  // 90 Z
    333,  // 91 [
    278,  // 92 \
    333,  // 93 ]
    584,  // 94 ^
    556,  // 95 _
    333,  // 96 `
    556,  // 97 a
    611,  // 98 b
    556,  // 99 c
    611,  // 100 d
    556,  // 101 e
    333,  // 102 f
    611,  // 103 g
    611,  // 104 h
    278,  // 105 i
    278,  // 106 j
    556,  // 107 k
    278,  // 108 l
    889,  // 109 m
    611,  // 110 n
    611,  // 111 o
    611,  // 112 p
    611,  // 113 q
    389,  // 114 r
    556,  // 115 s
    333,  // 116 t
    611,  // 117 u
    556,  // 118 v
    778,  // 119 w
    556,  // 120 x
    556,  // 121 y
    500,  // 122 z
    389,  // 123 {
    280,  // 124 |
    389,  // 125 }
    584,  // 126 ~
];

/// Measure the rendered width of `text` at `font_size` points
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: i64 = text.chars().map(glyph_width).sum();
    units as f32 * font_size / 1000.0
}

fn glyph_width(c: char) -> i64 {
    let idx = c as usize;
    if (FIRST_CHAR..FIRST_CHAR + HELVETICA_BOLD_WIDTHS.len()).contains(&idx) {
        HELVETICA_BOLD_WIDTHS[idx - FIRST_CHAR]
    } else {
        DEFAULT_WIDTH
    }
}
