/// Characters with a mirror-image counterpart. Each pair mirrors both ways.
const MIRROR_PAIRS: [(char, char); 6] = [
    ('(', ')'),
    ('{', '}'),
    ('[', ']'),
    ('<', '>'),
    ('!', '¡'),
    ('?', '¿'),
];

/// Returns the mirror-image counterpart of `c`, or `c` itself if it has none.
pub fn mirror_char(c: char) -> char {
    MIRROR_PAIRS
        .iter()
        .find_map(|&(left, right)| {
            if c == left {
                Some(right)
            } else if c == right {
                Some(left)
            } else {
                None
            }
        })
        .unwrap_or(c)
}

/// Reverses `text` and replaces each character with its mirror-image
/// counterpart, so an opening quote sequence like `<<` becomes `>>`.
pub fn mirror(text: &str) -> String {
    text.chars().rev().map(mirror_char).collect()
}
