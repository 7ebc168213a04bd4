//! Indonesian G2P phonemes.

pub(super) static SYMBOLS: &[&str] = &[
    "_", "^", "$", " ", "!", "\"", "'", "(", ")", ",",
    "-", ".", ":", ";", "?", "a", "b", "d", "e", "f",
    "h", "i", "j", "k", "l", "m", "n", "o", "p", "r",
    "s", "t", "u", "v", "w", "x", "z", "ə", "ɛ", "ɔ",
    "ɪ", "ʊ", "ŋ", "ɲ", "ʃ", "ʔ", "ɡ", "tʃ", "dʒ", "ʒ",
];
