//! gruut phonemes for Swahili.

pub(super) static SYMBOLS: &[&str] = &[
    "_", "^", "$", " ", "!", "\"", "#", "'",
    "(", ")", ",", "-", ".", ":", ";", "?",
    "f", "h", "i", "j", "k", "l", "m", "n",
    "p", "s", "t", "t͡ʃ", "u", "v", "w", "x",
    "z", "ð", "ŋ", "ɑ", "ɓ", "ɔ", "ɗ", "ɛ",
    "ɠ", "ɣ", "ɾ", "ʃ", "ʄ", "θ", "ᵐɓ", "ᵑg",
    "ᶬv", "ⁿz", "ⁿɗ", "ⁿɗ͡ʒ",
];
