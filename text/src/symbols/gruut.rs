//! gruut phonemes for English, with primary (ˈ) and secondary (ˌ) stressed vowels.

pub(super) static SYMBOLS: &[&str] = &[
    "_", "^", "$", " ", "!", "\"", "#", "'",
    "(", ")", ",", "-", ".", ":", ";", "?",
    "a", "aɪ", "aɪə", "aʊ", "b", "d", "d͡ʒ", "eə",
    "eɪ", "f", "h", "i", "iə", "iː", "j", "k",
    "l", "m", "n", "nʲ", "n̩", "oʊ", "p", "r",
    "s", "t", "t͡ʃ", "u", "uː", "v", "w", "x",
    "z", "æ", "ð", "ŋ", "ɐ", "ɑ", "ɑː", "ɑ̃",
    "ɒ", "ɔ", "ɔɪ", "ɔː", "ɔ̃", "ə", "əl", "əʊ",
    "ɚ", "ɛ", "ɜː", "ɡ", "ɡʲ", "ɪ", "ɬ", "ɹ",
    "ʃ", "ʊ", "ʊə", "ʌ", "ʒ", "ˈa", "ˈaɪ", "ˈaɪə",
    "ˈaʊ", "ˈeə", "ˈeɪ", "ˈi", "ˈiə", "ˈiː", "ˈiːː", "ˈoʊ",
    "ˈu", "ˈuː", "ˈæ", "ˈɐ", "ˈɑ", "ˈɑː", "ˈɑ̃", "ˈɒ",
    "ˈɔ", "ˈɔɪ", "ˈɔː", "ˈə", "ˈəl", "ˈəʊ", "ˈɚ", "ˈɛ",
    "ˈɜː", "ˈɪ", "ˈʊ", "ˈʊə", "ˈʌ", "ˌa", "ˌaɪ", "ˌaɪə",
    "ˌaʊ", "ˌeə", "ˌeɪ", "ˌi", "ˌiə", "ˌiː", "ˌoʊ", "ˌu",
    "ˌuː", "ˌæ", "ˌɑ", "ˌɑː", "ˌɒ", "ˌɔ", "ˌɔɪ", "ˌɔː",
    "ˌə", "ˌəʊ", "ˌɚ", "ˌɛ", "ˌɜː", "ˌɪ", "ˌʊ", "ˌʊə",
    "ˌʌ", "θ",
];
