//! Fixed phoneme vocabularies and the ID helpers shared by every scheme.
//!
//! A [`SymbolTable`] is an ordered, duplicate-free list of symbols where the
//! position of a symbol is its ID. Tables are process-wide constants built
//! on first use; a table that misses a reserved symbol or repeats one is a
//! defect in this crate and aborts on first access.

mod g2p_id;
mod gruut;
mod gruut_sw;
mod ipa;

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::error::TokenizerError;

/// Character-level IPA vocabulary used with espeak phonemes.
pub static IPA: Lazy<SymbolTable> = Lazy::new(|| builtin("ipa", ipa::SYMBOLS));

/// English-oriented gruut phoneme vocabulary.
pub static GRUUT: Lazy<SymbolTable> = Lazy::new(|| builtin("gruut", gruut::SYMBOLS));

/// Swahili gruut phoneme vocabulary.
pub static GRUUT_SW: Lazy<SymbolTable> = Lazy::new(|| builtin("gruut_sw", gruut_sw::SYMBOLS));

/// Indonesian G2P phoneme vocabulary.
pub static G2P_ID: Lazy<SymbolTable> = Lazy::new(|| builtin("g2p_id", g2p_id::SYMBOLS));

/// Padding / blank symbol.
pub const PAD: &str = "_";
/// Beginning-of-sequence symbol.
pub const BOS: &str = "^";
/// End-of-sequence symbol.
pub const EOS: &str = "$";
/// Word separator.
pub const SPACE: &str = " ";

fn builtin(name: &'static str, symbols: &'static [&'static str]) -> SymbolTable {
    match SymbolTable::new(name, symbols) {
        Ok(table) => table,
        Err(e) => panic!("symbols: invalid builtin table: {e}"),
    }
}

/// Reasons a symbol list cannot form a table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymbolTableError {
    #[error("table `{table}` lists {symbol:?} twice")]
    Duplicate { table: &'static str, symbol: &'static str },

    #[error("table `{table}` has no {role} symbol {symbol:?}")]
    MissingReserved {
        table: &'static str,
        role: &'static str,
        symbol: &'static str,
    },
}

/// An immutable bijection between symbols and contiguous IDs `0..len`.
pub struct SymbolTable {
    name: &'static str,
    symbols: &'static [&'static str],
    index: HashMap<&'static str, i64>,
    pad_id: i64,
    bos_id: i64,
    eos_id: i64,
    space_id: i64,
}

impl fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolTable")
            .field("name", &self.name)
            .field("len", &self.symbols.len())
            .finish()
    }
}

impl SymbolTable {
    /// Builds a table from an ordered symbol list.
    ///
    /// The list must be free of duplicates and contain [`PAD`], [`BOS`],
    /// [`EOS`] and [`SPACE`].
    pub fn new(
        name: &'static str,
        symbols: &'static [&'static str],
    ) -> Result<Self, SymbolTableError> {
        let mut index = HashMap::with_capacity(symbols.len());
        for (i, &symbol) in symbols.iter().enumerate() {
            if index.insert(symbol, i as i64).is_some() {
                return Err(SymbolTableError::Duplicate { table: name, symbol });
            }
        }

        let reserved = |role: &'static str, symbol: &'static str| {
            index
                .get(symbol)
                .copied()
                .ok_or(SymbolTableError::MissingReserved { table: name, role, symbol })
        };
        let pad_id = reserved("pad", PAD)?;
        let bos_id = reserved("bos", BOS)?;
        let eos_id = reserved("eos", EOS)?;
        let space_id = reserved("space", SPACE)?;

        Ok(Self {
            name,
            symbols,
            index,
            pad_id,
            bos_id,
            eos_id,
            space_id,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the symbols in ID order.
    pub fn symbols(&self) -> &'static [&'static str] {
        self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    pub fn pad(&self) -> &'static str {
        PAD
    }

    pub fn bos(&self) -> &'static str {
        BOS
    }

    pub fn eos(&self) -> &'static str {
        EOS
    }

    pub fn space(&self) -> &'static str {
        SPACE
    }

    pub fn pad_id(&self) -> i64 {
        self.pad_id
    }

    pub fn bos_id(&self) -> i64 {
        self.bos_id
    }

    pub fn eos_id(&self) -> i64 {
        self.eos_id
    }

    pub fn space_id(&self) -> i64 {
        self.space_id
    }

    /// Returns the ID of `symbol`.
    pub fn symbol_to_id(&self, symbol: &str) -> Result<i64, TokenizerError> {
        self.index
            .get(symbol)
            .copied()
            .ok_or_else(|| TokenizerError::UnknownSymbol {
                table: self.name,
                symbol: symbol.to_string(),
            })
    }

    /// Returns the symbol with the given ID.
    pub fn id_to_symbol(&self, id: i64) -> Result<&'static str, TokenizerError> {
        usize::try_from(id)
            .ok()
            .and_then(|i| self.symbols.get(i))
            .copied()
            .ok_or(TokenizerError::UnknownId { table: self.name, id })
    }

    /// Maps a phoneme sequence to IDs, failing on the first unknown symbol.
    pub fn phonemes_to_ids<I, S>(&self, phonemes: I) -> Result<Vec<i64>, TokenizerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        phonemes
            .into_iter()
            .map(|p| self.symbol_to_id(p.as_ref()))
            .collect()
    }

    /// Maps every character of `text` to its ID.
    pub fn chars_to_ids(&self, text: &str) -> Result<Vec<i64>, TokenizerError> {
        let mut buf = [0u8; 4];
        text.chars()
            .map(|c| self.symbol_to_id(c.encode_utf8(&mut buf)))
            .collect()
    }

    /// Concatenates the symbols of `ids` back into a string.
    pub fn ids_to_phonemes(&self, ids: &[i64]) -> Result<String, TokenizerError> {
        let mut out = String::new();
        for &id in ids {
            out.push_str(self.id_to_symbol(id)?);
        }
        Ok(out)
    }

    /// Applies the blank and boundary post-processing to an ID sequence.
    pub fn finish_ids(&self, ids: Vec<i64>, add_blank: bool, add_bos_eos: bool) -> Vec<i64> {
        let ids = if add_blank {
            intersperse(&ids, self.pad_id)
        } else {
            ids
        };
        if add_bos_eos {
            wrap_bos_eos(&ids, self.bos_id, self.eos_id)
        } else {
            ids
        }
    }
}

/// Returns `2 * ids.len() + 1` elements with `item` at every even index
/// and `ids` at the odd ones.
pub fn intersperse(ids: &[i64], item: i64) -> Vec<i64> {
    let mut out = vec![item; ids.len() * 2 + 1];
    for (i, &id) in ids.iter().enumerate() {
        out[2 * i + 1] = id;
    }
    out
}

/// Surrounds `ids` with the boundary IDs.
pub fn wrap_bos_eos(ids: &[i64], bos: i64, eos: i64) -> Vec<i64> {
    let mut out = Vec::with_capacity(ids.len() + 2);
    out.push(bos);
    out.extend_from_slice(ids);
    out.push(eos);
    out
}

/// All builtin tables.
pub fn builtin_tables() -> [&'static SymbolTable; 4] {
    [&*IPA, &*GRUUT, &*GRUUT_SW, &*G2P_ID]
}
