use lc3vm::Word;
use std::collections::HashMap;

/// Label-to-address map that remembers definition order, which fixes the
/// line order of the listing dump. Redefining a label updates its address
/// but keeps its original position.
#[derive(Debug, Default, PartialEq)]
pub struct SymbolTable {
    entries: Vec<(String, Word)>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn insert(&mut self, name: &str, address: Word) {
        match self.index.get(name) {
            Some(&at) => self.entries[at].1 = address,
            None => {
                self.index.insert(name.to_owned(), self.entries.len());
                self.entries.push((name.to_owned(), address));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<Word> {
        self.index.get(name).map(|&at| self.entries[at].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Symbols in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Word)> {
        self.entries.iter().map(|(name, address)| (&name[..], *address))
    }

    /// Renders the fixed symbol listing format: a header, then one line per
    /// symbol with the name padded to 16 columns and the address in bare
    /// uppercase hex.
    pub fn dump(&self) -> String {
        let mut listing = String::from(
            "// Symbol table\n\
             // Scope level 0:\n\
             //\tSymbol Name       Page Address\n\
             //\t----------------  ------------\n",
        );
        for (name, address) in self.iter() {
            listing.push_str(&format!("//\t{:<16}  {:X}\n", name, address));
        }
        listing
    }
}
