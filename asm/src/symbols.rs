use arch::Tables;
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Predefined,
    Label,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub addr: u16,
    pub kind: SymbolKind,
}

/// Name to address map for one assembly run. Entries are never replaced.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SymbolTable(IndexMap<String, Symbol>);

impl SymbolTable {
    pub fn new(tables: &Tables) -> Self {
        let mut symbols = IndexMap::new();
        for (name, addr) in tables.predefined() {
            symbols.insert(
                name.to_string(),
                Symbol {
                    addr,
                    kind: SymbolKind::Predefined,
                },
            );
        }
        SymbolTable(symbols)
    }

    pub fn define(&mut self, name: String, addr: u16, kind: SymbolKind) -> Result<(), Error> {
        if self.0.contains_key(&name) {
            return Err(Error::DuplicateLabel(name));
        }
        self.0.insert(name, Symbol { addr, kind });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.0.get(name)
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.0.get(name).map(|symbol| symbol.addr)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.0.iter().map(|(name, symbol)| (name.as_str(), symbol))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined() {
        let symbols = SymbolTable::new(Tables::get());
        assert_eq!(symbols.len(), 23);
        assert_eq!(symbols.get_val("R7"), Some(7));
        assert_eq!(symbols.get_val("LCL"), Some(1));
        assert_eq!(symbols.get_val("SCREEN"), Some(16384));
        assert_eq!(symbols.get_val("r7"), None);
    }

    #[test]
    fn never_overwritten() {
        let mut symbols = SymbolTable::new(Tables::get());
        symbols.define("LOOP".to_string(), 3, SymbolKind::Label).unwrap();
        assert!(matches!(
            symbols.define("LOOP".to_string(), 9, SymbolKind::Label),
            Err(Error::DuplicateLabel(_))
        ));
        assert!(symbols.define("KBD".to_string(), 9, SymbolKind::Label).is_err());
        assert_eq!(symbols.get_val("LOOP"), Some(3));
        assert_eq!(symbols.get_val("KBD"), Some(24576));
    }

    #[test]
    fn yaml() {
        let mut symbols = SymbolTable::new(Tables::get());
        symbols.define("i".to_string(), 16, SymbolKind::Variable).unwrap();
        let yaml = symbols.to_yaml().unwrap();
        assert!(yaml.starts_with("R0:\n  addr: 0\n  kind: predefined\n"));
        assert!(yaml.ends_with("i:\n  addr: 16\n  kind: variable\n"));
    }
}
