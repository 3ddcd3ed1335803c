use arch::symbol::REGISTER_COUNT;

use crate::parser::{AddrToken, Line, LogicalLine};

/// Sorted, duplicate-free set of data addresses that must never be handed
/// to a variable, plus the allocation cursor into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupiedAddresses {
    addrs: Vec<u16>,
    cursor: usize,
}

impl Default for OccupiedAddresses {
    fn default() -> Self {
        Self::new()
    }
}

impl OccupiedAddresses {
    /// Seeded with the register addresses `0..=15`.
    pub fn new() -> Self {
        OccupiedAddresses {
            addrs: (0..REGISTER_COUNT).collect(),
            cursor: 0,
        }
    }

    /// Inserts keeping the order. The cursor is left alone.
    pub fn insert(&mut self, addr: u16) -> bool {
        match self.addrs.binary_search(&addr) {
            Ok(_) => false,
            Err(pos) => {
                self.addrs.insert(pos, addr);
                if pos < self.cursor {
                    self.cursor += 1;
                }
                true
            }
        }
    }

    /// First free address at or after the cursor: one past the lower end of
    /// the first gap, or one past the highest address.
    pub fn next_gap(&self) -> Option<u16> {
        let tail = &self.addrs[self.cursor.min(self.addrs.len())..];
        match tail.windows(2).find(|pair| pair[1] - pair[0] != 1) {
            Some(pair) => Some(pair[0] + 1),
            None => match self.addrs.last() {
                Some(last) => last.checked_add(1),
                None => Some(0),
            },
        }
    }

    /// Inserts `addr` and moves the cursor to it. Appending at the end moves
    /// the cursor past the end, so later allocations keep appending.
    pub fn insert_and_advance(&mut self, addr: u16) -> usize {
        let pos = match self.addrs.binary_search(&addr) {
            Ok(pos) => pos,
            Err(pos) => {
                self.addrs.insert(pos, addr);
                pos
            }
        };
        self.cursor = if pos + 1 == self.addrs.len() {
            self.addrs.len()
        } else {
            pos
        };
        self.cursor
    }

    pub fn contains(&self, addr: u16) -> bool {
        self.addrs.binary_search(&addr).is_ok()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.addrs
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }
}

/// Registers plus every literal `@N` in the program.
pub fn collect_occupied(lines: &[Line]) -> OccupiedAddresses {
    let mut occupied = OccupiedAddresses::new();
    for line in lines {
        if let LogicalLine::AddressRef(AddrToken::Numeric(addr)) = line.stmt {
            occupied.insert(addr);
        }
    }
    occupied
}
