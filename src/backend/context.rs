//! Per-compilation state threaded through code generation.
//!
//! A [`CompilationContext`] owns the two pieces of mutable state a code generation run needs: the variable→slot
//! table and the `if`-label counter. Each run starts from a fresh context, so two compilations never share slots or
//! label numbers.

use std::collections::HashMap;

use super::isa::{FIRST_VARIABLE_SLOT, Label, Slot};

/// Mapping from variable name to memory slot.
///
/// Slots are handed out on first sight, in increasing order starting at [`FIRST_VARIABLE_SLOT`]. A name keeps its
/// slot for the rest of the run; slots are never reused or freed.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    slots: HashMap<String, Slot>,
    /// Names in allocation order (index `i` holds slot `FIRST_VARIABLE_SLOT + i`)
    order: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the slot for `name`, allocating the next free one if the name is new.
    pub fn slot_for(&mut self, name: &str) -> Slot {
        if let Some(slot) = self.slots.get(name) {
            return *slot;
        }

        let slot = Slot(FIRST_VARIABLE_SLOT.index() + self.order.len() as u32);
        tracing::trace!(name, slot = slot.index(), "allocated slot");
        self.slots.insert(name.to_string(), slot);
        self.order.push(name.to_string());
        slot
    }

    /// Look up an existing slot without allocating.
    pub fn get(&self, name: &str) -> Option<Slot> {
        self.slots.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(name, slot)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Slot)> + '_ {
        self.order
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), Slot(FIRST_VARIABLE_SLOT.index() + i as u32)))
    }
}

/// Monotonic counter for `if` label pairs.
#[derive(Debug, Clone, Default)]
pub struct LabelAllocator {
    next: u32,
}

impl LabelAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the `(else_N, endif_N)` pair for one `if` statement.
    pub fn next_if_labels(&mut self) -> (Label, Label) {
        let id = self.next;
        self.next += 1;
        (Label::else_(id), Label::endif(id))
    }

    /// Number of label pairs handed out so far.
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

/// Mutable state for one code generation run.
#[derive(Debug, Clone, Default)]
pub struct CompilationContext {
    pub symbols: SymbolTable,
    pub labels: LabelAllocator,
}

impl CompilationContext {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_start_at_one_and_are_stable() {
        let mut table = SymbolTable::new();
        assert!(table.is_empty());
        assert_eq!(table.slot_for("a"), Slot(1));
        assert_eq!(table.slot_for("b"), Slot(2));
        assert_eq!(table.slot_for("a"), Slot(1));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("b"), Some(Slot(2)));
        assert_eq!(table.get("c"), None);
        // `get` never allocates.
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_iter_is_allocation_order() {
        let mut table = SymbolTable::new();
        for name in ["z", "a", "m", "a"] {
            table.slot_for(name);
        }
        let pairs: Vec<(&str, Slot)> = table.iter().collect();
        assert_eq!(pairs, vec![("z", Slot(1)), ("a", Slot(2)), ("m", Slot(3))]);
    }

    #[test]
    fn test_label_pairs_share_a_number() {
        let mut labels = LabelAllocator::new();
        let (else0, endif0) = labels.next_if_labels();
        let (else1, endif1) = labels.next_if_labels();
        assert_eq!((else0.to_string(), endif0.to_string()), ("else_0".into(), "endif_0".into()));
        assert_eq!((else1.to_string(), endif1.to_string()), ("else_1".into(), "endif_1".into()));
        assert_eq!(labels.allocated(), 2);
    }

    #[test]
    fn test_fresh_contexts_are_independent() {
        let mut first = CompilationContext::new();
        first.symbols.slot_for("x");
        first.labels.next_if_labels();

        let mut second = CompilationContext::new();
        assert_eq!(second.symbols.slot_for("y"), Slot(1));
        assert_eq!(second.labels.next_if_labels().0, Label::else_(0));
    }
}
