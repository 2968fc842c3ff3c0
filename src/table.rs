use crate::error::{Error, Result};
use crate::page::PageId;
use linked_hash_map::LinkedHashMap;
use std::ops::Index;

/// Largest frame count a table can be built with.
pub const MAX_FRAMES: usize = 1024;

/// The outcome of loading a page that was not resident. `slot` is the frame that received the
/// page and `replaced` is whatever that frame held beforehand (`None` while the table is still
/// filling up).
#[derive(Debug, PartialEq)]
pub struct Replacement {
    pub slot: usize,
    pub replaced: Option<PageId>,
}

/// The `FrameTable` simulates a fixed number of physical frames managed with first-in-first-out
/// replacement. Slots are overwritten in strict rotation by a cursor that only moves on a fault,
/// so a page that keeps getting referenced is still evicted once the cursor comes back around to
/// its slot.
///
/// A residency index maps each loaded page to its slot in load order. Its front entry is always
/// the oldest resident, which is the page in the cursor's slot once every frame is occupied.
pub struct FrameTable {
    slots: Vec<Option<PageId>>,
    cursor: usize,
    resident: LinkedHashMap<PageId, usize>,
}

impl FrameTable {
    /// Create a table of `frame_count` empty frames with the cursor at slot zero.
    ///
    /// # Arguments
    ///
    /// * `frame_count` - number of frames in the table.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` unless `1 <= frame_count <= MAX_FRAMES`.
    pub fn build(frame_count: usize) -> Result<Self> {
        if frame_count == 0 || frame_count > MAX_FRAMES {
            return Err(Error::InvalidConfig(frame_count));
        }
        Ok(Self {
            slots: vec![None; frame_count],
            cursor: 0,
            resident: LinkedHashMap::with_capacity(frame_count),
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot the next fault will overwrite.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Search the table for the requested page and return the slot holding it. A `None` value
    /// means referencing the page is a fault.
    pub fn find(&self, page: &PageId) -> Option<usize> {
        self.resident.get(page).copied()
    }

    pub fn contains(&self, page: &PageId) -> bool {
        self.resident.contains_key(page)
    }

    /// The page that has been resident the longest, if any.
    pub fn oldest(&self) -> Option<&PageId> {
        self.resident.front().map(|(page, _)| page)
    }

    /// The page the next fault will evict. `None` while the slot under the cursor is still
    /// empty. Once the table is full this is always the oldest resident.
    pub fn next_victim(&self) -> Option<&PageId> {
        let victim = self[self.cursor].as_ref();
        debug_assert!(victim.is_none() || victim == self.oldest());
        victim
    }

    /// Load a page that is not resident into the slot under the cursor, then advance the cursor
    /// circularly. Hits never reach this method, which is what keeps the policy FIFO rather than
    /// LRU.
    ///
    /// # Arguments
    ///
    /// * `page` - the faulting page.
    pub fn load(&mut self, page: PageId) -> Replacement {
        debug_assert!(!self.contains(&page), "loaded a resident page");
        let slot = self.cursor;
        let replaced = self.slots[slot].replace(page.clone());
        if let Some(victim) = &replaced {
            self.resident.remove(victim);
        }
        self.resident.insert(page, slot);
        self.cursor = (self.cursor + 1) % self.slots.len();
        Replacement { slot, replaced }
    }

    /// An independent copy of the current frame contents. Later loads never affect a snapshot.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }
}

impl Index<usize> for FrameTable {
    type Output = Option<PageId>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const TEST_TABLE_SIZE: usize = 3;

    fn page(raw: &str) -> PageId {
        PageId::from(raw)
    }

    fn make_standard_table() -> FrameTable {
        let mut table = FrameTable::build(TEST_TABLE_SIZE).unwrap();
        ["a", "b", "c"].iter().for_each(|x| {
            table.load(page(x));
        });
        table
    }

    #[cfg(test)]
    mod frame_table_tests {

        use super::*;

        #[test]
        fn build() {
            let table = FrameTable::build(TEST_TABLE_SIZE).unwrap();
            assert_eq!(table.len(), TEST_TABLE_SIZE);
            assert_eq!(table.cursor(), 0);
            assert!(table.oldest().is_none());
            assert!((0..TEST_TABLE_SIZE).all(|x| table[x].is_none()));
        }

        #[test]
        fn build_bounds() {
            assert!(matches!(FrameTable::build(0), Err(Error::InvalidConfig(0))));
            assert!(FrameTable::build(MAX_FRAMES).is_ok());
            assert!(matches!(
                FrameTable::build(MAX_FRAMES + 1),
                Err(Error::InvalidConfig(_))
            ));
            assert!(matches!(
                FrameTable::build(usize::MAX / 8),
                Err(Error::InvalidConfig(_))
            ));
        }

        #[test]
        fn next_victim() {
            let mut table = FrameTable::build(TEST_TABLE_SIZE).unwrap();
            table.load(page("a"));
            assert_eq!(table.next_victim(), None);
            table.load(page("b"));
            table.load(page("c"));
            assert_eq!(table.next_victim(), Some(&page("a")));
            table.load(page("d"));
            assert_eq!(table.next_victim(), Some(&page("b")));
        }

        #[test]
        fn fills_empty_slots_in_order() {
            let mut table = FrameTable::build(TEST_TABLE_SIZE).unwrap();
            (0..TEST_TABLE_SIZE).for_each(|x| {
                let loaded = table.load(page(&x.to_string()));
                assert_eq!(
                    loaded,
                    Replacement {
                        slot: x,
                        replaced: None
                    }
                );
            });
            assert_eq!(table.cursor(), 0);
        }

        #[test]
        fn replaces_oldest() {
            let mut table = make_standard_table();
            assert_eq!(table.oldest(), Some(&page("a")));

            let loaded = table.load(page("d"));
            assert_eq!(loaded.slot, 0);
            assert_eq!(loaded.replaced, Some(page("a")));
            assert!(!table.contains(&page("a")));
            assert_eq!(table.find(&page("d")), Some(0));
            assert_eq!(table.oldest(), Some(&page("b")));
            assert_eq!(table.cursor(), 1);
        }

        #[test]
        fn find() {
            let table = make_standard_table();
            assert_eq!(table.find(&page("a")), Some(0));
            assert_eq!(table.find(&page("c")), Some(2));
            assert_eq!(table.find(&page("z")), None);
        }

        #[test]
        fn snapshot_is_independent() {
            let mut table = make_standard_table();
            let before = table.snapshot();
            table.load(page("d"));
            assert_eq!(before[0], Some(page("a")));
            assert_eq!(table[0], Some(page("d")));
        }

        #[test]
        fn single_frame() {
            let mut table = FrameTable::build(1).unwrap();
            assert_eq!(table.load(page("a")).slot, 0);
            let loaded = table.load(page("b"));
            assert_eq!(loaded.slot, 0);
            assert_eq!(loaded.replaced, Some(page("a")));
            assert_eq!(table.cursor(), 0);
        }
    }
}
