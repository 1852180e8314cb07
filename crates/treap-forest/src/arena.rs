//! Slot arena with generation-checked handles.
//!
//! Tree links inside the arena are bare `u32` slot indices. Anything that
//! refers to a node from outside the trees should keep a [`Handle`]: removing
//! a node bumps its slot's generation, so older handles stop resolving even
//! after the slot is reused.

use std::ops::{Index, IndexMut};

/// Stable reference to an occupied arena slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

impl Handle {
    #[inline]
    pub fn index(self) -> u32 {
        self.index
    }

    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Clone, Debug)]
struct Slot<N> {
    generation: u32,
    node: Option<N>,
}

#[derive(Clone, Debug)]
pub struct Arena<N> {
    slots: Vec<Slot<N>>,
    free: Vec<u32>,
    len: usize,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `node`, reusing a freed slot when one is available.
    ///
    /// # Panics
    ///
    /// When the `u32` index space is exhausted.
    pub fn insert(&mut self, node: N) -> Handle {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            return Handle {
                index,
                generation: slot.generation,
            };
        }
        let index = u32::try_from(self.slots.len()).expect("arena index space exhausted");
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        Handle {
            index,
            generation: 0,
        }
    }

    /// Takes the node out of its slot. `None` for a stale or foreign handle.
    pub fn remove(&mut self, handle: Handle) -> Option<N> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.len -= 1;
        Some(node)
    }

    pub fn get(&self, handle: Handle) -> Option<&N> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.node.as_ref()
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut N> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.node.as_mut()
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    /// Handle for the node currently stored at `index`.
    pub fn handle(&self, index: u32) -> Option<Handle> {
        let slot = self.slots.get(index as usize)?;
        slot.node.as_ref().map(|_| Handle {
            index,
            generation: slot.generation,
        })
    }

    /// Drops every node. Generations are bumped so no old handle survives.
    pub fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index as u32);
        }
        self.len = 0;
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    fn index(&self, index: u32) -> &N {
        match self.slots.get(index as usize).and_then(|s| s.node.as_ref()) {
            Some(node) => node,
            None => panic!("vacant arena slot {index}"),
        }
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    fn index_mut(&mut self, index: u32) -> &mut N {
        match self.slots.get_mut(index as usize).and_then(|s| s.node.as_mut()) {
            Some(node) => node,
            None => panic!("vacant arena slot {index}"),
        }
    }
}
