//! Fixed-capacity ring buffer of recent positions.
//!
//! [`TrailBuffer`] stores a node's motion trail. Storage is allocated once
//! at construction; `head` indexes the oldest entry and `len` counts live
//! entries, so pushes never shift data.
//!
//! Every mutation has an exact inverse: [`push`](TrailBuffer::push)
//! returns what it evicted, and [`unpush`](TrailBuffer::unpush) takes that
//! value back to restore the previous contents and head position.

use netviz_core::Vec3;

/// A bounded circular buffer of positions, oldest first.
#[derive(Clone, Debug)]
pub struct TrailBuffer {
    slots: Vec<Vec3>,
    head: usize,
    len: usize,
}

impl TrailBuffer {
    /// Create an empty trail holding at most `capacity` positions.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "TrailBuffer capacity must be at least 1");
        Self {
            slots: vec![Vec3::ZERO; capacity],
            head: 0,
            len: 0,
        }
    }

    /// Maximum number of retained positions.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of positions currently retained.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the trail holds no positions.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a position. When full, the oldest position is evicted and
    /// returned.
    pub fn push(&mut self, position: Vec3) -> Option<Vec3> {
        let cap = self.capacity();
        if self.len == cap {
            let evicted = self.slots[self.head];
            self.slots[self.head] = position;
            self.head = (self.head + 1) % cap;
            Some(evicted)
        } else {
            let idx = (self.head + self.len) % cap;
            self.slots[idx] = position;
            self.len += 1;
            None
        }
    }

    /// Reverse one [`push`](Self::push), given the value it returned.
    ///
    /// Removes the newest position and, if the push had evicted one,
    /// reinstates it as the oldest.
    pub fn unpush(&mut self, evicted: Option<Vec3>) {
        if self.pop_back().is_none() {
            return;
        }
        if let Some(position) = evicted {
            self.push_front(position);
        }
    }

    fn pop_back(&mut self) -> Option<Vec3> {
        if self.len == 0 {
            return None;
        }
        let idx = (self.head + self.len - 1) % self.capacity();
        self.len -= 1;
        Some(self.slots[idx])
    }

    fn push_front(&mut self, position: Vec3) {
        let cap = self.capacity();
        debug_assert!(self.len < cap, "push_front on a full trail");
        self.head = (self.head + cap - 1) % cap;
        self.slots[self.head] = position;
        self.len += 1;
    }

    /// The most recently pushed position.
    pub fn latest(&self) -> Option<Vec3> {
        if self.len == 0 {
            None
        } else {
            Some(self.slots[(self.head + self.len - 1) % self.capacity()])
        }
    }

    /// Iterate positions oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        let cap = self.capacity();
        (0..self.len).map(move |i| self.slots[(self.head + i) % cap])
    }

    /// Drop all positions, keeping the allocation.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

impl PartialEq for TrailBuffer {
    /// Two trails are equal when they hold the same positions, bit for bit,
    /// in the same order, with the same capacity.
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity()
            && self.len == other.len
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.to_array().map(f32::to_bits) == b.to_array().map(f32::to_bits))
    }
}
