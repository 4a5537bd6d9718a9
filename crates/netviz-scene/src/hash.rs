//! FNV-1a hashing of entity state.
//!
//! Used for fast bit-exact equality checks (round-trip and determinism
//! tests, the CLI's state digest). Not cryptographically secure.

use netviz_core::{Orientation, Rgb, SimTime, TimeDelta, TransmitState, Vec3};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Incremental FNV-1a hasher over entity fields.
#[derive(Clone, Copy, Debug)]
pub struct StateHasher {
    hash: u64,
}

impl Default for StateHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHasher {
    /// Start from the FNV offset basis.
    pub fn new() -> Self {
        Self { hash: FNV_OFFSET }
    }

    /// Feed a single byte.
    #[inline]
    pub fn write_u8(&mut self, byte: u8) {
        self.hash = (self.hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME);
    }

    /// Feed a u32 as 4 LE bytes.
    #[inline]
    pub fn write_u32(&mut self, v: u32) {
        for b in v.to_le_bytes() {
            self.write_u8(b);
        }
    }

    /// Feed a u64 as 8 LE bytes.
    #[inline]
    pub fn write_u64(&mut self, v: u64) {
        for b in v.to_le_bytes() {
            self.write_u8(b);
        }
    }

    /// Feed an f32 by bit pattern.
    #[inline]
    pub fn write_f32(&mut self, v: f32) {
        self.write_u32(v.to_bits());
    }

    /// Feed a bool as one byte.
    pub fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    /// Feed a position by bit pattern.
    pub fn write_vec3(&mut self, v: Vec3) {
        self.write_f32(v.x);
        self.write_f32(v.y);
        self.write_f32(v.z);
    }

    /// Feed an orientation by bit pattern.
    pub fn write_orientation(&mut self, o: Orientation) {
        for bits in o.to_bits() {
            self.write_u32(bits);
        }
    }

    /// Feed an optional color; `None` and every color hash differently.
    pub fn write_color(&mut self, c: Option<Rgb>) {
        match c {
            None => self.write_u8(0),
            Some(Rgb { r, g, b }) => {
                self.write_u8(1);
                self.write_u8(r);
                self.write_u8(g);
                self.write_u8(b);
            }
        }
    }

    /// Feed an optional transmit state.
    pub fn write_transmit(&mut self, t: Option<&TransmitState>) {
        match t {
            None => self.write_u8(0),
            Some(t) => {
                self.write_u8(1);
                self.write_time(t.start);
                self.write_delta(t.duration);
                self.write_f32(t.target_size);
                self.write_color(Some(t.color));
            }
        }
    }

    /// Feed a simulation time.
    pub fn write_time(&mut self, t: SimTime) {
        self.write_u64(t.as_nanos() as u64);
    }

    /// Feed a time delta.
    pub fn write_delta(&mut self, d: TimeDelta) {
        self.write_u64(d.as_nanos() as u64);
    }

    /// The current hash value.
    pub fn finish(&self) -> u64 {
        self.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_is_offset_basis() {
        assert_eq!(StateHasher::new().finish(), FNV_OFFSET);
    }

    #[test]
    fn unset_color_differs_from_black() {
        let mut a = StateHasher::new();
        a.write_color(None);
        let mut b = StateHasher::new();
        b.write_color(Some(Rgb::new(0, 0, 0)));
        assert_ne!(a.finish(), b.finish());
    }

    #[test]
    fn negative_zero_differs_from_zero() {
        let mut a = StateHasher::new();
        a.write_f32(0.0);
        let mut b = StateHasher::new();
        b.write_f32(-0.0);
        assert_ne!(a.finish(), b.finish());
    }
}
