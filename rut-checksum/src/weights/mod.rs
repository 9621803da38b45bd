// rut-checksum/src/weights/mod.rs

/// First weight applied to the rightmost digit.
pub const MIN_WEIGHT: u32 = 2;
/// Last weight before the cycle starts over at [`MIN_WEIGHT`].
pub const MAX_WEIGHT: u32 = 7;

/// Endless 2,3,4,5,6,7,2,3,... sequence applied right to left over the digits.
#[derive(Debug, Clone)]
pub struct WeightCycle {
    next: u32,
}

impl WeightCycle {
    pub fn new() -> Self {
        Self { next: MIN_WEIGHT }
    }
}

impl Default for WeightCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for WeightCycle {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let current = self.next;
        self.next = if current < MAX_WEIGHT { current + 1 } else { MIN_WEIGHT };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_starts_at_two() {
        assert_eq!(WeightCycle::new().next(), Some(2));
    }

    #[test]
    fn test_cycle_wraps_after_seven() {
        let mut buf = [0u32; 14];
        for (slot, w) in buf.iter_mut().zip(WeightCycle::new()) {
            *slot = w;
        }
        assert_eq!(buf, [2, 3, 4, 5, 6, 7, 2, 3, 4, 5, 6, 7, 2, 3]);
    }
}
