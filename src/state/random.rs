use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Source of uniform picks, injected so round start can be made deterministic.
pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Browser randomness via `Math.random`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_index(&mut self, len: usize) -> usize {
        let r = js_sys::Math::random();
        ((r * len as f64).floor() as usize).min(len.saturating_sub(1))
    }
}

/// Shared handle so the random source can live inside reducer state.
#[derive(Clone)]
pub struct RandomHandle(Rc<RefCell<dyn RandomSource>>);

impl RandomHandle {
    pub fn new(source: impl RandomSource + 'static) -> Self {
        Self(Rc::new(RefCell::new(source)))
    }

    pub fn browser() -> Self {
        Self::new(JsRandom)
    }

    pub fn next_index(&self, len: usize) -> usize {
        self.0.borrow_mut().next_index(len)
    }
}

impl PartialEq for RandomHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for RandomHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RandomHandle")
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    picks: Vec<usize>,
    pos: usize,
}

#[cfg(test)]
impl SequenceRandom {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, pos: 0 }
    }
}

#[cfg(test)]
impl RandomSource for SequenceRandom {
    fn next_index(&mut self, len: usize) -> usize {
        let pick = self.picks.get(self.pos).copied().unwrap_or(0);
        self.pos = (self.pos + 1) % self.picks.len().max(1);
        pick % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_cycles_and_wraps_into_range() {
        let handle = RandomHandle::new(SequenceRandom::new(vec![1, 5]));
        assert_eq!(handle.next_index(3), 1);
        assert_eq!(handle.next_index(3), 2);
        assert_eq!(handle.next_index(3), 1);
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = RandomHandle::new(SequenceRandom::new(vec![0]));
        let b = RandomHandle::new(SequenceRandom::new(vec![0]));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
