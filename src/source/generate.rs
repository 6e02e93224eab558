//! Infinite sources: generator-backed and seed-iteration-backed.

use super::Source;

/// An infinite source that calls a generator on every pull.
pub struct Generate<F> {
    generator: F,
}

impl<F> std::fmt::Debug for Generate<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generate")
            .field("generator", &"<function>")
            .finish()
    }
}

impl<T, F> Generate<F>
where
    F: FnMut() -> T,
{
    /// Create a source that yields `generator()` on each pull.
    pub fn new(generator: F) -> Self {
        Self { generator }
    }
}

impl<T, F> Source for Generate<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn has_next(&self) -> bool {
        true
    }

    fn get(&mut self) -> Option<T> {
        Some((self.generator)())
    }
}

/// An infinite source that yields `seed`, then `f(seed)`, then `f(f(seed))`, ...
///
/// The transform runs once per pull after the first, never ahead of demand.
///
/// # Example
///
/// ```rust
/// use pullstream::source::{Iterate, Source};
///
/// let mut powers = Iterate::new(1, |x: &u32| x * 2);
/// let first: Vec<u32> = (0..4).filter_map(|_| powers.get()).collect();
/// assert_eq!(first, vec![1, 2, 4, 8]);
/// ```
pub struct Iterate<T, F> {
    seed: Option<T>,
    previous: Option<T>,
    step: F,
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for Iterate<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iterate")
            .field("seed", &self.seed)
            .field("previous", &self.previous)
            .field("step", &"<function>")
            .finish()
    }
}

impl<T, F> Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    /// Create an iterating source starting at `seed`.
    pub fn new(seed: T, step: F) -> Self {
        Self {
            seed: Some(seed),
            previous: None,
            step,
        }
    }
}

impl<T, F> Source for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn has_next(&self) -> bool {
        true
    }

    fn get(&mut self) -> Option<T> {
        let next = match (self.seed.take(), self.previous.as_ref()) {
            (Some(seed), _) => seed,
            (None, Some(previous)) => (self.step)(previous),
            (None, None) => return None,
        };
        self.previous = Some(next.clone());
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_infinite() {
        let mut n = 0;
        let mut source = Generate::new(|| {
            n += 1;
            n
        });
        for expected in 1..=100 {
            assert!(source.has_next());
            assert_eq!(source.get(), Some(expected));
        }
    }

    #[test]
    fn test_iterate_yields_seed_first() {
        let mut source = Iterate::new(3, |x: &i32| x + 2);
        assert_eq!(source.get(), Some(3));
        assert_eq!(source.get(), Some(5));
        assert_eq!(source.get(), Some(7));
        assert!(source.has_next());
    }

    #[test]
    fn test_iterate_transform_runs_once_per_pull() {
        let mut calls = 0;
        {
            let mut source = Iterate::new(String::from("a"), |s: &String| {
                calls += 1;
                format!("{}a", s)
            });
            assert_eq!(source.get().as_deref(), Some("a"));
            assert_eq!(source.get().as_deref(), Some("aa"));
            assert_eq!(source.get().as_deref(), Some("aaa"));
        }
        assert_eq!(calls, 2);
    }
}
