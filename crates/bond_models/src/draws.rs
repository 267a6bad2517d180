//! Uniform draw sources with antithetic mirroring.
//!
//! Pricing models never see a generator directly. They pull values from a
//! [`Draws`] handle which applies the antithetic transform `u -> 1 - u` to
//! every draw of the antithetic pass, so the mirroring covers each default
//! check, each rate-noise draw and the terminal equity draw alike.
//!
//! Sources must return values in the open interval (0, 1). This keeps the
//! default test `u < p` exact at both ends: `p = 0` never triggers and `p = 1`
//! always triggers, for `u` and for `1 - u`.

/// A source of uniform variates in the open interval (0, 1).
///
/// Implemented by the seeded generator in `bond_pricing`; tests implement it
/// with fixed sequences.
pub trait UniformSource {
    /// Returns the next uniform value in (0, 1).
    fn next_uniform(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Draw handle for one pricing pass.
///
/// # Examples
///
/// ```
/// use bond_models::{Draws, UniformSource};
///
/// struct Fixed(f64);
///
/// impl UniformSource for Fixed {
///     fn next_uniform(&mut self) -> f64 {
///         self.0
///     }
/// }
///
/// let mut plain_src = Fixed(0.25);
/// let mut mirror_src = Fixed(0.25);
/// let mut plain = Draws::new(&mut plain_src, false);
/// let mut mirrored = Draws::new(&mut mirror_src, true);
///
/// assert_eq!(plain.next(), 0.25);
/// assert_eq!(mirrored.next(), 0.75);
/// assert_eq!(mirrored.consumed(), 1);
/// ```
pub struct Draws<'a, S: UniformSource + ?Sized> {
    source: &'a mut S,
    antithetic: bool,
    consumed: usize,
}

impl<'a, S: UniformSource + ?Sized> Draws<'a, S> {
    /// Wraps `source` for a plain (`antithetic = false`) or mirrored pass.
    #[inline]
    pub fn new(source: &'a mut S, antithetic: bool) -> Self {
        Self {
            source,
            antithetic,
            consumed: 0,
        }
    }

    /// Returns the next draw, mirrored when this is the antithetic pass.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        let u = self.source.next_uniform();
        self.consumed += 1;
        if self.antithetic {
            1.0 - u
        } else {
            u
        }
    }

    /// Draws once and reports whether a default occurs at probability `p`.
    #[inline]
    pub fn defaults(&mut self, p: f64) -> bool {
        self.next() < p
    }

    /// Number of values drawn so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::UniformSource;

    /// Replays a fixed sequence, cycling when exhausted.
    pub(crate) struct Sequence {
        values: Vec<f64>,
        pos: usize,
    }

    impl Sequence {
        pub(crate) fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                pos: 0,
            }
        }

        pub(crate) fn position(&self) -> usize {
            self.pos
        }
    }

    impl UniformSource for Sequence {
        fn next_uniform(&mut self) -> f64 {
            let u = self.values[self.pos % self.values.len()];
            self.pos += 1;
            u
        }
    }
}
