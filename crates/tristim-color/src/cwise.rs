//! Channelwise broadcasting.
//!
//! The combinators here lift scalar functions over triples. Every operand
//! position accepts either a triple of the same working space or a bare
//! scalar, which broadcasts to all three channels; mixing spaces does not
//! type-check. Functions with several results (`frexp`, `modf`, `remquo`)
//! use the splitting combinators and return tuples of triples instead of
//! writing through out-parameters.

use crate::rgb::LinearRgb;
use crate::space::RgbSpace;

/// A channelwise operand: a same-space triple or a broadcast scalar.
///
/// Implemented by [`LinearRgb<T, S>`] (channel `i` reads channel `i`) and
/// by the scalar channel types `f32`, `f64`, `i32` and `i64` (every channel
/// reads the scalar).
pub trait Operand<T, S: RgbSpace>: Copy {
    /// The value this operand contributes to channel `i` (`i < 3`).
    fn channel(self, i: usize) -> T;
}

impl<T: Copy, S: RgbSpace> Operand<T, S> for LinearRgb<T, S> {
    #[inline]
    fn channel(self, i: usize) -> T {
        match i {
            0 => self.r,
            1 => self.g,
            _ => self.b,
        }
    }
}

macro_rules! scalar_operand {
    ($($t:ty),+) => {
        $(
            impl<S: RgbSpace> Operand<$t, S> for $t {
                #[inline]
                fn channel(self, _i: usize) -> $t {
                    self
                }
            }
        )+
    };
}

scalar_operand!(f32, f64, i32, i64);

impl<T, S: RgbSpace> LinearRgb<T, S> {
    /// Creates a triple by calling `f` with each channel index in order.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        Self::new(f(0), f(1), f(2))
    }
}

impl<T: Copy, S: RgbSpace> LinearRgb<T, S> {
    /// Applies `f` to each channel.
    #[inline]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> LinearRgb<U, S> {
        LinearRgb::new(f(self.r), f(self.g), f(self.b))
    }

    /// Applies a binary `f` channelwise; `rhs` may be a triple or a scalar.
    #[inline]
    pub fn zip_with<B, U>(
        self,
        rhs: impl Operand<B, S>,
        mut f: impl FnMut(T, B) -> U,
    ) -> LinearRgb<U, S> {
        LinearRgb::new(
            f(self.r, rhs.channel(0)),
            f(self.g, rhs.channel(1)),
            f(self.b, rhs.channel(2)),
        )
    }

    /// Applies a ternary `f` channelwise; both trailing operands may be
    /// triples or scalars, independently.
    #[inline]
    pub fn zip3_with<B, C, U>(
        self,
        b: impl Operand<B, S>,
        c: impl Operand<C, S>,
        mut f: impl FnMut(T, B, C) -> U,
    ) -> LinearRgb<U, S> {
        LinearRgb::new(
            f(self.r, b.channel(0), c.channel(0)),
            f(self.g, b.channel(1), c.channel(1)),
            f(self.b, b.channel(2), c.channel(2)),
        )
    }

    /// Applies a two-result `f` to each channel, collecting each result
    /// into its own triple.
    #[inline]
    pub fn map_split<U, V>(
        self,
        mut f: impl FnMut(T) -> (U, V),
    ) -> (LinearRgb<U, S>, LinearRgb<V, S>) {
        let (r0, r1) = f(self.r);
        let (g0, g1) = f(self.g);
        let (b0, b1) = f(self.b);
        (LinearRgb::new(r0, g0, b0), LinearRgb::new(r1, g1, b1))
    }

    /// Binary form of [`map_split`](Self::map_split).
    #[inline]
    pub fn zip_split<B, U, V>(
        self,
        rhs: impl Operand<B, S>,
        mut f: impl FnMut(T, B) -> (U, V),
    ) -> (LinearRgb<U, S>, LinearRgb<V, S>) {
        let (r0, r1) = f(self.r, rhs.channel(0));
        let (g0, g1) = f(self.g, rhs.channel(1));
        let (b0, b1) = f(self.b, rhs.channel(2));
        (LinearRgb::new(r0, g0, b0), LinearRgb::new(r1, g1, b1))
    }
}
