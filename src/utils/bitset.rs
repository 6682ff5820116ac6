use itertools::{EitherOrBoth::*, Itertools};
use num_traits::*;
use smallvec::SmallVec;
use std::fmt::{self, Binary, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::*;

#[inline(always)]
fn word_bits<T: PrimInt>() -> usize {
    T::zero().count_zeros() as usize
}

/// A growable bitset, stored inline for up to `N` words.
///
/// Sets that only differ by trailing zero words compare and hash equal, so sets built with
/// different capacities can still be used as map keys.
#[derive(Default, Clone)]
pub struct BitSet<T, const N: usize>(SmallVec<T, N>);
impl<T: PrimInt + Zero, const N: usize> BitSet<T, N> {
    pub const fn new() -> Self {
        Self(SmallVec::new())
    }
    /// Create a set with room for `cap` bits without reallocating.
    pub fn with_capacity(cap: usize) -> Self {
        let len = (cap + word_bits::<T>() - 1) / word_bits::<T>();
        Self(SmallVec::from_elem(T::zero(), len))
    }
    pub fn from_buf(buf: SmallVec<T, N>) -> Self {
        Self(buf)
    }

    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }
    /// The backing words with trailing zero words removed.
    fn trimmed(&self) -> &[T] {
        let words = self.0.as_slice();
        let end = words.iter().rposition(|w| !w.is_zero()).map_or(0, |i| i + 1);
        &words[..end]
    }

    pub fn get(&self, idx: usize) -> bool {
        let bits = word_bits::<T>();
        self.0
            .get(idx / bits)
            .map_or(false, |&i| i & (T::one() << (idx % bits)) != T::zero())
    }
    pub fn set(&mut self, idx: usize, bit: bool) {
        let bits = word_bits::<T>();
        let si = idx / bits;
        let sb = idx % bits;
        if si >= self.0.len() {
            if !bit {
                return;
            }
            self.0.resize(si + 1, T::zero());
        }
        let word = self.0[si];
        self.0[si] = if bit {
            word | (T::one() << sb)
        } else {
            word & !(T::one() << sb)
        };
    }
    pub fn clear(&mut self) {
        for i in &mut self.0 {
            *i = T::zero();
        }
    }
    /// Overwrite this set with the contents of another, reusing the allocation.
    pub fn copy_from(&mut self, other: &Self) {
        self.0.clear();
        self.0.extend(other.0.iter().copied());
    }

    pub fn all_zero(&self) -> bool {
        let zero = T::zero();
        self.0.iter().all(|&i| i == zero)
    }
    pub fn count_ones(&self) -> usize {
        self.0.iter().map(|i| i.count_ones() as usize).sum()
    }

    /// Iterate over the indices of the set bits, in ascending order.
    pub fn ones(&self) -> Ones<'_, T> {
        Ones {
            words: self.0.as_slice(),
            idx: 0,
            cur: self.0.first().copied().unwrap_or_else(T::zero),
        }
    }
    /// Get the index of the `n`th set bit.
    pub fn nth(&self, n: usize) -> Option<usize> {
        self.ones().nth(n)
    }
    /// Get the index of the highest set bit.
    pub fn last_one(&self) -> Option<usize> {
        let bits = word_bits::<T>();
        let words = self.trimmed();
        let last = *words.last()?;
        Some((words.len() - 1) * bits + (bits - 1 - last.leading_zeros() as usize))
    }

    /// Number of bits set in both `self` and `other`.
    pub fn intersection_count(&self, other: &Self) -> usize {
        self.0
            .iter()
            .zip(&other.0)
            .map(|(&l, &r)| (l & r).count_ones() as usize)
            .sum()
    }
    pub fn intersects(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .any(|(&l, &r)| l & r != T::zero())
    }
}

impl<T: PrimInt, const N: usize> PartialEq for BitSet<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.trimmed() == other.trimmed()
    }
}
impl<T: PrimInt, const N: usize> Eq for BitSet<T, N> {}
impl<T: PrimInt + Hash, const N: usize> Hash for BitSet<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.trimmed().hash(state);
    }
}

impl<T: PrimInt, const N: usize> FromIterator<usize> for BitSet<T, N> {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut out = Self::new();
        for i in iter {
            out.set(i, true);
        }
        out
    }
}

impl<T: Binary, const N: usize> Debug for BitSet<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut l = f.debug_list();
        for i in &self.0 {
            l.entry(&format_args!("{i:0>0$b}", std::mem::size_of::<T>() * 8));
        }
        l.finish()
    }
}

/// Iterator over the set bits of a [`BitSet`].
#[derive(Debug, Clone)]
pub struct Ones<'a, T> {
    words: &'a [T],
    idx: usize,
    cur: T,
}
impl<T: PrimInt> Iterator for Ones<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.cur != T::zero() {
                let bit = self.cur.trailing_zeros() as usize;
                self.cur = self.cur & (self.cur - T::one());
                return Some(self.idx * word_bits::<T>() + bit);
            }
            self.idx += 1;
            self.cur = *self.words.get(self.idx)?;
        }
    }
}
impl<T: PrimInt> std::iter::FusedIterator for Ones<'_, T> {}

impl<T: PrimInt, const N: usize> BitAnd for BitSet<T, N> {
    type Output = BitSet<T, N>;

    fn bitand(mut self, rhs: Self) -> BitSet<T, N> {
        self &= rhs;
        self
    }
}

impl<T: PrimInt, const N: usize> BitAnd<&Self> for BitSet<T, N> {
    type Output = BitSet<T, N>;

    fn bitand(mut self, rhs: &Self) -> BitSet<T, N> {
        self &= rhs;
        self
    }
}

impl<T: PrimInt, const N: usize> BitAnd for &BitSet<T, N> {
    type Output = BitSet<T, N>;

    fn bitand(self, rhs: Self) -> BitSet<T, N> {
        BitSet(self.0.iter().zip(&rhs.0).map(|(l, r)| *l & *r).collect())
    }
}

impl<T: PrimInt, const N: usize> BitAndAssign for BitSet<T, N> {
    fn bitand_assign(&mut self, rhs: Self) {
        *self &= &rhs;
    }
}

impl<T: PrimInt, const N: usize> BitAndAssign<&Self> for BitSet<T, N> {
    fn bitand_assign(&mut self, rhs: &Self) {
        let len = rhs.0.len();
        self.0
            .iter_mut()
            .zip(&rhs.0)
            .for_each(|(l, r)| *l = *l & *r);
        self.0.iter_mut().skip(len).for_each(|l| *l = T::zero());
    }
}

impl<T: PrimInt, const N: usize> BitOr for BitSet<T, N> {
    type Output = BitSet<T, N>;

    fn bitor(mut self, rhs: Self) -> BitSet<T, N> {
        self |= rhs;
        self
    }
}

impl<T: PrimInt, const N: usize> BitOr<&Self> for BitSet<T, N> {
    type Output = BitSet<T, N>;

    fn bitor(mut self, rhs: &Self) -> BitSet<T, N> {
        self |= rhs;
        self
    }
}

impl<T: PrimInt, const N: usize> BitOr for &BitSet<T, N> {
    type Output = BitSet<T, N>;

    fn bitor(self, rhs: Self) -> BitSet<T, N> {
        BitSet(
            self.0
                .iter()
                .zip_longest(&rhs.0)
                .map(|e| match e {
                    Left(i) | Right(i) => *i,
                    Both(l, r) => *l | *r,
                })
                .collect(),
        )
    }
}

impl<T: PrimInt, const N: usize> BitOrAssign for BitSet<T, N> {
    fn bitor_assign(&mut self, rhs: Self) {
        *self |= &rhs;
    }
}

impl<T: PrimInt, const N: usize> BitOrAssign<&Self> for BitSet<T, N> {
    fn bitor_assign(&mut self, rhs: &Self) {
        let mut iter = rhs.0.iter();
        self.0
            .iter_mut()
            .zip(iter.by_ref())
            .for_each(|(l, r)| *l = *l | *r);
        self.0.extend(iter.copied());
    }
}

impl<T: PrimInt, const N: usize> BitXor for BitSet<T, N> {
    type Output = BitSet<T, N>;

    fn bitxor(mut self, rhs: Self) -> BitSet<T, N> {
        self ^= rhs;
        self
    }
}

impl<T: PrimInt, const N: usize> BitXor<&Self> for BitSet<T, N> {
    type Output = BitSet<T, N>;

    fn bitxor(mut self, rhs: &Self) -> BitSet<T, N> {
        self ^= rhs;
        self
    }
}

impl<T: PrimInt, const N: usize> BitXor for &BitSet<T, N> {
    type Output = BitSet<T, N>;

    fn bitxor(self, rhs: Self) -> BitSet<T, N> {
        BitSet(
            self.0
                .iter()
                .zip_longest(&rhs.0)
                .map(|e| match e {
                    Left(i) | Right(i) => *i,
                    Both(l, r) => *l ^ *r,
                })
                .collect(),
        )
    }
}

impl<T: PrimInt, const N: usize> BitXorAssign for BitSet<T, N> {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self ^= &rhs;
    }
}

impl<T: PrimInt, const N: usize> BitXorAssign<&Self> for BitSet<T, N> {
    fn bitxor_assign(&mut self, rhs: &Self) {
        let mut iter = rhs.0.iter();
        self.0
            .iter_mut()
            .zip(iter.by_ref())
            .for_each(|(l, r)| *l = *l ^ *r);
        self.0.extend(iter.copied());
    }
}
