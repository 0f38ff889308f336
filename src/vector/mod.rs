mod ops;
mod util;

use core::ops::{Index, IndexMut};

use crate::config;
use crate::error::{Axis, Error, Result};
use crate::traits::Scalar;

/// Resizable, bounds-checked numeric sequence.
///
/// Backed by a `Vec<T>` that always holds exactly `len()` initialized
/// elements. Growth zero-fills, shrinking truncates. The length can never
/// exceed [`MAX_VECTOR_LEN`](crate::config::MAX_VECTOR_LEN).
///
/// # Examples
///
/// ```
/// use dense_linalg::Vector;
///
/// let v = Vector::from_slice(&[1.0_f64, 2.0, 3.0]).unwrap();
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.dot(&v).unwrap(), 14.0);
/// assert!(v.get(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector<T> {
    data: Vec<T>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Create a zero-filled vector of length `len`.
    ///
    /// ```
    /// use dense_linalg::Vector;
    /// let v = Vector::<f64>::new(4).unwrap();
    /// assert_eq!(v.len(), 4);
    /// assert_eq!(v[3], 0.0);
    /// ```
    pub fn new(len: usize) -> Result<Self> {
        Self::fill(len, T::zero())
    }

    /// Same as [`new`](Self::new).
    pub fn zeros(len: usize) -> Result<Self> {
        Self::fill(len, T::zero())
    }

    /// Create a vector of ones.
    pub fn ones(len: usize) -> Result<Self> {
        Self::fill(len, T::one())
    }

    /// Create a vector filled with `value`.
    pub fn fill(len: usize, value: T) -> Result<Self> {
        config::check_vector_len(len)?;
        Ok(Self {
            data: vec![value; len],
        })
    }

    /// Create a vector from a slice.
    ///
    /// ```
    /// use dense_linalg::Vector;
    /// let v = Vector::from_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(v[2], 3);
    /// ```
    pub fn from_slice(data: &[T]) -> Result<Self> {
        config::check_vector_len(data.len())?;
        Ok(Self {
            data: data.to_vec(),
        })
    }

    /// Take ownership of a `Vec`.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        config::check_vector_len(data.len())?;
        Ok(Self { data })
    }
}

impl<T> Vector<T> {
    /// Empty vector.
    pub const fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the vector, returning its storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Wrap storage whose length is already known to be within limits.
    #[inline]
    pub(crate) fn from_raw(data: Vec<T>) -> Self {
        debug_assert!(data.len() <= config::MAX_VECTOR_LEN);
        Self { data }
    }

    #[inline]
    pub(crate) fn check_index(&self, op: &'static str, index: usize) -> Result<()> {
        if self.data.is_empty() {
            return Err(Error::NullContainer { op });
        }
        if index >= self.data.len() {
            return Err(Error::IndexOutOfRange {
                op,
                axis: Axis::Element,
                index,
                len: self.data.len(),
            });
        }
        Ok(())
    }
}

// ── Element access ──────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Element at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.check_index("get", index)?;
        Ok(self.data[index])
    }

    /// Mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index("get_mut", index)?;
        Ok(&mut self.data[index])
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index("set", index)?;
        self.data[index] = value;
        Ok(())
    }

    /// Copy of the inclusive range `start..=end`.
    ///
    /// ```
    /// use dense_linalg::Vector;
    /// let v = Vector::from_slice(&[1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(v.get_range(1, 3).unwrap().as_slice(), &[2, 3, 4]);
    /// assert!(v.get_range(3, 1).is_err());
    /// ```
    pub fn get_range(&self, start: usize, end: usize) -> Result<Self> {
        if self.data.is_empty() {
            return Err(Error::NullContainer { op: "get_range" });
        }
        if start > end || end >= self.data.len() {
            return Err(Error::InvalidRange {
                op: "get_range",
                axis: Axis::Element,
                start,
                end,
                len: self.data.len(),
            });
        }
        Ok(Self::from_raw(self.data[start..=end].to_vec()))
    }

    /// Overwrite elements starting at `start` with the contents of `src`.
    pub fn set_subvector(&mut self, start: usize, src: &Self) -> Result<()> {
        let end = start.saturating_add(src.len());
        if src.is_empty() {
            return Ok(());
        }
        if end > self.data.len() {
            return Err(Error::InvalidRange {
                op: "set_subvector",
                axis: Axis::Element,
                start,
                end: end - 1,
                len: self.data.len(),
            });
        }
        self.data[start..end].copy_from_slice(&src.data);
        Ok(())
    }

    /// Resize in place, keeping the common prefix and zero-filling growth.
    ///
    /// ```
    /// use dense_linalg::Vector;
    /// let mut v = Vector::from_slice(&[1.0, 2.0]).unwrap();
    /// v.set_size(4).unwrap();
    /// assert_eq!(v.as_slice(), &[1.0, 2.0, 0.0, 0.0]);
    /// v.set_size(1).unwrap();
    /// assert_eq!(v.as_slice(), &[1.0]);
    /// assert!(v.set_size(16_001).is_err());
    /// ```
    pub fn set_size(&mut self, len: usize) -> Result<()> {
        config::check_vector_len(len)?;
        self.data.resize(len, T::zero());
        Ok(())
    }

    /// Set every element to zero.
    pub fn set_zeros(&mut self) {
        self.data.iter_mut().for_each(|x| *x = T::zero());
    }

    /// Set every element to one.
    pub fn set_ones(&mut self) {
        self.data.iter_mut().for_each(|x| *x = T::one());
    }

    /// Drop all elements.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Swap the elements at `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_index("swap", a)?;
        self.check_index("swap", b)?;
        self.data.swap(a, b);
        Ok(())
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    /// Panics with an [`Error::IndexOutOfRange`] message when `i >= len()`.
    #[inline]
    fn index(&self, i: usize) -> &T {
        if let Err(e) = self.check_index("index", i) {
            panic!("{e}");
        }
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        if let Err(e) = self.check_index("index", i) {
            panic!("{e}");
        }
        &mut self.data[i]
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zero_filled() {
        let v = Vector::<f64>::new(5).unwrap();
        assert_eq!(v.len(), 5);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn ones_and_fill() {
        assert_eq!(Vector::<i32>::ones(3).unwrap().as_slice(), &[1, 1, 1]);
        assert_eq!(Vector::fill(2, 7u8).unwrap().as_slice(), &[7, 7]);
    }

    #[test]
    fn capacity_ceiling() {
        assert!(Vector::<f32>::new(config::MAX_VECTOR_LEN).is_ok());
        assert_eq!(
            Vector::<f32>::new(config::MAX_VECTOR_LEN + 1),
            Err(Error::Capacity {
                requested: config::MAX_VECTOR_LEN + 1,
                max: config::MAX_VECTOR_LEN
            })
        );
        assert!(Vector::from_vec(vec![0u8; config::MAX_VECTOR_LEN + 1]).is_err());
    }

    #[test]
    fn get_out_of_range() {
        let v = Vector::<f64>::from_slice(&[1.0, 2.0]).unwrap();
        assert_eq!(v.get(1), Ok(2.0));
        assert_eq!(
            v.get(2),
            Err(Error::IndexOutOfRange {
                op: "get",
                axis: Axis::Element,
                index: 2,
                len: 2
            })
        );
    }

    #[test]
    fn get_on_empty() {
        let v: Vector<f64> = Vector::empty();
        assert_eq!(v.get(0), Err(Error::NullContainer { op: "get" }));
    }

    #[test]
    fn set_and_get_mut() {
        let mut v = Vector::<i64>::new(3).unwrap();
        v.set(0, 4).unwrap();
        *v.get_mut(2).unwrap() = 9;
        assert_eq!(v.as_slice(), &[4, 0, 9]);
        assert!(v.set(3, 1).is_err());
    }

    #[test]
    fn set_size_preserves_prefix() {
        let mut v = Vector::from_slice(&[3, 1, 4]).unwrap();
        v.set_size(5).unwrap();
        assert_eq!(v.as_slice(), &[3, 1, 4, 0, 0]);
        v.set_size(2).unwrap();
        assert_eq!(v.as_slice(), &[3, 1]);
        v.set_size(0).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn set_subvector() {
        let mut v = Vector::<i32>::new(5).unwrap();
        let s = Vector::from_slice(&[7, 8]).unwrap();
        v.set_subvector(2, &s).unwrap();
        assert_eq!(v.as_slice(), &[0, 0, 7, 8, 0]);
        assert!(v.set_subvector(4, &s).is_err());
    }

    #[test]
    fn fills_and_clear() {
        let mut v = Vector::<f64>::from_slice(&[2.0, 3.0]).unwrap();
        v.set_ones();
        assert_eq!(v.as_slice(), &[1.0, 1.0]);
        v.set_zeros();
        assert_eq!(v.as_slice(), &[0.0, 0.0]);
        v.clear();
        assert_eq!(v.len(), 0);
    }

    #[test]
    fn swap_elements() {
        let mut v = Vector::from_slice(&[1, 2, 3]).unwrap();
        v.swap(0, 2).unwrap();
        assert_eq!(v.as_slice(), &[3, 2, 1]);
        assert!(v.swap(0, 3).is_err());
    }

    #[test]
    fn index_mut() {
        let mut v = Vector::<f64>::new(3).unwrap();
        v[1] = 42.0;
        assert_eq!(v[1], 42.0);
    }

    #[test]
    #[should_panic(expected = "element index 3 out of range")]
    fn index_out_of_range_panics() {
        let v = Vector::<f64>::new(3).unwrap();
        let _ = v[3];
    }
}
