//! Strided views over borrowed storage
//!
//! A [`StridedView`] describes a logical vector of `len` elements inside a
//! slice. Logical index `i` lives at physical slot `offset + i * stride`.
//! A negative stride walks storage backwards; it changes which slot holds
//! logical index 0, never the logical order.

use crate::error::{Error, Result};
use std::iter::FusedIterator;

/// Starting index for a BLAS-style stride
///
/// Forward strides start at slot 0. Backward strides start at the slot of
/// the last logical element, `(len - 1) * |stride|`, so that the walk ends
/// at slot 0.
pub fn stride_to_offset(len: usize, stride: isize) -> usize {
    if stride >= 0 || len == 0 {
        return 0;
    }
    (len - 1).saturating_mul(stride.unsigned_abs())
}

/// Read-only strided view over a slice
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StridedView<'a, T> {
    data: &'a [T],
    len: usize,
    stride: isize,
    offset: usize,
}

impl<'a, T: Copy> StridedView<'a, T> {
    /// Create a validated BLAS-style view (offset derived from the stride sign)
    pub fn new(data: &'a [T], len: usize, stride: isize) -> Result<Self> {
        Self::with_offset(data, len, stride, stride_to_offset(len, stride))
    }

    /// Create a validated view with an explicit starting index
    pub fn with_offset(data: &'a [T], len: usize, stride: isize, offset: usize) -> Result<Self> {
        let view = Self::from_parts(data, len, stride, offset);
        view.validate()?;
        Ok(view)
    }

    /// Create a view without checking that it fits in `data`
    ///
    /// Nothing unsound can happen: reading an element outside `data` panics
    /// on the slice index. Use [`StridedView::validate`] to turn that into an
    /// error up front.
    pub fn from_parts(data: &'a [T], len: usize, stride: isize, offset: usize) -> Self {
        Self {
            data,
            len,
            stride,
            offset,
        }
    }

    /// Create an unchecked BLAS-style view
    pub fn from_blas(data: &'a [T], len: usize, stride: isize) -> Self {
        Self::from_parts(data, len, stride, stride_to_offset(len, stride))
    }

    /// Check that every logical element maps inside the backing storage
    pub fn validate(&self) -> Result<()> {
        if self.len == 0 {
            return Ok(());
        }
        if self.len > 1 && self.stride == 0 {
            log::debug!("rejecting zero stride over {} elements", self.len);
            return Err(Error::zero_stride(self.len));
        }
        let first = isize::try_from(self.offset)
            .map_err(|_| Error::index_overflow(self.len, self.stride, self.offset))?;
        let last = self.checked_physical_index(self.len - 1)?;
        let storage = self.data.len();
        for index in [first, last] {
            if index < 0 || index as usize >= storage {
                log::debug!(
                    "strided view (len={}, stride={}, offset={}) reaches index {} of storage {}",
                    self.len,
                    self.stride,
                    self.offset,
                    index,
                    storage
                );
                return Err(Error::out_of_bounds(index, storage));
            }
        }
        Ok(())
    }

    fn checked_physical_index(&self, i: usize) -> Result<isize> {
        let overflow = || Error::index_overflow(self.len, self.stride, self.offset);
        let i = isize::try_from(i).map_err(|_| overflow())?;
        let offset = isize::try_from(self.offset).map_err(|_| overflow())?;
        i.checked_mul(self.stride)
            .and_then(|delta| offset.checked_add(delta))
            .ok_or_else(overflow)
    }

    /// Number of logical elements
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn stride(&self) -> isize {
        self.stride
    }

    /// Physical index of logical element 0
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The backing storage
    pub fn storage(&self) -> &'a [T] {
        self.data
    }

    /// Physical slot of logical element `i`
    #[inline]
    pub fn physical_index(&self, i: usize) -> usize {
        (self.offset as isize).wrapping_add((i as isize).wrapping_mul(self.stride)) as usize
    }

    /// Logical element `i`, or `None` past the end of the view or storage
    pub fn get(&self, i: usize) -> Option<T> {
        if i >= self.len {
            return None;
        }
        self.data.get(self.physical_index(i)).copied()
    }

    /// Whether consecutive logical elements are adjacent in storage
    pub fn is_contiguous(&self) -> bool {
        self.stride == 1 || self.len <= 1
    }

    /// The view as a plain slice, if it is contiguous and fits in storage
    pub fn as_contiguous(&self) -> Option<&'a [T]> {
        if !self.is_contiguous() {
            return None;
        }
        let end = self.offset.checked_add(self.len)?;
        self.data.get(self.offset..end)
    }

    /// Iterate elements in logical order
    pub fn iter(&self) -> StridedIter<'a, T> {
        StridedIter {
            data: self.data,
            index: self.offset as isize,
            stride: self.stride,
            remaining: self.len,
        }
    }
}

impl<'a, T: Copy> IntoIterator for StridedView<'a, T> {
    type Item = T;
    type IntoIter = StridedIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Logical-order iterator over a [`StridedView`]
///
/// Panics if the view reaches outside its storage.
#[derive(Clone, Debug)]
pub struct StridedIter<'a, T> {
    data: &'a [T],
    index: isize,
    stride: isize,
    remaining: usize,
}

impl<T: Copy> Iterator for StridedIter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.data[self.index as usize];
        self.remaining -= 1;
        if self.remaining > 0 {
            self.index += self.stride;
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Copy> ExactSizeIterator for StridedIter<'_, T> {}

impl<T: Copy> FusedIterator for StridedIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_to_offset() {
        assert_eq!(stride_to_offset(8, 1), 0);
        assert_eq!(stride_to_offset(8, 3), 0);
        assert_eq!(stride_to_offset(8, -1), 7);
        assert_eq!(stride_to_offset(3, -2), 4);
        assert_eq!(stride_to_offset(0, -2), 0);
        assert_eq!(stride_to_offset(1, -5), 0);
        assert_eq!(stride_to_offset(4, 0), 0);
    }

    #[test]
    fn test_negative_stride_maps_last_slot_first() {
        let data = [1.0f32, -2.0, 3.0, -4.0, 5.0, -6.0, 7.0, -8.0];
        let view = StridedView::new(&data, 8, -1).unwrap();

        assert_eq!(view.offset(), 7);
        assert_eq!(view.get(0), Some(-8.0));
        assert_eq!(view.get(1), Some(7.0));
        assert_eq!(view.get(7), Some(1.0));
        assert_eq!(view.get(8), None);

        let logical: Vec<f32> = view.iter().collect();
        assert_eq!(logical, vec![-8.0, 7.0, -6.0, 5.0, -4.0, 3.0, -2.0, 1.0]);
    }

    #[test]
    fn test_explicit_offset_view() {
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let view = StridedView::with_offset(&data, 3, 2, 1).unwrap();
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![2.0, 4.0, 6.0]);

        let view = StridedView::with_offset(&data, 3, -1, 4).unwrap();
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![5.0, 4.0, 3.0]);
    }

    #[test]
    fn test_validate_rejects_short_storage() {
        let data = [1.0f32; 5];
        let err = StridedView::new(&data, 3, 3).unwrap_err();
        assert_eq!(err, Error::out_of_bounds(6, 5));

        let err = StridedView::new(&data, 4, -2).unwrap_err();
        assert_eq!(err, Error::out_of_bounds(6, 5));
    }

    #[test]
    fn test_validate_rejects_walking_below_zero() {
        let data = [1.0f32; 6];
        let err = StridedView::with_offset(&data, 3, -2, 2).unwrap_err();
        assert_eq!(err, Error::out_of_bounds(-2, 6));
    }

    #[test]
    fn test_validate_zero_stride() {
        let data = [1.0f32; 4];
        assert_eq!(
            StridedView::new(&data, 2, 0).unwrap_err(),
            Error::zero_stride(2)
        );
        // A single element never steps, so the stride is immaterial
        assert!(StridedView::new(&data, 1, 0).is_ok());
        assert!(StridedView::new(&data, 0, 0).is_ok());
    }

    #[test]
    fn test_validate_overflow() {
        let data = [0.0f32; 4];
        let err = StridedView::from_parts(&data, 4, isize::MAX, 0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_empty_view_needs_no_storage() {
        let data: [f32; 0] = [];
        let view = StridedView::new(&data, 0, -3).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.iter().count(), 0);
    }

    #[test]
    fn test_as_contiguous() {
        let data = [1.0f32, 2.0, 3.0, 4.0];
        let view = StridedView::with_offset(&data, 2, 1, 1).unwrap();
        assert_eq!(view.as_contiguous(), Some(&data[1..3]));

        let view = StridedView::new(&data, 2, 2).unwrap();
        assert_eq!(view.as_contiguous(), None);

        let view = StridedView::new(&data, 1, -4).unwrap();
        assert_eq!(view.as_contiguous(), Some(&data[0..1]));
    }

    #[test]
    fn test_iter_is_exact_size() {
        let data = [0.0f32; 10];
        let view = StridedView::new(&data, 4, 3).unwrap();
        let mut iter = view.iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn test_iter_does_not_step_past_last_element() {
        // Stepping after the last element would underflow the index
        let data = [1.0f32, 2.0, 3.0];
        let view = StridedView::new(&data, 3, -1).unwrap();
        let mut iter = view.iter();
        assert_eq!(iter.by_ref().collect::<Vec<_>>(), vec![3.0, 2.0, 1.0]);
        assert_eq!(iter.next(), None);
    }

    #[test]
    #[should_panic]
    fn test_unchecked_view_panics_out_of_range() {
        let data = [1.0f32, 2.0];
        let view = StridedView::from_parts(&data, 3, 1, 0);
        let _: Vec<f32> = view.iter().collect();
    }
}
