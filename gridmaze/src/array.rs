use std::ops;

use crate::dims::Dims;

/// Row-major 2D array addressed by [`Dims`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(x, y) = pos;
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Some(Dims(x as i32, y as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    pub fn all(&self, pred: impl Fn(&T) -> bool) -> bool {
        self.buf.iter().all(pred)
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, height: usize) -> Self {
        Self {
            buf: vec![item; width * height],
            width,
            height,
        }
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        let arr = Array2D::new(0u8, 3, 2);
        for (i, pos) in arr.iter_pos().enumerate() {
            assert_eq!(arr.dim_to_idx(pos), Some(i));
        }
        assert_eq!(arr.iter_pos().count(), 6);
    }

    #[test]
    fn out_of_bounds() {
        let arr = Array2D::new(false, 2, 2);
        assert_eq!(arr.get(Dims(2, 0)), None);
        assert_eq!(arr.get(Dims(0, -1)), None);
        assert_eq!(arr.idx_to_dim(4), None);
    }

    #[test]
    fn write_through_index() {
        let mut arr = Array2D::new(false, 2, 2);
        assert!(!arr.all(|b| *b));

        let positions: Vec<_> = arr.iter_pos().collect();
        for pos in positions {
            arr[pos] = true;
        }
        assert!(arr[Dims(1, 1)]);
        assert!(arr.all(|b| *b));
    }

    #[test]
    #[should_panic]
    fn index_panics_out_of_bounds() {
        let arr = Array2D::new(0, 1, 1);
        let _ = arr[Dims(1, 0)];
    }
}
