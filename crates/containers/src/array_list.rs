use crate::error::ContainerError;
use std::ops::{Index, IndexMut};

/// Order-preserving sequence with bounds-checked access.
///
/// Backed by a `Vec`, so [`ArrayList::new`] grows without limit. The
/// bounded variant from the original exercise survives as
/// [`ArrayList::with_max_size`], which reports [`ContainerError::Full`]
/// once the limit is reached.
///
/// Linear search follows the exercise contract: [`ArrayList::find`]
/// returns `size()` as the not-found sentinel rather than an `Option`.
///
/// # Examples
///
/// ```
/// use structures_containers::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.push_back(2)?;
/// list.push_front(1)?;
/// list.insert(3, 2)?;
/// assert_eq!(list.size(), 3);
/// assert_eq!(*list.at(1)?, 2);
/// assert_eq!(list.find(&3), 2);
/// assert_eq!(list.find(&9), list.size());
/// # Ok::<(), structures_containers::ContainerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ArrayList<T> {
    items: Vec<T>,
    max_size: Option<usize>,
}

impl<T> ArrayList<T> {
    /// Unbounded list.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            max_size: None,
        }
    }

    /// Bounded list that holds at most `max_size` elements.
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            items: Vec::with_capacity(max_size),
            max_size: Some(max_size),
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push_back(&mut self, value: T) -> Result<(), ContainerError> {
        let len = self.items.len();
        self.insert(value, len)
    }

    pub fn push_front(&mut self, value: T) -> Result<(), ContainerError> {
        self.insert(value, 0)
    }

    /// Insert at `index`, shifting later elements right. Valid indices are
    /// `0..=size()`.
    pub fn insert(&mut self, value: T, index: usize) -> Result<(), ContainerError> {
        if self.full() {
            return Err(ContainerError::Full);
        }
        if index > self.items.len() {
            return Err(ContainerError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.items.insert(index, value);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left.
    pub fn pop(&mut self, index: usize) -> Result<T, ContainerError> {
        if self.items.is_empty() {
            return Err(ContainerError::Empty);
        }
        if index >= self.items.len() {
            return Err(ContainerError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        match self.items.len() {
            0 => Err(ContainerError::Empty),
            len => self.pop(len - 1),
        }
    }

    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        self.pop(0)
    }

    pub fn full(&self) -> bool {
        match self.max_size {
            Some(max) => self.items.len() >= max,
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Capacity ceiling, if this list was built with one.
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        self.items
            .get(index)
            .ok_or(ContainerError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(ContainerError::IndexOutOfRange { index, len })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Index of the first occurrence of `value`, or `size()` when absent.
    pub fn find(&self, value: &T) -> usize {
        self.items
            .iter()
            .position(|item| item == value)
            .unwrap_or(self.items.len())
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.iter().any(|item| item == value)
    }

    /// Remove the first occurrence of `value`.
    pub fn remove(&mut self, value: &T) -> Result<T, ContainerError> {
        let index = self.find(value);
        if index == self.items.len() {
            return Err(ContainerError::NotFound);
        }
        self.pop(index)
    }
}

impl<T: PartialOrd> ArrayList<T> {
    /// Insert keeping ascending order; equal elements keep arrival order.
    pub fn insert_sorted(&mut self, value: T) -> Result<(), ContainerError> {
        let mut index = 0;
        while index < self.items.len() && value > self.items[index] {
            index += 1;
        }
        self.insert(value, index)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}
