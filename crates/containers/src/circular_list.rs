use crate::error::ContainerError;

/// One node of the ring. `next` always points at a live slot; a single
/// node points at itself.
#[derive(Debug)]
struct Slot<T> {
    value: T,
    next: u32,
}

/// Circular singly linked list.
///
/// The tail node's `next` link points back at the head, which is
/// expressible in safe Rust because links are arena indices rather than
/// owning pointers. Freed slots are recycled through a free list.
///
/// Positional operations follow the exercise contract: valid insert
/// indices are `0..=size()`, and [`CircularList::find`] returns `size()`
/// as the not-found sentinel.
///
/// # Examples
///
/// ```
/// use structures_containers::CircularList;
///
/// let mut list = CircularList::new();
/// list.push_back(2);
/// list.push_front(1);
/// list.insert(3, 2)?;
/// assert_eq!(*list.at(2)?, 3);
/// assert_eq!(list.pop_front()?, 1);
/// # Ok::<(), structures_containers::ContainerError>(())
/// ```
#[derive(Debug)]
pub struct CircularList<T> {
    arena: Vec<Option<Slot<T>>>,
    free: Vec<u32>,
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
}

impl<T> CircularList<T> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn push_front(&mut self, value: T) {
        let index = self.alloc(value);
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                self.slot_mut(index).next = head;
                self.slot_mut(tail).next = index;
                self.head = Some(index);
            }
            _ => self.link_single(index),
        }
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let index = self.alloc(value);
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                self.slot_mut(index).next = head;
                self.slot_mut(tail).next = index;
                self.tail = Some(index);
            }
            _ => self.link_single(index),
        }
        self.len += 1;
    }

    /// Insert at `index`, shifting later elements towards the tail. Valid
    /// indices are `0..=size()`.
    pub fn insert(&mut self, value: T, index: usize) -> Result<(), ContainerError> {
        if index > self.len {
            return Err(ContainerError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            self.push_front(value);
        } else if index == self.len {
            self.push_back(value);
        } else {
            let prev = self.node_at(index - 1);
            let next = self.slot(prev).next;
            let new = self.alloc(value);
            self.slot_mut(new).next = next;
            self.slot_mut(prev).next = new;
            self.len += 1;
        }
        Ok(())
    }

    /// Remove and return the element at `index`.
    pub fn pop(&mut self, index: usize) -> Result<T, ContainerError> {
        let (head, tail) = match (self.head, self.tail) {
            (Some(head), Some(tail)) => (head, tail),
            _ => return Err(ContainerError::Empty),
        };
        if index >= self.len {
            return Err(ContainerError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        let target = if index == 0 {
            if self.len == 1 {
                self.head = None;
                self.tail = None;
            } else {
                let new_head = self.slot(head).next;
                self.head = Some(new_head);
                self.slot_mut(tail).next = new_head;
            }
            head
        } else {
            let prev = self.node_at(index - 1);
            let target = self.slot(prev).next;
            let after = self.slot(target).next;
            self.slot_mut(prev).next = after;
            if target == tail {
                self.tail = Some(prev);
            }
            target
        };

        self.len -= 1;
        Ok(self.release(target).value)
    }

    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        match self.len {
            0 => Err(ContainerError::Empty),
            len => self.pop(len - 1),
        }
    }

    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        self.pop(0)
    }

    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        if index >= self.len {
            return Err(ContainerError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(&self.slot(self.node_at(index)).value)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn size(&self) -> usize {
        self.len
    }

    fn link_single(&mut self, index: u32) {
        self.slot_mut(index).next = index;
        self.head = Some(index);
        self.tail = Some(index);
    }

    /// Arena index of the node at ring position `pos`. Caller checks
    /// bounds.
    fn node_at(&self, pos: usize) -> u32 {
        let mut curr = self.head.expect("list is non-empty");
        for _ in 0..pos {
            curr = self.slot(curr).next;
        }
        curr
    }

    fn alloc(&mut self, value: T) -> u32 {
        let slot = Slot { value, next: 0 };
        match self.free.pop() {
            Some(index) => {
                self.arena[index as usize] = Some(slot);
                index
            }
            None => {
                self.arena.push(Some(slot));
                (self.arena.len() - 1) as u32
            }
        }
    }

    fn release(&mut self, index: u32) -> Slot<T> {
        self.free.push(index);
        self.arena[index as usize].take().expect("slot is live")
    }

    fn slot(&self, index: u32) -> &Slot<T> {
        self.arena[index as usize].as_ref().expect("slot is live")
    }

    fn slot_mut(&mut self, index: u32) -> &mut Slot<T> {
        self.arena[index as usize].as_mut().expect("slot is live")
    }
}

impl<T: PartialEq> CircularList<T> {
    /// Ring position of the first occurrence of `value`, or `size()` when
    /// absent.
    pub fn find(&self, value: &T) -> usize {
        let Some(head) = self.head else {
            return 0;
        };
        let mut curr = head;
        for pos in 0..self.len {
            if self.slot(curr).value == *value {
                return pos;
            }
            curr = self.slot(curr).next;
        }
        self.len
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value) != self.len
    }

    /// Remove the first occurrence of `value`.
    pub fn remove(&mut self, value: &T) -> Result<T, ContainerError> {
        let index = self.find(value);
        if index == self.len {
            return Err(ContainerError::NotFound);
        }
        self.pop(index)
    }
}

impl<T: PartialOrd> CircularList<T> {
    /// Insert keeping ascending order; equal elements keep arrival order.
    pub fn insert_sorted(&mut self, value: T) {
        let mut pos = 0;
        if let Some(head) = self.head {
            let mut curr = head;
            while pos < self.len && value > self.slot(curr).value {
                curr = self.slot(curr).next;
                pos += 1;
            }
        }
        self.insert(value, pos).expect("position within 0..=len");
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}
