use crate::error::ContainerError;

/// One singly linked node. `next` is an arena index, not a pointer.
#[derive(Debug)]
struct Slot<T> {
    value: T,
    next: Option<u32>,
}

/// FIFO queue over singly linked nodes.
///
/// Links are `Option<u32>` indices into an owned arena; dequeued slots go
/// onto a free list and are reused by later enqueues, so the arena never
/// grows past the high-water mark of the queue.
///
/// # Examples
///
/// ```
/// use structures_containers::LinkedQueue;
///
/// let mut queue = LinkedQueue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(*queue.front()?, 1);
/// assert_eq!(*queue.back()?, 2);
/// assert_eq!(queue.dequeue()?, 1);
/// assert_eq!(queue.size(), 1);
/// # Ok::<(), structures_containers::ContainerError>(())
/// ```
#[derive(Debug)]
pub struct LinkedQueue<T> {
    arena: Vec<Option<Slot<T>>>,
    free: Vec<u32>,
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
}

impl<T> LinkedQueue<T> {
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

    /// Append `value` at the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        let index = self.alloc(Slot { value, next: None });
        match self.tail {
            Some(tail) => self.slot_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    /// Detach and return the front value.
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        let head = self.head.ok_or(ContainerError::Empty)?;
        let slot = self.release(head);
        self.head = slot.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(slot.value)
    }

    pub fn front(&self) -> Result<&T, ContainerError> {
        let head = self.head.ok_or(ContainerError::Empty)?;
        Ok(&self.slot(head).value)
    }

    pub fn back(&self) -> Result<&T, ContainerError> {
        let tail = self.tail.ok_or(ContainerError::Empty)?;
        Ok(&self.slot(tail).value)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn size(&self) -> usize {
        self.len
    }

    fn alloc(&mut self, slot: Slot<T>) -> u32 {
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

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = LinkedQueue::new();
        for i in 0..5 {
            queue.enqueue(i);
        }
        for i in 0..5 {
            assert_eq!(queue.dequeue().unwrap(), i);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_front_back() {
        let mut queue = LinkedQueue::new();
        queue.enqueue("a");
        assert_eq!(*queue.front().unwrap(), "a");
        assert_eq!(*queue.back().unwrap(), "a");

        queue.enqueue("b");
        assert_eq!(*queue.front().unwrap(), "a");
        assert_eq!(*queue.back().unwrap(), "b");
    }

    #[test]
    fn test_empty_errors() {
        let mut queue: LinkedQueue<i32> = LinkedQueue::new();
        assert_eq!(queue.dequeue(), Err(ContainerError::Empty));
        assert_eq!(queue.front(), Err(ContainerError::Empty));
        assert_eq!(queue.back(), Err(ContainerError::Empty));
    }

    #[test]
    fn test_slot_reuse() {
        let mut queue = LinkedQueue::new();
        for i in 0..4 {
            queue.enqueue(i);
        }
        for _ in 0..4 {
            queue.dequeue().unwrap();
        }
        // Refilling reuses freed slots instead of growing the arena.
        for i in 10..14 {
            queue.enqueue(i);
        }
        assert_eq!(queue.arena.len(), 4);
        assert_eq!(queue.dequeue().unwrap(), 10);
    }

    #[test]
    fn test_clear() {
        let mut queue = LinkedQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.size(), 0);
        queue.enqueue(3);
        assert_eq!(queue.dequeue().unwrap(), 3);
    }
}
