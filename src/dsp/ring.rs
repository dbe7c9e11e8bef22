use crate::{error::BufferError, ConfigError};

/*
Circular Sample Buffer
======================

A fixed-capacity FIFO over f32 samples. This is the storage behind one
string's delay line: samples enter at the tail and leave from the head,
and the slots are reused in a loop so nothing is allocated after
construction.

  capacity = 5, two items queued:

      head          tail
       ↓             ↓
    ┌─────┬─────┬─────┬─────┬─────┐
    │  a  │  b  │     │     │     │
    └─────┴─────┴─────┴─────┴─────┘

  enqueue writes at `tail` and moves it forward one slot;
  dequeue reads at `head` and moves it forward one slot.
  Both cursors wrap modulo capacity.

`len` tracks occupancy separately from the cursors, since head == tail
holds for both the empty and the full buffer.

Enqueue on a full buffer and dequeue/peek on an empty one are reported as
`BufferError`s. A correctly sequenced string never triggers them.
*/

#[derive(Debug, Clone)]
pub struct CircularSampleBuffer {
    slots: Box<[f32]>,
    head: usize,
    tail: usize,
    len: usize,
}

impl CircularSampleBuffer {
    /// Create an empty buffer holding at most `capacity` samples.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        Ok(Self {
            slots: vec![0.0; capacity].into_boxed_slice(),
            head: 0,
            tail: 0,
            len: 0,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of samples currently queued.
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Append a sample at the tail.
    pub fn enqueue(&mut self, sample: f32) -> Result<(), BufferError> {
        if self.is_full() {
            return Err(BufferError::Full {
                capacity: self.capacity(),
            });
        }

        self.slots[self.tail] = sample;
        self.tail = (self.tail + 1) % self.capacity();
        self.len += 1;
        Ok(())
    }

    /// Remove and return the oldest sample.
    pub fn dequeue(&mut self) -> Result<f32, BufferError> {
        if self.is_empty() {
            return Err(BufferError::Empty);
        }

        let sample = self.slots[self.head];
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        Ok(sample)
    }

    /// Return the oldest sample without removing it.
    pub fn peek(&self) -> Result<f32, BufferError> {
        if self.is_empty() {
            return Err(BufferError::Empty);
        }

        Ok(self.slots[self.head])
    }

    /// Iterate queued samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.len).map(move |offset| self.slots[(self.head + offset) % self.capacity()])
    }
}
