#[cfg(feature = "rtrb")]
use rtrb::Consumer;
use std::collections::VecDeque;

/// Queue of pending pluck symbols, drained by the simulation thread.
///
/// Input sources running on other threads push symbols into a
/// single-producer/single-consumer queue instead of touching the bank.
pub trait MessageReceiver<S> {
    fn pop(&mut self) -> Option<S>;
}

#[cfg(feature = "rtrb")]
impl<S> MessageReceiver<S> for Consumer<S> {
    fn pop(&mut self) -> Option<S> {
        Consumer::pop(self).ok()
    }
}

impl<S> MessageReceiver<S> for VecDeque<S> {
    fn pop(&mut self) -> Option<S> {
        self.pop_front()
    }
}
