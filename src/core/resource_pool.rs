use super::error::SimulationError;
use super::types::{ProcessId, SimTime};
use std::collections::VecDeque;

/// Proof that a unit was granted by the pool.
///
/// Not cloneable and not constructible outside the pool: the only way to get
/// one is a grant, and the only way to get rid of it is `release`, so a unit
/// cannot be returned twice or conjured from nothing.
#[derive(Debug)]
pub struct UnitHandle(());

/// A request parked in the waiting queue until a unit frees up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRequest {
    pub process: ProcessId,
    pub queued_at: SimTime,
}

/// Outcome of a resource request.
#[derive(Debug)]
pub enum Grant {
    /// A unit was free; it is granted in the same instant with zero wait.
    Immediate(UnitHandle),
    /// The pool is saturated; the request joined the FIFO waiting queue.
    Queued,
}

/// A released unit handed directly to the longest-waiting request.
#[derive(Debug)]
pub struct Handoff {
    pub request: PendingRequest,
    pub handle: UnitHandle,
}

/// A pool of identical, interchangeable service units (the doctors).
///
/// Occupancy never exceeds capacity, and the waiting queue is non-empty only
/// while every unit is in use — a request never waits while a unit is free.
/// Grants are strictly FIFO: on release, the unit transfers to the
/// longest-waiting request within the same virtual instant instead of going
/// back to the free pool.
pub struct ResourcePool {
    capacity: u32,
    in_use: u32,
    waiting: VecDeque<PendingRequest>,
}

impl ResourcePool {
    /// Create a pool with a fixed number of units. Capacity cannot change
    /// after construction.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            in_use: 0,
            waiting: VecDeque::new(),
        }
    }

    /// Request a unit for `process` at the current virtual time.
    ///
    /// Grants immediately when a unit is free, otherwise queues the request
    /// in FIFO order. The zero-wait path and the queued path are accounted
    /// identically by the caller (wait = grant time − request time).
    pub fn request(&mut self, process: ProcessId, at: SimTime) -> Grant {
        if self.in_use < self.capacity {
            debug_assert!(self.waiting.is_empty(), "waiter present while a unit is free");
            self.in_use += 1;
            Grant::Immediate(UnitHandle(()))
        } else {
            self.waiting.push_back(PendingRequest {
                process,
                queued_at: at,
            });
            Grant::Queued
        }
    }

    /// Return a unit to the pool.
    ///
    /// If anyone is waiting, the unit transfers atomically to the front of
    /// the queue and the returned `Handoff` tells the caller which process
    /// to resume at the current instant. With no waiters the unit simply
    /// becomes free again.
    pub fn release(&mut self, handle: UnitHandle) -> Result<Option<Handoff>, SimulationError> {
        // Consuming the handle is the proof of a prior grant; an empty pool
        // here means the engine's accounting is corrupted.
        let UnitHandle(()) = handle;
        if self.in_use == 0 {
            return Err(SimulationError::ReleaseUnderflow);
        }
        match self.waiting.pop_front() {
            Some(request) => {
                // in_use is unchanged: the unit never becomes free, it moves
                // straight to the next requester.
                Ok(Some(Handoff {
                    request,
                    handle: UnitHandle(()),
                }))
            }
            None => {
                self.in_use -= 1;
                Ok(None)
            }
        }
    }

    /// Number of units currently granted.
    pub fn in_use(&self) -> u32 {
        self.in_use
    }

    /// Fixed unit count.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of requests parked in the waiting queue.
    pub fn waiting_len(&self) -> usize {
        self.waiting.len()
    }
}
