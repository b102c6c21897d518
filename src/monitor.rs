//! The core FIFO send monitor: a single mutex plus a ring of per-slot condvars
//! that admits producers into a bounded critical section in the exact order
//! they reserved a slot.

use std::sync::{Condvar, Mutex, MutexGuard};

use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::MonitorError;
use crate::handle::Handle;
use crate::invariants::{
    debug_assert_cursor_step, debug_assert_entered_bounded, debug_assert_entered_le_users,
    debug_assert_ret_sticky, debug_assert_users_bounded,
};

/// Mutex-protected counters and ring cursors. Condvars live outside this
/// struct (on [`Monitor`] directly) so that waking a slot never needs a
/// mutable borrow of the state alongside an immutable borrow of its condvar.
struct State {
    config: Config,
    head: usize,
    tail: usize,
    users: usize,
    entered: usize,
    paused: bool,
    /// Sticky close code: `0` while open, a fixed negative code once closed.
    ret: i32,
    /// Per-slot `wait_flag`: true while a waiter is genuinely parked there.
    live: Vec<bool>,
    /// Per-slot "a real notify happened" bit, distinguishing a genuine wake
    /// from a spurious one on the slot's condvar.
    woken: Vec<bool>,
    /// Per-slot "this producer is currently inside the critical section"
    /// bit. Distinguishes a slot that's legitimately held (not reclaimable)
    /// from one that's merely non-live because it was never parked,
    /// interrupted, or cancelled by `close` (reclaimable) — `live` alone
    /// can't tell those apart, since both read `false`.
    inside: Vec<bool>,
}

impl State {
    fn new(config: Config) -> Self {
        let capacity = config.capacity();
        Self {
            config,
            head: 0,
            tail: 0,
            users: 0,
            entered: 0,
            paused: false,
            ret: 0,
            live: vec![false; capacity],
            woken: vec![false; capacity],
            inside: vec![false; capacity],
        }
    }

    fn mask(&self) -> usize {
        self.config.mask()
    }

    fn must_wait(&self) -> bool {
        self.entered >= self.config.window() || self.paused
    }
}

/// A FIFO send monitor: serialises producers through a bounded critical
/// section in the exact order they reserved a slot via [`Monitor::schedule`].
///
/// Up to [`Config::window`] producers may be simultaneously "entered"; the
/// rest queue in strict FIFO order and are admitted one at a time as slots
/// free up. See the crate root docs for the full operation set.
pub struct Monitor {
    state: Mutex<State>,
    /// Signalled by `leave`/the cancelled-close path whenever a close drain
    /// might have completed.
    drained: Condvar,
    /// One condvar per ring slot, addressed by slot index.
    slot_waiters: Vec<Condvar>,
}

impl Monitor {
    /// Creates a new monitor with the given configuration.
    #[instrument(skip_all, fields(capacity = config.capacity(), window = config.window()))]
    pub fn new(config: Config) -> Self {
        debug!("constructing monitor");
        let capacity = config.capacity();
        Self {
            state: Mutex::new(State::new(config)),
            drained: Condvar::new(),
            slot_waiters: (0..capacity).map(|_| Condvar::new()).collect(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("monitor mutex poisoned: invariant violated mid-operation")
    }

    /// Queue capacity (power of two).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().config.capacity()
    }

    /// Concurrency window `N`.
    #[must_use]
    pub fn window(&self) -> usize {
        self.lock().config.window()
    }

    /// Number of producers currently holding a slot (queued + entered).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().users
    }

    /// True if no producer currently holds a slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True while admission is frozen by [`Monitor::pause`].
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.lock().paused
    }

    /// True once [`Monitor::close`] has taken effect.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lock().ret != 0
    }

    /// Reserves the next FIFO position (phase 1 of entry).
    ///
    /// Returns a [`Reservation`] that retains the monitor's lock: the caller
    /// prepares whatever it needs (nothing, in this port — parking uses a
    /// monitor-owned condvar) and then consumes the reservation with
    /// [`Reservation::enter`]. Dropping the reservation without entering
    /// abandons the slot, exactly as an [`Monitor::interrupt`] would.
    pub fn schedule(&self) -> Result<Reservation<'_>, MonitorError> {
        let mut guard = self.lock();
        if guard.ret != 0 {
            return Err(MonitorError::Closed);
        }
        if guard.users == guard.config.capacity() {
            return Err(MonitorError::QueueFull);
        }

        let slot_index = guard.tail;
        let old_tail = guard.tail;
        guard.users += 1;
        guard.tail = (guard.tail + 1) & guard.mask();
        debug_assert_cursor_step!("tail", old_tail, guard.tail, guard.mask());
        debug_assert_users_bounded!(guard.users, guard.config.capacity());

        let handle = guard.must_wait().then(|| Handle::from_slot_index(slot_index));

        Ok(Reservation {
            monitor: self,
            guard: Some(guard),
            slot_index,
            handle,
        })
    }

    /// Performs `schedule` then `enter` as a single call, for callers that
    /// have no use for an interrupt handle.
    pub fn enter_blocking(&self) -> Result<Entered<'_>, MonitorError> {
        self.schedule()?.enter()
    }

    /// Interrupts a single queued waiter, cancelling its wait with
    /// [`MonitorError::Interrupted`].
    ///
    /// Returns [`MonitorError::NoSuchWaiter`] if the handle no longer names a
    /// live waiter — it may have already entered, or already been
    /// interrupted. Callers cannot distinguish the two cases; this is by
    /// design (see the data model notes on slot lifecycle).
    #[instrument(skip(self))]
    pub fn interrupt(&self, handle: Handle) -> Result<(), MonitorError> {
        let mut guard = self.lock();
        let idx = handle.slot_index();
        if !guard.live[idx] {
            return Err(MonitorError::NoSuchWaiter);
        }
        guard.live[idx] = false;
        guard.woken[idx] = true;
        self.slot_waiters[idx].notify_one();

        // The interrupted waiter may have been at the head and already
        // signalled by a concurrent `leave`/`resume`; re-pump the cascade so
        // the next genuine waiter still gets woken.
        if !guard.paused && idx == guard.head {
            self.cascade(&mut guard);
        }
        debug!(slot = idx, "waiter interrupted");
        Ok(())
    }

    /// Freezes admission: queued and future reservations still succeed, but
    /// no waiter is promoted to "entered" until [`Monitor::resume`]. Already
    /// entered producers are unaffected. A no-op on a closed monitor.
    pub fn pause(&self) {
        let mut guard = self.lock();
        if guard.ret == 0 && !guard.paused {
            guard.paused = true;
            debug!("monitor paused");
        }
    }

    /// Resumes a paused monitor and pumps the cascade. Returns
    /// [`MonitorError::NotPaused`] if the monitor was not paused; this never
    /// corrupts state either way.
    pub fn resume(&self) -> Result<(), MonitorError> {
        let mut guard = self.lock();
        if !guard.paused {
            return Err(MonitorError::NotPaused);
        }
        guard.paused = false;
        self.cascade(&mut guard);
        info!("monitor resumed");
        Ok(())
    }

    /// Permanently closes the monitor: every present and future waiter
    /// observes [`MonitorError::Closed`]. Blocks until every queued and
    /// entered producer has drained. Idempotent — closing an already-closed
    /// monitor simply waits for the (possibly already complete) drain.
    #[instrument(skip(self))]
    pub fn close(&self) {
        let mut guard = self.lock();
        if guard.ret == 0 {
            let old_ret = guard.ret;
            guard.ret = MonitorError::Closed.as_errno();
            debug_assert_ret_sticky!(old_ret, guard.ret);
            guard.paused = false;
            let mask = guard.mask();
            let mut idx = guard.head;
            for _ in 0..guard.users {
                if guard.live[idx] {
                    guard.live[idx] = false;
                    guard.woken[idx] = true;
                    self.slot_waiters[idx].notify_one();
                }
                idx = (idx + 1) & mask;
            }
            info!("monitor closing, waking all waiters");
            // Reclaim every slot just cancelled above ourselves, rather than
            // leaving each waiter to self-release once it wakes: a waiter
            // that was merely marked non-live here hasn't re-acquired the
            // lock yet, so a concurrent `leave`'s own cascade could otherwise
            // race this reclaim and double-release the same slot.
            self.cascade(&mut guard);
        }

        let guard = self
            .drained
            .wait_while(guard, |s| s.users > 0 || s.entered > 0)
            .expect("monitor mutex poisoned: invariant violated mid-operation");
        drop(guard);
        info!("monitor drained");
    }

    /// Shared cascade wake-up (see the component design notes): signal at
    /// most one live waiter, reclaiming any stale (interrupted, never-parked,
    /// or `close`-cancelled) slots encountered along the way. `head` only
    /// ever stops advancing at a slot still legitimately held by an entered
    /// producer (`inside`) or at a live parked waiter — both block anything
    /// queued behind them, so the reclaim walk cannot skip past either.
    fn cascade(&self, state: &mut State) {
        loop {
            if state.users == 0 {
                break;
            }
            let idx = state.head;
            if state.inside[idx] {
                break;
            }
            if state.live[idx] {
                if state.entered >= state.config.window() {
                    break;
                }
                state.woken[idx] = true;
                self.slot_waiters[idx].notify_one();
                break;
            }
            state.users -= 1;
            let old_head = state.head;
            state.head = (state.head + 1) & state.mask();
            debug_assert_cursor_step!("head", old_head, state.head, state.mask());
        }
        debug_assert_users_bounded!(state.users, state.config.capacity());
        if state.ret != 0 && state.users == 0 && state.entered == 0 {
            self.drained.notify_all();
        }
    }

    /// Releases the ring slot at `head` (decrement `users`, advance `head`),
    /// used by `leave`. Notifies a pending `close` if this was the last
    /// holder to drain.
    fn release_slot(&self, state: &mut State) {
        let old_head = state.head;
        state.inside[old_head] = false;
        state.users -= 1;
        state.head = (old_head + 1) & state.mask();
        debug_assert_cursor_step!("head", old_head, state.head, state.mask());
        if state.ret != 0 && state.users == 0 && state.entered == 0 {
            self.drained.notify_all();
        }
    }
}

/// The guarded FIFO reservation returned by [`Monitor::schedule`] (phase 1 of
/// entry). Retains the monitor's lock until consumed by [`Reservation::enter`].
pub struct Reservation<'a> {
    monitor: &'a Monitor,
    guard: Option<MutexGuard<'a, State>>,
    slot_index: usize,
    handle: Option<Handle>,
}

impl<'a> Reservation<'a> {
    /// The handle to pass to [`Monitor::interrupt`] if this reservation must
    /// wait. `None` means the caller may proceed straight through
    /// [`Reservation::enter`] without blocking.
    #[must_use]
    pub fn handle(&self) -> Option<Handle> {
        self.handle
    }

    /// Completes entry (phase 2): parks on the reserved slot if required,
    /// then promotes to "inside" the critical section.
    pub fn enter(mut self) -> Result<Entered<'a>, MonitorError> {
        let mut guard = self
            .guard
            .take()
            .expect("a live Reservation always holds its guard until consumed");
        let monitor = self.monitor;
        let idx = self.slot_index;

        if self.handle.is_some() {
            guard.live[idx] = true;
            guard = monitor.slot_waiters[idx]
                .wait_while(guard, |s| !s.woken[idx])
                .expect("monitor mutex poisoned: invariant violated mid-operation");
            guard.woken[idx] = false;
            let cancelled = !guard.live[idx];
            guard.live[idx] = false;

            if cancelled {
                // Neither branch releases the slot itself: whichever of
                // `interrupt`/`close`/a racing `cascade` observed this slot
                // turn non-live already reclaimed it (or will, once `head`
                // reaches it) under the same lock that set `live` false. A
                // second release here would double-decrement `users`.
                return Err(if guard.ret == 0 {
                    MonitorError::Interrupted
                } else {
                    MonitorError::Closed
                });
            }
        }

        guard.entered += 1;
        guard.inside[idx] = true;
        debug_assert_entered_bounded!(guard.entered, guard.config.window());
        debug_assert_entered_le_users!(guard.entered, guard.users);
        Ok(Entered {
            monitor,
            left: false,
        })
    }
}

impl<'a> Drop for Reservation<'a> {
    fn drop(&mut self) {
        let Some(mut guard) = self.guard.take() else {
            return;
        };
        // `enter` was never called: the slot was never marked live, so it
        // already looks like a never-parked stale slot to the cascade. Kick
        // the cascade only if we're sitting at the head, mirroring the
        // interrupt-at-head special case.
        if !guard.paused && self.slot_index == guard.head {
            self.monitor.cascade(&mut guard);
        }
    }
}

/// RAII guard representing a producer currently inside the critical section.
///
/// Release with the explicit [`Entered::leave`], or simply drop the guard —
/// both release exactly once, matching the "exactly one leave per enter"
/// contract.
pub struct Entered<'a> {
    monitor: &'a Monitor,
    left: bool,
}

impl<'a> Entered<'a> {
    /// Explicitly leaves the critical section.
    pub fn leave(mut self) {
        self.leave_once();
    }

    fn leave_once(&mut self) {
        if self.left {
            return;
        }
        self.left = true;
        let mut guard = self.monitor.lock();
        guard.entered -= 1;
        self.monitor.release_slot(&mut guard);
        if !guard.paused {
            self.monitor.cascade(&mut guard);
        }
    }
}

impl<'a> Drop for Entered<'a> {
    fn drop(&mut self) {
        self.leave_once();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn cfg(capacity: usize, window: usize) -> Config {
        Config::new(capacity, window).unwrap()
    }

    /// Spawns a producer thread that schedules, reports its handle (if any)
    /// back over `tx_handle` before possibly parking, then enters and blocks
    /// until told to leave over `rx_release`. Reports the outcome of `enter`
    /// over `tx_result`. `schedule` and `enter` always run on this one
    /// thread: a `Reservation` borrows the monitor's mutex guard and is not
    /// `Send`, so it can never cross to another thread.
    fn spawn_producer(
        m: Arc<Monitor>,
        tx_handle: mpsc::Sender<Option<Handle>>,
        rx_release: mpsc::Receiver<()>,
        tx_result: mpsc::Sender<Result<(), MonitorError>>,
    ) -> thread::JoinHandle<()> {
        thread::spawn(move || {
            let reservation = match m.schedule() {
                Ok(r) => r,
                Err(e) => {
                    tx_handle.send(None).ok();
                    tx_result.send(Err(e)).ok();
                    return;
                }
            };
            tx_handle.send(reservation.handle()).ok();
            match reservation.enter() {
                Ok(entered) => {
                    rx_release.recv().ok();
                    entered.leave();
                    tx_result.send(Ok(())).ok();
                }
                Err(e) => {
                    tx_result.send(Err(e)).ok();
                }
            }
        })
    }

    /// Scenario 1: capacity=4, window=1. Strict FIFO mutex through four
    /// threads, each entering and leaving in turn.
    #[test]
    fn scenario_strict_fifo_mutex() {
        let m = Arc::new(Monitor::new(cfg(4, 1)));
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut handles = Vec::new();
        for id in 0..4u32 {
            let m = Arc::clone(&m);
            let order = Arc::clone(&order);
            handles.push(thread::spawn(move || {
                let entered = m.enter_blocking().unwrap();
                order.lock().unwrap().push(id);
                thread::sleep(Duration::from_millis(1));
                entered.leave();
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(m.len(), 0);
        assert!(!m.is_paused());
    }

    /// Scenario 2: capacity=4, window=2. Two producers enter immediately, a
    /// third queues and is admitted once one of the first two leaves.
    #[test]
    fn scenario_concurrency_window() {
        let m = Arc::new(Monitor::new(cfg(4, 2)));
        let e1 = m.enter_blocking().unwrap();
        let e2 = m.enter_blocking().unwrap();
        assert_eq!(m.len(), 2);

        let (tx_handle, rx_handle) = mpsc::channel();
        let (tx_release, rx_release) = mpsc::channel();
        let (tx_result, rx_result) = mpsc::channel();
        let t3 = spawn_producer(Arc::clone(&m), tx_handle, rx_release, tx_result);
        assert!(rx_handle.recv().unwrap().is_some());
        thread::sleep(Duration::from_millis(5));

        e1.leave();
        tx_release.send(()).unwrap();
        assert_eq!(rx_result.recv().unwrap(), Ok(()));
        t3.join().unwrap();
        e2.leave();
        assert_eq!(m.len(), 0);
    }

    /// Scenario 3: interrupting a queued waiter returns `Interrupted` and
    /// does not disturb the remaining occupancy accounting.
    #[test]
    fn scenario_interrupt_queued_waiter() {
        let m = Arc::new(Monitor::new(cfg(4, 1)));
        let e1 = m.enter_blocking().unwrap();

        let (tx_handle, rx_handle) = mpsc::channel();
        let (_tx_release, rx_release) = mpsc::channel();
        let (tx_result, rx_result) = mpsc::channel();
        let t2 = spawn_producer(Arc::clone(&m), tx_handle, rx_release, tx_result);
        let handle = rx_handle.recv().unwrap().unwrap();
        thread::sleep(Duration::from_millis(5));

        m.interrupt(handle).unwrap();
        assert_eq!(rx_result.recv().unwrap().unwrap_err(), MonitorError::Interrupted);
        t2.join().unwrap();

        e1.leave();
        assert_eq!(m.len(), 0);
    }

    /// Scenario 4: pause freezes admission without dropping waiters; resume
    /// pumps the cascade.
    #[test]
    fn scenario_pause_then_resume() {
        let m = Arc::new(Monitor::new(cfg(4, 1)));
        let e1 = m.enter_blocking().unwrap();

        let (tx_handle2, rx_handle2) = mpsc::channel();
        let (tx_release2, rx_release2) = mpsc::channel();
        let (tx_result2, rx_result2) = mpsc::channel();
        let t2 = spawn_producer(Arc::clone(&m), tx_handle2, rx_release2, tx_result2);
        rx_handle2.recv().unwrap();
        thread::sleep(Duration::from_millis(5));

        m.pause();

        let (tx_handle3, rx_handle3) = mpsc::channel();
        let (tx_release3, rx_release3) = mpsc::channel();
        let (tx_result3, rx_result3) = mpsc::channel();
        let t3 = spawn_producer(Arc::clone(&m), tx_handle3, rx_release3, tx_result3);
        rx_handle3.recv().unwrap();
        thread::sleep(Duration::from_millis(5));

        // T2 must not yet be admitted: monitor is paused.
        assert_eq!(m.test_entered(), 1);

        e1.leave();
        thread::sleep(Duration::from_millis(5));
        assert_eq!(m.test_entered(), 1); // still paused

        m.resume().unwrap();
        thread::sleep(Duration::from_millis(5));
        tx_release2.send(()).unwrap();
        assert_eq!(rx_result2.recv().unwrap(), Ok(()));
        t2.join().unwrap();

        tx_release3.send(()).unwrap();
        assert_eq!(rx_result3.recv().unwrap(), Ok(()));
        t3.join().unwrap();
        assert_eq!(m.len(), 0);
    }

    /// Scenario 5: `schedule` reports queue-full at exactly `users == capacity`.
    #[test]
    fn scenario_queue_full() {
        let m = Arc::new(Monitor::new(cfg(2, 1)));
        let _e1 = m.enter_blocking().unwrap();

        let (tx_handle, rx_handle) = mpsc::channel();
        let (_tx_release, rx_release) = mpsc::channel();
        let (tx_result, _rx_result) = mpsc::channel();
        let _t2 = spawn_producer(Arc::clone(&m), tx_handle, rx_release, tx_result);
        rx_handle.recv().unwrap();
        thread::sleep(Duration::from_millis(5)); // let T2 reach the park point

        let err = m.schedule().unwrap_err();
        assert_eq!(err, MonitorError::QueueFull);
    }

    /// Scenario 6: close wakes every queued waiter with the closed code and
    /// drains once the entered producer leaves.
    #[test]
    fn scenario_close_drains_queue() {
        let m = Arc::new(Monitor::new(cfg(4, 1)));
        let e1 = m.enter_blocking().unwrap();

        let (tx_handle2, rx_handle2) = mpsc::channel();
        let (_tx_release2, rx_release2) = mpsc::channel();
        let (tx_result2, rx_result2) = mpsc::channel();
        let t2 = spawn_producer(Arc::clone(&m), tx_handle2, rx_release2, tx_result2);
        rx_handle2.recv().unwrap();
        thread::sleep(Duration::from_millis(5));

        let (tx_handle3, rx_handle3) = mpsc::channel();
        let (_tx_release3, rx_release3) = mpsc::channel();
        let (tx_result3, rx_result3) = mpsc::channel();
        let t3 = spawn_producer(Arc::clone(&m), tx_handle3, rx_release3, tx_result3);
        rx_handle3.recv().unwrap();
        thread::sleep(Duration::from_millis(5));

        let m4 = Arc::clone(&m);
        let closer = thread::spawn(move || m4.close());

        // Race `e1.leave` (and the cascade it triggers) against `close`'s
        // own in-flight cancellation/reclaim of T2 and T3, instead of
        // waiting for T2/T3 to fully join first: that ordering is exactly
        // what a stale double-reclaim needs to be exercised at all.
        thread::sleep(Duration::from_millis(2));
        e1.leave();

        assert_eq!(rx_result2.recv().unwrap().unwrap_err(), MonitorError::Closed);
        assert_eq!(rx_result3.recv().unwrap().unwrap_err(), MonitorError::Closed);
        t2.join().unwrap();
        t3.join().unwrap();

        closer.join().unwrap();
        assert!(m.is_closed());
        assert_eq!(m.len(), 0);

        // Once closed, everything observes Closed immediately.
        assert_eq!(m.schedule().unwrap_err(), MonitorError::Closed);
    }

    #[test]
    fn resume_without_pause_is_an_error() {
        let m = Monitor::new(cfg(4, 1));
        assert_eq!(m.resume().unwrap_err(), MonitorError::NotPaused);
    }

    #[test]
    fn repeated_pause_is_a_no_op() {
        let m = Monitor::new(cfg(4, 1));
        m.pause();
        m.pause();
        assert!(m.is_paused());
    }

    #[test]
    fn repeated_close_is_idempotent() {
        let m = Monitor::new(cfg(4, 1));
        m.close();
        m.close();
        assert!(m.is_closed());
    }

    #[test]
    fn abandoned_reservation_at_head_is_reclaimed() {
        let m = Monitor::new(cfg(4, 1));
        {
            let reservation = m.schedule().unwrap();
            assert!(reservation.handle().is_none());
            // Dropped without entering.
        }
        assert_eq!(m.len(), 0);

        let e = m.enter_blocking().unwrap();
        e.leave();
    }

    #[test]
    fn interrupt_of_non_head_waiter_does_not_disturb_head() {
        let m = Arc::new(Monitor::new(cfg(4, 1)));
        let e1 = m.enter_blocking().unwrap();

        let (tx_handle2, rx_handle2) = mpsc::channel();
        let (tx_release2, rx_release2) = mpsc::channel();
        let (tx_result2, rx_result2) = mpsc::channel();
        let t2 = spawn_producer(Arc::clone(&m), tx_handle2, rx_release2, tx_result2);
        rx_handle2.recv().unwrap();
        thread::sleep(Duration::from_millis(5));

        let (tx_handle3, rx_handle3) = mpsc::channel();
        let (_tx_release3, rx_release3) = mpsc::channel();
        let (tx_result3, rx_result3) = mpsc::channel();
        let t3 = spawn_producer(Arc::clone(&m), tx_handle3, rx_release3, tx_result3);
        let handle3 = rx_handle3.recv().unwrap().unwrap();
        thread::sleep(Duration::from_millis(5));

        m.interrupt(handle3).unwrap();
        assert_eq!(rx_result3.recv().unwrap().unwrap_err(), MonitorError::Interrupted);
        t3.join().unwrap();

        e1.leave();
        tx_release2.send(()).unwrap();
        assert_eq!(rx_result2.recv().unwrap(), Ok(()));
        t2.join().unwrap();
        assert_eq!(m.len(), 0);
    }

    // Test-only accessor: peeks at `entered` without exposing it publicly.
    impl Monitor {
        fn test_entered(&self) -> usize {
            self.lock().entered
        }
    }
}
