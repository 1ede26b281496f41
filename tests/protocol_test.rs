//! Protocol-level properties of the shared queues: mutual exclusion of pump
//! ownership and FIFO hand-off under contention.
//!
//! These tests drive `FifoQueue` directly with instrumented workers, sending
//! acquire/release events over a channel and asserting on the collected
//! timeline after the workers stop.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use forecourt::core::{CancelToken, Car, CarId, FifoQueue, Pump};

const TICK: Duration = Duration::from_millis(2);

/// One acquire/release interval for a pump, as observed by a worker.
#[derive(Debug, Clone, Copy)]
struct HoldInterval {
    pump: u32,
    acquired: Instant,
    released: Instant,
}

/// Eight workers hammer a two-pump pool; per pump, the recorded hold
/// intervals must never overlap, because ownership moves through the queue.
#[test]
fn pump_holds_never_overlap() {
    const WORKERS: u32 = 8;
    const ROUNDS: usize = 20;

    let pool = Arc::new(FifoQueue::new());
    pool.push(Pump::new(1, Duration::from_millis(1)));
    pool.push(Pump::new(2, Duration::from_millis(1)));

    let cancel = CancelToken::new();
    let (events_tx, events_rx) = crossbeam_channel::unbounded::<HoldInterval>();

    let mut handles = Vec::new();
    for _ in 0..WORKERS {
        let pool = Arc::clone(&pool);
        let cancel = cancel.clone();
        let events_tx = events_tx.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..ROUNDS {
                let Some(mut pump) = pool.pop_wait(&cancel, TICK) else {
                    return;
                };
                let acquired = Instant::now();
                pump.dispense();
                let released = Instant::now();
                let id = pump.id();
                pool.push(pump);
                events_tx
                    .send(HoldInterval {
                        pump: id,
                        acquired,
                        released,
                    })
                    .unwrap();
            }
        }));
    }
    drop(events_tx);

    for h in handles {
        h.join().unwrap();
    }

    let intervals: Vec<HoldInterval> = events_rx.iter().collect();
    assert_eq!(intervals.len(), (WORKERS as usize) * ROUNDS);

    for pump_id in [1, 2] {
        let mut holds: Vec<&HoldInterval> =
            intervals.iter().filter(|i| i.pump == pump_id).collect();
        holds.sort_by_key(|i| i.acquired);
        for pair in holds.windows(2) {
            assert!(
                pair[0].released <= pair[1].acquired,
                "pump {pump_id} held by two workers at once"
            );
        }
    }

    // Both pumps ended up back in the pool with all the work accounted for.
    let mut total = 0;
    while let Some(pump) = pool.try_pop() {
        total += pump.fill_ups();
    }
    assert_eq!(total, u64::from(WORKERS) * ROUNDS as u64);
}

/// Waiters on the line front are released strictly in line order.
#[test]
fn front_waiters_release_in_fifo_order() {
    const CARS: u32 = 6;

    let line = Arc::new(FifoQueue::new());
    let cancel = CancelToken::new();
    let (order_tx, order_rx) = crossbeam_channel::unbounded::<u32>();

    for id in 1..=CARS {
        line.push(id);
    }

    let mut handles = Vec::new();
    for id in 1..=CARS {
        let line = Arc::clone(&line);
        let cancel = cancel.clone();
        let order_tx = order_tx.clone();
        handles.push(thread::spawn(move || {
            if line.wait_for_front(&id, &cancel, TICK) {
                // Record the turn, then step out of the way.
                order_tx.send(id).unwrap();
                let popped = line.try_pop();
                assert_eq!(popped, Some(id));
            }
        }));
    }
    drop(order_tx);

    for h in handles {
        h.join().unwrap();
    }

    let order: Vec<u32> = order_rx.iter().collect();
    assert_eq!(order, (1..=CARS).collect::<Vec<u32>>());
    assert!(line.is_empty());
}

/// A car removes itself from the line before filling up and rejoins only
/// afterwards, so the line never holds a car id twice: its length never
/// exceeds the population, and whatever ids remain after cancellation are
/// unique. Five cars on one pump cycle through enter/leave/re-enter many
/// times while a sampler watches the line.
#[test]
fn line_never_holds_duplicate_ids() {
    const CARS: u32 = 5;

    let line: Arc<FifoQueue<CarId>> = Arc::new(FifoQueue::new());
    let pumps = Arc::new(FifoQueue::new());
    pumps.push(Pump::new(1, Duration::from_millis(2)));
    let cancel = CancelToken::new();

    let mut workers = Vec::new();
    for id in 1..=CARS {
        let line = Arc::clone(&line);
        let pumps = Arc::clone(&pumps);
        let cancel = cancel.clone();
        workers.push(thread::spawn(move || {
            Car::new(id).run(&line, &pumps, &cancel, TICK)
        }));
    }

    let sampler = {
        let line = Arc::clone(&line);
        let cancel = cancel.clone();
        thread::spawn(move || {
            let mut max_len = 0;
            while !cancel.is_cancelled() {
                max_len = max_len.max(line.len());
                thread::sleep(Duration::from_millis(1));
            }
            max_len
        })
    };

    thread::sleep(Duration::from_millis(300));
    cancel.cancel();

    let total: u64 = workers
        .into_iter()
        .map(|w| w.join().unwrap().fill_ups)
        .sum();
    assert!(total > 0, "no car ever cycled through the line");

    // A duplicate id would push the line past the population size.
    let max_len = sampler.join().unwrap();
    assert!(
        max_len <= CARS as usize,
        "line grew to {max_len} entries for {CARS} cars"
    );

    // Cancelled cars stop in place, so the drained remainder must be a set.
    let mut remaining = Vec::new();
    while let Some(id) = line.try_pop() {
        remaining.push(id);
    }
    assert!(remaining.len() <= CARS as usize);
    let mut deduped = remaining.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(
        deduped.len(),
        remaining.len(),
        "duplicate ids left in line: {remaining:?}"
    );
    assert!(remaining.iter().all(|id| (1..=CARS).contains(id)));
}

/// A cancelled waiter never takes an item with it; whatever was queued when
/// the token flipped is still there afterwards.
#[test]
fn cancellation_strands_no_items() {
    let pool = Arc::new(FifoQueue::new());
    pool.push(Pump::new(1, Duration::from_millis(1)));

    let cancel = CancelToken::new();
    cancel.cancel();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let pool = Arc::clone(&pool);
        let cancel = cancel.clone();
        handles.push(thread::spawn(move || pool.pop_wait(&cancel, TICK)));
    }
    for h in handles {
        assert!(h.join().unwrap().is_none());
    }

    assert_eq!(pool.len(), 1);
}
