use fifo_monitor::{Config, Monitor};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

fn main() {
    println!("FIFO Send Monitor Basic Example");
    println!("================================\n");

    let monitor = Arc::new(Monitor::new(Config::new(64, 4).unwrap()));

    const N_PRODUCERS: usize = 8;
    const ROUNDS_PER_PRODUCER: usize = 200_000;

    println!("Configuration:");
    println!("  Producers: {N_PRODUCERS}");
    println!("  Concurrency window: 4");
    println!("  Rounds per producer: {ROUNDS_PER_PRODUCER}\n");

    let start = Instant::now();

    let mut handles = Vec::with_capacity(N_PRODUCERS);
    for id in 0..N_PRODUCERS {
        let monitor = Arc::clone(&monitor);
        handles.push(thread::spawn(move || {
            for _ in 0..ROUNDS_PER_PRODUCER {
                let entered = monitor.enter_blocking().unwrap();
                // ... critical section ...
                entered.leave();
            }
            println!("Producer {id} finished");
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let duration = start.elapsed();
    let total = N_PRODUCERS * ROUNDS_PER_PRODUCER;
    println!("\nResults:");
    println!("  Entries completed: {total}");
    println!("  Duration: {duration:.2?}");
    println!(
        "  Throughput: {:.2} million entries/sec",
        total as f64 / duration.as_secs_f64() / 1_000_000.0
    );

    // Two-phase entry lets a caller cancel its own wait from another thread.
    println!("\nTwo-phase entry with interrupt:");
    let monitor = Monitor::new(Config::new(4, 1).unwrap());
    let _holder = monitor.enter_blocking().unwrap();
    let reservation = monitor.schedule().unwrap();
    let handle = reservation.handle().expect("window is full, so this call would block");
    monitor.interrupt(handle).unwrap();
    match reservation.enter() {
        Err(err) => println!("  waiter was interrupted as expected: {err}"),
        Ok(_) => unreachable!("interrupt should have cancelled this wait"),
    }
}
