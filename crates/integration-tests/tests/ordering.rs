// Serial Queue Ordering Tests - execution order equals submission order

use std::sync::mpsc;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use lockstep_core::{dispatch_sync, Queue};

const SUBMISSIONS: usize = 8;

fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..10_000 {
        if condition() {
            return;
        }
        thread::sleep(Duration::from_millis(1));
    }
    panic!("condition not reached in time");
}

#[test]
fn test_serial_queue_executes_in_submission_order() {
    let queue = Queue::serial("ordering.fifo").unwrap();
    let order = Mutex::new(Vec::new());
    let (release_tx, release_rx) = mpsc::channel::<()>();

    thread::scope(|s| {
        let queue = &queue;
        let order = &order;

        // Hold the queue so every later submission queues up behind it.
        s.spawn(move || {
            dispatch_sync(queue, || {
                release_rx.recv().unwrap();
            });
        });
        wait_until(|| queue.stats().running == 1);

        // Submit from distinct threads, one at a time, so the submission
        // order is known exactly.
        for i in 0..SUBMISSIONS {
            s.spawn(move || {
                dispatch_sync(queue, || order.lock().unwrap().push(i));
            });
            wait_until(|| queue.stats().pending == i + 1);
        }

        release_tx.send(()).unwrap();
    });

    let observed = order.into_inner().unwrap();
    let expected: Vec<_> = (0..SUBMISSIONS).collect();
    assert_eq!(observed, expected);
}
