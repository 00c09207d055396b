// Demo: many threads funneling increments through one context

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use lockstep_core::{Context, PerformSync, QueueBound};

const THREADS: usize = 8;
const INCREMENTS_PER_THREAD: u64 = 200;

fn main() -> lockstep_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let context = Context::new("demo.store")?;
    let counter = AtomicU64::new(0);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..INCREMENTS_PER_THREAD {
                    context.perform_sync(|| {
                        counter.fetch_add(1, Ordering::Relaxed);
                    });
                }
            });
        }
    });

    println!("final count: {}", counter.load(Ordering::Relaxed));
    println!("idle stats:  {:?}", context.queue().stats());
    Ok(())
}
