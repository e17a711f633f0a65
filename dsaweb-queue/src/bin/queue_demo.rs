//! Walks both queues through the lecture demonstration, tracing every step.
//!
//! Run: `cargo run --features demo --bin queue-demo`
//!
//! Environment:
//! - `RUST_LOG` - trace filter (default `debug`)
//! - `QUEUE_DEMO_CAPACITY` - ring size for the circular queue (default 5)
//! - `QUEUE_DEMO_VALUES` - comma-separated values for the linked queue
//!   (default `10,20,30`)

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use dsaweb_queue::{CircularQueue, LinkedQueue, Traced};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

struct Config {
    capacity: usize,
    values: Vec<i64>,
}

impl Config {
    fn load() -> Self {
        Self {
            capacity: try_load("QUEUE_DEMO_CAPACITY", 5),
            values: load_list("QUEUE_DEMO_VALUES", &[10, 20, 30]),
        }
    }
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    let Ok(raw) = env::var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

fn load_list(key: &str, default: &[i64]) -> Vec<i64> {
    let Ok(raw) = env::var(key) else {
        info!("{key} not set, using default: {default:?}");
        return default.to_vec();
    };
    raw.split(',')
        .map(|item| item.trim().parse())
        .collect::<Result<_, _>>()
        .unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default:?}");
            default.to_vec()
        })
}

fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let config = Config::load();

    info!("=== Linear Queue (Node-Based) ===");
    let mut queue = LinkedQueue::with_reporter(Traced);
    for &value in &config.values {
        queue.enqueue(value);
    }
    info!("Queue contents: {}", queue.display());
    queue.dequeue();
    info!("Queue contents: {}", queue.display());

    info!("=== Circular Queue ===");
    let Ok(mut ring) = CircularQueue::try_with_reporter(config.capacity, Traced) else {
        warn!("QUEUE_DEMO_CAPACITY must be > 0, skipping circular queue");
        return;
    };
    for value in 1..=3 {
        // rejections are already traced by the reporter
        let _ = ring.enqueue(value);
    }
    info!("Circular Queue contents: {}", ring.display());
    ring.dequeue();
    info!("Circular Queue contents: {}", ring.display());
}
