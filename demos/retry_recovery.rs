//! # Example: retry_recovery
//!
//! Demonstrates how the screen recovers from transient failures: the API
//! fails twice, the loader absorbs both failures, and the third call
//! delivers the rows.
//!
//! ## Flow
//! ```text
//! became_visible()
//!   ├─► publish(LoadStarting, attempt=0)
//!   ├─► load_friends() → Err("boom #1")
//!   ├─► publish(AttemptFailed)
//!   ├─► publish(RetryScheduled{delay=100ms})
//!   ├─► pause
//!   ├─► retry → attempt=1 → Err("boom #2") → RetryScheduled → pause
//!   ├─► retry → attempt=2 → Ok([...])
//!   └─► publish(LoadSucceeded) → rows rendered
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example retry_recovery
//! ```

use std::{
    sync::atomic::{AtomicU64, Ordering},
    sync::Arc,
    time::Duration,
};

use loadvisor::{
    ApiFn, Config, DetailPresenter, ErrorPresenter, Friend, FriendsScreen, LoadError, LoadResult,
    LogWriter, RetryPolicy, Subscribe,
};

static CALLS: AtomicU64 = AtomicU64::new(0);

struct Console;

impl DetailPresenter for Console {
    fn show(&self, friend: &Friend) {
        println!("[detail] {} ({})", friend.name, friend.phone);
    }
}

impl ErrorPresenter for Console {
    fn show_error(&self, message: &str) {
        println!("[alert] Error: {message}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // 1. Configure: 3 attempts, 100ms pause between re-issues.
    let cfg = Config {
        retry: RetryPolicy {
            max_attempts: 3,
            delay: Duration::from_millis(100),
        },
        bus_capacity: 100,
    };

    // 2. An API that fails twice before succeeding.
    let api = ApiFn::arc(|| async {
        let call = CALLS.fetch_add(1, Ordering::Relaxed) + 1;
        if call <= 2 {
            println!("[api] call {call}: simulated failure");
            Err(LoadError::failed(format!("boom #{call}")))
        } else {
            println!("[api] call {call}: success");
            LoadResult::Ok(vec![
                Friend::new("Friend1", "phone1"),
                Friend::new("Friend2", "phone2"),
            ])
        }
    });

    // 3. Attach the built-in event printer.
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter::new())];

    let console = Arc::new(Console);
    let mut screen = FriendsScreen::new(cfg, api, console.clone(), console, subs);
    println!("[main] policy: {:?}", screen.retry_policy());

    // 4. The visibility transition triggers exactly one sequence.
    screen.became_visible().await;

    for (index, friend) in screen.rows().iter().enumerate() {
        println!("[row {index}] {} / {}", friend.name, friend.phone);
    }
    screen.select_row(0);

    // Let the log subscriber drain its queue before exiting.
    tokio::time::sleep(Duration::from_millis(50)).await;
    println!("[main] done.");
}
