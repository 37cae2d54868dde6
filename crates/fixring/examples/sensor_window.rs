//! Keeps a sliding window of the most recent sensor samples and reports a
//! moving average, dropping the oldest sample whenever the window is full.
//!
//! Run with
//!
//! ```bash
//! cargo run -p fixring --example sensor_window
//! ```
#![allow(missing_docs)]

use fixring::RingBuffer;

const WINDOW: usize = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let readings = [20.5, 21.0, 21.3, 22.8, 23.1, 22.9, 21.7, 20.2];
    let mut window = RingBuffer::new(WINDOW)?;

    for reading in readings {
        if let Err(rejected) = window.try_push(reading) {
            let evicted = window.pop();
            // A slot was just freed, so this cannot be rejected again.
            let _ = window.try_push(rejected);
            println!("evicted {evicted:?}");
        }

        #[allow(clippy::cast_precision_loss)]
        let average = window.iter().sum::<f64>() / window.len() as f64;
        println!("{reading:>5.1} -> window {window:?}, average {average:.2}");
    }

    let drained = window.pop_multiple(WINDOW);
    println!("final window: {drained:?}");
    Ok(())
}
