//! Output table surface and the publisher thread.
//!
//! Workers never write to the table themselves: they hand finished
//! [`Reading`] values over a bounded channel and a single publisher thread
//! performs the external write. The table keeps all three fields under one
//! lock so a consumer can never see the distance of one frame paired with
//! the offset of another.

use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use log::{info, warn};

use tape_targets_core::Reading;

/// Wire key for the published distance, inches; `-1` flags an untrusted frame.
pub const KEY_DISTANCE: &str = "DistanceToRobotInches";
/// Wire key for the signed lateral offset, inches, positive right of center.
pub const KEY_DISTANCE_RIGHT: &str = "DistanceRightToRobotInches";
/// Wire key for the reserved bearing field, radians.
pub const KEY_ANGLE: &str = "AngleOfRobotToTapeRadians";

/// Destination for exactly one write per processed frame.
pub trait ReadingSink: Send + Sync {
    /// Publish all three fields of a reading as one atomic unit.
    fn publish(&self, reading: &Reading);
}

/// In-memory pub/sub table with the three standard entries.
///
/// Stands in for the network-table collaborator; consumers poll
/// [`snapshot`](OutputTable::snapshot).
#[derive(Debug, Default)]
pub struct OutputTable {
    cells: Mutex<Option<Reading>>,
}

impl OutputTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest published reading, or `None` before the first publish.
    pub fn snapshot(&self) -> Option<Reading> {
        *self.cells.lock().expect("table lock poisoned")
    }

    /// Latest table contents keyed by wire name.
    pub fn entries(&self) -> Option<[(&'static str, f64); 3]> {
        self.snapshot().map(|reading| {
            [
                (KEY_DISTANCE, reading.distance_in),
                (KEY_DISTANCE_RIGHT, reading.lateral_offset_in),
                (KEY_ANGLE, reading.angle_rad),
            ]
        })
    }
}

impl ReadingSink for OutputTable {
    fn publish(&self, reading: &Reading) {
        *self.cells.lock().expect("table lock poisoned") = Some(*reading);
    }
}

/// Capacity of the worker-to-publisher channel. Readings are tiny and
/// strictly frame-paced, so a short queue is enough to decouple the
/// table write from frame processing.
pub const PUBLISH_QUEUE_DEPTH: usize = 8;

/// Start the publisher thread for a sink.
///
/// Returns the sender workers push readings into and the thread handle.
/// The thread drains the channel in order and exits once every sender is
/// dropped.
pub fn spawn_publisher(
    sink: Arc<dyn ReadingSink>,
) -> (SyncSender<Reading>, JoinHandle<usize>) {
    let (tx, rx): (SyncSender<Reading>, Receiver<Reading>) = sync_channel(PUBLISH_QUEUE_DEPTH);
    let handle = thread::spawn(move || {
        let mut published = 0usize;
        for reading in rx {
            if reading.is_sentinel() {
                warn!("target geometry inconsistent, publishing sentinel");
            }
            sink.publish(&reading);
            published += 1;
        }
        info!("publisher done after {published} reading(s)");
        published
    });
    (tx, handle)
}
