//! Per-camera frame worker.
//!
//! One worker thread per active camera pulls candidate lists off a bounded
//! channel in arrival order, runs the decision pipeline, and forwards every
//! publishable reading to the publisher. Skipped frames forward nothing.
//! The worker holds no state across frames; it stops when the frame
//! channel closes or the publisher goes away.

use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use log::{debug, info};

use tape_targets_core::{BoundingBox, FramePipeline, Reading};

/// Candidate boxes the detector found in one frame.
pub type FrameCandidates = Vec<BoundingBox>;

/// Bounded frame channel between the detector callback and a worker.
///
/// A full queue blocks the detector side; dropping stale frames instead is
/// the detector's own policy, not this runtime's.
pub fn frame_channel(depth: usize) -> (SyncSender<FrameCandidates>, Receiver<FrameCandidates>) {
    sync_channel(depth)
}

/// Tally of one worker's run, returned when its thread joins.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WorkerStats {
    /// Frames pulled off the channel.
    pub processed: usize,
    /// Frames that produced no reading at all.
    pub skipped: usize,
    /// Readings handed to the publisher (accepted and sentinel alike).
    pub forwarded: usize,
}

/// Start a worker for one camera.
pub fn spawn_worker(
    name: String,
    pipeline: FramePipeline,
    publisher: SyncSender<Reading>,
    frames: Receiver<FrameCandidates>,
) -> JoinHandle<WorkerStats> {
    thread::spawn(move || {
        info!("worker '{name}' started");
        let mut stats = WorkerStats::default();

        for candidates in frames {
            stats.processed += 1;
            match pipeline.process(&candidates) {
                Some(reading) => {
                    if publisher.send(reading).is_err() {
                        debug!("worker '{name}': publisher closed, stopping");
                        break;
                    }
                    stats.forwarded += 1;
                }
                None => stats.skipped += 1,
            }
        }

        info!(
            "worker '{name}' done: {} frame(s), {} skipped, {} forwarded",
            stats.processed, stats.skipped, stats.forwarded
        );
        stats
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::sink::{spawn_publisher, OutputTable};
    use tape_targets_core::{FrameGeometry, GateParams, TargetSpec};

    fn tape(center_x: f64, height: f64) -> BoundingBox {
        BoundingBox {
            x: center_x - 10.0,
            y: 480.0,
            width: 20.0,
            height,
        }
    }

    fn pipeline() -> FramePipeline {
        let frame = FrameGeometry {
            width_px: 1920,
            height_px: 1080,
        };
        FramePipeline::new(&TargetSpec::default(), frame, GateParams::default())
            .expect("valid spec")
    }

    #[test]
    fn worker_forwards_readings_and_counts_skips() {
        let table = Arc::new(OutputTable::new());
        let (reading_tx, publisher) = spawn_publisher(table.clone());
        let (frame_tx, frame_rx) = frame_channel(4);
        let worker = spawn_worker("front".into(), pipeline(), reading_tx, frame_rx);

        // One good pair, one empty frame, one inconsistent pair.
        frame_tx
            .send(vec![tape(880.0, 83.0), tape(1040.0, 83.0)])
            .expect("send");
        frame_tx.send(Vec::new()).expect("send");
        frame_tx
            .send(vec![tape(880.0, 400.0), tape(1040.0, 400.0)])
            .expect("send");
        drop(frame_tx);

        let stats = worker.join().expect("worker thread");
        assert_eq!(
            stats,
            WorkerStats {
                processed: 3,
                skipped: 1,
                forwarded: 2,
            }
        );

        let published = publisher.join().expect("publisher thread");
        assert_eq!(published, 2);

        // The sentinel from the inconsistent frame is the last write.
        let last = table.snapshot().expect("reading");
        assert!(last.is_sentinel());
    }

    #[test]
    fn frames_are_processed_in_arrival_order() {
        let table = Arc::new(OutputTable::new());
        let (reading_tx, publisher) = spawn_publisher(table.clone());
        let (frame_tx, frame_rx) = frame_channel(8);
        let worker = spawn_worker("front".into(), pipeline(), reading_tx, frame_rx);

        // Successively wider pairs, heights tracking the approach so every
        // frame passes the gate; the final snapshot is the nearest frame.
        let mut last_separation = 0.0;
        for (separation, height) in [(120.0, 62.0), (160.0, 83.0), (240.0, 124.0)] {
            let half = separation / 2.0;
            frame_tx
                .send(vec![
                    tape(960.0 - half, height),
                    tape(960.0 + half, height),
                ])
                .expect("send");
            last_separation = separation;
        }
        drop(frame_tx);

        worker.join().expect("worker thread");
        publisher.join().expect("publisher thread");

        let last = table.snapshot().expect("reading");
        let geometry = pipeline().geometry().separation_in;
        let subtense = last_separation / 1920.0 * 78.0f64.to_radians();
        let expected = (geometry / 2.0) / (subtense / 2.0).tan();
        assert!((last.distance_in - expected).abs() < 1e-9);
    }
}
