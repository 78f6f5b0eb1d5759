//! Config-to-reading flow through the facade.

use tape_targets::{FramePipeline, Reading, VisionConfig};

const CONFIG: &str = r#"{
    "team": 2856,
    "cameras": [{"name": "front", "path": "/dev/video0", "width": 1920, "height": 1080}],
    "target": {"tip_gap_in": 8.0}
}"#;

fn tape(center_x: f64, height: f64) -> tape_targets::BoundingBox {
    tape_targets::BoundingBox {
        x: center_x - 10.0,
        y: 480.0,
        width: 20.0,
        height,
    }
}

#[test]
fn config_file_drives_the_pipeline() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("frc.json");
    std::fs::write(&path, CONFIG).expect("write config");

    let config = VisionConfig::load(&path).expect("load");
    let pipeline = FramePipeline::new(
        &config.target,
        config.primary_frame(),
        config.gate,
    )
    .expect("pipeline");

    let reading = pipeline
        .process(&[tape(880.0, 83.0), tape(1040.0, 83.0)])
        .expect("published");
    assert!(!reading.is_sentinel());

    let inconsistent = pipeline
        .process(&[tape(880.0, 300.0), tape(1040.0, 300.0)])
        .expect("published");
    assert_eq!(inconsistent, Reading::SENTINEL);

    assert_eq!(pipeline.process(&[tape(960.0, 83.0)]), None);
}
