//! Replays a short synthetic hand sequence through the frame classifier.
//!
//! There is no camera or estimator here; the landmark sets are stylized hands built from straight
//! joint chains. The sequence mimics what the upstream graph reports while a hand appears, is
//! held open, and then closes into a fist.

use anyhow::Result;
use mudra::geom::{pt3, Point3};
use mudra::hand::landmark::Landmarks;
use mudra::pipeline::{Frame, FrameClassifier};

const WRIST: Point3 = pt3(0.5, 0.85, 0.0);

/// Finger directions away from the wrist, thumb first.
const FINGER_DIRS: [Point3; 5] = [
    pt3(-0.5, -0.25, -0.15),
    pt3(-0.1, -0.9, 0.0),
    pt3(-0.03, -0.9, 0.0),
    pt3(0.04, -0.9, 0.0),
    pt3(0.11, -0.9, 0.0),
];

/// All five fingers straightened along their rays.
fn open_palm() -> Landmarks {
    let mut positions = vec![Point3::ZERO; Landmarks::NUM_LANDMARKS];
    positions[0] = WRIST;
    for (finger, dir) in FINGER_DIRS.into_iter().enumerate() {
        let scale = if finger == 0 { 0.04 } else { 0.05 };
        for joint in 1..=4 {
            positions[finger * 4 + joint] = WRIST + dir * (scale * joint as f64);
        }
    }
    Landmarks::new(&positions).unwrap()
}

/// All fingertips folded back towards the wrist, thumb tucked against the palm.
fn fist() -> Landmarks {
    let mut positions = vec![Point3::ZERO; Landmarks::NUM_LANDMARKS];
    positions[0] = WRIST;
    for (finger, dir) in FINGER_DIRS.into_iter().enumerate().skip(1) {
        let b = finger * 4;
        positions[b + 1] = WRIST + dir * 0.06;
        positions[b + 2] = WRIST + dir * 0.09;
        positions[b + 3] = WRIST + dir * 0.07;
        positions[b + 4] = WRIST + dir * 0.04;
    }
    positions[1] = WRIST + pt3(-0.03, -0.03, 0.0);
    positions[2] = WRIST + pt3(-0.04, -0.05, 0.0);
    positions[3] = WRIST + pt3(-0.05, -0.055, 0.005);
    positions[4] = WRIST + pt3(-0.06, -0.06, 0.01);
    Landmarks::new(&positions).unwrap()
}

fn main() -> Result<()> {
    mudra::init_logger!();

    let mut classifier = FrameClassifier::new();

    let mut sequence = Vec::new();
    // Nothing in view.
    for _ in 0..5 {
        sequence.push(Frame {
            palm_present: false,
            landmark_present: false,
            hands: Vec::new(),
        });
    }
    // The palm detector picks the hand up; landmarks are not trusted yet.
    for _ in 0..2 {
        sequence.push(Frame {
            palm_present: true,
            landmark_present: true,
            hands: vec![open_palm()],
        });
    }
    // The hand is tracked and held open through the warm-up window.
    for _ in 0..30 {
        sequence.push(Frame {
            palm_present: false,
            landmark_present: true,
            hands: vec![open_palm()],
        });
    }
    // It closes into a fist.
    for _ in 0..10 {
        sequence.push(Frame {
            palm_present: false,
            landmark_present: true,
            hands: vec![fist()],
        });
    }

    for (i, frame) in sequence.iter().enumerate() {
        match classifier.process(frame) {
            Some(report) => log::info!("frame {i}: {} fingers extended", report.count()),
            None => log::debug!("frame {i}: suppressed"),
        }
    }

    Ok(())
}
