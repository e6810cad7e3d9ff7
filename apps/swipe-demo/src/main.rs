//! Replays swipes against a headless panel and reports how each resolved.
//!
//! Usage: `swipe-demo [vertical|horizontal] [distance...]`

mod screen;

use anyhow::{bail, Context};
use screen::DemoSession;
use swipe_dismiss_foundation::config::{ATTR_DURATION, ATTR_ORIENTATION};
use swipe_dismiss_ui::{AttributeSet, AttributeValue, Orientation, Point, Size};

const PANEL: Size = Size::new(600.0, 800.0);
const DEFAULT_DISTANCES: [f32; 2] = [300.0, 500.0];

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut args = std::env::args().skip(1).peekable();
    let orientation = match args.peek().map(String::as_str) {
        Some("vertical") => {
            args.next();
            Orientation::Vertical
        }
        Some("horizontal") => {
            args.next();
            Orientation::Horizontal
        }
        _ => Orientation::Vertical,
    };
    let mut distances = args
        .map(|arg| {
            arg.parse::<f32>()
                .with_context(|| format!("invalid drag distance `{arg}`"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if distances.is_empty() {
        distances.extend(DEFAULT_DISTANCES);
    }

    let attributes = AttributeSet::new()
        .with(ATTR_ORIENTATION, AttributeValue::Int(orientation.raw().into()))
        .with(ATTR_DURATION, AttributeValue::Int(200));
    let axis_step = orientation.with_primary(Point::ZERO, 1.0);

    println!("=== Swipe-to-dismiss demo ({orientation:?}, panel {PANEL:?}) ===");
    for distance in distances {
        if !distance.is_finite() || distance < 0.0 {
            bail!("drag distance must be a non-negative number, got {distance}");
        }
        let mut session = DemoSession::new(PANEL, &attributes)?;
        println!("swipe {distance}:");
        session.swipe(axis_step, distance, 10);
        let frames = session.settle();
        println!(
            "  settled at {:?} after {frames} frames, screen {}",
            session.translation(),
            if session.screen().is_dismissed() {
                "dismissed"
            } else {
                "kept"
            }
        );
    }
    Ok(())
}
