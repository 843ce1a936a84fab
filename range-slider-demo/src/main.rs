//! Replays a scripted interaction against a slider laid out on a synthetic
//! page and logs every rendered frame.
//!
//! Set `RUST_LOG=range_slider=trace` to also see each drag step.

use range_slider::{
    PointerId, PointerPosition, RangeSlider, Rect, SliderConfig, SliderError, SliderEvent,
    SliderFrame, SliderOptions, SliderSurface, testing::FixedGeometry,
};
use tracing::info;

/// One scripted step.
#[derive(Debug, Clone, Copy)]
enum Step {
    Event(SliderEvent),
    Viewport(f64),
}

const fn mouse_to(x: f64, y: f64) -> Step {
    Step::Event(SliderEvent::Move {
        pointer: PointerId::Mouse,
        position: PointerPosition::new(x, y),
    })
}

const fn touch_to(id: i32, x: f64, y: f64) -> Step {
    Step::Event(SliderEvent::Move {
        pointer: PointerId::Touch(id),
        position: PointerPosition::new(x, y),
    })
}

// Track: 400x400 at (100, 100), wrapper at (90, 90).
const SCRIPT: &[Step] = &[
    Step::Event(SliderEvent::Engage(PointerId::Mouse)),
    mouse_to(220.0, 0.0),
    mouse_to(340.0, 0.0),
    mouse_to(-80.0, 0.0),
    Step::Event(SliderEvent::Release(PointerId::Mouse)),
    mouse_to(460.0, 0.0),
    Step::Viewport(600.0),
    Step::Event(SliderEvent::Resize),
    Step::Event(SliderEvent::Engage(PointerId::Touch(0))),
    Step::Event(SliderEvent::Engage(PointerId::Touch(1))),
    touch_to(1, 0.0, 100.0),
    touch_to(0, 0.0, 300.0),
    Step::Event(SliderEvent::Cancel),
    Step::Event(SliderEvent::InputChanged(85)),
];

/// Logs frames instead of drawing them.
#[derive(Default)]
struct TracingSurface {
    applied: usize,
}

impl SliderSurface for TracingSurface {
    fn apply(&mut self, frame: &SliderFrame) {
        self.applied += 1;
        info!(
            value = frame.value,
            mode = ?frame.mode,
            fill_width = %frame.fill.width,
            fill_height = ?frame.fill.height.map(|h| h.to_string()),
            thumb_left = %frame.thumb.left,
            thumb_top = ?frame.thumb.top.map(|t| t.to_string()),
            label = %frame.label,
            "frame"
        );
    }
}

type DemoSlider = RangeSlider<FixedGeometry, TracingSurface>;

fn build() -> Result<DemoSlider, SliderError> {
    let geometry = FixedGeometry::new(
        1280.0,
        Rect::new(100.0, 100.0, 400.0, 400.0),
        Rect::new(90.0, 90.0, 420.0, 420.0),
    );
    Ok(RangeSlider::new(
        SliderConfig::new(10, 100)?,
        SliderOptions::default(),
        55,
        geometry,
        TracingSurface::default(),
    ))
}

fn run(slider: &mut DemoSlider, script: &[Step]) {
    for step in script {
        match *step {
            Step::Event(event) => {
                let response = slider.handle(event);
                info!(?event, ?response, value = slider.value(), "handled");
            }
            Step::Viewport(width) => {
                info!(width, "viewport resized");
                slider.geometry_mut().set_viewport_width(width);
            }
        }
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,range_slider_demo=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .try_init();
}

fn main() -> Result<(), SliderError> {
    init_tracing();
    let mut slider = build()?;
    run(&mut slider, SCRIPT);
    info!(
        value = slider.value(),
        frames = slider.surface().applied,
        "script finished"
    );
    Ok(())
}
