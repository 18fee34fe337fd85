use tape_navigator::geometry::Line;
use tape_navigator::image::GrayImageU8;
use tape_navigator::{FollowerParams, FrameInput, LineFollower};

/// Paints a vertical tape edge two pixels wide.
fn paint_edge(data: &mut [u8], w: usize, h: usize, x: usize) {
    for y in 0..h {
        data[y * w + x] = 255;
        data[y * w + x + 1] = 255;
    }
}

fn main() {
    env_logger::init();

    // Demo: a single tape strip slightly left of center, seen head-on.
    let (w, h) = (640usize, 480usize);
    let mut data = vec![0u8; w * h];
    paint_edge(&mut data, w, h, 270);
    paint_edge(&mut data, w, h, 350);
    let edges = GrayImageU8::new(w, h, data);
    let lines = Line::from_hough(&[[270.0, 0.0], [271.0, 0.0], [350.0, 0.0], [351.0, 0.0]]);

    let mut follower = LineFollower::new(FollowerParams::default());
    let input = FrameInput {
        lines: &lines,
        edges: edges.as_view(),
    };
    match follower.process_with_diagnostics(input) {
        Ok(report) => {
            let res = &report.result;
            let wheels = res.steering.wheel_intensities();
            println!(
                "state={} paths={} steer=({:.3}, {:.3}) left={:.3} right={:.3} latency_ms={:.3}",
                res.state,
                report.trace.paths.len(),
                res.steering.x,
                res.steering.y,
                wheels.left,
                wheels.right,
                res.latency_ms
            );
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
