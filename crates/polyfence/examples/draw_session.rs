//! Replay a scripted drawing session and print what the caller would render.
//!
//! Usage:
//!   cargo run -p polyfence --example draw_session
//!
//! Draws a square, tries to cross an earlier edge on the way (refused),
//! closes the ring by clicking near the start and asks a few containment
//! questions.

use polyfence::prelude::*;

fn main() {
    let mut session = DrawSession::new(SketchCfg::default());
    let script = [
        vector![0.0, 0.0],
        vector![200.0, 0.0],
        vector![200.0, 200.0],
        vector![100.0, -50.0],
        vector![0.0, 200.0],
        vector![4.0, 3.0],
    ];
    let mut polygon = None;
    for p in script {
        let style = session.move_cursor(p);
        match session.commit() {
            Ok(Commit::Added) => println!("({:>6.1}, {:>6.1}) {style:?} -> added", p.x, p.y),
            Ok(Commit::Closed(poly)) => {
                println!("({:>6.1}, {:>6.1}) {style:?} -> closed", p.x, p.y);
                polygon = Some(poly);
                break;
            }
            Err(e) => println!("({:>6.1}, {:>6.1}) {style:?} -> {e}", p.x, p.y),
        }
    }
    let Some(polygon) = polygon else {
        eprintln!("ring was never closed");
        return;
    };
    println!("polygon: {} vertices, area {}", polygon.len(), polygon.signed_area());

    for point in [Some(vector![100.0, 100.0]), Some(vector![300.0, 100.0]), None] {
        println!("{point:?}: {}", query(Some(&polygon), point));
    }
    println!("no polygon: {}", query(None, Some(vector![100.0, 100.0])));
}
