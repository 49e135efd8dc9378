//! Print the three schemes side by side for a config file.
//!
//! Usage: cargo run -p pose-interp-core --example compare -- [config.json]

use std::{env, fs, process};

use pose_interp_core::{
    rotation::rotation_angle_between, Config, Engine, FrameSet, InterpolationKind, Orientation,
};

fn main() {
    let cfg = match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("failed to read {path}: {e}");
                process::exit(1);
            });
            Config::from_json(&text).unwrap_or_else(|e| {
                eprintln!("[{}] {e}", e.category());
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    let eng = Engine::from_config(FrameSet::default(), &cfg).unwrap_or_else(|e| {
        eprintln!("[{}] {e}", e.category());
        process::exit(1);
    });

    for kind in InterpolationKind::ALL {
        println!("== {kind}");
        let group = eng.targets().group(kind);
        for (time, frame) in eng.sample_times().zip(&group.intermediate) {
            let rot = match frame.orientation {
                Orientation::Euler(e) => format!("euler {e:.3?}"),
                Orientation::Quat(q) => format!("quat  {q:.3?}"),
            };
            println!("t={time:6.3}  pos {:.3?}  {rot}", frame.position);
        }
    }

    println!("== divergence (linear vs slerp, degrees)");
    for time in eng.sample_times() {
        let lin = eng.sample(InterpolationKind::QuatLinear, time).orientation.to_quat();
        let slerp = eng.sample(InterpolationKind::QuatSlerp, time).orientation.to_quat();
        println!(
            "t={time:6.3}  {:7.3}",
            rotation_angle_between(lin, slerp).to_degrees()
        );
    }

    match serde_json::to_string_pretty(eng.targets()) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize frames: {e}"),
    }
}
