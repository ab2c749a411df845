//! Console pathfinding demo.
//!
//! Run: cargo run --bin hexnav-demo [scenario.json]
//! Set `RUST_LOG=debug` to see search statistics.

use hexnav_core::print::{render_costs, render_path};
use hexnav_demos::Scenario;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let scenario = match std::env::args().nth(1) {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };
    let report = scenario.run()?;

    println!("Cost grid (# = obstacle):");
    print!("{}", render_costs(&report.grid));
    println!();

    if report.path.is_empty() {
        println!("No path from {} to {}.", scenario.start, scenario.goal);
        return Ok(());
    }

    println!(
        "Path {} -> {}: {} cells, total cost {}",
        scenario.start,
        scenario.goal,
        report.path.len(),
        report.cost
    );
    let cells: Vec<String> = report.path.iter().map(|p| p.to_string()).collect();
    println!("{}", cells.join(" "));
    println!();
    print!(
        "{}",
        render_path(&report.grid, scenario.start, scenario.goal, &report.path)
    );

    // World-space waypoints, as an actor following the path would use them.
    let waypoints: Vec<String> = report
        .path
        .iter()
        .map(|&p| {
            let c = scenario.layout.center(p);
            format!("({:.2}, {:.2})", c.x, c.y)
        })
        .collect();
    println!();
    println!("Waypoints: {}", waypoints.join(" "));
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
