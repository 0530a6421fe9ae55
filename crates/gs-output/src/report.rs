//! Plain-text rendering of the configuration and the final statistics.

use std::fmt::Write;
use std::time::Duration;

use gs_core::SimConfig;
use gs_stats::{StatsReport, Summary};

const RULE: &str = "=========================";

/// Human-readable dump of a configuration, printed before a run.
pub fn render_config(config: &SimConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "GAS STATION CONFIGURATION");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Cars:");
    let _ = writeln!(out, "  Count: {}", config.cars.count);
    let _ = writeln!(out, "  Arrival Time: {}", config.cars.arrival);
    let _ = writeln!(out);

    let _ = writeln!(out, "Stations:");
    for (fuel, station) in &config.stations {
        let _ = writeln!(out, "  {fuel}: {} station(s)", station.count);
        let _ = writeln!(out, "    Serve Time: {}", station.service);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Registers:");
    let _ = writeln!(out, "  Count: {}", config.registers.count);
    let _ = writeln!(out, "  Handle Time: {}", config.registers.handle);
    let _ = writeln!(out);

    let _ = writeln!(out, "Seed: {}", config.seed);
    let _ = writeln!(out, "Queue Capacity: {}", config.queue_capacity);
    let _ = writeln!(out, "Timing: {}", config.timing);
    let _ = writeln!(out, "{RULE}");
    out
}

/// Human-readable statistics, one line per fuel type and one for registers.
///
/// Keys that saw no cars print `no data` instead of an average.
pub fn render_report(report: &StatsReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "SIMULATION STATISTICS");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Timing: {}", report.timing);
    for f in &report.fuel {
        let _ = writeln!(out, "{}", summary_line(f.fuel.as_str(), &f.summary));
    }
    let _ = writeln!(out, "{}", summary_line("registers", &report.registers));
    let _ = writeln!(out, "{RULE}");
    out
}

fn summary_line(key: &str, s: &Summary) -> String {
    match s.average_time {
        Some(avg) => format!(
            "{key:<9} - Total Cars: {}, Total Time: {}, Avg Time: {}, Max Time: {}",
            s.total_cars,
            fmt_duration(s.total_time),
            fmt_duration(avg),
            fmt_duration(s.max_time),
        ),
        None => format!("{key:<9} - no data"),
    }
}

fn fmt_duration(d: Duration) -> String {
    format!("{:.3}ms", d.as_secs_f64() * 1_000.0)
}
