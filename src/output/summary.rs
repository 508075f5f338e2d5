// src/output/summary.rs

use std::fmt::Write as _;

use crate::engine::ProgressReport;

/// Human-readable summary of a report, one fact per line.
pub fn render_summary(report: &ProgressReport, unit: &str) -> String {
    let traj = &report.trajectory;
    let summary = &report.summary;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "period: {} .. {} ({} days)",
        traj.first_date(),
        traj.last_date(),
        traj.total_days() + 1
    );
    let _ = writeln!(
        out,
        "start total: {:.1} {unit}, goal: {:.1} {unit}",
        traj.start_total(),
        traj.goal()
    );
    let _ = writeln!(out, "target pace: {:.2} {unit}/day", traj.slope());
    let _ = writeln!(
        out,
        "planned final total: {:.1} {unit} ({:+.1} vs goal)",
        summary.planned_final_total, summary.planned_overshoot
    );

    match summary.latest_actual {
        Some(latest) => {
            let _ = writeln!(
                out,
                "actual total on {}: {:.1} {unit}",
                latest.date, latest.total
            );
            if let Some(v) = summary.latest_variance {
                let status = if v > 0.0 {
                    "ahead of target"
                } else if v < 0.0 {
                    "behind target"
                } else {
                    "on target"
                };
                let _ = writeln!(out, "vs target: {v:+.2} {unit} ({status})");
            }
            if let Some(v) = summary.latest_plan_variance {
                let _ = writeln!(out, "vs plan: {v:+.2} {unit}");
            }
        }
        None => {
            let _ = writeln!(out, "no actual observations yet");
        }
    }

    if summary.observations_outside_plan > 0 {
        let _ = writeln!(
            out,
            "note: {} observation(s) fall outside the plan period",
            summary.observations_outside_plan
        );
    }

    out
}

/// Print [`render_summary`] to stdout.
pub fn print_summary(report: &ProgressReport, unit: &str) {
    print!("{}", render_summary(report, unit));
}
