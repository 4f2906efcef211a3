use crate::engines::evaluation::AllocationBreakdown;
use crate::engines::generation::Candidate;
use std::fmt::Write;

const CODE_WIDTH: usize = 6;
const COUNT_WIDTH: usize = 5;
const VALUE_WIDTH: usize = 10;

/// Render the final allocation as a table.
///
/// The "Wo. ratio" column holds the value before currency conversion and is
/// only filled for shares whose ratio is not 1.
pub fn render_result(candidate: &Candidate) -> String {
    let mut out = String::from("Result:\n");
    let _ = writeln!(
        out,
        "{:>cw$} {:>nw$} {:>vw$} {:>vw$}",
        "Code",
        "Nb",
        "Value",
        "Wo. ratio",
        cw = CODE_WIDTH,
        nw = COUNT_WIDTH,
        vw = VALUE_WIDTH
    );

    for (count, share) in candidate.counts().iter().zip(candidate.dataset().shares()) {
        let _ = write!(
            out,
            "{:>cw$} {:>nw$} {:>vw$.2}",
            share.code,
            count,
            share.value_of(*count),
            cw = CODE_WIDTH,
            nw = COUNT_WIDTH,
            vw = VALUE_WIDTH
        );
        if share.curr_ratio != 1.0 {
            let _ = write!(out, " {:>vw$.2}", share.raw_value_of(*count), vw = VALUE_WIDTH);
        }
        out.push('\n');
    }

    out
}

/// Render target and achieved percentages for every target (domain, part)
pub fn render_allocations(candidate: &Candidate) -> String {
    let breakdown = AllocationBreakdown::compute(candidate.counts(), candidate.dataset());
    let mut out = String::new();

    let _ = writeln!(out, "Total value: {:.2}", breakdown.total_value);
    for target in candidate.dataset().targets() {
        let _ = writeln!(out, "{}:", target.name);
        for (part, percentage) in &target.allocation {
            let achieved = if breakdown.total_value > 0.0 {
                breakdown.achieved(&target.name, part) / breakdown.total_value * 100.0
            } else {
                0.0
            };
            let _ = writeln!(out, "  {:<16} target {:>6.2}%  achieved {:>6.2}%", part, percentage, achieved);
        }
    }

    out
}
