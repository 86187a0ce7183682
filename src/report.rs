//! Text and JSON rendering of trial results

use crate::block::{Block, ProcessRequest};
use crate::engine::Comparison;
use crate::error::Result;
use crate::trial::Trial;
use comfy_table::{Cell, Table};

/// Column width of the inventory table
const COLUMN_WIDTH: usize = 15;

const SEPARATOR: &str = "-----------------------------------";

fn size_cell(size: u64) -> String {
    format!("{:>width$}KB", size, width = COLUMN_WIDTH - 2)
}

/// Side-by-side listing of block sizes and process sizes
pub fn render_inventory(blocks: &[Block], processes: &[ProcessRequest]) -> String {
    let mut out = format!(
        "{:>width$}{:>width$}\n",
        "Memory Block",
        "Processes",
        width = COLUMN_WIDTH
    );

    for row in 0..blocks.len().max(processes.len()) {
        let left = blocks
            .get(row)
            .map(|b| size_cell(b.size))
            .unwrap_or_else(|| " ".repeat(COLUMN_WIDTH));
        let right = processes.get(row).map(|p| size_cell(p.size)).unwrap_or_default();
        out.push_str(format!("{}{}", left, right).trim_end());
        out.push('\n');
    }

    out
}

/// One cell per block: `[<process size>] ` when occupied, `[ ] ` when free
pub fn render_status(blocks: &[Block]) -> String {
    blocks.iter().map(|b| format!("{} ", b)).collect()
}

/// Per-block size, occupant and internal fragmentation
pub fn render_fragmentation(trial: &Trial) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Block"),
        Cell::new("Size"),
        Cell::new("Process"),
        Cell::new("Fragmentation"),
    ]);

    for (index, block) in trial.blocks.iter().enumerate() {
        let process = block
            .process()
            .map(|p| p.size.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(block.size),
            Cell::new(process),
            Cell::new(block.fragmentation()),
        ]);
    }

    table.to_string()
}

/// Full section for one trial: heading, log, final status, fragmentation
pub fn render_trial(trial: &Trial) -> String {
    let title = trial.strategy.title();
    let mut out = format!("{} Algorithm:\n", title);

    for line in trial.log_lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!("\nMemory Status after {} Algorithm:\n", title));
    out.push_str(&render_status(&trial.blocks));
    out.push('\n');
    if !trial.blocks.is_empty() {
        out.push_str(&render_fragmentation(trial));
        out.push('\n');
    }
    out.push_str(&format!("\n{}\n", SEPARATOR));

    out
}

/// Statistics row per trial, plus the summary picks
pub fn render_summary(comparison: &Comparison) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Strategy"),
        Cell::new("Allocated"),
        Cell::new("Rejected"),
        Cell::new("Internal Frag"),
        Cell::new("Free Capacity"),
        Cell::new("Utilization"),
    ]);

    for stats in comparison.stats() {
        table.add_row(vec![
            Cell::new(stats.strategy.title()),
            Cell::new(stats.allocated),
            Cell::new(stats.rejected),
            Cell::new(stats.internal_fragmentation),
            Cell::new(stats.free_capacity),
            Cell::new(format!("{:.1}%", stats.utilization * 100.0)),
        ]);
    }

    let mut out = table.to_string();
    out.push('\n');
    if let Some(strategy) = comparison.most_allocated() {
        out.push_str(&format!("Most processes placed: {}\n", strategy.title()));
    }
    if let Some(strategy) = comparison.least_fragmentation() {
        out.push_str(&format!("Least internal fragmentation: {}\n", strategy.title()));
    }
    out
}

/// Complete text report for one input session
pub fn render_report(
    blocks: &[Block],
    processes: &[ProcessRequest],
    comparison: &Comparison,
) -> String {
    let mut out = render_inventory(blocks, processes);
    out.push('\n');
    for trial in &comparison.trials {
        out.push_str(&render_trial(trial));
    }
    if !comparison.trials.is_empty() {
        out.push_str(&render_summary(comparison));
    }
    out
}

/// Pretty-printed JSON of every trial
pub fn render_json(comparison: &Comparison) -> Result<String> {
    Ok(serde_json::to_string_pretty(comparison)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::Strategy;
    use crate::engine::AllocatorEngine;

    fn fixture() -> AllocatorEngine {
        AllocatorEngine::new(&[100, 500, 200, 300, 600], &[212, 417, 112, 426])
    }

    #[test]
    fn test_inventory_layout() {
        let engine = AllocatorEngine::new(&[100, 500], &[212]);
        let inventory = render_inventory(&engine.pristine_blocks(), engine.requests());
        let lines: Vec<&str> = inventory.lines().collect();

        assert_eq!(lines[0], "   Memory Block      Processes");
        assert_eq!(lines[1], "          100KB          212KB");
        assert_eq!(lines[2], "          500KB");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_inventory_more_processes_than_blocks() {
        let engine = AllocatorEngine::new(&[100], &[10, 20]);
        let inventory = render_inventory(&engine.pristine_blocks(), engine.requests());
        let lines: Vec<&str> = inventory.lines().collect();
        assert_eq!(lines[2], format!("{}20KB", " ".repeat(26)));
    }

    #[test]
    fn test_status_line() {
        let trial = fixture().run(Strategy::FirstFit);
        assert_eq!(render_status(&trial.blocks), "[ ] [212] [112] [ ] [417] ");
    }

    #[test]
    fn test_trial_section() {
        let trial = fixture().run(Strategy::BestFit);
        let section = render_trial(&trial);

        assert!(section.starts_with("Best Fit Algorithm:\nAllocated process 212 in block 4\n"));
        assert!(section.contains("Allocated process 426 in block 5\n"));
        assert!(section.contains(
            "Memory Status after Best Fit Algorithm:\n[ ] [417] [112] [212] [426] \n"
        ));
        assert!(section.contains("Fragmentation"));
        assert!(section.trim_end().ends_with(SEPARATOR));
    }

    #[test]
    fn test_unallocated_line() {
        let section = render_trial(&fixture().run(Strategy::WorstFit));
        assert!(section.contains("426 cannot be allocated.\n"));
    }

    #[test]
    fn test_fragmentation_table() {
        let table = render_fragmentation(&fixture().run(Strategy::WorstFit));
        assert!(table.contains("388"));
        assert!(table.contains("188"));
        assert!(table.contains("83"));
    }

    #[test]
    fn test_trial_section_layout() {
        let engine = AllocatorEngine::new(&[], &[50]);
        let section = render_trial(&engine.run(Strategy::FirstFit));
        assert_eq!(
            section,
            format!(
                "First Fit Algorithm:\n50 cannot be allocated.\n\n\
                 Memory Status after First Fit Algorithm:\n\n\n{}\n",
                SEPARATOR
            )
        );
    }

    #[test]
    fn test_summary_lines() {
        let summary = render_summary(&fixture().run_all());
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(
            lines[lines.len() - 2..],
            ["Most processes placed: Best Fit", "Least internal fragmentation: Best Fit"]
        );
    }

    #[test]
    fn test_report_with_huge_blocks() {
        let engine = AllocatorEngine::new(&[u64::MAX, u64::MAX], &[1, u64::MAX]);
        let comparison = engine.run_all();
        let report = render_report(&engine.pristine_blocks(), engine.requests(), &comparison);

        assert!(report.contains(&format!("Allocated process {} in block 2", u64::MAX)));
        let stats = comparison.stats();
        assert_eq!(stats[0].total_capacity, u64::MAX);
        assert_eq!(stats[0].internal_fragmentation, u64::MAX - 1);
        assert_eq!(comparison.trials[0].total_fragmentation(), u64::MAX - 1);
    }

    #[test]
    fn test_no_blocks_report() {
        let engine = AllocatorEngine::new(&[], &[50]);
        let comparison = engine.run_all();
        let report = render_report(&engine.pristine_blocks(), engine.requests(), &comparison);
        assert_eq!(report.matches("50 cannot be allocated.").count(), 4);
    }

    #[test]
    fn test_report_contains_every_trial() {
        let engine = fixture();
        let comparison = engine.run_all();
        let report = render_report(&engine.pristine_blocks(), engine.requests(), &comparison);
        for strategy in Strategy::ALL {
            assert!(report.contains(&format!("{} Algorithm:", strategy.title())));
        }
        assert!(report.contains("Most processes placed: Best Fit"));
    }

    #[test]
    fn test_json_export() {
        let comparison = fixture().run_selected(&[Strategy::NextFit]);
        let json = render_json(&comparison).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["trials"][0]["strategy"], "next-fit");
        assert_eq!(value["trials"][0]["cursor"], 3);
        assert_eq!(value["trials"][0]["outcomes"][3]["outcome"], "unallocated");

        let back: Comparison = serde_json::from_str(&json).unwrap();
        assert_eq!(back, comparison);
    }
}
