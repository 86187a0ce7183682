//! Regression tests for the classic textbook workload
//!
//! Blocks [100, 500, 200, 300, 600], processes [212, 417, 112, 426]

use partition_sim::{report, AllocatorEngine, Outcome, Strategy};

const BLOCKS: [u64; 5] = [100, 500, 200, 300, 600];
const PROCESSES: [u64; 4] = [212, 417, 112, 426];

fn engine() -> AllocatorEngine {
    AllocatorEngine::new(&BLOCKS, &PROCESSES)
}

#[test]
fn test_first_fit_log() {
    let trial = engine().run(Strategy::FirstFit);
    assert_eq!(
        trial.log_lines(),
        vec![
            "Allocated process 212 in block 2",
            "Allocated process 417 in block 5",
            "Allocated process 112 in block 3",
            "426 cannot be allocated.",
        ]
    );
    assert_eq!(trial.fragmentation(), vec![0, 288, 88, 0, 183]);
}

#[test]
fn test_best_fit_log() {
    let trial = engine().run(Strategy::BestFit);
    assert_eq!(
        trial.log_lines(),
        vec![
            "Allocated process 212 in block 4",
            "Allocated process 417 in block 2",
            "Allocated process 112 in block 3",
            "Allocated process 426 in block 5",
        ]
    );
    assert_eq!(trial.fragmentation(), vec![0, 83, 88, 88, 174]);
}

#[test]
fn test_worst_fit_log() {
    let trial = engine().run(Strategy::WorstFit);
    assert_eq!(
        trial.log_lines(),
        vec![
            "Allocated process 212 in block 5",
            "Allocated process 417 in block 2",
            "Allocated process 112 in block 4",
            "426 cannot be allocated.",
        ]
    );
    assert_eq!(trial.fragmentation(), vec![0, 83, 0, 188, 388]);
}

#[test]
fn test_next_fit_log() {
    let trial = engine().run(Strategy::NextFit);
    assert_eq!(
        trial.log_lines(),
        vec![
            "Allocated process 212 in block 2",
            "Allocated process 417 in block 5",
            "Allocated process 112 in block 3",
            "426 cannot be allocated.",
        ]
    );
    assert_eq!(trial.cursor, Some(3));
}

#[test]
fn test_status_lines() {
    let comparison = engine().run_all();
    let status: Vec<String> = comparison
        .trials
        .iter()
        .map(|t| report::render_status(&t.blocks))
        .collect();

    assert_eq!(
        status,
        vec![
            "[ ] [212] [112] [ ] [417] ",
            "[ ] [417] [112] [212] [426] ",
            "[ ] [417] [ ] [112] [212] ",
            "[ ] [212] [112] [ ] [417] ",
        ]
    );
}

#[test]
fn test_next_fit_resumes_after_last_placement() {
    // First fit returns to index 1 for the last request; next fit keeps moving forward
    let engine = AllocatorEngine::new(&[200, 100, 300, 100], &[150, 250, 50]);

    let first = engine.run(Strategy::FirstFit);
    assert_eq!(first.outcomes[2].block(), Some(1));

    let next = engine.run(Strategy::NextFit);
    assert_eq!(next.outcomes[2].block(), Some(3));
    assert_eq!(next.cursor, Some(0));
}

#[test]
fn test_processes_never_reordered() {
    let trial = engine().run(Strategy::BestFit);
    let sizes: Vec<u64> = trial.outcomes.iter().map(|o| o.process.size).collect();
    assert_eq!(sizes, PROCESSES.to_vec());
    assert!(trial
        .outcomes
        .iter()
        .all(|o| matches!(o.outcome, Outcome::Allocated { .. })));
}
