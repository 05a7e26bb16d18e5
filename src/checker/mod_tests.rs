use std::fs;

use tempfile::TempDir;

use super::*;
use crate::config::RuleConfig;

#[test]
fn checker_results_collect_in_task_order() {
    let dir = TempDir::new().unwrap();
    let clean = dir.path().join("clean.py");
    let dirty = dir.path().join("dirty.py");
    fs::write(&clean, "x = 1\n").unwrap();
    fs::write(&dirty, "x = 1 \n\n\ny = 2\n").unwrap();

    let tasks = vec![
        FileTask::new(&dirty, "py", RuleConfig::default()),
        FileTask::new(&clean, "py", RuleConfig::default()),
    ];
    let inspector = Inspector::new();
    let result: InspectionResult = tasks.iter().map(|task| inspector.check(task)).collect();

    assert_eq!(result.files_inspected(), 2);
    let rules: Vec<_> = result.findings().iter().map(|f| (f.line, f.rule)).collect();
    assert_eq!(
        rules,
        vec![(1, Rule::TrailingWhitespace), (3, Rule::ExcessiveBlankLines)]
    );
    assert!(result.findings().iter().all(|f| f.path == dirty));
}
