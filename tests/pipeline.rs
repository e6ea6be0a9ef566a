//! End-to-end pipeline tests: fake executables -> sweep -> artifact -> charts.

#![cfg(unix)]

mod common;

use common::FakeBinDir;
use syncsweep::{
    discover, store, BenchmarkInvoker, Metric, Operation, SweepOrchestrator, SyncMode,
};

#[test]
fn discovery_finds_installed_operations_only() {
    let bins = FakeBinDir::new();
    bins.install_contract_script(Operation::BumpCounter);
    bins.install_contract_script(Operation::AtomicVec);

    let found = discover(bins.path()).unwrap();
    let ops: Vec<Operation> = found.iter().map(|(op, _)| *op).collect();
    assert_eq!(ops, vec![Operation::BumpCounter, Operation::AtomicVec]);
}

#[test]
fn full_sweep_persists_and_reloads_identically() {
    let bins = FakeBinDir::new();
    let exe = bins.install_contract_script(Operation::BumpCounter);

    let invoker = BenchmarkInvoker::new(exe, Operation::BumpCounter);
    let orchestrator = SweepOrchestrator::new(invoker, 4, 4);
    let (tensor, report) = orchestrator.run(&SyncMode::ALL).unwrap();

    assert_eq!(report.attempted, SyncMode::COUNT * 16);
    assert_eq!(report.failed, 0);

    // contract values landed in the right metric cells
    assert_eq!(tensor.get(SyncMode::Lock, 2, 3, Metric::Read).unwrap(), 5.0);
    assert_eq!(tensor.get(SyncMode::Lock, 2, 3, Metric::Write).unwrap(), 50.0);
    assert_eq!(tensor.get(SyncMode::Race, 0, 2, Metric::Write).unwrap(), 50.0);
    assert!(tensor.get(SyncMode::Race, 0, 2, Metric::Read).unwrap().is_nan());
    assert!(tensor.get(SyncMode::Rcu, 0, 0, Metric::Read).unwrap().is_nan());

    let results = tempfile::tempdir().unwrap();
    let dir = results.path().join(Operation::BumpCounter.stem());
    std::fs::create_dir_all(&dir).unwrap();
    store::save(&dir.join(store::ARTIFACT_NAME), &tensor).unwrap();

    let reloaded = store::load_dir(&dir).unwrap();
    assert!(reloaded.eq_bitwise(&tensor));
}

#[test]
fn sweep_with_flaky_benchmark_degrades_to_missing_cells() {
    let bins = FakeBinDir::new();
    // fails (prints banner noise) whenever any readers are requested
    let exe = bins.install_script(
        Operation::StructAbc,
        r#"
if [ "$1" -gt 0 ] && [ "$2" -gt 0 ]; then
    echo "Running with $1 readers"
else
    echo 9.0
fi
"#,
    );

    let invoker = BenchmarkInvoker::new(exe, Operation::StructAbc);
    let orchestrator = SweepOrchestrator::new(invoker, 3, 3);
    let (tensor, report) = orchestrator.run(&[SyncMode::Rcu]).unwrap();

    // the four both-positive points all failed to parse
    assert_eq!(report.failed, 4);
    assert!(tensor.get(SyncMode::Rcu, 1, 1, Metric::Read).unwrap().is_nan());
    assert!(tensor.get(SyncMode::Rcu, 2, 2, Metric::Write).unwrap().is_nan());
    // single-role points still measured
    assert_eq!(tensor.get(SyncMode::Rcu, 1, 0, Metric::Read).unwrap(), 9.0);
    assert_eq!(tensor.get(SyncMode::Rcu, 0, 1, Metric::Write).unwrap(), 9.0);
}

#[test]
fn swept_artifact_feeds_every_chart_family() {
    let bins = FakeBinDir::new();
    let exe = bins.install_contract_script(Operation::AtomicStr);

    let invoker = BenchmarkInvoker::new(exe, Operation::AtomicStr);
    let orchestrator = SweepOrchestrator::new(invoker, 4, 4);
    let (tensor, _) = orchestrator.run(&SyncMode::ALL).unwrap();

    let out = tempfile::tempdir().unwrap();
    syncsweep::charts::plot_for_mode(&tensor, SyncMode::Rcu, out.path()).unwrap();
    syncsweep::charts::plot_surface(
        &tensor,
        SyncMode::Rcu,
        Metric::Read,
        syncsweep::charts::Scale::Linear,
        out.path(),
    )
    .unwrap();
    syncsweep::charts::plot_mode_comparison(
        &tensor,
        syncsweep::charts::Scale::Log10,
        2,
        out.path(),
    )
    .unwrap();
    syncsweep::charts::plot_point_comparison(
        &tensor,
        2,
        2,
        &SyncMode::ALL,
        syncsweep::charts::Scale::Log10,
        out.path(),
    )
    .unwrap();

    common::assert_chart(out.path(), "cmp_same", "RCU_Read.svg");
    common::assert_chart(out.path(), "surfaces", "RCU_Read.svg");
    common::assert_chart(out.path(), "cmp_modes", "cmp_Read_Read_2.svg");
    common::assert_chart(out.path(), "cmp_diff", "cmp_read_2_2.svg");
}
