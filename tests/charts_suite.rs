//! Chart-family behavior over populated and hole-riddled tensors.

mod common;

use common::{assert_chart, populated_tensor};
use std::collections::BTreeMap;
use syncsweep::charts::{
    plot_for_mode, plot_mode_comparison, plot_operation_comparison, plot_point_comparison,
    plot_surface, Scale,
};
use syncsweep::{Metric, Operation, PerformanceTensor, Sample, SyncMode};

#[test]
fn every_family_renders_from_one_tensor() {
    let tensor = populated_tensor(10, 10);
    let out = tempfile::tempdir().unwrap();

    for mode in SyncMode::ALL {
        plot_for_mode(&tensor, mode, out.path()).unwrap();
        for metric in Metric::ALL {
            plot_surface(&tensor, mode, metric, Scale::Linear, out.path()).unwrap();
        }
    }
    plot_mode_comparison(&tensor, Scale::Log10, 2, out.path()).unwrap();
    plot_point_comparison(&tensor, 8, 2, &SyncMode::ALL, Scale::Log10, out.path()).unwrap();

    for mode in SyncMode::ALL {
        assert_chart(out.path(), "cmp_same", &format!("{mode}_Read.svg"));
        assert_chart(out.path(), "cmp_same", &format!("{mode}_Write.svg"));
        assert_chart(out.path(), "surfaces", &format!("{mode}_Read.svg"));
        assert_chart(out.path(), "surfaces", &format!("{mode}_Write.svg"));
    }
    assert_chart(out.path(), "cmp_modes", "cmp_Read_Read_2.svg");
    assert_chart(out.path(), "cmp_modes", "cmp_Write_Write_2.svg");
    assert_chart(out.path(), "cmp_diff", "cmp_read_8_2.svg");
    assert_chart(out.path(), "cmp_diff", "cmp_write_8_2.svg");
}

#[test]
fn nan_riddled_tensor_never_aborts_a_chart() {
    let mut tensor = populated_tensor(10, 10);
    // scatter holes across every axis
    for (mode, readers, writers) in [
        (SyncMode::Rcu, 1, 2),
        (SyncMode::RwLock, 8, 2),
        (SyncMode::Lock, 3, 8),
        (SyncMode::Atomic, 9, 9),
        (SyncMode::Race, 0, 1),
    ] {
        tensor.set(mode, readers, writers, Metric::Read, f64::NAN).unwrap();
        tensor.set(mode, readers, writers, Metric::Write, f64::NAN).unwrap();
    }

    let out = tempfile::tempdir().unwrap();
    for mode in SyncMode::ALL {
        plot_for_mode(&tensor, mode, out.path()).unwrap();
        plot_surface(&tensor, mode, Metric::Read, Scale::Log10, out.path()).unwrap();
    }
    plot_mode_comparison(&tensor, Scale::Log10, 2, out.path()).unwrap();
    plot_point_comparison(&tensor, 8, 2, &SyncMode::ALL, Scale::Log10, out.path()).unwrap();
}

#[test]
fn speedup_annotations_appear_in_rendered_output() {
    let mut tensor = PerformanceTensor::new(10, 10);
    let read_latencies = [120.0, 480.0, 960.0, 60.0, 240.0];
    for (mode, latency) in SyncMode::ALL.into_iter().zip(read_latencies) {
        tensor
            .put_sample(
                mode,
                8,
                2,
                Sample {
                    read: Some(latency),
                    write: Some(latency),
                },
            )
            .unwrap();
    }

    let out = tempfile::tempdir().unwrap();
    plot_point_comparison(&tensor, 8, 2, &SyncMode::ALL, Scale::Log10, out.path()).unwrap();

    let svg =
        std::fs::read_to_string(out.path().join("cmp_diff").join("cmp_read_8_2.svg")).unwrap();
    // baseline annotates exactly 1.000x; mode 1 is 480/120 = 4.000x
    assert!(svg.contains("1.000x"));
    assert!(svg.contains("4.000x"));
    assert!(svg.contains("8.000x"));
    assert!(svg.contains("RCU"));
}

#[test]
fn grouped_operation_chart_spans_all_artifacts() {
    let mut tensors = BTreeMap::new();
    tensors.insert(Operation::BumpCounter, populated_tensor(10, 10));
    tensors.insert(Operation::AtomicStr, populated_tensor(10, 10));
    tensors.insert(Operation::AtomicVec, populated_tensor(10, 10));

    let out = tempfile::tempdir().unwrap();
    for metric in Metric::ALL {
        plot_operation_comparison(&tensors, metric, [(8, 2), (8, 9)], Scale::Log10, out.path())
            .unwrap();
    }

    assert_chart(out.path(), "cmp_ops", "cmp_ops_read.svg");
    assert_chart(out.path(), "cmp_ops", "cmp_ops_write.svg");

    let svg = std::fs::read_to_string(out.path().join("cmp_ops").join("cmp_ops_read.svg")).unwrap();
    for operation in [Operation::BumpCounter, Operation::AtomicStr, Operation::AtomicVec] {
        assert!(svg.contains(operation.stem()));
    }
}

#[test]
fn wrong_mode_axis_fails_fast() {
    let tensor = PerformanceTensor::from_parts(3, 4, 4, vec![1.0; 3 * 4 * 4 * 2]).unwrap();
    let out = tempfile::tempdir().unwrap();

    assert!(plot_for_mode(&tensor, SyncMode::Rcu, out.path()).is_err());
    assert!(plot_mode_comparison(&tensor, Scale::Log10, 2, out.path()).is_err());
    assert!(
        plot_point_comparison(&tensor, 1, 1, &SyncMode::ALL, Scale::Log10, out.path()).is_err()
    );
    assert!(plot_surface(&tensor, SyncMode::Rcu, Metric::Read, Scale::Linear, out.path()).is_err());
}
