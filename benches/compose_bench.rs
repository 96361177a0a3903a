use chart_kindergarten::api::{ControlEvent, Workbench, WorkbenchConfig};
use chart_kindergarten::core::{Column, Dataset, DatasetRegistry};
use chart_kindergarten::registry::OptionRegistry;
use chart_kindergarten::render::PlotlyBackend;
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;

const REGIONS: [&str; 4] = ["north", "south", "east", "west"];

fn generated_dataset(rows: usize) -> Dataset {
    let day: Vec<i64> = (0..rows).map(|i| i as i64).collect();
    let visits: Vec<f64> = (0..rows).map(|i| 100.0 + (i as f64 * 0.37).sin() * 25.0).collect();
    let revenue: Vec<f64> = (0..rows).map(|i| 40.0 + (i % 17) as f64 * 3.5).collect();
    let region: Vec<&str> = (0..rows).map(|i| REGIONS[i % REGIONS.len()]).collect();
    Dataset::new(
        "traffic",
        vec![
            Column::from_values("day", day),
            Column::from_values("visits", visits),
            Column::from_values("revenue", revenue),
            Column::from_values("region", region),
        ],
    )
    .expect("valid generated dataset")
}

fn loaded_workbench(rows: usize) -> Workbench<PlotlyBackend> {
    let mut datasets = DatasetRegistry::new();
    datasets.insert(generated_dataset(rows));
    let mut workbench = Workbench::new(WorkbenchConfig::default(), datasets, PlotlyBackend)
        .expect("workbench init");
    let events = [
        ("graph-type-0", json!("scatter")),
        ("dataframe-0", json!("traffic")),
        ("x-0", json!("day")),
        ("y-0", json!("visits")),
        ("color-0", json!("region")),
        ("graph-type-1", json!("histogram")),
        ("dataframe-1", json!("traffic")),
        ("x-1", json!("revenue")),
        ("marginal-1", json!("box")),
        ("graph-type-2", json!("box")),
        ("dataframe-2", json!("traffic")),
        ("x-2", json!("region")),
        ("y-2", json!("revenue")),
    ];
    for (control_id, value) in events {
        workbench
            .apply(ControlEvent::new(control_id, value))
            .expect("generated event applies");
    }
    workbench
}

fn bench_registry_build(c: &mut Criterion) {
    c.bench_function("option_registry_build", |b| {
        b.iter(|| black_box(OptionRegistry::build()))
    });
}

fn bench_compose_three_panels_5k(c: &mut Criterion) {
    let workbench = loaded_workbench(5_000);
    c.bench_function("compose_three_panels_5k", |b| {
        b.iter(|| black_box(workbench.figure()))
    });
}

fn bench_reproduction_script(c: &mut Criterion) {
    let workbench = loaded_workbench(100);
    c.bench_function("reproduction_script_three_panels", |b| {
        b.iter(|| black_box(workbench.reproduction_script()))
    });
}

fn bench_figure_json_2k(c: &mut Criterion) {
    let workbench = loaded_workbench(2_000);
    c.bench_function("figure_json_contract_2k", |b| {
        b.iter(|| {
            let _ = workbench
                .figure_json_contract_v1_pretty()
                .expect("figure json should serialize");
        })
    });
}

criterion_group!(
    benches,
    bench_registry_build,
    bench_compose_three_panels_5k,
    bench_reproduction_script,
    bench_figure_json_2k
);
criterion_main!(benches);
