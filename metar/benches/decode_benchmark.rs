use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use metar::{Metar, Phenomenon};

const SHORT: &str = "KSTL 231751Z 27009KT 10SM OVC015 09/06 A3029";
const LONG: &str = "KSTL 192051Z 20004KT 10SM -RA FEW034 SCT048 OVC110 22/18 A2993 RMK AO2 PK WND 27032/2004 LTG DSNT E AND SE RAB06 TSB03E42 PRESFR SLP129 OCNL LTGIC DSNT E CB DSNT E MOV E P0003 60003 T02220178 58006 $";
const TEMPO: &str = "EDDF 161020Z 24012KT CAVOK 18/09 Q1015 TEMPO 4000 SHRA BKN015CB RMK VCSH";

/// Benchmark decoding whole reports
fn bench_reports(c: &mut Criterion) {
    let mut group = c.benchmark_group("reports");

    for (name, report) in [("short", SHORT), ("long", LONG), ("tempo", TEMPO), ("empty", "")] {
        group.throughput(Throughput::Bytes(report.len() as u64));
        group.bench_function(name, |b| b.iter(|| Metar::new(black_box(report))));
    }

    group.finish();
}

/// Benchmark the present weather decoder alone
fn bench_phenomena(c: &mut Criterion) {
    c.bench_function("phenomenon", |b| {
        b.iter(|| black_box("+VCBLSNRA").parse::<Phenomenon>())
    });

    c.bench_function("unknown phenomenon", |b| {
        b.iter(|| black_box("TSB0854").parse::<Phenomenon>())
    });
}

criterion_group!(benches, bench_reports, bench_phenomena);
criterion_main!(benches);
