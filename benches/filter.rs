// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rolodex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rolodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rolodex::query::{filter_profiles, NameMatchMode};
use rolodex::tui::demo_directory;

// Benchmark identity (keep stable):
// - Group name in this file: `query.filter_profiles`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time.
fn benches_filter(c: &mut Criterion) {
    let dozen = demo_directory();
    let mut grown = Vec::with_capacity(dozen.len() * 64);
    for _ in 0..64 {
        grown.extend(dozen.iter().cloned());
    }

    let mut group = c.benchmark_group("query.filter_profiles");
    group.bench_function("fold_case_dozen", |b| {
        b.iter(|| filter_profiles(black_box(&dozen), black_box("an"), NameMatchMode::FoldCase))
    });
    group.bench_function("literal_dozen", |b| {
        b.iter(|| filter_profiles(black_box(&dozen), black_box("an"), NameMatchMode::Literal))
    });
    group.bench_function("fold_case_grown", |b| {
        b.iter(|| filter_profiles(black_box(&grown), black_box("an"), NameMatchMode::FoldCase))
    });
    group.bench_function("identity_grown", |b| {
        b.iter(|| filter_profiles(black_box(&grown), black_box(""), NameMatchMode::FoldCase))
    });
    group.finish();
}

criterion_group!(benches, benches_filter);
criterion_main!(benches);
