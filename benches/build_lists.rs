//! Builds each list variant from a large generated record file.

#![allow(missing_docs)]

use std::io::Write;

use criterion::{Criterion, criterion_group, criterion_main};
use linked_records::{
    CircularList, CollectionPoint, DoublyLinkedList, RecordFile, Rotation, Route,
    SinglyLinkedList,
};
use tempfile::NamedTempFile;

const RECORDS: usize = 2_000;

/// Writes `RECORDS` lines, half of which match the filter used below
fn preseed_file(line: impl Fn(usize) -> String) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for i in 0..RECORDS {
        writeln!(file, "{}", line(i)).unwrap();
    }
    file
}

fn build_lists(c: &mut Criterion) {
    let points_file = preseed_file(|i| {
        let category = if i % 2 == 0 { "Plastico" } else { "Vidro" };
        format!("{i};{category};Rua {i}")
    });
    let routes_file = preseed_file(|i| {
        let region = if i % 2 == 0 { "Zona Norte" } else { "Centro" };
        format!("{i};Linha {i};Onibus;{region}")
    });
    let rotations_file = preseed_file(|i| {
        let weekday = if i % 2 == 0 { "Segunda-feira" } else { "Sexta-feira" };
        format!("AAA{i:04};{weekday};07:00-10:00")
    });

    // the temp files must outlive the sources
    let points = RecordFile::new(points_file.path().to_path_buf(), ';');
    let routes = RecordFile::new(routes_file.path().to_path_buf(), ';');
    let rotations = RecordFile::new(rotations_file.path().to_path_buf(), ';');

    c.bench_function("build singly list", |b| {
        b.iter(|| {
            let mut list: SinglyLinkedList<CollectionPoint> = points.load("Plastico").unwrap();
            list.release();
        });
    });

    c.bench_function("build doubly list", |b| {
        b.iter(|| {
            let list: DoublyLinkedList<Route> = routes.load("Norte").unwrap();
            list.iter_rev().count()
        });
    });

    c.bench_function("build circular list", |b| {
        b.iter(|| {
            let list: CircularList<Rotation> = rotations.load("Segunda-feira").unwrap();
            list.len()
        });
    });
}

criterion_group!(benches, build_lists);
criterion_main!(benches);
