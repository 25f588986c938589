//! Sharing the standard tables between threads

use std::sync::{Arc, Barrier};
use std::thread;
use u2l_babel::unicode2latex::Position;
use u2l_babel::{Options, TableSet, Unicode2Latex};

const THREADS: usize = 8;

#[test]
fn standard_tables_are_built_once_and_shared() {
    let barrier = Barrier::new(THREADS);
    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|index| {
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    let tables = TableSet::standard();
                    let converter =
                        Unicode2Latex::with_tables(Options::default(), Arc::clone(&tables));

                    // Each thread converts a different amount of text before the shared input.
                    let mut position = Position::new(format!("thread-{index}"));
                    let prefix = "a".repeat(index);
                    let _ = converter.convert_at(&prefix, &mut position);
                    let shared = converter.convert_at("x ∈ ℝ, é", &mut position);
                    (tables, shared, position)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("conversion thread panicked"))
            .collect()
    });

    let (first_tables, first_output, _) = &results[0];
    assert!(first_tables.canonical_math('∈').is_some());
    for (index, (tables, output, position)) in results.iter().enumerate() {
        assert!(Arc::ptr_eq(tables, first_tables));
        assert_eq!(output, first_output);
        assert_eq!(position.input(), format!("thread-{index}"));
        assert_eq!(position.line(), 1);
        assert_eq!(position.column(), index + "x ∈ ℝ, é".chars().count());
    }
    assert_eq!(first_output, "x \\in  \\symbb{R}, \\'{e}");
}

#[test]
fn converters_can_be_shared_across_threads() {
    let converter = Unicode2Latex::new(Options::default());
    let outputs: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| scope.spawn(|| converter.convert_str("½ ≤ x²")))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("conversion thread panicked"))
            .collect()
    });
    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
}
