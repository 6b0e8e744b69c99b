// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Shuffles row indices with a seeded RNG and cuts them into:
//   - Test set:  the first ceil(n * test_fraction) shuffled rows
//   - Train set: everything else
//
// The RNG is StdRng seeded from a u64, so the same seed and the
// same input always give the same assignment.
//
// Split ratio: 80% train, 20% test by default (configurable)
//
// Reference: rand crate documentation (SliceRandom, SeedableRng)

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::domain::error::IngestError;
use crate::domain::table::Table;

/// Fraction of rows held out for testing by default.
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 42;

/// Reject fractions that cannot give two partitions.
pub fn validate_test_fraction(test_fraction: f64) -> Result<(), IngestError> {
    if !test_fraction.is_finite() || test_fraction <= 0.0 || test_fraction >= 1.0 {
        return Err(IngestError::Split(format!(
            "test fraction must be strictly between 0 and 1, got {test_fraction}"
        )));
    }
    Ok(())
}

/// Number of rows the test partition receives out of `total`.
pub fn test_count(total: usize, test_fraction: f64) -> usize {
    ((total as f64) * test_fraction).ceil() as usize
}

/// Shuffle `samples` with `seed` and split into (train, test).
///
/// # Arguments
/// * `samples`       - All rows (consumed by this function)
/// * `test_fraction` - Proportion held out, e.g. 0.2 = 20%
/// * `seed`          - RNG seed; equal seeds give equal splits
pub fn split_train_test<T>(
    samples:       Vec<T>,
    test_fraction: f64,
    seed:          u64,
) -> Result<(Vec<T>, Vec<T>), IngestError> {
    validate_test_fraction(test_fraction)?;

    let total = samples.len();
    if total == 0 {
        return Ok((Vec::new(), Vec::new()));
    }

    let mut order: Vec<usize> = (0..total).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let n_test = test_count(total, test_fraction).min(total);

    // Move rows out in shuffled order without cloning
    let mut slots: Vec<Option<T>> = samples.into_iter().map(Some).collect();
    let mut take = |i: usize| slots[i].take();

    let test:  Vec<T> = order[..n_test].iter().filter_map(|&i| take(i)).collect();
    let train: Vec<T> = order[n_test..].iter().filter_map(|&i| take(i)).collect();

    tracing::debug!(
        "Dataset split: {} train, {} test (seed {})",
        train.len(),
        test.len(),
        seed,
    );

    Ok((train, test))
}

/// Split a Table into (train, test) Tables sharing its column list.
pub fn split_table(table: Table, test_fraction: f64, seed: u64) -> Result<(Table, Table), IngestError> {
    let (columns, rows) = table.into_parts();
    let (train, test)   = split_train_test(rows, test_fraction, seed)?;
    Ok((
        Table::with_columns(columns.clone(), train),
        Table::with_columns(columns, test),
    ))
}
