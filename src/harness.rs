use std::hint::black_box;
use std::time::Instant;

use crate::schema::TimingSample;
use crate::Algorithm;

/// Time one run of `algorithm` over a fresh copy of `input`.
///
/// The copy keeps the caller's data and every other algorithm's run
/// unaffected. Single-shot: no warm-up and no averaging, so the sample
/// carries ordinary one-run timing noise. `black_box` keeps the otherwise
/// unobserved sort from being optimized away.
pub fn measure<T: Ord + Clone>(algorithm: Algorithm, input: &[T]) -> TimingSample {
    let mut data = input.to_vec();
    let start = Instant::now();
    algorithm.run(black_box(&mut data));
    let elapsed = start.elapsed();
    black_box(&data);
    TimingSample::from_duration(elapsed)
}
