//! A basic example showing minimal usage
//!
//! We construct a [`MedianHeap`], feed it a stream of values, and then read
//! out the median.

use median_heap::MedianHeap;

/// Some sample data to calculate the median for
///
/// In practice, this will probably be a much larger stream.
/// The sorted middle pair is (5, 6), so the truncated median is 5.
const DATA: [i64; 10] = [2, 1, 5, 3, 7, -1, 6, 8, 11, 16];

fn main() {
    let mut heap = MedianHeap::new();

    // Read data points from our data source, and fold them into the heap
    for value in DATA {
        heap.insert(value);
    }

    match heap.median() {
        Ok(median) => println!("median: {median}"),
        Err(err) => println!("err: {err}"),
    }
}
