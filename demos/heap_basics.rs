//! An example exercising the raw heap primitive directly
//!
//! The same values used by the `stream_median` example are pushed into a
//! min-heap, the minimum is read back, and the contents are popped in
//! priority order.

use median_heap::heap::MinHeap;

/// Sample values to push through the heap
const DATA: [i64; 10] = [2, 1, 5, 3, 7, -1, 6, 8, 11, 16];

fn main() {
    let mut heap = MinHeap::new();

    for value in DATA {
        heap.push(value);
    }

    if let Some(minimum) = heap.peek() {
        println!("minimum: {minimum}");
    }

    // Draining the heap yields the values in ascending order
    while let Some(value) = heap.pop() {
        print!("{value} ");
    }
    println!();
}
