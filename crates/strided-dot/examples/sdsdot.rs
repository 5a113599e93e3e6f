//! Dot product of a vector with its own reversal
//!
//! Run with `cargo run -p strided-dot --example sdsdot`.

use strided_dot::sdsdot;

fn main() {
    // Create strided arrays
    let x = [1.0f32, -2.0, 3.0, -4.0, 5.0, -6.0, 7.0, -8.0];
    let y = [1.0f32, -2.0, 3.0, -4.0, 5.0, -6.0, 7.0, -8.0];

    // Number of indexed elements
    let n = 8;

    // Forward through x, backward through y
    let stride_x = 1;
    let stride_y = -1;

    let d = sdsdot(n, 0.0, &x, stride_x, &y, stride_y);

    println!("dot product: {d:.6}");
}
