//! Lift an increment into the fallible shape, compose it with itself, and
//! detach the result back into a plain function.
//!
//! Run with `RUST_LOG=debug` to see the library's diagnostics.

use fnflow::prelude::*;
use fnflow::{batch, impure, pure, Error};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let plus1 = pure::attach::<_, Error>(|x: i32| x + 1);
    let plus2 = impure::detach(impure::compose2(plus1, plus1));

    println!("Plus 2: {}", plus2.apply(3));

    let batch = batch::map_collect_all_concurrent(impure::compose2(plus1, plus1), 0..5);
    println!("Plus 2 over 0..5: {:?}", batch.outputs);
}
