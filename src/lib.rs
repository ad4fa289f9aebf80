//! Composition, adapters and batch mapping for total and fallible functions.
//!
//! A *transformation* is a single-input, single-output computation. It is
//! either total ([`pure::Transform`], any `Fn(I) -> O`) or fallible
//! ([`impure::TryTransform`], any `Fn(I) -> Result<O, E>`). Transformations
//! compose into pipelines which are transformations themselves, adapt between
//! the two shapes, and map over sequences of inputs.
//!
//! # Operations
//!
//! - [`pure::compose2`], [`pure::compose3`], [`pure::compose4`]: compose total
//!   transformations.
//! - [`impure::compose2`], [`impure::compose3`], [`impure::compose4`]: compose
//!   fallible transformations, stopping at the first error.
//! - [`pure::Compose`], [`impure::TryCompose`]: compose a tuple of up to 12
//!   stages.
//! - [`pure::TransformExt::then`], [`impure::TryTransformExt::and_then`]:
//!   append a stage to a pipeline.
//! - [`pure::attach`]: lift a total transformation into the fallible shape.
//! - [`impure::detach`]: lower a fallible transformation into a total one
//!   which panics on error.
//! - [`batch::map_fail_fast`], [`batch::map_collect_all`],
//!   [`batch::map_collect_all_concurrent`]: apply a fallible transformation
//!   to every item of a sequence.
//!
//! # Examples
//!
//! Build a pipeline, then run it over a batch of inputs:
//!
//! ```rust
//! use fnflow::prelude::*;
//! use fnflow::{batch, impure, pure, Error};
//!
//! let parse = |s: &str| s.trim().parse::<i32>().map_err(Error::new);
//! let inc = pure::attach(|x: i32| x + 1);
//! let pipeline = impure::compose3(parse, inc, inc);
//!
//! assert_eq!(pipeline.try_apply(" 40 ").unwrap(), 42);
//!
//! let batch = batch::map_collect_all_concurrent(pipeline, ["1", "two", "3"]);
//! assert_eq!(batch.outputs, [3, 5]);
//! assert_eq!(batch.failed_inputs, ["two"]);
//! ```
//!
//! Where there is no way to report an error, a fallible pipeline can be
//! detached. The result panics if the pipeline ever fails:
//!
//! ```rust
//! use fnflow::prelude::*;
//! use fnflow::{impure, pure, Error};
//!
//! let inc = pure::attach::<_, Error>(|x: i32| x + 1);
//! let plus_two = impure::detach(impure::compose2(inc, inc));
//!
//! assert_eq!(plus_two.apply(3), 5);
//! ```
//!
//! # Features
//!
//! - `async` (default): [`batch::map_collect_all_async`], which runs one
//!   future per input concurrently on the current task.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]
#![allow(non_snake_case)]

mod error;
mod utils;

pub use error::{Error, Result};

/// The fnflow prelude.
pub mod prelude {
    pub use super::pure::Transform as _;
    pub use super::pure::TransformExt as _;

    pub use super::impure::TryTransform as _;
    pub use super::impure::TryTransformExt as _;

    pub use super::batch::BatchExt as _;
    pub use super::impure::TryCompose as _;
    pub use super::pure::Compose as _;
}

pub mod batch;
pub mod impure;
pub mod pure;
