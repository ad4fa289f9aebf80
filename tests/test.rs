use fnflow::batch::{self, Batch};
use fnflow::prelude::*;
use fnflow::{impure, pure, Error};

use std::cell::Cell;
use std::panic;
use std::sync::atomic::{AtomicUsize, Ordering};

fn fails_on_even(x: u32) -> Result<String, Error> {
    if x % 2 == 0 {
        Err(Error::msg(format!("{x} is even")))
    } else {
        Ok(format!("#{x}"))
    }
}

#[test]
fn early_failure_skips_later_stages() {
    let calls = Cell::new(0);
    let counted = |s: String| {
        calls.set(calls.get() + 1);
        Ok::<_, Error>(s)
    };
    let pipeline = impure::compose3(fails_on_even, counted, counted);

    let err = pipeline.try_apply(2).unwrap_err();
    assert_eq!(err.to_string(), "2 is even");
    assert_eq!(calls.get(), 0);
}

#[test]
fn detach_aborts_the_call_on_failure() {
    let detached = impure::detach(fails_on_even);
    assert_eq!(detached.apply(1), "#1");

    let result = panic::catch_unwind(|| detached.apply(2));
    let payload = result.expect_err("detach must not return on failure");
    let message = payload
        .downcast_ref::<String>()
        .expect("panic payload is a formatted message");
    assert!(message.contains("2 is even"), "{message}");
}

#[test]
fn fail_fast_stops_at_first_failure() {
    let calls = AtomicUsize::new(0);
    let f = |x: u32| {
        calls.fetch_add(1, Ordering::SeqCst);
        fails_on_even(x)
    };

    let partial = batch::map_fail_fast(f, [1, 2, 3]);

    assert_eq!(partial.outputs, ["#1"]);
    assert_eq!(partial.error.map(|e| e.to_string()).as_deref(), Some("2 is even"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn collect_all_policies_agree() {
    let sequential = batch::map_collect_all(fails_on_even, [1, 2, 3, 4]);
    let concurrent = batch::map_collect_all_concurrent(fails_on_even, [1, 2, 3, 4]);

    for batch in [&sequential, &concurrent] {
        assert_eq!(batch.outputs, ["#1", "#3"]);
        assert_eq!(batch.failed_inputs, [2, 4]);
        assert_eq!(batch.errors.len(), 2);
    }
    assert_eq!(sequential.outputs, concurrent.outputs);
    assert_eq!(sequential.failed_inputs, concurrent.failed_inputs);
    let errors = |batch: &Batch<u32, String, Error>| {
        batch.errors.iter().map(Error::to_string).collect::<Vec<_>>()
    };
    assert_eq!(errors(&sequential), errors(&concurrent));
}

#[test]
fn empty_inputs() {
    let partial = batch::map_fail_fast(fails_on_even, []);
    assert!(partial.outputs.is_empty());
    assert!(partial.error.is_none());

    let sequential = batch::map_collect_all(fails_on_even, []);
    assert!(sequential.is_empty());
    assert!(sequential.errors.is_empty());

    let concurrent = batch::map_collect_all_concurrent(fails_on_even, []);
    assert!(concurrent.is_empty());
    assert!(concurrent.errors.is_empty());

    #[cfg(feature = "async")]
    {
        let async_batch = futures_lite::future::block_on(batch::map_collect_all_async(
            |x: u32| std::future::ready(fails_on_even(x)),
            [],
        ));
        assert!(async_batch.is_empty());
    }
}

#[test]
fn builder_pipeline_into_batch() {
    let pipeline = (|s: &str| s.parse::<u32>().map_err(Error::new))
        .and_then(pure::attach(|x: u32| x * 2))
        .and_then(|x: u32| {
            if x > 10 {
                Err(Error::msg("too big"))
            } else {
                Ok(x)
            }
        });

    let batch = vec!["1", "x", "3", "9"].try_map_collect_all(pipeline);
    assert_eq!(batch.outputs, [2, 6]);
    assert_eq!(batch.failed_inputs, ["x", "9"]);

    let err = batch.into_result().unwrap_err();
    assert_eq!(err.to_string(), "2 inputs failed");
}
