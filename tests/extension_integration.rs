//! Integration tests for plugging custom sources and stages into a stream

use std::collections::VecDeque;

use pullstream::pipeline::ProcessorPipeline;
use pullstream::processor::{Processor, ProcessorKind};
use pullstream::source::Source;
use pullstream::testing::CallCounter;
use pullstream::{assert_present_eq, Stream};

/// Counts down from `n`, reporting every pull.
struct Countdown {
    remaining: u32,
    pulls: CallCounter,
}

impl Source for Countdown {
    type Item = u32;

    fn has_next(&self) -> bool {
        self.remaining > 0
    }

    fn get(&mut self) -> Option<u32> {
        self.pulls.tick();
        let value = self.remaining;
        self.remaining = self.remaining.checked_sub(1)?;
        Some(value)
    }
}

/// Emits running sums of its inputs.
struct RunningSum {
    buffer: VecDeque<u32>,
    total: u32,
}

impl Processor for RunningSum {
    type Input = u32;
    type Output = u32;

    fn add(&mut self, input: u32) {
        self.buffer.push_back(input);
    }

    fn has_next(&self) -> bool {
        !self.buffer.is_empty()
    }

    fn process_and_get_next(&mut self) -> Option<u32> {
        let value = self.buffer.pop_front()?;
        self.total += value;
        Some(self.total)
    }

    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Stateless
    }
}

/// Passes inputs through until it sees a zero, then closes.
struct UntilZero {
    buffer: VecDeque<i32>,
    done: bool,
}

impl Processor for UntilZero {
    type Input = i32;
    type Output = i32;

    fn add(&mut self, input: i32) {
        self.buffer.push_back(input);
    }

    fn has_next(&self) -> bool {
        !self.done && !self.buffer.is_empty()
    }

    fn process_and_get_next(&mut self) -> Option<i32> {
        let value = self.buffer.pop_front()?;
        if value == 0 {
            self.done = true;
            return None;
        }
        Some(value)
    }

    fn kind(&self) -> ProcessorKind {
        ProcessorKind::ShortCircuiting
    }

    fn is_exhausted(&self) -> bool {
        self.done
    }
}

#[test]
fn custom_source_drives_a_stream() {
    let pulls = CallCounter::new();
    let source = Countdown {
        remaining: 5,
        pulls: pulls.clone(),
    };
    let out = Stream::from_source(source).filter(|x| x % 2 == 1).to_vec();
    assert_eq!(out, vec![5, 3, 1]);
    assert_eq!(pulls.get(), 5);
}

#[test]
fn custom_source_is_pulled_only_on_demand() {
    let pulls = CallCounter::new();
    let source = Countdown {
        remaining: 100,
        pulls: pulls.clone(),
    };
    assert_present_eq!(Stream::from_source(source).find_first(), 100);
    assert_eq!(pulls.get(), 1);
}

#[test]
fn custom_stage_joins_a_pipeline() {
    let pipeline = Stream::of([1u32, 2, 3, 4])
        .into_pipeline()
        .add_processor(RunningSum {
            buffer: VecDeque::new(),
            total: 0,
        });
    let out = Stream::from_pipeline(pipeline).map(|x| x * 10).to_vec();
    assert_eq!(out, vec![10, 30, 60, 100]);
}

#[test]
fn custom_short_circuit_stops_infinite_source() {
    let seen = CallCounter::new();
    let pipeline = Stream::iterate(3, |x: &i32| x - 1)
        .map(seen.counting(|x: i32| x))
        .into_pipeline()
        .add_processor(UntilZero {
            buffer: VecDeque::new(),
            done: false,
        });
    let out = Stream::from_pipeline(pipeline).to_vec();
    assert_eq!(out, vec![3, 2, 1]);
    assert_eq!(seen.get(), 4);
}

#[test]
fn pipeline_can_be_pulled_directly() {
    let mut pipeline = ProcessorPipeline::new(Countdown {
        remaining: 2,
        pulls: CallCounter::new(),
    });
    assert_eq!(pipeline.stage_count(), 0);
    assert!(pipeline.has_next());
    assert_eq!(pipeline.get_next_result(), Some(2));
    assert_eq!(pipeline.get_next_result(), Some(1));
    assert!(!pipeline.has_next());
    assert_eq!(pipeline.get_next_result(), None);
}

#[test]
fn stream_iter_works_with_iterator_adapters() {
    let out: Vec<String> = Stream::range(1, 4)
        .into_iter()
        .zip("abc".chars())
        .map(|(n, c)| format!("{}{}", c, n))
        .collect();
    assert_eq!(out, vec!["a1", "b2", "c3"]);
}
