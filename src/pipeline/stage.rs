//! Pipeline stage abstraction.
//!
//! Every stage in the flattening pipeline is a pure, infallible transform:
//! malformed input degrades to fewer rows rather than an error, so there is
//! no error type to thread through.

/// A pipeline stage that transforms data.
///
/// The type system ensures stages can only be chained when their types align:
/// ```rust,ignore
/// ordering.execute(metrics.execute(rows))  // Vec<Row> -> Vec<Row>: OK
/// ```
pub trait Stage {
    type Input;
    type Output;

    /// Execute this stage with the given input.
    fn execute(&self, input: Self::Input) -> Self::Output;

    /// Get the stage name for tracing spans.
    fn name(&self) -> &str;
}

/// Run a stage inside a debug span named after it.
pub fn run_stage<S: Stage>(stage: &S, input: S::Input) -> S::Output {
    let _span = tracing::debug_span!("stage", name = stage.name()).entered();
    stage.execute(input)
}
