//! This module provides a trait [`Input`] for representing source inputs generated for property
//! based testing, and for checking the lexer output produced from them.

use proptest::{
    prop_assert_eq,
    test_runner::{TestCaseError, TestCaseResult},
};

/// Represents an input generated for testing purposes.
///
/// An input knows the source text it renders to (usually through [`std::fmt::Display`]) and how
/// to verify whatever the lexer produced for that text.
pub trait Input<Output> {
    /// Verifies that the given output complies with this input.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: for any reason the assertion fails.
    fn assert(self, output: Output) -> TestCaseResult;
}

impl<T, U> Input<Option<T>> for Option<U>
where
    U: Input<T>,
{
    fn assert(self, output: Option<T>) -> TestCaseResult {
        match (self, output) {
            (Some(input), Some(output)) => input.assert(output),
            (None, None) => Ok(()),
            (Some(_), None) => Err(TestCaseError::fail("expected an output, found nothing")),
            (None, Some(_)) => Err(TestCaseError::fail("expected nothing, found an output")),
        }
    }
}

impl<'o, T, U> Input<&'o [T]> for &[U]
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &'o [T]) -> TestCaseResult {
        prop_assert_eq!(
            self.len(),
            output.len(),
            "the number of produced items differs from the input"
        );

        for (input, output) in self.iter().zip(output.iter()) {
            input.assert(output)?;
        }

        Ok(())
    }
}

impl<'o, T, U> Input<&'o Vec<T>> for &Vec<U>
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &'o Vec<T>) -> TestCaseResult {
        self.as_slice().assert(output.as_slice())
    }
}
