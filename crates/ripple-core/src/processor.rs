//! Sample-by-sample processing trait and static chaining.
//!
//! [`SampleProcessor`] is the seam between filter designs and whatever feeds
//! them audio (a WAV file loop, an audio callback, another filter).
//!
//! - **Object-safe**: `Box<dyn SampleProcessor>` works for runtime family
//!   selection; generic code should prefer static dispatch.
//! - **No allocations**: every method is callable from a real-time context.
//! - **Normalized**: processors take no sample rate; frequencies are fractions
//!   of the sample rate decided at design time.

/// A mono, stateful, per-sample signal processor.
///
/// # Example
///
/// ```rust
/// use ripple_core::SampleProcessor;
///
/// struct Gain(f64);
///
/// impl SampleProcessor for Gain {
///     fn process(&mut self, input: f64) -> f64 {
///         input * self.0
///     }
///
///     fn reset(&mut self) {}
/// }
///
/// let mut gain = Gain(0.5);
/// assert_eq!(gain.process(2.0), 1.0);
/// ```
pub trait SampleProcessor {
    /// Processes one sample, advancing internal state by one step.
    fn process(&mut self, input: f64) -> f64;

    /// Processes a block of samples.
    ///
    /// # Panics
    /// Default implementation debug-asserts `input.len() == output.len()`.
    fn process_block(&mut self, input: &[f64], output: &mut [f64]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Processes a block in place.
    fn process_block_inplace(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Processes an `f32` block in place, running the recursion in `f64`.
    fn process_block_f32(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(f64::from(*sample)) as f32;
        }
    }

    /// Clears internal state (delay registers) without touching the design.
    fn reset(&mut self);
}

impl<T: SampleProcessor + ?Sized> SampleProcessor for &mut T {
    #[inline]
    fn process(&mut self, input: f64) -> f64 {
        (**self).process(input)
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

/// Extension trait for chaining processors.
pub trait SampleProcessorExt: SampleProcessor + Sized {
    /// Chains `self` into `next`; the output of `self` feeds `next`.
    ///
    /// # Example
    /// ```rust
    /// use ripple_core::{ButterworthLowpass, SampleProcessor, SampleProcessorExt};
    ///
    /// // Two 4th-order sections in series behave like a steeper 8th order
    /// let mut chain = ButterworthLowpass::butterworth(4, 0.1)
    ///     .chain(ButterworthLowpass::butterworth(4, 0.1));
    /// let out = chain.process(1.0);
    /// assert!(out.is_finite());
    /// ```
    fn chain<B: SampleProcessor>(self, next: B) -> Chain<Self, B> {
        Chain {
            first: self,
            second: next,
        }
    }
}

impl<T: SampleProcessor> SampleProcessorExt for T {}

/// Two processors in series, created by [`SampleProcessorExt::chain`].
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: SampleProcessor, B: SampleProcessor> SampleProcessor for Chain<A, B> {
    #[inline]
    fn process(&mut self, input: f64) -> f64 {
        let mid = self.first.process(input);
        self.second.process(mid)
    }

    fn process_block(&mut self, input: &[f64], output: &mut [f64]) {
        self.first.process_block(input, output);
        self.second.process_block_inplace(output);
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
    }
}

impl<A, B> Chain<A, B> {
    /// The first processor in the chain.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Mutable access to the first processor.
    pub fn first_mut(&mut self) -> &mut A {
        &mut self.first
    }

    /// The second processor in the chain.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Mutable access to the second processor.
    pub fn second_mut(&mut self) -> &mut B {
        &mut self.second
    }
}
