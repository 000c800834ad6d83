/// A real-valued function of one real variable.
///
/// An equation `f(x) = 0` is checked by sampling `f` at each claimed root.
/// Implementations that cannot fail use [`std::convert::Infallible`].
pub trait Model {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns `f(x)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `f` is undefined at `x`.
    fn value_at(&self, x: f64) -> Result<f64, Self::Error>;

    /// Samples `f` at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `f` is undefined at `x`.
    fn sample(&self, x: f64) -> Result<Sample, Self::Error> {
        self.value_at(x).map(|value| Sample { x, value })
    }
}

/// A point `x` and the value of a function there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub value: f64,
}
