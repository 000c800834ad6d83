/// One or two real roots, largest first.
///
/// A double root is stored once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roots {
    values: [f64; 2],
    count: usize,
}

impl Roots {
    /// Creates a single root.
    #[must_use]
    pub fn one(x: f64) -> Self {
        Self {
            values: [x, x],
            count: 1,
        }
    }

    /// Creates two roots, stored in descending order.
    #[must_use]
    pub fn two(x1: f64, x2: f64) -> Self {
        let values = if x1 < x2 { [x2, x1] } else { [x1, x2] };
        Self { values, count: 2 }
    }

    /// Returns the roots in descending order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..self.count]
    }

    /// Returns the number of roots, either 1 or 2.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the largest root.
    #[must_use]
    pub fn first(&self) -> f64 {
        self.values[0]
    }

    /// Returns the smaller root, if there are two.
    #[must_use]
    pub fn second(&self) -> Option<f64> {
        (self.count == 2).then_some(self.values[1])
    }
}

/// The real solution set of an equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolutionSet {
    /// No real number satisfies the equation.
    NoSolution,
    /// Every real number satisfies the equation.
    AllReals,
    /// The equation has exactly these roots.
    Exactly(Roots),
}

impl SolutionSet {
    /// A solution set with a single root.
    #[must_use]
    pub fn one(x: f64) -> Self {
        Self::Exactly(Roots::one(x))
    }

    /// A solution set with two roots, in any order.
    #[must_use]
    pub fn two(x1: f64, x2: f64) -> Self {
        Self::Exactly(Roots::two(x1, x2))
    }

    /// Returns the listed roots, empty unless the set is [`SolutionSet::Exactly`].
    #[must_use]
    pub fn roots(&self) -> &[f64] {
        match self {
            Self::Exactly(roots) => roots.as_slice(),
            Self::NoSolution | Self::AllReals => &[],
        }
    }
}
