use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum IntervalBound<T> where T: Eq {
    PositiveInfinity,
    NegativeInfinity,
    Fixed {
        value: T,
        is_included: bool,
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Interval<T>
    where T: Ord + Copy {
    pub left_bound: IntervalBound<T>,
    pub right_bound: IntervalBound<T>,
}

pub struct IntervalBuilder<T> where T: Ord + Copy {
    object: Interval<T>,
}

impl<T> IntervalBuilder<T> where T: Ord + Copy {

    pub fn left_bound_inclusive(self, value: T) -> Self {
        self.left_bound(value, true)
    }

    pub fn left_bound_exclusive(self, value: T) -> Self {
        self.left_bound(value, false)
    }

    pub fn left_bound(mut self, value: T, is_included: bool) -> Self {
        self.object.left_bound = IntervalBound::Fixed { value, is_included };
        self
    }

    pub fn left_unbounded(mut self) -> Self {
        self.object.left_bound = IntervalBound::NegativeInfinity;
        self
    }

    pub fn right_bound_inclusive(self, value: T) -> Self {
        self.right_bound(value, true)
    }

    pub fn right_bound_exclusive(self, value: T) -> Self {
        self.right_bound(value, false)
    }

    pub fn right_bound(mut self, value: T, is_included: bool) -> Self {
        self.object.right_bound = IntervalBound::Fixed { value, is_included };
        self
    }

    pub fn right_unbounded(mut self) -> Self {
        self.object.right_bound = IntervalBound::PositiveInfinity;
        self
    }

    pub fn build(self) -> Interval<T> {
        self.object
    }
}

impl<T> Interval<T> where T: Ord + Copy {
    pub fn builder() -> IntervalBuilder<T> {
        IntervalBuilder {
            object: Interval::empty()
        }
    }

    pub fn all() -> Self {
        Interval {
            left_bound: IntervalBound::NegativeInfinity,
            right_bound: IntervalBound::PositiveInfinity,
        }
    }

    pub fn empty() -> Self {
        Interval {
            left_bound: IntervalBound::NegativeInfinity,
            right_bound: IntervalBound::NegativeInfinity,
        }
    }

    pub fn closed(s: T, e: T) -> Self {
        Self::builder().left_bound_inclusive(s).right_bound_inclusive(e).build()
    }

    pub fn closed_open(s: T, e: T) -> Self {
        Self::builder().left_bound_inclusive(s).right_bound_exclusive(e).build()
    }

    pub fn open(s: T, e: T) -> Self {
        Self::builder().left_bound_exclusive(s).right_bound_exclusive(e).build()
    }

    pub fn closed_inf(s: T) -> Self {
        Self::builder().left_bound_inclusive(s).right_unbounded().build()
    }

    /// `(s, +∞)`: everything strictly after `s`
    pub fn open_inf(s: T) -> Self {
        Self::builder().left_bound_exclusive(s).right_unbounded().build()
    }

    /// `(-∞, e)`: everything strictly before `e`
    pub fn inf_open(e: T) -> Self {
        Self::builder().left_unbounded().right_bound_exclusive(e).build()
    }

    pub fn is_empty(&self) -> bool {
        match (self.left_bound, self.right_bound) {
            (IntervalBound::PositiveInfinity, _) => true,
            (_, IntervalBound::NegativeInfinity) => true,
            (IntervalBound::NegativeInfinity, _) => false,
            (IntervalBound::Fixed { .. }, IntervalBound::PositiveInfinity) => false,
            (IntervalBound::Fixed { value: lb, is_included: lbi }, IntervalBound::Fixed { value: rb, is_included: rbi }) =>
                match lb.cmp(&rb) {
                    Ordering::Less => false,
                    Ordering::Greater => true,
                    Ordering::Equal => !lbi || !rbi,
                }
        }
    }

    pub fn contains(&self, point: &T) -> bool {
        let after_left = match self.left_bound {
            IntervalBound::NegativeInfinity => true,
            IntervalBound::PositiveInfinity => false,
            IntervalBound::Fixed { value, is_included } => value < *point || (is_included && value == *point),
        };
        let before_right = match self.right_bound {
            IntervalBound::NegativeInfinity => false,
            IntervalBound::PositiveInfinity => true,
            IntervalBound::Fixed { value, is_included } => *point < value || (is_included && value == *point),
        };
        after_left && before_right
    }
}

impl<T> Display for Interval<T> where T: Ord + Copy + Display {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "∅");
        }
        match self.left_bound {
            IntervalBound::Fixed { value, is_included: true } => write!(f, "[{}", value)?,
            IntervalBound::Fixed { value, is_included: false } => write!(f, "({}", value)?,
            _ => write!(f, "(-∞")?,
        }
        write!(f, ", ")?;
        match self.right_bound {
            IntervalBound::Fixed { value, is_included: true } => write!(f, "{}]", value),
            IntervalBound::Fixed { value, is_included: false } => write!(f, "{})", value),
            _ => write!(f, "+∞)"),
        }
    }
}

// Tests are included according to http://xion.io/post/code/rust-unit-test-placement.html
#[cfg(test)]
#[path = "./interval_tests.rs"]
mod interval_tests;
