use spectral::{assert_that, Spec};
use spectral::prelude::*;
use crate::error::NavigatorResult;
use crate::navigator::hit::Hit;

/// Assertions on results of `Navigator::next`/`Navigator::previous`
pub trait HitAssertions<'s> {
    /// Checks that a hit was found and returns it for further checks
    fn is_hit(&mut self) -> Spec<'s, Hit>;

    fn is_hit_at(&mut self, line_no: u64, column: u64, line: &str);

    fn is_no_hit(&mut self);
}

impl<'s> HitAssertions<'s> for Spec<'s, NavigatorResult<Option<Hit>>> {
    fn is_hit(&mut self) -> Spec<'s, Hit> {
        match self.subject {
            Ok(Some(hit)) => assert_that(hit),
            Ok(None) => panic!("expected a hit, but nothing was found"),
            Err(e) => panic!("expected a hit, but got error {:?}", e),
        }
    }

    fn is_hit_at(&mut self, line_no: u64, column: u64, line: &str) {
        let hit = self.is_hit().subject;
        assert_that!((hit.line_no, hit.column, hit.line.as_str())).is_equal_to((line_no, column, line));
    }

    fn is_no_hit(&mut self) {
        assert_that(self.subject).is_ok().is_none();
    }
}
