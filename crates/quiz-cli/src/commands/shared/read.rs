use quiz_db::aggregate::Composed;
use quiz_db::error::DatabaseError;

/// Resolve a nested read: propagate child failures when `strict`, otherwise
/// fall back to the parent alone.
pub fn settle<P, C>(
    composed: Composed<P, C>,
    strict: bool,
) -> Result<(P, Option<Vec<C>>), DatabaseError> {
    if strict {
        composed
            .into_strict()
            .map(|(parent, children)| (parent, Some(children)))
    } else {
        Ok(composed.degrade())
    }
}
