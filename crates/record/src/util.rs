//! Small generic helpers shared across the workspace.

/// Returns the first element of `values` that is not the zero value for its
/// type, or the zero value if the sequence is empty or all-zero.
///
/// "Zero" means [`Default::default`], so `""` for string slices, `0` for
/// integers, and so on. The main consumer is wire-name resolution: an explicit
/// wire-name tag wins over the field identifier only when the tag is non-empty.
pub fn first_non_zero<T, I>(values: I) -> T
where
    T: Default + PartialEq,
    I: IntoIterator<Item = T>,
{
    let zero = T::default();
    values.into_iter().find(|v| *v != zero).unwrap_or(zero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_yields_the_zero_value() {
        assert_eq!(first_non_zero(Vec::<String>::new()), "");
        assert_eq!(first_non_zero(Vec::<u64>::new()), 0);
    }

    #[test]
    fn skips_leading_zero_values() {
        assert_eq!(first_non_zero(["", "fallback"]), "fallback");
        assert_eq!(first_non_zero([0, 0, 7, 3]), 7);
    }

    #[test]
    fn first_non_zero_wins_over_later_ones() {
        assert_eq!(first_non_zero(["chat_id", "ChatId"]), "chat_id");
    }

    #[test]
    fn all_zero_sequence_yields_the_zero_value() {
        assert_eq!(first_non_zero(["", "", ""]), "");
    }
}
