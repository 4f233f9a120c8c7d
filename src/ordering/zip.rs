/// Groups the elements at each position across several sequences.
///
/// The result is as long as the longest input. Row `i` holds the `i`-th
/// element of every input in argument order, with `None` where an input is
/// too short. No inputs yield an empty result.
///
/// # Examples
///
/// ```rust
/// use underbar::ordering::zip;
/// use underbar::value::Value;
/// use underbar::values;
///
/// let rows = zip(&[values!["a", "b", "c"], values![1, 2]]);
/// assert_eq!(rows[2], vec![Some(Value::from("c")), None]);
/// ```
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let longest = sequences
        .iter()
        .map(|sequence| sequence.as_ref().len())
        .max()
        .unwrap_or(0);
    (0..longest)
        .map(|position| {
            sequences
                .iter()
                .map(|sequence| sequence.as_ref().get(position).cloned())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn zip_of_nothing_is_empty() {
        let none: &[Vec<i32>] = &[];
        assert!(zip(none).is_empty());
    }

    #[rstest]
    fn zip_of_equal_lengths_has_no_gaps() {
        let rows = zip(&[vec![1, 2], vec![3, 4]]);
        assert_eq!(rows, vec![vec![Some(1), Some(3)], vec![Some(2), Some(4)]]);
    }

    #[rstest]
    fn zip_fills_leading_short_sequence() {
        let rows = zip(&[vec!['x'], vec!['a', 'b']]);
        assert_eq!(rows[1], vec![None, Some('b')]);
    }
}
