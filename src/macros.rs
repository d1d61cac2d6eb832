/// Builds an [`UnorderedSet`](crate::unorderedset::UnorderedSet) from a list
/// of values. Capacity is sized to the list, and each value goes through the
/// normal `add` path, so duplicate entries collapse silently.
macro_rules! uset {
    () => {
        $crate::unorderedset::UnorderedSet::with_capacity(0)
    };
    ($($value:expr),+ $(,)?) => {{
        const LEN: usize = [$(stringify!($value)),+].len();
        let mut set = $crate::unorderedset::UnorderedSet::with_capacity(LEN);
        $(
            set.add($value);
        )+
        set
    }};
}
