/// Creates a [`Set`](crate::Set) containing the given elements.
///
/// Duplicates collapse to a single element.
///
/// # Examples
///
/// ```
/// use smol_set::{Set, set};
///
/// let empty: Set<u32> = set![];
/// assert!(empty.is_empty());
///
/// let s = set![1, 2, 2, 3];
/// assert_eq!(s.len(), 3);
/// assert!(s.contains(&2));
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::Set::from([$($elem),+])
    };
}

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    }};
}

pub(crate) use trace;
