/// Build a [`SimpleVec`](crate::SimpleVec) with `Doubling` growth.
///
/// Accepts the same forms as `vec!`: a list of elements, or `value; count`
/// for `count` clones of `value`. The result's capacity equals its length.
///
/// ```
/// use simplevec_vector::simple_vec;
///
/// let v = simple_vec![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
///
/// let zeros = simple_vec![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! simple_vec {
    () => {
        <$crate::SimpleVec<_>>::new()
    };
    ($elem:expr; $n:expr) => {
        <$crate::SimpleVec<_>>::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        <$crate::SimpleVec<_>>::from([$($x),+])
    };
}
