/// Values that can be absent.
///
/// Absence is type-independent: any `Option` is nullable no matter what it
/// wraps, which is what lets `not_null` sit alongside every other check
/// family on the same chain.
///
/// # Examples
///
/// ```
/// use guard_rail::check;
///
/// let id: Option<u64> = Some(7);
/// let id = check(id, "id").is().not_null().unwrap().into_value();
/// assert_eq!(id, Some(7));
///
/// assert!(check(Option::<u64>::None, "id").is().not_null().is_err());
/// ```
pub trait Nullable {
    /// `true` when the value is absent.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}
