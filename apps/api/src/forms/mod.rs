//! Form state controllers.
//!
//! Each panel's record is changed only through an edit command applied by a
//! pure function: the input record is borrowed, a new record is returned, and
//! list elements that are not addressed keep their order and content.
//! Entries have no identity beyond their index.

pub mod cover_letter;
pub mod linkedin;
pub mod resume;

/// Returns a copy of `items` with the element at `index` passed through `f`.
/// An out-of-range index leaves the list unchanged.
pub(crate) fn update_at<T: Clone>(items: &[T], index: usize, f: impl FnOnce(&mut T)) -> Vec<T> {
    let mut updated = items.to_vec();
    if let Some(item) = updated.get_mut(index) {
        f(item);
    }
    updated
}

/// Returns a copy of `items` with `item` appended.
pub(crate) fn append<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut appended = items.to_vec();
    appended.push(item);
    appended
}
