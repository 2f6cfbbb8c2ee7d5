use std::convert::TryFrom;

use crate::error::AllocError;

/// Moves `value` into a new heap allocation, returning an error instead of aborting if the
/// allocation fails
///
/// `Box::new` has no fallible counterpart on stable, so this goes through a single-element `Vec`,
/// which does.
pub(crate) fn try_box<T>(value: T) -> Result<Box<T>, AllocError> {
    let mut items = Vec::new();
    items.try_reserve_exact(1)?;
    items.push(value);

    // Capacity is exactly 1, so this does not reallocate
    let items: Box<[T]> = items.into_boxed_slice();
    let array = match Box::<[T; 1]>::try_from(items) {
        Ok(array) => array,
        Err(_) => unreachable!("bug: boxed slice did not hold exactly one item"),
    };

    // Safety: `[T; 1]` has the same size and alignment as `T`, so the allocation made for the array
    //   is also a valid allocation for a single `T`. `Box::into_raw` releases ownership so the
    //   memory is owned by exactly one box again.
    Ok(unsafe { Box::from_raw(Box::into_raw(array).cast::<T>()) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxes_value() {
        let boxed = try_box(String::from("abc")).unwrap();
        assert_eq!(&*boxed, "abc");

        let boxed = try_box(()).unwrap();
        assert_eq!(*boxed, ());

        let boxed = try_box([7u64; 16]).unwrap();
        assert!(boxed.iter().all(|&x| x == 7));
    }
}
