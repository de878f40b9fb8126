use crate::error::StreakError;

/// Marker trait for a zero-copy view of bytes as `&Self` via an unchecked cast.
///
/// # Safety
/// **Implementor guarantees:**
/// - A stable layout (`#[repr(C)]` or `#[repr(transparent)]`).
/// - Every sequence of `LEN` bytes is a valid `Self`.
/// - `size_of::<Self>() == LEN`
/// - `align_of::<Self>() == 1`
pub unsafe trait Transmutable: Sized {
    /// The cumulative size in bytes of all fields in the struct.
    const LEN: usize;
}

/// Returns a reference to a `T: Transmutable` read from the first `T::LEN` bytes. Trailing bytes
/// are ignored; fewer than `T::LEN` bytes is an error.
#[inline(always)]
pub fn load<T: Transmutable>(bytes: &[u8]) -> Result<&T, StreakError> {
    let bytes = bytes
        .get(..T::LEN)
        .ok_or(StreakError::InsufficientByteLength)?;
    // Safety: `bytes` is exactly `T::LEN` long, `T` has alignment 1 and no invalid bit patterns.
    Ok(unsafe { &*(bytes.as_ptr() as *const T) })
}

/// Returns the raw bytes backing `value`.
#[inline(always)]
pub fn as_bytes<T: Transmutable>(value: &T) -> &[u8] {
    // Safety: `T` is `T::LEN` bytes with no padding.
    unsafe { core::slice::from_raw_parts(value as *const T as *const u8, T::LEN) }
}
