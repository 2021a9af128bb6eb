use std::io::{Error, Result};

/// Trait to convert an OS status code into a Rust result.
///
/// Unix system calls report failure as -1, Windows console calls as 0; in
/// either case the actual error lives in the thread's last-error slot.
pub(crate) trait IntoResult: Sized {
    /// Convert this status code into a Rust result.
    fn into_result(self) -> Result<Self>;
}

#[cfg(target_family = "unix")]
macro_rules! into_result {
    ($source:ty) => {
        impl IntoResult for $source {
            #[inline]
            fn into_result(self) -> Result<Self> {
                if self == -1 {
                    Err(Error::last_os_error())
                } else {
                    Ok(self)
                }
            }
        }
    };
}

#[cfg(target_family = "windows")]
macro_rules! into_result {
    ($source:ty) => {
        impl IntoResult for $source {
            #[inline]
            fn into_result(self) -> Result<Self> {
                if self == 0 {
                    Err(Error::last_os_error())
                } else {
                    Ok(self)
                }
            }
        }
    };
}

into_result!(i32);
#[cfg(target_family = "unix")]
into_result!(isize);
