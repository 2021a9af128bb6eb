mod util;

#[cfg(target_family = "unix")]
mod unix;
#[cfg(target_family = "windows")]
mod windows;

#[cfg(target_family = "unix")]
pub use self::unix::UnixDevice as SysDevice;
#[cfg(target_family = "windows")]
pub use self::windows::WindowsDevice as SysDevice;
