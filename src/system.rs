//! Reading the current time from the OS.

#[cfg(windows)] use winapi::shared::minwindef::FILETIME;
#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(unix)]
pub(crate) fn sys_time() -> (i64, i16) {
    let mut tv = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let _ = unsafe { libc::clock_gettime(libc::CLOCK_REALTIME, &mut tv) };
    (tv.tv_sec as i64, (tv.tv_nsec / 1_000_000) as i16)
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(windows)]
pub(crate) fn sys_time() -> (i64, i16) {
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;

    let mut ft = FILETIME { dwLowDateTime: 0, dwHighDateTime: 0 };
    unsafe { GetSystemTimeAsFileTime(&mut ft) };

    let hectonanos = (((ft.dwHighDateTime as u64) << 32) | ft.dwLowDateTime as u64) as i64 - HECTONANOSEC_TO_UNIX_EPOCH;
    (hectonanos.div_euclid(HECTONANOSECS_IN_SEC), (hectonanos.rem_euclid(HECTONANOSECS_IN_SEC) / 10_000) as i16)
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(not(any(unix, windows)))]
pub(crate) fn sys_time() -> (i64, i16) {
    use std::time::{SystemTime, UNIX_EPOCH};

    let ms = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d)  => d.as_millis() as i64,
        Err(e) => -(e.duration().as_millis() as i64),
    };
    (ms.div_euclid(1000), ms.rem_euclid(1000) as i16)
}
