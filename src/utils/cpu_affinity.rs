//! Thread pinning around timed kernel calls.
//!
//! A single-shot measurement is easily disturbed by the scheduler moving
//! the thread mid-call, so the driver pins to the current core for the
//! duration of each call. Pinning is best-effort: where it is unsupported
//! the guard is a no-op.

// ============================================================================
// Linux implementation using libc
// ============================================================================

#[cfg(target_os = "linux")]
mod platform {
    /// Affinity mask to restore on unpin
    pub struct SavedAffinity(pub libc::cpu_set_t);

    /// Get the current CPU core the thread is running on
    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn save_affinity() -> Option<SavedAffinity> {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0 {
                Some(SavedAffinity(set))
            } else {
                None
            }
        }
    }

    pub fn set_affinity(core_id: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore_affinity(saved: &SavedAffinity) -> bool {
        unsafe {
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &saved.0) == 0
        }
    }
}

// ============================================================================
// Fallback for platforms without thread affinity
// ============================================================================

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct SavedAffinity;

    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn save_affinity() -> Option<SavedAffinity> {
        None
    }
    pub fn set_affinity(_core_id: usize) -> bool {
        false
    }
    pub fn restore_affinity(_saved: &SavedAffinity) -> bool {
        true
    }
}

/// RAII guard for CPU pinning - pins on creation, unpins on drop.
///
/// # Example
/// ```
/// use simd_dot_bench::utils::CpuPinGuard;
///
/// {
///     let _pin = CpuPinGuard::new(); // pinned, if supported
///     // ... timed call ...
/// } // original affinity restored here
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    saved: Option<platform::SavedAffinity>,
}

impl CpuPinGuard {
    /// Pin to the core the thread is currently running on.
    pub fn new() -> Self {
        let saved = platform::save_affinity();
        let pinned_core = match (&saved, platform::current_cpu()) {
            (Some(_), Some(core)) if platform::set_affinity(core) => Some(core),
            _ => None,
        };
        if pinned_core.is_none() {
            log::trace!("CPU pinning unavailable, timing unpinned");
        }
        Self { pinned_core, saved }
    }

    /// Get the core ID this thread is pinned to, if any.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let (Some(_), Some(saved)) = (self.pinned_core, &self.saved) {
            if !platform::restore_affinity(saved) {
                log::warn!("failed to restore CPU affinity");
            }
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
