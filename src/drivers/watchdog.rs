//! Task watchdog driver.
//!
//! Resets the device if the actuation loop stalls.  The loop feeds the
//! watchdog once per cycle (~20 ms), so the 5 s timeout only trips on a
//! genuine hang, never on a slow iteration.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

/// Watchdog timeout.  Generous relative to the actuation interval.
#[cfg(target_os = "espidf")]
const WATCHDOG_TIMEOUT_MS: u32 = 5_000;

pub struct Watchdog {
    #[cfg(target_os = "espidf")]
    subscribed: bool,
}

impl Watchdog {
    /// Initialise the task watchdog and subscribe the current task.
    /// Failure to subscribe is logged and tolerated — the loop just runs
    /// without a watchdog.
    pub fn new() -> Self {
        #[cfg(target_os = "espidf")]
        {
            // SAFETY: TWDT reconfigure/add from the single main task at boot.
            unsafe {
                let cfg = esp_task_wdt_config_t {
                    timeout_ms: WATCHDOG_TIMEOUT_MS,
                    idle_core_mask: 0,
                    trigger_panic: true,
                };
                let ret = esp_task_wdt_reconfigure(&cfg);
                if ret != ESP_OK {
                    log::warn!("watchdog: reconfigure returned {} (may already be configured)", ret);
                }

                let subscribed = esp_task_wdt_add(core::ptr::null_mut()) == ESP_OK;
                if subscribed {
                    log::info!("watchdog: subscribed ({} ms timeout)", WATCHDOG_TIMEOUT_MS);
                } else {
                    log::warn!("watchdog: subscribe failed — running without");
                }
                Self { subscribed }
            }
        }

        #[cfg(not(target_os = "espidf"))]
        {
            log::info!("watchdog(sim): no-op");
            Self {}
        }
    }

    /// Feed the watchdog.  Called once per actuation cycle.
    pub fn feed(&self) {
        #[cfg(target_os = "espidf")]
        if self.subscribed {
            // SAFETY: reset only touches the calling task's TWDT slot.
            unsafe {
                esp_task_wdt_reset();
            }
        }
    }
}

impl Default for Watchdog {
    fn default() -> Self {
        Self::new()
    }
}
