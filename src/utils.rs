use std::time::Duration;

// Constants
pub const DEFAULT_GRAPH_GRANULARITY: usize = 60;
pub const MAX_GRAPH_GRANULARITY: usize = 3600;
pub const UPDATE_INTERVAL: Duration = Duration::from_secs(2);
pub const MANUAL_REFRESH_COOLDOWN: Duration = Duration::from_millis(500);
pub const CPU_BRAND_MAX_LEN: usize = 40;
pub const HOST_LABEL_MAX_LEN: usize = 30;

/// Format a size in kilobytes as whole megabytes ("512M") or as gigabytes
/// rounded to two decimals ("1.5G").
///
/// Input is not validated: NaN and infinity fail the megabyte comparison and come out
/// as "NaNG" and "infG", small negatives as "-0M".
///
/// Halves round away from zero, so -1536 KB gives "-2M".
pub fn human_readable_memory(value_kb: f64) -> String {
    let mb = value_kb / 1024.0;
    if mb <= 1024.0 {
        format!("{}M", mb.round())
    } else {
        let gb = (mb / 1024.0 * 100.0).round() / 100.0;
        format!("{}G", gb)
    }
}

/// Format a frequency in megahertz. Below 1000 the value is printed untouched,
/// above it is converted to GHz with two decimals (one decimal from 10 GHz up).
pub fn human_readable_clock(value_mhz: f64) -> String {
    if value_mhz < 1000.0 {
        return format!("{}MHz", value_mhz);
    }

    let ghz = value_mhz / 1000.0;
    let factor = if ghz >= 10.0 { 10.0 } else { 100.0 };
    format!("{}GHz", (ghz * factor).round() / factor)
}

/// Truncate string to specified length with ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_stays_in_megabytes_up_to_one_gigabyte() {
        assert_eq!(human_readable_memory(1024.0), "1M");
        assert_eq!(human_readable_memory(2048.0), "2M");
        assert_eq!(human_readable_memory(1536.0), "2M");
        assert_eq!(human_readable_memory(1024.0 * 1024.0), "1024M");
    }

    #[test]
    fn memory_switches_to_gigabytes_past_the_boundary() {
        assert_eq!(human_readable_memory(1024.0 * 1025.0), "1G");
        assert_eq!(human_readable_memory(1024.0 * 1024.0 * 1.5), "1.5G");
        assert_eq!(human_readable_memory(1024.0 * 1024.0 * 16.0), "16G");
        // 1.234567 GB
        assert_eq!(human_readable_memory(1_294_536.0), "1.23G");
    }

    #[test]
    fn memory_does_not_panic_on_odd_input() {
        assert_eq!(human_readable_memory(0.0), "0M");
        assert_eq!(human_readable_memory(f64::NAN), "NaNG");
        assert_eq!(human_readable_memory(-100.0), "-0M");
        assert_eq!(human_readable_memory(-1536.0), "-2M");
        assert_eq!(human_readable_memory(f64::INFINITY), "infG");
    }

    #[test]
    fn clock_below_one_gigahertz_is_passed_through() {
        assert_eq!(human_readable_clock(900.0), "900MHz");
        assert_eq!(human_readable_clock(999.5), "999.5MHz");
        assert_eq!(human_readable_clock(0.0), "0MHz");
    }

    #[test]
    fn clock_precision_depends_on_magnitude() {
        assert_eq!(human_readable_clock(1000.0), "1GHz");
        assert_eq!(human_readable_clock(2500.0), "2.5GHz");
        assert_eq!(human_readable_clock(3412.0), "3.41GHz");
        assert_eq!(human_readable_clock(15000.0), "15GHz");
        assert_eq!(human_readable_clock(12345.0), "12.3GHz");
    }

    #[test]
    fn clock_nan_falls_through_to_gigahertz() {
        assert_eq!(human_readable_clock(f64::NAN), "NaNGHz");
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_string("cpu", 10), "cpu");
        assert_eq!(truncate_string("AMD Ryzen 7 5800X", 10), "AMD Ryz...");
        assert_eq!(truncate_string("héllo wörld", 8), "héllo...");
    }
}
