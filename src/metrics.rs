use sysinfo::System;

/// One sampling of the host, in the units the formatters expect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Snapshot {
    pub cpu_percent: f64,
    pub cpu_mhz: f64,
    pub memory_used_kb: f64,
    pub memory_total_kb: f64,
    pub swap_used_kb: f64,
    pub swap_total_kb: f64,
}

impl Snapshot {
    /// Read the current values from an already refreshed `System`.
    pub fn collect(system: &System) -> Self {
        let cpus = system.cpus();
        let cpu_mhz = if cpus.is_empty() {
            0.0
        } else {
            cpus.iter().map(|cpu| cpu.frequency() as f64).sum::<f64>() / cpus.len() as f64
        };

        Self {
            cpu_percent: system.global_cpu_usage() as f64,
            cpu_mhz,
            memory_used_kb: bytes_to_kb(system.used_memory()),
            memory_total_kb: bytes_to_kb(system.total_memory()),
            swap_used_kb: bytes_to_kb(system.used_swap()),
            swap_total_kb: bytes_to_kb(system.total_swap()),
        }
    }

    pub fn memory_percent(&self) -> f64 {
        percent(self.memory_used_kb, self.memory_total_kb)
    }

    pub fn swap_percent(&self) -> f64 {
        percent(self.swap_used_kb, self.swap_total_kb)
    }
}

fn bytes_to_kb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

/// Share of `total` taken by `used`, 0 when there is no total (e.g. no swap).
pub fn percent(used: f64, total: f64) -> f64 {
    if total > 0.0 {
        used / total * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_handles_empty_total() {
        assert_eq!(percent(10.0, 0.0), 0.0);
        assert_eq!(percent(25.0, 100.0), 25.0);
    }

    #[test]
    fn snapshot_percentages() {
        let snapshot = Snapshot {
            memory_used_kb: 512.0,
            memory_total_kb: 2048.0,
            ..Snapshot::default()
        };
        assert_eq!(snapshot.memory_percent(), 25.0);
        assert_eq!(snapshot.swap_percent(), 0.0);
    }

    #[test]
    fn collect_reads_memory_in_kilobytes() {
        let mut system = System::new();
        system.refresh_memory();
        let snapshot = Snapshot::collect(&system);

        assert_eq!(snapshot.memory_total_kb, system.total_memory() as f64 / 1024.0);
        assert!(snapshot.memory_percent() >= 0.0);
        assert!(snapshot.cpu_mhz >= 0.0);
    }
}
