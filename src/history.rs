use std::collections::VecDeque;
use tracing::debug;

use crate::graph::{append_graph_sample, GraphError, GraphItem};
use crate::metrics::Snapshot;
use crate::utils::MAX_GRAPH_GRANULARITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Cpu = 0,
    Memory = 1,
    Swap = 2,
}

impl Metric {
    pub const COUNT: usize = 3;
    pub const ALL: [Metric; Metric::COUNT] = [Metric::Cpu, Metric::Memory, Metric::Swap];

    pub fn as_index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Metric::Cpu => "CPU",
            Metric::Memory => "Memory",
            Metric::Swap => "Swap",
        }
    }

    fn sample(self, snapshot: &Snapshot) -> f64 {
        match self {
            Metric::Cpu => snapshot.cpu_percent,
            Metric::Memory => snapshot.memory_percent(),
            Metric::Swap => snapshot.swap_percent(),
        }
    }
}

/// Rolling usage graphs, one window per metric.
pub struct GraphHistory {
    graphs: [VecDeque<GraphItem>; Metric::COUNT],
    pub granularity: usize,
}

impl GraphHistory {
    pub fn new(granularity: usize) -> Self {
        // preallocation only, the window itself is not capped here
        let capacity = granularity.min(MAX_GRAPH_GRANULARITY).saturating_add(1);
        Self {
            graphs: std::array::from_fn(|_| VecDeque::with_capacity(capacity)),
            granularity,
        }
    }

    pub fn update(&mut self, snapshot: &Snapshot) -> Result<(), GraphError> {
        for metric in Metric::ALL {
            let sample = metric.sample(snapshot);
            append_graph_sample(&mut self.graphs[metric.as_index()], sample, self.granularity)?;
        }
        debug!(
            cpu = snapshot.cpu_percent,
            memory = snapshot.memory_percent(),
            "graph history updated"
        );
        Ok(())
    }

    pub fn samples(&self, metric: Metric) -> &VecDeque<GraphItem> {
        &self.graphs[metric.as_index()]
    }

    pub fn latest(&self, metric: Metric) -> Option<f64> {
        self.samples(metric).back().map(|item| item.percent)
    }

    /// Whole percentages in `0..=100`, oldest first, for a `Sparkline`.
    pub fn sparkline_data(&self, metric: Metric) -> Vec<u64> {
        self.samples(metric)
            .iter()
            .map(|item| {
                if item.percent.is_nan() {
                    0
                } else {
                    item.percent.round().clamp(0.0, 100.0) as u64
                }
            })
            .collect()
    }

    pub fn clear(&mut self) {
        for graph in &mut self.graphs {
            graph.clear();
        }
    }
}
