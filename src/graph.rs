use std::collections::VecDeque;
use thiserror::Error;

/// A single point on a usage graph.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GraphItem {
    pub percent: f64,
}

impl GraphItem {
    pub fn new(percent: f64) -> Self {
        Self { percent }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("index {index} out of range for graph model of length {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Ordered container backing a graph. The caller owns it; `append_graph_sample`
/// is the only thing that mutates it during an update.
pub trait GraphModel {
    fn len(&self) -> usize;

    fn append(&mut self, item: GraphItem);

    fn remove_at(&mut self, index: usize) -> Result<GraphItem, GraphError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GraphModel for Vec<GraphItem> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn append(&mut self, item: GraphItem) {
        self.push(item);
    }

    fn remove_at(&mut self, index: usize) -> Result<GraphItem, GraphError> {
        if index >= Vec::len(self) {
            return Err(GraphError::OutOfRange { index, len: Vec::len(self) });
        }
        Ok(self.remove(index))
    }
}

// Ring buffer: removing the front is O(1).
impl GraphModel for VecDeque<GraphItem> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn append(&mut self, item: GraphItem) {
        self.push_back(item);
    }

    fn remove_at(&mut self, index: usize) -> Result<GraphItem, GraphError> {
        let len = VecDeque::len(self);
        self.remove(index).ok_or(GraphError::OutOfRange { index, len })
    }
}

/// Push `sample` into a rolling window of `window_size` items.
///
/// The model is padded with zero samples until it reaches `window_size`, then
/// the sample is appended and the oldest item evicted, so a primed model keeps
/// a constant length. A zero-sized window on an empty model has nothing to
/// slide and is reported as `OutOfRange`.
pub fn append_graph_sample<M>(model: &mut M, sample: f64, window_size: usize) -> Result<(), GraphError>
where
    M: GraphModel + ?Sized,
{
    while model.len() < window_size {
        model.append(GraphItem::default());
    }

    if model.is_empty() {
        return Err(GraphError::OutOfRange { index: 0, len: 0 });
    }

    model.append(GraphItem::new(sample));
    model.remove_at(0)?;
    Ok(())
}
