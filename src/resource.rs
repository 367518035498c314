//! Load state for an external script that is fetched on first use.

#[derive(Debug, PartialEq, Eq)]
enum ResourceState<P> {
    Unloaded,
    Loading(Vec<P>),
    Ready,
}

/// Outcome of asking for the resource.
#[derive(Debug, PartialEq, Eq)]
pub enum Acquire<P> {
    /// First request: the caller starts the load. The request is queued.
    Load,
    /// A load is already running; the request is queued behind it.
    Queued,
    /// Already loaded: the caller runs the request now.
    Ready(P),
}

/// A lazily loaded resource with requests parked until it is ready.
#[derive(Debug)]
pub struct LazyResource<P> {
    state: ResourceState<P>,
}

impl<P> Default for LazyResource<P> {
    fn default() -> Self {
        Self {
            state: ResourceState::Unloaded,
        }
    }
}

impl<P> LazyResource<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self, request: P) -> Acquire<P> {
        match &mut self.state {
            ResourceState::Loading(pending) => {
                pending.push(request);
                return Acquire::Queued;
            }
            ResourceState::Ready => return Acquire::Ready(request),
            ResourceState::Unloaded => {}
        }

        self.state = ResourceState::Loading(vec![request]);
        Acquire::Load
    }

    /// Marks the load complete and hands back parked requests in arrival
    /// order. Calling it when no load is running returns nothing.
    pub fn finish(&mut self) -> Vec<P> {
        match std::mem::replace(&mut self.state, ResourceState::Ready) {
            ResourceState::Loading(pending) => pending,
            ResourceState::Unloaded | ResourceState::Ready => Vec::new(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ResourceState::Ready)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ResourceState::Loading(_))
    }
}
