//! Motion-planner queue seam.

/// Readiness view of the motion planner's buffer queue.
pub trait PlannerQueue {
    /// Whether the planner can accept one more command buffer
    fn can_accept(&self) -> bool;
}
