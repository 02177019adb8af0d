//! Base trait for one-shot effects in MVI architecture.

/// Marker trait for effect objects.
///
/// Effects are the out-of-band outputs of a state transition:
/// transient notifications, navigation signals, and commands to start
/// asynchronous work. Unlike state, an effect is consumed at most once
/// and is never redelivered.
pub trait Effect: Send + 'static {}
