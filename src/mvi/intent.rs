//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (toggling a currency, editing the amount)
/// - System events (gateway responses)
/// - Navigation events
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
