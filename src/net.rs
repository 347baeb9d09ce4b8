// net.rs

/// Wireless association, as seen by the loop controller.
///
/// `begin` only kicks off station association; the blocking wait-until-up
/// policy lives in `Monitor::connect` where the poll delay and indicator are
/// injectable. `is_connected` is a cheap status poll with no side effects and
/// never attempts reconnection.
pub trait Network {
    fn begin(&mut self) -> anyhow::Result<()>;
    fn is_connected(&mut self) -> bool;
}

// EOF
