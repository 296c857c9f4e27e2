//! Suppression of repeated chat messages.

use game_core::CommandBatch;

use crate::config::ThrottleConfig;

/// Remembers the last message that went out and when.
///
/// One instance lives as long as the agent. It is mutated once per tick
/// through `&mut self`, so it is not meant to be shared between concurrent
/// decisions.
#[derive(Clone, Debug)]
pub struct YellThrottle {
    window_ticks: u64,
    last: Option<(String, u64)>,
}

impl YellThrottle {
    pub fn new(config: ThrottleConfig) -> Self {
        Self {
            window_ticks: config.window_ticks,
            last: None,
        }
    }

    /// Returns true when `text` may be sent at `tick`, recording it if so.
    ///
    /// Identical text is suppressed until `window_ticks` ticks have passed
    /// since it last went out. Different text always passes. A tick counter
    /// that went backwards (server restart) lets the message through.
    pub fn allow(&mut self, text: &str, tick: u64) -> bool {
        if let Some((last_text, last_tick)) = &self.last
            && last_text == text
            && tick
                .checked_sub(*last_tick)
                .is_some_and(|elapsed| elapsed < self.window_ticks)
        {
            tracing::debug!("Suppressing repeated yell {:?} at tick {}", text, tick);
            return false;
        }

        self.last = Some((text.to_owned(), tick));
        true
    }

    /// Drops the batch's yell if it would repeat too soon.
    pub fn filter(&mut self, mut batch: CommandBatch, tick: u64) -> CommandBatch {
        if let Some(text) = batch.yell.as_deref()
            && !self.allow(text, tick)
        {
            batch.yell = None;
        }
        batch
    }
}

impl Default for YellThrottle {
    fn default() -> Self {
        Self::new(ThrottleConfig::default())
    }
}
