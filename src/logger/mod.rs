//! Tagged console logger
//!
//! Every entry starts on a fresh line with a tag naming its origin. The body
//! is written with `ufmt` straight into the sink, so nothing is buffered.
//! Sink errors are swallowed: a dead console never stops the game.

use ufmt::uWrite;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogType {
    System,
    Game,
    Debug,
}

impl LogType {
    const fn tag(self) -> &'static str {
        match self {
            LogType::System => "[SYS] ",
            LogType::Game => "[GAME] ",
            LogType::Debug => "[DBG] ",
        }
    }
}

pub struct Logger<W> {
    sink: W,
    debug: bool,
}

impl<W: uWrite> Logger<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, debug: false }
    }

    /// Also emit [`LogType::Debug`] entries.
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Starts an entry and hands back the sink for its body.
    ///
    /// ```ignore
    /// uwriteln!(log.entry(LogType::Game), "round {}", n).ok();
    /// ```
    pub fn entry(&mut self, kind: LogType) -> &mut W {
        self.sink.write_str(kind.tag()).ok();
        &mut self.sink
    }

    /// Like [`entry`](Self::entry) but `None` when debug output is off.
    pub fn debug(&mut self) -> Option<&mut W> {
        if self.debug {
            Some(self.entry(LogType::Debug))
        } else {
            None
        }
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }
}
