//! Embassy-backed platform pieces
//!
//! Only the parts that are board-independent live here; boards supply their
//! own alarm, watchdog and object-store implementations.

mod queue;
mod settings;
mod timer;

pub use queue::ChannelSampleQueue;
pub use settings::SettingsChangeSignal;
pub use timer::EmbassyTimer;
