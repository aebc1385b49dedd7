/*!
Inference: the one-premise and two-premise rule catalogue (spec §4.3) and
the dispatcher that selects and applies them (spec §4.4).

Module layout mirrors `otter_sat`'s `procedures` split: each rule family
gets its own leaf module, with [dispatcher] as the single entry point the
rest of the crate calls through.
*/

pub mod choice;
pub mod dispatcher;
pub mod immediate;
pub mod pairing;
pub mod temporal;

pub use dispatcher::{dispatch, mark_interacted};
