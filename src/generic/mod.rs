/*!
Generic helpers with no dependency on the term/truth/memory layers above them.

Grounded on `otter_sat::generic`: the same split of "small self-contained
utility types used by the rest of the crate" into their own module, so that
(for instance) [MinimalPCG32] can be unit-tested in isolation from anything
that uses it.
*/

pub mod minimal_pcg;

pub use minimal_pcg::MinimalPCG32;
