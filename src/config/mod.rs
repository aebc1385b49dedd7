/*!
Engine configuration.

Grounded on `otter_sat::config`: one [Config] struct holding one
[ConfigOption] per tunable, each carrying its own valid range and the engine
state past which it can no longer be changed. Bag capacities, the evidence
constant `k`, and the decision threshold live here rather than as bare
constants, following the teacher's preference for introspectable,
CLI-settable knobs over `const`s buried in the modules that use them.
*/

mod config_option;
pub use config_option::ConfigOption;

use crate::context::EngineState;

/// The primary configuration structure: one instance per [Engine](crate::context::Engine).
#[derive(Clone)]
pub struct Config {
    /// The evidence-count constant `k` used throughout the truth calculus (spec §3).
    pub k: ConfigOption<f64>,

    /// The decision threshold `T`: a goal is pursued iff `|E - 0.5| > T` (spec §4.2).
    pub decision_threshold: ConfigOption<f64>,

    /// Upper bound on the number of premise ids kept in a derived stamp's evidential base (spec §3).
    pub evidential_base_cap: ConfigOption<usize>,

    /// Exponent applied to priority to produce a Bag's sampling weight (spec §4.5: "priority raised to a small power").
    pub priority_weight_exponent: ConfigOption<f64>,

    /// Capacity of the overall experience bag of tasks (spec §4.7 step 1).
    pub experience_bag_capacity: ConfigOption<usize>,

    /// Capacity of the concept bag held by [Memory](crate::memory::Memory) (spec §4.6).
    pub concept_bag_capacity: ConfigOption<usize>,

    /// Capacity of each concept's belief table (spec §4.6).
    pub belief_table_capacity: ConfigOption<usize>,

    /// Capacity of each concept's desire table (spec §4.6).
    pub desire_table_capacity: ConfigOption<usize>,

    /// Capacity of each concept's term-link bag (spec §4.6).
    pub term_link_bag_capacity: ConfigOption<usize>,

    /// Capacity of each concept's prediction-link bag (spec §4.6).
    pub prediction_link_bag_capacity: ConfigOption<usize>,

    /// Capacity of each concept's explanation-link bag (spec §4.6).
    pub explanation_link_bag_capacity: ConfigOption<usize>,

    /// Capacity of the FIFO input intake queue; overflow drops the oldest
    /// pending input (spec §5: "its overflow policy is the embedder's choice" --
    /// drop-oldest is this embedder's choice, not a core-mandated policy).
    pub intake_capacity: ConfigOption<usize>,

    /// Seed for the engine's [MinimalPCG32](crate::generic::MinimalPCG32), for reproducible runs.
    pub rng_seed: ConfigOption<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            k: ConfigOption {
                name: "k",
                min: 0.01,
                max: 1000.0,
                max_state: EngineState::Configuration,
                value: 1.0,
            },

            decision_threshold: ConfigOption {
                name: "decision_threshold",
                min: 0.0,
                max: 0.5,
                max_state: EngineState::Running,
                value: 0.1,
            },

            evidential_base_cap: ConfigOption {
                name: "evidential_base_cap",
                min: 1,
                max: 100_000,
                max_state: EngineState::Configuration,
                value: 1_000,
            },

            priority_weight_exponent: ConfigOption {
                name: "priority_weight_exponent",
                min: 0.1,
                max: 10.0,
                max_state: EngineState::Running,
                value: 1.0,
            },

            experience_bag_capacity: ConfigOption {
                name: "experience_bag_capacity",
                min: 1,
                max: 1_000_000,
                max_state: EngineState::Configuration,
                value: 1_000,
            },

            concept_bag_capacity: ConfigOption {
                name: "concept_bag_capacity",
                min: 1,
                max: 1_000_000,
                max_state: EngineState::Configuration,
                value: 10_000,
            },

            belief_table_capacity: ConfigOption {
                name: "belief_table_capacity",
                min: 1,
                max: 10_000,
                max_state: EngineState::Configuration,
                value: 7,
            },

            desire_table_capacity: ConfigOption {
                name: "desire_table_capacity",
                min: 1,
                max: 10_000,
                max_state: EngineState::Configuration,
                value: 7,
            },

            term_link_bag_capacity: ConfigOption {
                name: "term_link_bag_capacity",
                min: 1,
                max: 10_000,
                max_state: EngineState::Configuration,
                value: 100,
            },

            prediction_link_bag_capacity: ConfigOption {
                name: "prediction_link_bag_capacity",
                min: 1,
                max: 10_000,
                max_state: EngineState::Configuration,
                value: 50,
            },

            explanation_link_bag_capacity: ConfigOption {
                name: "explanation_link_bag_capacity",
                min: 1,
                max: 10_000,
                max_state: EngineState::Configuration,
                value: 50,
            },

            intake_capacity: ConfigOption {
                name: "intake_capacity",
                min: 1,
                max: 1_000_000,
                max_state: EngineState::Configuration,
                value: 10_000,
            },

            rng_seed: ConfigOption {
                name: "rng_seed",
                min: 0,
                max: u64::MAX,
                max_state: EngineState::Configuration,
                value: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_rejects_out_of_range_values() {
        let mut config = Config::default();
        assert!(!config.k.set(-1.0, EngineState::Configuration));
        assert_eq!(config.k.value, 1.0);
    }

    #[test]
    fn option_frozen_past_max_state_is_rejected() {
        let mut config = Config::default();
        assert!(!config.evidential_base_cap.set(50, EngineState::Running));
        assert_eq!(config.evidential_base_cap.value, 1_000);
    }
}
