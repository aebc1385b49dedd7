/*!
Command-line argument parsing for `nars_cli`.

Grounded on `otter_sat::cli::parse_args`: one `match` arm per tunable,
each parsing a `--name=value` argument, checking it against the
option's own `min`/`max`, and reporting (then exiting) on anything
unparsable or out of range. Unlike the teacher, bounds come straight
from [ConfigOption]'s public `min`/`max` fields rather than a
`min_max()` accessor, since [ConfigOption] exposes none.
*/

use crate::config::Config;
use crate::context::EngineState;

/// Parses `--name=value` arguments into `config`, in place.
///
/// On an unrecognised argument, an unparsable value, or a value out of
/// range, prints a message to stdout and exits the process -- matching
/// the teacher's `parse_args`, which is itself only ever called from
/// `main` with nowhere sensible to propagate an error to.
pub fn parse_args(args: &[String], config: &mut Config) {
    for arg in args.iter().skip(1) {
        let mut split = arg.splitn(2, '=');
        let name = split.next().unwrap_or("");
        let value = split.next();

        macro_rules! option {
            ($flag:literal, $field:ident) => {
                if name == $flag {
                    let (min, max) = (config.$field.min, config.$field.max);
                    let parsed = value.and_then(|v| v.parse().ok());
                    if let Some(parsed) = parsed {
                        if config.$field.set(parsed, EngineState::Configuration) {
                            println!("c {} set to: {}", $flag.trim_start_matches("--"), config.$field.value);
                            continue;
                        }
                    }
                    println!("{} requires a value between {min} and {max}", $flag.trim_start_matches("--"));
                    std::process::exit(1);
                }
            };
        }

        option!("--k", k);
        option!("--decision_threshold", decision_threshold);
        option!("--evidential_base_cap", evidential_base_cap);
        option!("--priority_weight_exponent", priority_weight_exponent);
        option!("--experience_bag_capacity", experience_bag_capacity);
        option!("--concept_bag_capacity", concept_bag_capacity);
        option!("--belief_table_capacity", belief_table_capacity);
        option!("--desire_table_capacity", desire_table_capacity);
        option!("--term_link_bag_capacity", term_link_bag_capacity);
        option!("--prediction_link_bag_capacity", prediction_link_bag_capacity);
        option!("--explanation_link_bag_capacity", explanation_link_bag_capacity);
        option!("--intake_capacity", intake_capacity);
        option!("--rng_seed", rng_seed);

        println!("Unable to parse argument: {arg:?}");
        std::process::exit(1);
    }
}
