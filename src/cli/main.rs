/*!
A simple CLI interface to the library.

# Use

```sh
nars_cli [--option=value]*
```

Narsese sentences are read line by line from stdin; each is queued via
[Engine::add_input] and reported back if rejected. The reserved words
(spec §6) are intercepted here rather than passed to `add_input`:

- `cycle` runs one working cycle and prints whatever it reports.
- `count` prints the cycle and task counters.
- `save`/`load` are named Non-goals (disk persistence); the CLI reports
  the [ErrorKind::Unsupported] they produce.

For full documentation of the supported configuration options, see the
source of [parse_args](args::parse_args).
*/

mod args;

use std::io::{self, BufRead, Write};

use nars_core::config::Config;
use nars_core::context::Engine;
use nars_core::reports::Report;

fn main() {
    let mut config = Config::default();
    let cli_args: Vec<String> = std::env::args().collect();
    args::parse_args(&cli_args, &mut config);

    let mut engine = Engine::from_config(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                println!("c input error: {e}");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "cycle" => {
                let answers = engine.do_working_cycle();
                for report in Report::from_cycle(answers) {
                    println!("{report}");
                }
            }
            "count" => {
                println!("c cycles: {}, tasks processed: {}", engine.cycles_elapsed(), engine.tasks_processed());
            }
            "save" => report_error(engine.save_memory("")),
            "load" => report_error(engine.load_memory("")),
            _ => {
                if let Err(e) = engine.add_input(line) {
                    println!("c {e}");
                }
            }
        }

        let _ = stdout.flush();
    }
}

fn report_error<T>(result: Result<T, nars_core::types::err::ErrorKind>) {
    if let Err(e) = result {
        println!("c {e}");
    }
}
