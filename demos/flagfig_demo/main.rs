//! # flagfig demo application
//!
//! A sample tool that resolves its configuration from the real process
//! arguments and environment, then prints where every value came from. It
//! exists purely to demonstrate and manually verify flagfig's behavior.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example flagfig_demo -- --display-name world
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature                | How to exercise it                                                          |
//! |------------------------|-----------------------------------------------------------------------------|
//! | Tag defaults           | `cargo run --example flagfig_demo -- --display-name world`                  |
//! | Required field         | `cargo run --example flagfig_demo` (fails: `--display-name` missing)        |
//! | Derived env var        | `DEMO_DISPLAY_NAME=env cargo run --example flagfig_demo`                    |
//! | Explicit env name      | `PORT=9999 cargo run --example flagfig_demo -- --display-name x`            |
//! | Flag beats env         | `PORT=1 cargo run --example flagfig_demo -- --display-name x --server-port 2` |
//! | Explicit flag name     | `cargo run --example flagfig_demo -- --display-name x --allow a,b`          |
//! | Durations              | `cargo run --example flagfig_demo -- --display-name x --server-timeout 1m30s` |
//! | Bare boolean switch    | `cargo run --example flagfig_demo -- --display-name x --verbose`            |
//! | JSON report            | `cargo run --example flagfig_demo -- --display-name x --json`               |
//! | Generated help         | `cargo run --example flagfig_demo -- --help`                                |

mod config;

use flagfig::{Flagfig, FlagfigError};

use config::DemoConfig;

fn main() {
    let mut config = DemoConfig::default();
    let report = match Flagfig::builder()
        .app_prefix("demo")
        .command_name("flagfig-demo")
        .resolve(&mut config)
    {
        Ok(report) => report,
        Err(FlagfigError::Cli(e)) => e.exit(),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if config.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!(
        "Hello, {} (in {}) from {}:{}",
        config.display.name, config.display.color, config.server.host, config.server.port
    );
    if config.verbose {
        println!("timeout: {:?}", config.server.timeout);
        println!("allowed: {:?}", config.server.allowed);
        println!();
        for field in &report.fields {
            println!("{:<20} {:<8} {}", field.flag, format!("{:?}", field.source), field.value);
        }
    } else {
        println!("{report}");
    }
}
