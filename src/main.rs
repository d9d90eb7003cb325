// SPDX-License-Identifier: MIT

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use event_rules::rules::loader::RuleLoader;
use event_rules::rules::{ConditionRegistry, EvaluationContext};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate each condition of a rule against an event
    Check {
        /// Path to the rule definition file
        #[arg(short, long)]
        rule: String,

        /// Path to the event JSON file
        #[arg(short, long)]
        event: String,

        /// The event's issue is seen for the first time
        #[arg(long)]
        is_new: bool,

        /// The event's issue was resolved and came back
        #[arg(long)]
        is_regression: bool,
    },
    /// Check the configuration of every condition in a rule
    Validate {
        /// Path to the rule definition file
        #[arg(short, long)]
        rule: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let loader = RuleLoader::new();
    let registry = ConditionRegistry::builtin();

    match args.command {
        Commands::Check {
            rule,
            event,
            is_new,
            is_regression,
        } => {
            let definition = loader.load_rule(&rule)?;
            let event = loader.load_event(&event)?;
            let ctx = EvaluationContext::new(is_new, is_regression);
            let conditions = definition.build_conditions(registry)?;

            log::info!(
                "Checking {} condition(s) for project {} against event {}",
                conditions.len(),
                definition.project,
                event.event_id
            );

            let mut errors = 0;
            for condition in &conditions {
                match condition.passes(&event, &ctx) {
                    Ok(true) => println!("PASS  {}", condition.render_label()),
                    Ok(false) => println!("FAIL  {}", condition.render_label()),
                    Err(e) => {
                        errors += 1;
                        println!("ERROR {}: {}", condition.id(), e);
                    }
                }
            }

            if errors > 0 {
                anyhow::bail!("{} condition(s) could not be evaluated", errors);
            }
        }
        Commands::Validate { rule } => {
            let definition = loader.load_rule(&rule)?;
            let conditions = definition.build_conditions(registry)?;

            let mut errors = 0;
            for condition in &conditions {
                match condition.validate() {
                    Ok(()) => println!("ok    {}", condition.render_label()),
                    Err(e) => {
                        errors += 1;
                        println!("error {}: {}", condition.id(), e);
                    }
                }
            }

            if errors > 0 {
                anyhow::bail!("{} invalid condition(s)", errors);
            }
        }
    }

    Ok(())
}
