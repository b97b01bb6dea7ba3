//! Nine Players Example
//!
//! Seeds nine participants, asks for six contests of three built in batches
//! of three, numbers the awarded rewards within each contest and prints the
//! result. Falling short of six contests is a normal outcome.
//!
//! Settings come from `allocation.toml` next to this crate's manifest. Set
//! `RUST_LOG=cardtrade_solver=debug` for rejected solve passes.

use cardtrade::console;
use cardtrade::prelude::*;

const CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/allocation.toml");

fn main() {
    let mut population = Population::with_participants(9);
    let participants = population.participant_ids();

    let config = AllocationConfig::load(CONFIG).unwrap_or_default();
    let (outcome, stats) = run_with(&config, &mut population, &participants);

    console::print_report(&population, &outcome.contests, &outcome.rewards);
    println!("{}", console::format_statistics(&stats));
}
