//! Weighted picks: with replacement vs. without.
//!
//! With replacement, frequencies track the weights. Without replacement, a heavy
//! entry can only come up once, so the light entries fill the rest of the draw.
//!
//! Run with `RUST_LOG=debug` to see cache recomputation and population changes.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use random_choices::{Choice, Randomizer, RngSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let table = [
        ("common", 60.0),
        ("uncommon", 30.0),
        ("rare", 9.0),
        ("legendary", 1.0),
    ];
    let population = table
        .iter()
        .map(|&(name, w)| Choice::new(name, w))
        .collect::<Result<Vec<_>, _>>()?;

    let source = RngSource::new(ChaCha8Rng::seed_from_u64(7));
    let mut r = Randomizer::with_source(source).with_population(population);

    println!("normalized weights:");
    for (name, p) in r.return_values().zip(r.normalized_weights()) {
        println!("  {name:<10} p={p:.3}");
    }
    println!();

    let draws = 10_000;
    let picks = r.sample_with_replacement(draws);
    println!("with replacement ({draws} draws):");
    for &(name, _) in &table {
        let n = picks.iter().filter(|&&p| p == name).count();
        println!("  {name:<10} {:.3}", n as f64 / draws as f64);
    }
    println!();

    println!("without replacement, replenished: {:?}", r.sample_without_replacement(3, true));
    println!("without replacement, drained:     {:?}", r.sample_without_replacement(2, false));
    let left: Vec<_> = r.return_values().collect();
    println!("left in population:               {left:?}");

    Ok(())
}
