use std::io;

use day08::Network;

const INPUT: &str = "input";
const START: &str = "AAA";
const TERMINAL: &str = "ZZZ";

fn main() -> io::Result<()> {
    env_logger::init();

    let input = std::fs::read_to_string(INPUT)?;
    let network = Network::parse(&input).expect("malformed input");
    let steps = network
        .steps(START, TERMINAL)
        .expect("walk reached a label with no node line");
    log::info!("{} -> {}: {} steps", START, TERMINAL, steps);
    println!("{}", steps);
    Ok(())
}
