use log::info;
use std::io::Write;
use torus_automata::{Automaton, Config, NiceInt, Rule30};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut automaton = Automaton::<Rule30>::blank(Config::RULE30_WIDTH, Config::RULE30_HEIGHT);
    automaton.board_mut().seed(Config::RULE30_SEED);
    info!(
        "rule30: {}x{} board, {} generations",
        Config::RULE30_WIDTH,
        Config::RULE30_HEIGHT,
        NiceInt::from(Config::RULE30_GENERATIONS)
    );

    let mut out = std::io::stdout().lock();
    for _ in 0..Config::RULE30_GENERATIONS {
        automaton.step();
        Config::RULE30_PRINTER.print(automaton.board(), &mut out)?;
    }

    writeln!(out)?;
    Config::RULE30_PRINTER.print(automaton.board(), &mut out)?;
    out.flush()?;
    Ok(())
}
