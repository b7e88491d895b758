use log::info;
use std::{io::Write, time::Instant};
use torus_automata::{Automaton, Config, Life, NiceInt};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut automaton = Automaton::<Life>::blank(Config::LIFE_WIDTH, Config::LIFE_HEIGHT);
    automaton.board_mut().seed(Config::LIFE_SEED);

    let timer = Instant::now();
    automaton.update(Config::LIFE_GENERATIONS);
    info!(
        "life: {} generations in {:?}, population {}",
        NiceInt::from(automaton.generation()),
        timer.elapsed(),
        NiceInt::from_usize(automaton.board().population())
    );

    let mut out = std::io::stdout().lock();
    writeln!(out)?;
    Config::LIFE_PRINTER.print(automaton.board(), &mut out)?;
    out.flush()?;
    Ok(())
}
