use layercube::prelude::*;

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let count = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_SCRAMBLE_MOVES,
    };

    let mut cube = Cube::solved();
    cube.scramble_cube(count);
    log::info!("scramble: {}", cube.scramble_sequence());

    let solution = SimpleSolver::new(&mut cube).solve()?;
    log::info!("solution: {}", solution);

    anyhow::ensure!(cube.is_solved(), "solver left the cube unsolved");
    println!("{}", solution);

    Ok(())
}
