use hollow_logic::{Cell, Maze, SelectionConfig, Treasure};
use tracing_subscriber::EnvFilter;

fn treasures(pairs: &[(u64, u64)]) -> Vec<Treasure> {
    pairs
        .iter()
        .filter_map(|&(value, weight)| Treasure::new(value, weight).ok())
        .collect()
}

fn main() -> Result<(), hollow_logic::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut maze = Maze::new(SelectionConfig::default());

    let spooky = maze.add_exclusive(treasures(&[(6, 3), (10, 2), (4, 4)]))?;
    let mystical_a = maze.add_shared(|| treasures(&[(30, 6), (12, 2), (5, 5)]))?;
    let mystical_b = maze.add_shared(Vec::new)?;

    let path = [
        Cell::Terrain,
        Cell::Hollow(spooky),
        Cell::Terrain,
        Cell::Hollow(mystical_a),
        Cell::Hollow(mystical_b),
    ];

    match maze.take_treasures(&path, 10)? {
        Some(taken) => {
            for treasure in &taken {
                println!("{} (ratio {:.2})", treasure, treasure.ratio());
            }
            let weight: u64 = taken.iter().map(|t| t.weight()).sum();
            println!("-----------");
            println!("taken: {}, weight: {}", taken.len(), weight);
        }
        None => println!("no treasures"),
    }

    Ok(())
}
