use rand::prelude::*;
use sweeper_field::{Field, Level};

const GAMES: usize = 1000;

/// Plays a game by clicking random closed cells, always retrying a lost first click.
fn play(rng: &mut impl Rng, field: &mut Field) -> bool {
    let mut first = true;
    loop {
        let closed: Vec<_> = field.cells().filter(|(_, c)| !c.is_opened && !c.has_flag).map(|(p, _)| p).collect();
        let Some(&point) = closed.choose(rng) else { return field.check_win() };
        if first {
            while !field.open(point) {
                field.create();
            }
            first = false;
        } else if !field.open(point) {
            return false;
        }
        if field.check_win() {
            return true;
        }
    }
}

pub fn main() {
    let mut rng = rand::rng();
    for level in [Level::Beginner, Level::Intermediate, Level::Expert] {
        let mut field = Field::new(level.config()).unwrap();
        let mut wins = 0;
        for _ in 0..GAMES {
            field.create();
            if play(&mut rng, &mut field) {
                wins += 1;
            }
        }
        println!("{level:?}: won {wins} of {GAMES} games by guessing");
    }
}
