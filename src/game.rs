use sweeper_field::{Coord, Field};
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

/// One session on a field, from the first click to the next restart.
pub struct Game {
    field: Field,
    status: Status,
    first_click: bool,
}

impl Game {
    pub fn new(field: Field) -> Self {
        Self { field, status: Status::Playing, first_click: true }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Mines minus flags, the number shown to the player. Goes negative with too many flags.
    pub fn mines_left(&self) -> isize {
        self.field.mine_count() as isize - self.field.flag_count() as isize
    }

    pub fn click(&mut self, point: Coord) {
        if self.status != Status::Playing {
            return;
        }
        let still_live = if self.first_click && self.field.contains(point) {
            // the first click never loses, the board is dealt again until it survives
            let mut retries = 0;
            while !self.field.open(point) {
                self.field.create();
                retries += 1;
            }
            if retries > 0 {
                info!(retries, "regenerated field to keep the first click safe");
            }
            self.first_click = false;
            true
        } else {
            self.field.open(point)
        };

        if !still_live {
            info!(?point, "game lost");
            self.status = Status::Lost;
            return;
        }
        self.check_win();
    }

    pub fn flag(&mut self, point: Coord) {
        if self.status != Status::Playing {
            return;
        }
        self.field.flag(point);
        self.check_win();
    }

    pub fn restart(&mut self) {
        self.field.create();
        self.status = Status::Playing;
        self.first_click = true;
        info!("started a new game");
    }

    fn check_win(&mut self) {
        if self.field.check_win() {
            self.field.put_flags_on_mines();
            self.status = Status::Won;
            info!("game won");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_field::FieldConfig;

    #[test]
    fn first_click_is_safe() {
        for seed in 0..50 {
            let field = Field::with_seed(FieldConfig::new(4, 4, 15), seed).unwrap();
            let mut game = Game::new(field);
            game.click((2, 1));
            assert_eq!(game.status(), Status::Won);
            assert!(game.field().get((2, 1)).unwrap().is_opened);
        }
    }

    #[test]
    fn out_of_bounds_first_click_keeps_protection() {
        let field = Field::with_mines(2, 2, &[(0, 0)]).unwrap();
        let mut game = Game::new(field);
        game.click((-1, 5));
        assert_eq!(game.status(), Status::Playing);
        assert!(game.first_click);
        game.click((0, 0));
        assert_ne!(game.status(), Status::Lost);
        assert!(game.field().get((0, 0)).unwrap().is_opened);
    }

    #[test]
    fn second_click_can_lose() {
        let field = Field::with_mines(2, 2, &[(0, 0)]).unwrap();
        let mut game = Game::new(field);
        game.click((1, 1));
        assert_eq!(game.status(), Status::Playing);
        game.click((0, 0));
        assert_eq!(game.status(), Status::Lost);
    }

    #[test]
    fn lost_game_ignores_input() {
        let field = Field::with_mines(2, 2, &[(0, 0)]).unwrap();
        let mut game = Game::new(field);
        game.click((1, 1));
        game.click((0, 0));
        game.click((0, 1));
        game.flag((1, 0));
        assert!(!game.field().get((0, 1)).unwrap().is_opened);
        assert!(!game.field().get((1, 0)).unwrap().has_flag);
    }

    #[test]
    fn winning_flags_the_mines() {
        let field = Field::with_mines(1, 3, &[(0, 0)]).unwrap();
        let mut game = Game::new(field);
        game.click((0, 2));
        assert_eq!(game.status(), Status::Won);
        assert!(game.field().get((0, 0)).unwrap().has_flag);
        assert_eq!(game.mines_left(), 0);
    }

    #[test]
    fn flags_count_down() {
        let field = Field::with_mines(3, 3, &[(0, 0), (2, 2)]).unwrap();
        let mut game = Game::new(field);
        assert_eq!(game.mines_left(), 2);
        game.flag((0, 1));
        game.flag((1, 0));
        game.flag((1, 2));
        assert_eq!(game.mines_left(), -1);
    }

    #[test]
    fn restart_unblocks() {
        let field = Field::with_mines(2, 2, &[(0, 0)]).unwrap();
        let mut game = Game::new(field);
        game.click((1, 1));
        game.click((0, 0));
        assert_eq!(game.status(), Status::Lost);
        game.restart();
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.field().closed_count(), 4);
        assert_eq!(game.field().mine_count(), 1);
    }
}
