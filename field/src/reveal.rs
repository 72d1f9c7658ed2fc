use std::collections::VecDeque;
use tracing::{debug, trace};

use crate::field::*;

impl Field {
    /// Open the cell at `point`. Returns `false` only when a mine went off.
    ///
    /// Clicking an already opened number whose flagged neighbours match it opens every
    /// unflagged neighbour instead. Positions outside the field do nothing.
    pub fn open(&mut self, point: Coord) -> bool {
        let Some(index) = self.index(point) else { return true };
        let cell = self.cells[index];

        if cell.is_opened() {
            if cell.count() > 0 && self.flags_around(point) == cell.count() as usize {
                return self.open_forcefully(point);
            }
            return true;
        }
        if cell.has_flag() {
            return true;
        }
        if cell.has_mine() {
            self.cells[index].open();
            debug!(?point, "stepped on a mine");
            return false;
        }
        if cell.count() > 0 {
            self.cells[index].open();
        } else {
            self.cascade(point);
        }
        true
    }

    pub fn flag(&mut self, point: Coord) {
        let Some(index) = self.index(point) else { return };
        let cell = &mut self.cells[index];
        if !cell.is_opened() {
            cell.set_flag(!cell.has_flag());
            trace!(?point, flagged = cell.has_flag(), "toggled flag");
        }
    }

    /// Mark every mine still hidden. Wrong flags elsewhere are left alone.
    pub fn put_flags_on_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| c.has_mine() && !c.is_opened()) {
            cell.set_flag(true);
        }
    }

    fn flags_around(&self, point: Coord) -> usize {
        adjacents(point)
            .filter_map(|p| self.index(p))
            .filter(|&i| self.cells[i].has_flag())
            .count()
    }

    fn open_forcefully(&mut self, point: Coord) -> bool {
        let mut still_live = true;
        for adj in adjacents(point) {
            let Some(index) = self.index(adj) else { continue };
            // a flag is trusted even when it's wrong
            if self.cells[index].has_flag() {
                continue;
            }
            self.cascade(adj);
            if self.cells[index].has_mine() {
                still_live = false;
            }
        }
        if !still_live {
            debug!(?point, "chord opened a mine");
        }
        still_live
    }

    /// Breadth-first reveal from `start`, spreading through cells with no adjacent mines.
    /// Returns how many cells were opened.
    fn cascade(&mut self, start: Coord) -> usize {
        let Some(start_index) = self.index(start) else { return 0 };
        let mut visited = vec![false; self.cells.len()];
        let mut queue = VecDeque::from([start]);
        visited[start_index] = true;
        let mut opened = 0;

        while let Some(point) = queue.pop_front() {
            let Some(index) = self.index(point) else { continue };
            let cell = &mut self.cells[index];
            if cell.is_opened() {
                continue;
            }
            cell.open();
            opened += 1;
            if cell.count() != 0 {
                continue;
            }
            for adj in adjacents(point) {
                if let Some(i) = self.index(adj) {
                    if !visited[i] {
                        visited[i] = true;
                        queue.push_back(adj);
                    }
                }
            }
        }

        trace!(?start, opened, "cascade");
        opened
    }
}
