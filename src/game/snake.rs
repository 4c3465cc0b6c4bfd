use super::cell::Cell;
use super::direction::Direction;
use crate::consts;
use crate::options::GridSize;
use std::collections::VecDeque;

/// The snake: its body and the way it is heading
///
/// The head is stored apart from the rest of the body so that the snake can
/// never be empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    head: Cell,

    /// The positions of the rest of the snake's body, nearest the head first
    tail: VecDeque<Cell>,

    /// The direction in which the snake last moved
    direction: Direction,

    /// The direction the snake will move in on its next step.  Input only
    /// ever writes here; [`Snake::advance()`] commits it.
    pending: Direction,
}

impl Snake {
    /// Create a snake in its starting position
    pub(super) fn new() -> Snake {
        let [head, tail @ ..] = consts::INITIAL_BODY;
        Snake {
            head: Cell::from(head),
            tail: tail.into_iter().map(Cell::from).collect(),
            direction: Direction::Right,
            pending: Direction::Right,
        }
    }

    /// Build a snake from its cells, head first, already moving in
    /// `direction`
    #[cfg(test)]
    pub(super) fn from_cells(cells: &[(i32, i32)], direction: Direction) -> Snake {
        let mut iter = cells.iter().copied().map(Cell::from);
        let head = iter.next().expect("snake should have at least one cell");
        Snake {
            head,
            tail: iter.collect(),
            direction,
            pending: direction,
        }
    }

    /// Put the snake back in its starting position, facing right
    pub(super) fn reset(&mut self) {
        *self = Snake::new();
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Cell {
        self.head
    }

    /// Iterate over all cells occupied by the snake, head first
    pub(super) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.tail.iter().copied())
    }

    pub(super) fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Does any part of the snake occupy `cell`?
    pub(super) fn contains(&self, cell: Cell) -> bool {
        self.head == cell || self.tail.contains(&cell)
    }

    /// The direction the head is drawn facing: the most recently accepted
    /// turn, whether or not the snake has moved since
    pub(super) fn facing(&self) -> Direction {
        self.pending
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> &'static str {
        match self.facing() {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }

    /// Request that the snake turn to `direction` on its next step.  Requests
    /// to reverse straight back into the body are ignored.
    pub(super) fn set_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.pending = direction;
        }
    }

    /// Move the snake forwards one cell.  If the new head lands on `food`, the
    /// tail stays put (so the snake grows by one) and `true` is returned.
    pub(super) fn advance(&mut self, food: Cell) -> bool {
        self.direction = self.pending;
        let new_head = self.direction.step(self.head);
        self.tail.push_front(self.head);
        self.head = new_head;
        let ate = new_head == food;
        if !ate {
            let _ = self.tail.pop_back();
        }
        ate
    }

    /// Has the head left the grid or run into the rest of the body?
    pub(super) fn check_collision(&self, grid: GridSize) -> bool {
        !self.head.in_grid(grid) || self.tail.contains(&self.head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn body(snake: &Snake) -> Vec<(i32, i32)> {
        snake.cells().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn reset() {
        let mut s = Snake::from_cells(&[(9, 9), (9, 10)], Direction::Up);
        s.reset();
        assert_eq!(body(&s), [(3, 1), (2, 1), (1, 1)]);
        assert_eq!(s.direction, Direction::Right);
        assert_eq!(s.pending, Direction::Right);
        assert_eq!(s, Snake::new());
    }

    #[test]
    fn advance_onto_food() {
        let mut s = Snake::new();
        assert!(s.advance(Cell::new(4, 1)));
        assert_eq!(body(&s), [(4, 1), (3, 1), (2, 1), (1, 1)]);
    }

    #[test]
    fn advance_without_food() {
        let mut s = Snake::new();
        assert!(!s.advance(Cell::new(10, 10)));
        assert_eq!(body(&s), [(4, 1), (3, 1), (2, 1)]);
    }

    #[test]
    fn length_only_changes_on_eating() {
        let mut s = Snake::new();
        let far_away = Cell::new(-100, -100);
        for _ in 0..5 {
            let before = s.len();
            assert!(!s.advance(far_away));
            assert_eq!(s.len(), before);
        }
        s.set_direction(Direction::Down);
        let food = Direction::Down.step(s.head());
        assert!(s.advance(food));
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn turn_applies_on_next_step() {
        let mut s = Snake::new();
        s.set_direction(Direction::Down);
        assert_eq!(s.direction, Direction::Right);
        assert_eq!(s.pending, Direction::Down);
        s.advance(Cell::new(-1, -1));
        assert_eq!(s.direction, Direction::Down);
        assert_eq!(s.head(), Cell::new(3, 2));
    }

    #[test]
    fn reversal_is_ignored() {
        let mut s = Snake::new();
        s.set_direction(Direction::Left);
        assert_eq!(s.pending, Direction::Right);
        s.advance(Cell::new(-1, -1));
        assert_eq!(s.head(), Cell::new(4, 1));
    }

    #[test]
    fn last_request_between_steps_wins() {
        let mut s = Snake::new();
        s.set_direction(Direction::Up);
        s.set_direction(Direction::Down);
        s.advance(Cell::new(-1, -1));
        assert_eq!(s.direction, Direction::Down);
    }

    #[test]
    fn no_reversal_through_queued_turn() {
        // Up then Left while still committed to Right: Left is the opposite of
        // the committed direction and must not be accepted.
        let mut s = Snake::new();
        s.set_direction(Direction::Up);
        s.set_direction(Direction::Left);
        assert_eq!(s.pending, Direction::Up);
        s.advance(Cell::new(-1, -1));
        assert_eq!(s.direction, Direction::Up);
        s.set_direction(Direction::Left);
        s.advance(Cell::new(-1, -1));
        assert_eq!(s.direction, Direction::Left);
    }

    #[rstest]
    #[case(Direction::Up, "''")]
    #[case(Direction::Down, "..")]
    #[case(Direction::Right, " :")]
    fn head_faces_accepted_turn(#[case] d: Direction, #[case] symbol: &str) {
        let mut s = Snake::new();
        s.set_direction(d);
        assert_eq!(s.facing(), d);
        assert_eq!(s.head_symbol(), symbol);
    }

    #[test]
    fn head_ignores_rejected_turn() {
        let mut s = Snake::new();
        s.set_direction(Direction::Left);
        assert_eq!(s.facing(), Direction::Right);
        assert_eq!(s.head_symbol(), " :");
    }

    #[rstest]
    #[case(&[(20, 5), (19, 5)], true)]
    #[case(&[(-1, 5), (0, 5)], true)]
    #[case(&[(5, -1), (5, 0)], true)]
    #[case(&[(5, 20), (5, 19)], true)]
    #[case(&[(19, 19), (18, 19)], false)]
    #[case(&[(0, 0), (1, 0)], false)]
    #[case(&[(5, 5), (4, 5), (5, 5)], true)]
    #[case(&[(5, 5), (4, 5), (4, 6), (5, 6)], false)]
    #[case(&[(5, 5), (5, 6), (4, 6), (4, 5), (5, 5)], true)]
    fn test_check_collision(#[case] cells: &[(i32, i32)], #[case] collided: bool) {
        let s = Snake::from_cells(cells, Direction::Right);
        assert_eq!(s.check_collision(GridSize::default()), collided);
    }

    #[test]
    fn check_collision_is_pure() {
        let s = Snake::from_cells(&[(5, 5), (4, 5), (5, 5)], Direction::Right);
        let before = s.clone();
        assert!(s.check_collision(GridSize::default()));
        assert_eq!(s, before);
    }

    #[test]
    fn run_into_own_body() {
        let mut s = Snake::from_cells(
            &[(5, 5), (4, 5), (3, 5), (3, 6), (4, 6), (5, 6), (6, 6)],
            Direction::Right,
        );
        s.set_direction(Direction::Down);
        s.advance(Cell::new(-1, -1));
        assert_eq!(s.head(), Cell::new(5, 6));
        assert!(s.check_collision(GridSize::default()));
    }

    #[test]
    fn run_into_wall() {
        let mut s = Snake::new();
        s.set_direction(Direction::Up);
        s.advance(Cell::new(-1, -1));
        assert!(!s.check_collision(GridSize::default()));
        s.advance(Cell::new(-1, -1));
        assert_eq!(s.head(), Cell::new(3, -1));
        assert!(s.check_collision(GridSize::default()));
    }
}
