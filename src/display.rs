//! Two-cell braille display
//!
//! The translator only produces [`Group`]s. Showing them is the job of a
//! [`Driver`], which raises the pins of the left and right cell. The driver
//! contract is idempotent: applying the pattern a cell already shows must
//! not move any pin.
//!
//! [`DiffingDriver`] implements the contract on top of an [`Actuator`] that
//! moves single pins. It remembers the pattern of each cell and only moves
//! the pins that differ, a few at a time. [`Presenter`] walks through a
//! sequence of groups in order.

use enumset::EnumSet;
use log::{debug, info};

use crate::braille::{Dot, DotSet, Group};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DriverError {
    #[error("Pin {dot:?} of the {side} cell failed to move")]
    PinFailed { side: CellSide, dot: Dot },
    #[error("Display is not available: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellSide {
    Left,
    Right,
}

impl std::fmt::Display for CellSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellSide::Left => write!(f, "left"),
            CellSide::Right => write!(f, "right"),
        }
    }
}

/// The contract of a two-cell display
pub trait Driver {
    /// Show `dots` on the cell at `side`
    fn apply(&mut self, side: CellSide, dots: DotSet) -> Result<(), DriverError>;
    /// Lower all pins of the cell at `side`
    fn reset(&mut self, side: CellSide) -> Result<(), DriverError>;
}

/// Moves a single pin of a cell
pub trait Actuator {
    fn set_pin(&mut self, side: CellSide, dot: Dot, raised: bool) -> Result<(), DriverError>;
}

/// A [`Driver`] that only moves the pins that need to change
#[derive(Debug)]
pub struct DiffingDriver<A> {
    actuator: A,
    /// The pattern of the left cell, `None` if it is unknown
    left: Option<DotSet>,
    /// The pattern of the right cell, `None` if it is unknown
    right: Option<DotSet>,
    batch_size: usize,
}

impl<A: Actuator> DiffingDriver<A> {
    /// Create a driver for cells that start with all pins lowered. At most
    /// `batch_size` pins are moved together.
    pub fn new(actuator: A, batch_size: usize) -> Self {
        DiffingDriver {
            actuator,
            left: Some(DotSet::default()),
            right: Some(DotSet::default()),
            batch_size: batch_size.max(1),
        }
    }

    /// The pattern a cell currently shows. `None` after a failed move.
    pub fn current(&self, side: CellSide) -> Option<DotSet> {
        match side {
            CellSide::Left => self.left,
            CellSide::Right => self.right,
        }
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    fn set_current(&mut self, side: CellSide, dots: Option<DotSet>) {
        match side {
            CellSide::Left => self.left = dots,
            CellSide::Right => self.right = dots,
        }
    }

    fn move_pins(&mut self, side: CellSide, pins: EnumSet<Dot>, raised: bool) -> Result<(), DriverError> {
        let pins: Vec<Dot> = pins.iter().collect();
        for batch in pins.chunks(self.batch_size) {
            debug!("{} cell: {} pins {:?}", side, if raised { "raise" } else { "lower" }, batch);
            for dot in batch {
                self.actuator.set_pin(side, *dot, raised)?;
            }
        }
        Ok(())
    }
}

impl<A: Actuator> Driver for DiffingDriver<A> {
    fn apply(&mut self, side: CellSide, dots: DotSet) -> Result<(), DriverError> {
        let (lower, raise) = match self.current(side) {
            Some(current) if current == dots => return Ok(()),
            Some(current) => (current.to_lower(dots), current.to_raise(dots)),
            // unknown state, move every pin
            None => (dots.dots().complement(), dots.dots()),
        };
        let result = self
            .move_pins(side, lower, false)
            .and_then(|_| self.move_pins(side, raise, true));
        match result {
            Ok(()) => {
                self.set_current(side, Some(dots));
                Ok(())
            }
            Err(e) => {
                self.set_current(side, None);
                Err(e)
            }
        }
    }

    fn reset(&mut self, side: CellSide) -> Result<(), DriverError> {
        self.apply(side, DotSet::default())
    }
}

/// An [`Actuator`] that only logs the pin movements
#[derive(Debug, Default)]
pub struct LogActuator {
    moves: usize,
}

impl LogActuator {
    /// Number of single pin movements so far
    pub fn moves(&self) -> usize {
        self.moves
    }
}

impl Actuator for LogActuator {
    fn set_pin(&mut self, side: CellSide, dot: Dot, raised: bool) -> Result<(), DriverError> {
        self.moves += 1;
        debug!(
            "{} cell pin {} {}",
            side,
            dot.position(),
            if raised { "up" } else { "down" }
        );
        Ok(())
    }
}

/// Shows a sequence of groups on a two-cell display, one after the other
#[derive(Debug)]
pub struct Presenter<D> {
    driver: D,
    groups: Vec<Group>,
    position: usize,
}

impl<D: Driver> Presenter<D> {
    pub fn new(driver: D, groups: Vec<Group>) -> Self {
        Presenter {
            driver,
            groups,
            position: 0,
        }
    }

    /// Show a single group. A group without secondary symbol clears the
    /// right cell.
    pub fn show(driver: &mut D, group: &Group) -> Result<(), DriverError> {
        driver.apply(CellSide::Left, group.primary.dots)?;
        match &group.secondary {
            Some(secondary) => driver.apply(CellSide::Right, secondary.dots),
            None => driver.reset(CellSide::Right),
        }
    }

    /// Show the next group and return it, or `None` when all groups have
    /// been shown
    pub fn next(&mut self) -> Result<Option<&Group>, DriverError> {
        let Some(group) = self.groups.get(self.position) else {
            return Ok(None);
        };
        info!(
            "group {}/{}: {} {}",
            self.position + 1,
            self.groups.len(),
            group.describe(),
            group.to_dots()
        );
        Self::show(&mut self.driver, group)?;
        self.position += 1;
        Ok(Some(group))
    }

    /// Lower all pins of both cells
    pub fn clear(&mut self) -> Result<(), DriverError> {
        self.driver.reset(CellSide::Left)?;
        self.driver.reset(CellSide::Right)
    }

    pub fn remaining(&self) -> usize {
        self.groups.len() - self.position
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.groups.len()
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::braille::Symbol;

    /// Records every pin movement, optionally failing on one pin
    #[derive(Debug, Default)]
    struct RecordingActuator {
        moves: Vec<(CellSide, u8, bool)>,
        broken: Option<Dot>,
    }

    impl Actuator for RecordingActuator {
        fn set_pin(&mut self, side: CellSide, dot: Dot, raised: bool) -> Result<(), DriverError> {
            if self.broken == Some(dot) {
                return Err(DriverError::PinFailed { side, dot });
            }
            self.moves.push((side, dot.position(), raised));
            Ok(())
        }
    }

    /// Records every driver call
    #[derive(Debug, Default)]
    struct RecordingDriver {
        calls: Vec<(CellSide, Option<String>)>,
    }

    impl Driver for RecordingDriver {
        fn apply(&mut self, side: CellSide, dots: DotSet) -> Result<(), DriverError> {
            self.calls.push((side, Some(dots.to_dots())));
            Ok(())
        }

        fn reset(&mut self, side: CellSide) -> Result<(), DriverError> {
            self.calls.push((side, None));
            Ok(())
        }
    }

    fn dots(positions: &[u8]) -> DotSet {
        DotSet::from_positions(positions)
    }

    #[test]
    fn only_changed_pins_move() {
        let mut driver = DiffingDriver::new(RecordingActuator::default(), 2);
        driver.apply(CellSide::Left, dots(&[1, 2])).unwrap();
        driver.apply(CellSide::Left, dots(&[2, 3])).unwrap();
        assert_eq!(
            driver.actuator().moves,
            vec![
                (CellSide::Left, 1, true),
                (CellSide::Left, 2, true),
                (CellSide::Left, 1, false),
                (CellSide::Left, 3, true),
            ]
        );
        assert_eq!(driver.current(CellSide::Left), Some(dots(&[2, 3])));
        assert_eq!(driver.current(CellSide::Right), Some(DotSet::default()));
    }

    #[test]
    fn apply_is_idempotent() {
        let mut driver = DiffingDriver::new(RecordingActuator::default(), 2);
        driver.apply(CellSide::Right, dots(&[1, 3, 4, 5])).unwrap();
        let moves = driver.actuator().moves.len();
        driver.apply(CellSide::Right, dots(&[1, 3, 4, 5])).unwrap();
        assert_eq!(driver.actuator().moves.len(), moves);
        driver.reset(CellSide::Left).unwrap();
        assert_eq!(driver.actuator().moves.len(), moves);
    }

    #[test]
    fn reset_lowers_raised_pins() {
        let mut driver = DiffingDriver::new(RecordingActuator::default(), 1);
        driver.apply(CellSide::Right, dots(&[4, 6])).unwrap();
        driver.reset(CellSide::Right).unwrap();
        assert_eq!(
            driver.actuator().moves[2..],
            [(CellSide::Right, 4, false), (CellSide::Right, 6, false)]
        );
        assert_eq!(driver.current(CellSide::Right), Some(DotSet::default()));
    }

    #[test]
    fn failed_pin() {
        let actuator = RecordingActuator {
            broken: Some(Dot::Dot3),
            ..Default::default()
        };
        let mut driver = DiffingDriver::new(actuator, 2);
        assert_eq!(
            driver.apply(CellSide::Left, dots(&[1, 3])),
            Err(DriverError::PinFailed {
                side: CellSide::Left,
                dot: Dot::Dot3
            })
        );
        assert_eq!(driver.current(CellSide::Left), None);
        // after a failure every pin is moved again
        driver.actuator.broken = None;
        driver.actuator.moves.clear();
        driver.apply(CellSide::Left, dots(&[1, 3])).unwrap();
        assert_eq!(driver.actuator().moves.len(), 6);
        assert_eq!(driver.current(CellSide::Left), Some(dots(&[1, 3])));
    }

    #[test]
    fn presenter() {
        let groups = vec![
            Group::pair(Symbol::new(dots(&[1]), "a"), Symbol::new(dots(&[1, 2]), "b")),
            Group::single(Symbol::new(dots(&[1, 4]), "c")),
        ];
        let mut presenter = Presenter::new(RecordingDriver::default(), groups);
        assert_eq!(presenter.remaining(), 2);
        assert_eq!(presenter.next().unwrap().map(|g| g.describe()), Some("a + b".to_string()));
        assert_eq!(presenter.next().unwrap().map(|g| g.describe()), Some("c".to_string()));
        assert!(presenter.is_finished());
        assert_eq!(presenter.next().unwrap(), None);
        presenter.clear().unwrap();
        assert_eq!(
            presenter.into_driver().calls,
            vec![
                (CellSide::Left, Some("1".to_string())),
                (CellSide::Right, Some("12".to_string())),
                (CellSide::Left, Some("14".to_string())),
                (CellSide::Right, None),
                (CellSide::Left, None),
                (CellSide::Right, None),
            ]
        );
    }

    #[test]
    fn log_actuator_counts_moves() {
        let mut driver = DiffingDriver::new(LogActuator::default(), 2);
        driver.apply(CellSide::Left, dots(&[1, 2, 3])).unwrap();
        driver.apply(CellSide::Left, dots(&[1, 2, 3])).unwrap();
        assert_eq!(driver.actuator().moves(), 3);
    }
}
