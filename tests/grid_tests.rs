use battleship_melee::{BoardGrid, Coordinate, Grid, GridError};

#[test]
fn test_small_grid() {
    let mut grid = Grid::<u16, 4>::new();
    grid.insert(Coordinate::new(4, 4)).unwrap();
    assert_eq!((!grid).count(), 15);
    assert!(grid.insert(Coordinate::new(5, 1)).is_err());
}

#[test]
fn test_insert_and_contains() {
    let mut grid = BoardGrid::new();
    assert!(grid.is_empty());

    grid.insert(Coordinate::new(1, 1)).unwrap();
    grid.insert(Coordinate::new(10, 10)).unwrap();
    assert!(grid.contains(Coordinate::new(1, 1)).unwrap());
    assert!(grid.contains(Coordinate::new(10, 10)).unwrap());
    assert!(!grid.contains(Coordinate::new(5, 5)).unwrap());
    assert_eq!(grid.count(), 2);
}

#[test]
fn test_out_of_bounds() {
    let mut grid = BoardGrid::new();
    assert_eq!(
        grid.insert(Coordinate::new(11, 1)),
        Err(GridError::OutOfBounds { row: 11, col: 1 })
    );
    assert_eq!(
        grid.contains(Coordinate::new(0, 3)),
        Err(GridError::OutOfBounds { row: 0, col: 3 })
    );
    assert!(grid.is_empty());
}

#[test]
fn test_from_coordinates_and_cells() {
    let grid = BoardGrid::from_coordinates([Coordinate::new(3, 4), Coordinate::new(1, 2)]).unwrap();
    let cells: Vec<_> = grid.cells().collect();
    assert_eq!(cells, vec![Coordinate::new(1, 2), Coordinate::new(3, 4)]);
}

#[test]
fn test_complement_and_ops() {
    let a = BoardGrid::from_coordinates([Coordinate::new(1, 1), Coordinate::new(2, 2)]).unwrap();
    let b = BoardGrid::from_coordinates([Coordinate::new(2, 2), Coordinate::new(3, 3)]).unwrap();

    assert_eq!((!a).count(), 98);
    assert_eq!((a & b).cells().collect::<Vec<_>>(), vec![Coordinate::new(2, 2)]);

    let mut c = a;
    c |= b;
    assert_eq!(c.count(), 3);
    assert!((a & !a).is_empty());
}
