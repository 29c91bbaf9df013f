mod tests {
    use shakecube_matrix::{BitGrid, font, grid::cell};

    #[test]
    fn test_set_and_get() {
        let mut grid = BitGrid::new();
        grid.set(3, 5, true);
        assert!(grid.get(3, 5));
        assert_eq!(grid.row(3), 0b0010_0000);

        grid.set(3, 5, false);
        assert!(!grid.get(3, 5));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_rows() {
        let mut grid = BitGrid::new();
        grid.set_row(0, 0b1000_0001);
        assert!(grid.get(0, 0));
        assert!(grid.get(0, 7));
        assert!(!grid.get(0, 1));
        assert_eq!(grid.count(), 2);

        grid.clear();
        assert_eq!(grid.rows(), [0; 8]);
    }

    #[test]
    fn test_shift_down_drops_bottom_row() {
        let mut grid = BitGrid::from_rows([1, 2, 3, 4, 5, 6, 7, 8]);
        grid.shift_down(9);
        assert_eq!(grid.rows(), [9, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_cell_bounds() {
        assert_eq!(cell(0, 0), Some((0, 0)));
        assert_eq!(cell(7, 7), Some((7, 7)));
        assert_eq!(cell(-1, 3), None);
        assert_eq!(cell(3, 8), None);
    }

    #[test]
    #[should_panic(expected = "outside of the 8x8 grid")]
    fn test_get_out_of_range_panics() {
        let _ = BitGrid::new().get(0, 8);
    }

    #[test]
    fn test_font_lookup() {
        assert_eq!(font::glyph('A'), Some(&[0x7E, 0x11, 0x11, 0x11, 0x7E]));
        assert_eq!(font::glyph('0'), Some(&[0x3E, 0x51, 0x49, 0x45, 0x3E]));
        assert!(font::glyph(' ').is_some());
        assert!(font::glyph('a').is_none());
        assert!(font::glyph('~').is_none());
    }
}
