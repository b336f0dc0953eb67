/// Mapping between world units and terminal cells.
///
/// The simulation never sees cells; the renderer and the mouse handler go
/// through a `Viewport` in both directions.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub columns: u16,
    pub rows: u16,
    pub world_width: f32,
    pub world_height: f32,
}

impl Viewport {
    pub fn new(columns: u16, rows: u16, world_width: f32, world_height: f32) -> Self {
        Viewport {
            columns: columns.max(1),
            rows: rows.max(1),
            world_width,
            world_height,
        }
    }

    /// Same world, new terminal size.
    pub fn resized(&self, columns: u16, rows: u16) -> Self {
        Self::new(columns, rows, self.world_width, self.world_height)
    }

    fn scale_x(&self) -> f32 {
        self.columns as f32 / self.world_width
    }

    fn scale_y(&self) -> f32 {
        self.rows as f32 / self.world_height
    }

    /// Cell holding a world point.  May lie outside the terminal.
    pub fn cell_origin(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x * self.scale_x()).floor() as i32,
            (y * self.scale_y()).floor() as i32,
        )
    }

    pub fn contains_cell(&self, column: i32, row: i32) -> bool {
        column >= 0 && row >= 0 && column < self.columns as i32 && row < self.rows as i32
    }

    /// Like `cell_origin`, but `None` when the point is off-screen.
    pub fn to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let (column, row) = self.cell_origin(x, y);
        if self.contains_cell(column, row) {
            Some((column as u16, row as u16))
        } else {
            None
        }
    }

    /// Size of a world-space extent in cells, never less than one cell.
    pub fn cell_span(&self, width: f32, height: f32) -> (u16, u16) {
        let columns = (width * self.scale_x()).round().max(1.0);
        let rows = (height * self.scale_y()).round().max(1.0);
        (columns as u16, rows as u16)
    }

    /// World point at the centre of a cell.
    pub fn to_world(&self, column: u16, row: u16) -> (f32, f32) {
        (
            (column as f32 + 0.5) / self.scale_x(),
            (row as f32 + 0.5) / self.scale_y(),
        )
    }
}
