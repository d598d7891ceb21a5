//! Visualization utilities for grid_navigation
//!
//! Read-only snapshot rendering of the map, goal, robot and latest path,
//! either through gnuplot or as plain text. Row 0 is drawn at the top.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{Cell, CellState, GridPath, NavigationError, NavigationResult};
use crate::utils::GridMap;

/// Color palette for consistent styling
pub mod colors {
    pub const OBSTACLE: &str = "#000000";
    pub const GOAL: &str = "#00FF00";
    pub const ROBOT: &str = "#FF0000";
    pub const PATH: &str = "#0000FF";
}

/// Plot coordinates of a cell: x = column, y = -row
pub fn cell_to_plot(cell: Cell) -> (f64, f64) {
    (cell.col as f64, -(cell.row as f64))
}

/// Plot-ready coordinate series extracted from one snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridSeries {
    pub obstacle_x: Vec<f64>,
    pub obstacle_y: Vec<f64>,
    pub path_x: Vec<f64>,
    pub path_y: Vec<f64>,
    pub robot: (f64, f64),
    pub goal: (f64, f64),
}

impl GridSeries {
    pub fn from_snapshot(grid: &GridMap, robot: Cell, goal: Cell, path: &GridPath) -> Self {
        let (obstacle_x, obstacle_y) = grid
            .cells()
            .filter(|&(_, state)| state == CellState::Obstacle)
            .map(|(cell, _)| cell_to_plot(cell))
            .unzip();
        let (path_x, path_y) = path.iter().map(|&cell| cell_to_plot(cell)).unzip();

        Self {
            obstacle_x,
            obstacle_y,
            path_x,
            path_y,
            robot: cell_to_plot(robot),
            goal: cell_to_plot(goal),
        }
    }
}

/// gnuplot renderer for grid snapshots
pub struct GridVisualizer {
    figure: Figure,
    title: String,
    cell_point_size: f64,
}

impl GridVisualizer {
    pub fn new(title: &str) -> Self {
        Self {
            figure: Figure::new(),
            title: title.to_string(),
            cell_point_size: 4.0,
        }
    }

    pub fn with_cell_point_size(mut self, size: f64) -> Self {
        self.cell_point_size = size;
        self
    }

    /// Replace the figure contents with one snapshot
    pub fn draw(&mut self, grid: &GridMap, robot: Cell, goal: Cell, path: &GridPath) -> &mut Self {
        let series = GridSeries::from_snapshot(grid, robot, goal, path);
        let size = self.cell_point_size;

        self.figure.clear_axes();
        self.figure
            .axes2d()
            .set_title(&self.title, &[])
            .set_x_range(AutoOption::Fix(-1.0), AutoOption::Fix(grid.width() as f64))
            .set_y_range(AutoOption::Fix(-(grid.height() as f64)), AutoOption::Fix(1.0))
            .set_aspect_ratio(AutoOption::Fix(1.0))
            .points(
                &series.obstacle_x,
                &series.obstacle_y,
                &[Caption("Obstacles"), Color(colors::OBSTACLE), PointSymbol('S'), PointSize(size)],
            )
            .points(
                &[series.goal.0],
                &[series.goal.1],
                &[Caption("Goal"), Color(colors::GOAL), PointSymbol('S'), PointSize(size)],
            )
            .lines(
                &series.path_x,
                &series.path_y,
                &[Caption("Path"), Color(colors::PATH), LineWidth(2.0)],
            )
            .points(
                &[series.robot.0],
                &[series.robot.1],
                &[Caption("Robot"), Color(colors::ROBOT), PointSymbol('O'), PointSize(size * 0.6)],
            );
        self
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> NavigationResult<()> {
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| NavigationError::Visualization(e.to_string()))
    }

    /// Save plot to SVG file
    pub fn save_svg(&mut self, path: &str, width: u32, height: u32) -> NavigationResult<()> {
        self.figure
            .save_to_svg(path, width, height)
            .map_err(|e| NavigationError::Visualization(e.to_string()))
    }
}

/// Text rendering: `#` obstacle, `.` free, `*` path, `G` goal, `R` robot
pub fn render_ascii(grid: &GridMap, robot: Cell, goal: Cell, path: &GridPath) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for (cell, state) in grid.cells() {
        let symbol = if cell == robot {
            'R'
        } else if cell == goal {
            'G'
        } else if state == CellState::Obstacle {
            '#'
        } else if path.cells.contains(&cell) {
            '*'
        } else {
            '.'
        };
        out.push(symbol);
        if cell.col as usize + 1 == grid.width() {
            out.push('\n');
        }
    }
    out
}
