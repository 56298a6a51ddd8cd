//! Open cardinal-spline path generation for the trend sparkline.
//!
//! Port of the d3-shape cardinal curve with the tension fixed at 0, so
//! the smoothing factor is k = 1/6. The generator is a small state
//! machine over the last three accepted points: the first point emits a
//! move, the next two only buffer, and every later point emits one cubic
//! segment. Sequences shorter than four points degrade to a straight
//! line or a bare move.

/// An immutable 2D coordinate in pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One drawing command of a [`CurvePath`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
}

/// An ordered command list describing an open path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurvePath {
    commands: Vec<PathCommand>,
}

impl CurvePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, to: Point) {
        self.commands.push(PathCommand::MoveTo(to));
    }

    pub fn line_to(&mut self, to: Point) {
        self.commands.push(PathCommand::LineTo(to));
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) {
        self.commands.push(PathCommand::CubicTo { c1, c2, to });
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Sample the path into a polyline for renderers that can only draw
    /// straight segments. Each cubic contributes `steps_per_curve`
    /// uniformly spaced samples (at least one).
    pub fn flatten(&self, steps_per_curve: usize) -> Vec<Point> {
        let steps = steps_per_curve.max(1);
        let mut samples = Vec::new();
        let mut cursor = Point::default();

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(to) | PathCommand::LineTo(to) => {
                    samples.push(to);
                    cursor = to;
                }
                PathCommand::CubicTo { c1, c2, to } => {
                    for step in 1..=steps {
                        let t = step as f32 / steps as f32;
                        samples.push(cubic_at(cursor, c1, c2, to, t));
                    }
                    cursor = to;
                }
            }
        }
        samples
    }
}

/// Fit an open cardinal spline (tension 0) through `points`.
///
/// The output is a `MoveTo` followed by cubic segments; a three-point
/// input falls back to a straight line to the last point, and zero, one
/// or two points produce no segments at all. Inputs of four or more
/// points additionally emit a degenerate closing cubic whose second
/// control point equals its endpoint, terminating the open curve the way
/// the d3 algorithm does.
pub fn cardinal_curve(points: &[Point]) -> CurvePath {
    let mut cardinal = Cardinal::new(0.0);
    for &point in points {
        cardinal.point(point);
    }
    cardinal.finish()
}

struct Cardinal {
    path: CurvePath,
    k: f32,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    seen: usize,
}

impl Cardinal {
    fn new(tension: f32) -> Self {
        Self {
            path: CurvePath::new(),
            k: (1.0 - tension) / 6.0,
            x0: 0.0,
            y0: 0.0,
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 0.0,
            seen: 0,
        }
    }

    fn point(&mut self, p: Point) {
        match self.seen {
            0 => self.path.move_to(p),
            1 | 2 => {}
            _ => self.segment(p.x, p.y),
        }
        self.seen += 1;

        // Shift the three-point window forward by one.
        self.x0 = self.x1;
        self.y0 = self.y1;
        self.x1 = self.x2;
        self.y1 = self.y2;
        self.x2 = p.x;
        self.y2 = p.y;
    }

    fn finish(mut self) -> CurvePath {
        match self.seen {
            3 => self.path.line_to(Point::new(self.x2, self.y2)),
            n if n >= 4 => self.segment(self.x1, self.y1),
            _ => {}
        }
        self.path
    }

    /// Emit the cubic ending at `(x2, y2)`, with tangents taken from the
    /// window and the incoming point `(x, y)`.
    fn segment(&mut self, x: f32, y: f32) {
        self.path.cubic_to(
            Point::new(
                self.x1 + self.k * (self.x2 - self.x0),
                self.y1 + self.k * (self.y2 - self.y0),
            ),
            Point::new(
                self.x2 + self.k * (self.x1 - x),
                self.y2 + self.k * (self.y1 - y),
            ),
            Point::new(self.x2, self.y2),
        );
    }
}

fn cubic_at(from: Point, c1: Point, c2: Point, to: Point, t: f32) -> Point {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    Point::new(
        a * from.x + b * c1.x + c * c2.x + d * to.x,
        a * from.y + b * c1.y + c * c2.y + d * to.y,
    )
}
