//! Renders assembled scenes as svg documents.
//!
//! This is the drawing collaborator of the evaluation engine: the engine
//! guarantees only the geometric content of a [`Scene`], everything visual
//! lives in a [`SceneStyle`] value and is passed in explicitly. One [`SVG`]
//! holds the elements of one animation frame.

use nalgebra::{Vector2, Vector3};
use std::fmt::{Display, Formatter};

use crate::bounding_box::BoundingBox;
use crate::scene::Scene;

type Rect = (f64, f64, f64, f64);

/// An svg document built from simple drawable elements.
pub struct SVG {
    /// The document's view box as `(x, y, width, height)`
    pub view_box: Rect,
    /// Raster size in pixels the document asks to be displayed at
    pub size: Option<(u32, u32)>,
    /// Mirror the y axis so it points up like in plotting coordinates
    pub flip_y: bool,
    /// Elements in paint order, later ones on top
    pub elements: Vec<Box<dyn Display>>,
}

impl SVG {
    /// A viewport showing `bb` with the y axis pointing up.
    ///
    /// Svg's own y axis points down, so the body is mirrored and the view
    /// box covers the mirrored image of `bb`.
    pub fn for_box(bb: &BoundingBox<f64>) -> SVG {
        SVG {
            view_box: (bb.min.x, -bb.max.y, bb.width(), bb.height()),
            size: None,
            flip_y: true,
            elements: Vec::with_capacity(0),
        }
    }

    /// Appends any displayable element to the document
    pub fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }
}

impl Display for SVG {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<svg viewBox=\"{} {} {} {}\"",
            self.view_box.0, self.view_box.1, self.view_box.2, self.view_box.3
        )?;
        if let Some((width, height)) = self.size {
            write!(f, " width=\"{}\" height=\"{}\"", width, height)?;
        }
        writeln!(f, " xmlns=\"http://www.w3.org/2000/svg\">")?;
        if self.flip_y {
            writeln!(f, "<g transform=\"scale(1 -1)\">")?;
        }
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        if self.flip_y {
            writeln!(f, "</g>")?;
        }
        writeln!(f, "</svg>")?;
        return Ok(());
    }
}

/// A straight stroke between two points.
pub struct Line {
    /// Start point
    pub from: Vector2<f64>,
    /// End point
    pub to: Vector2<f64>,
    /// Stroke width in scene units
    pub width: f64,
    /// Stroke color
    pub color: &'static str,
    /// Dash and gap length, `None` for a solid stroke
    pub dash: Option<(f64, f64)>,
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
            self.from[0], self.from[1], self.to[0], self.to[1], self.color, self.width
        )?;
        if let Some((dash, gap)) = self.dash {
            write!(f, " stroke-dasharray=\"{} {}\"", dash, gap)?;
        }
        writeln!(f, "/>")?;
        return Ok(());
    }
}

/// A filled or outlined circle marker.
pub struct Circle {
    /// The marker's position
    pub center: Vector2<f64>,
    /// Radius in scene units
    pub radius: f64,
    /// Fill color, `"none"` for an open marker
    pub fill: &'static str,
    /// Optional outline as color and width
    pub stroke: Option<(&'static str, f64)>,
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"",
            self.center[0], self.center[1], self.radius, self.fill
        )?;
        if let Some((color, width)) = self.stroke {
            write!(f, " stroke=\"{}\" stroke-width=\"{}\"", color, width)?;
        }
        writeln!(f, "/>")?;
        return Ok(());
    }
}

/// An open polyline through a sequence of points.
pub struct Polyline {
    /// The stroked points, in order
    pub points: Vec<Vector2<f64>>,
    /// Stroke color
    pub color: &'static str,
    /// Stroke width in scene units
    pub width: f64,
    /// Dash and gap length, `None` for a solid stroke
    pub dash: Option<(f64, f64)>,
}

impl Display for Polyline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<polyline fill=\"none\" points=\"")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{},{}", p[0], p[1])?;
        }
        write!(
            f,
            "\" stroke=\"{}\" stroke-width=\"{}\"",
            self.color, self.width
        )?;
        if let Some((dash, gap)) = self.dash {
            write!(f, " stroke-dasharray=\"{} {}\"", dash, gap)?;
        }
        writeln!(f, "/>")?;
        return Ok(());
    }
}

/// Every visual choice made when drawing a scene.
///
/// Sizes are in scene units, so tune them to the extent of your view box.
/// The defaults fit scenes roughly ten units across.
pub struct SceneStyle {
    /// Color of the dashed scaffold lines
    pub link_color: &'static str,
    /// Width of the dashed scaffold lines
    pub link_width: f64,
    /// Dash pattern of the scaffold lines
    pub link_dash: (f64, f64),
    /// Fill of the control point markers
    pub control_color: &'static str,
    /// Radius of the control point markers
    pub control_radius: f64,
    /// Color of the center cross
    pub center_color: &'static str,
    /// Half extent of the center cross
    pub center_size: f64,
    /// Fill of the small markers on every interpolation level
    pub marker_color: &'static str,
    /// Radius of the level markers
    pub marker_radius: f64,
    /// Alternating colors of the level polylines
    pub level_colors: [&'static str; 2],
    /// Width of the level polylines
    pub level_width: f64,
    /// Color of the accumulated curve
    pub trace_color: &'static str,
    /// Width of the accumulated curve
    pub trace_width: f64,
    /// Fill of the final projected point's marker
    pub projected_color: &'static str,
    /// Radius of the final projected point's marker
    pub projected_radius: f64,
    /// Radius of the open marker on the newest curve point
    pub tip_radius: f64,
}

impl Default for SceneStyle {
    fn default() -> Self {
        SceneStyle {
            link_color: "gray",
            link_width: 0.03,
            link_dash: (0.15, 0.1),
            control_color: "blue",
            control_radius: 0.12,
            center_color: "#ec407a",
            center_size: 0.25,
            marker_color: "green",
            marker_radius: 0.07,
            level_colors: ["cyan", "magenta"],
            level_width: 0.03,
            trace_color: "black",
            trace_width: 0.04,
            projected_color: "yellow",
            projected_radius: 0.1,
            tip_radius: 0.12,
        }
    }
}

fn xy(p: Vector3<f64>) -> Vector2<f64> {
    Vector2::new(p.x, p.y)
}

impl SVG {
    /// Draws one frame of the construction.
    ///
    /// Elements are appended lines first and markers second, so every marker
    /// sits on top of the scaffold it belongs to.
    pub fn add_scene(&mut self, scene: &Scene<f64>, style: &SceneStyle) {
        let link = |from, to| Line {
            from,
            to,
            width: style.link_width,
            color: style.link_color,
            dash: Some(style.link_dash),
        };

        // Control polygon and the projection of each of its points
        self.add_elem(Polyline {
            points: scene.control_points.iter().map(|p| p.position).collect(),
            color: style.link_color,
            width: style.link_width,
            dash: Some(style.link_dash),
        });
        for (point, projected) in scene.control_points.iter().zip(scene.levels[0].iter()) {
            self.add_elem(link(point.position, xy(*projected)));
        }

        // The interpolation scaffold, one polyline per level, the single
        // point of the last level excluded
        for (k, level) in scene.levels.iter().enumerate() {
            if level.len() < 2 {
                continue;
            }
            self.add_elem(Polyline {
                points: level.iter().map(|&p| xy(p)).collect(),
                color: style.level_colors[(k + 1) % 2],
                width: style.level_width,
                dash: None,
            });
        }

        // The curve traced out so far and the link back up to the scaffold
        if scene.trace.len() > 1 {
            self.add_elem(Polyline {
                points: scene.trace.to_vec(),
                color: style.trace_color,
                width: style.trace_width,
                dash: None,
            });
        }
        self.add_elem(link(scene.curve_point, xy(scene.projected_point)));

        // Markers, on top of all lines
        for point in scene.control_points.iter() {
            self.add_elem(Circle {
                center: point.position,
                radius: style.control_radius,
                fill: style.control_color,
                stroke: None,
            });
        }
        let arm = Vector2::new(style.center_size, 0.0);
        self.add_elem(Line {
            from: scene.center - arm,
            to: scene.center + arm,
            width: style.link_width,
            color: style.center_color,
            dash: None,
        });
        let arm = Vector2::new(0.0, style.center_size);
        self.add_elem(Line {
            from: scene.center - arm,
            to: scene.center + arm,
            width: style.link_width,
            color: style.center_color,
            dash: None,
        });
        for level in scene.levels.iter().filter(|level| level.len() > 1) {
            for &point in level.iter() {
                self.add_elem(Circle {
                    center: xy(point),
                    radius: style.marker_radius,
                    fill: style.marker_color,
                    stroke: None,
                });
            }
        }
        self.add_elem(Circle {
            center: xy(scene.projected_point),
            radius: style.projected_radius,
            fill: style.projected_color,
            stroke: None,
        });
        self.add_elem(Circle {
            center: scene.curve_point,
            radius: style.tip_radius,
            fill: "none",
            stroke: Some((style.trace_color, style.link_width)),
        });
    }
}
