//! Per-page op list for printpdf 0.8
//!
//! Each primitive sets its own paint state, so ops can be appended to any
//! page in any order. Coordinates are PDF space (mm up from the bottom-left).

use printpdf::{
    BuiltinFont, Color, LinePoint, Mm, Op, PaintMode, Point, Polygon, PolygonRing, Pt, TextItem,
    WindingOrder,
};

#[derive(Default)]
pub struct PageOps {
    ops: Vec<Op>,
}

fn point(x: Mm, y: Mm) -> LinePoint {
    LinePoint {
        p: Point {
            x: x.into(),
            y: y.into(),
        },
        bezier: false,
    }
}

fn polygon(points: Vec<LinePoint>, mode: PaintMode) -> Op {
    Op::DrawPolygon {
        polygon: Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        },
    }
}

impl PageOps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Filled axis-aligned rectangle between two opposite corners
    pub fn fill_rect(&mut self, (x1, y1): (Mm, Mm), (x2, y2): (Mm, Mm), color: Color) {
        self.ops.push(Op::SetFillColor { col: color });
        self.ops.push(polygon(
            vec![point(x1, y1), point(x2, y1), point(x2, y2), point(x1, y2)],
            PaintMode::Fill,
        ));
    }

    /// Straight stroke; `thickness` is in points
    pub fn stroke_line(&mut self, from: (Mm, Mm), to: (Mm, Mm), color: Color, thickness: f32) {
        self.ops.push(Op::SetOutlineColor { col: color });
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
        self.ops.push(polygon(
            vec![point(from.0, from.1), point(to.0, to.1)],
            PaintMode::Stroke,
        ));
    }

    /// One run of Standard 14 text with its baseline at `origin`
    pub fn text(&mut self, text: &str, origin: (Mm, Mm), font: BuiltinFont, size: f32, color: Color) {
        if text.is_empty() {
            return;
        }
        self.ops.extend([
            Op::SetFillColor { col: color },
            Op::StartTextSection,
            Op::SetTextCursor {
                pos: Point {
                    x: origin.0.into(),
                    y: origin.1.into(),
                },
            },
            Op::SetFontSizeBuiltinFont {
                size: Pt(size),
                font,
            },
            Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(text.to_string())],
                font,
            },
            Op::EndTextSection,
        ]);
    }
}
