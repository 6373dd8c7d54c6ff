//! Grid placement
//!
//! Every card grid in the document goes through [`layout_section`]: items are
//! placed row-major in input order and the container grows to fit whole rows.

use serde::Serialize;

/// Geometry of a card grid inside its container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub columns: usize,
    pub card_width: f32,
    pub card_height: f32,
    pub gap_x: f32,
    pub gap_y: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    /// Fixed height added on top of the rows
    pub header_height: f32,
    pub min_height: f32,
}

/// Where one card lands
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardPlacement {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLayout {
    pub cards: Vec<CardPlacement>,
    pub rows: usize,
    pub container_height: f32,
}

impl GridSpec {
    /// Horizontal distance between card origins
    pub fn pitch_x(&self) -> f32 {
        self.card_width + self.gap_x
    }

    /// Vertical distance between row origins
    pub fn pitch_y(&self) -> f32 {
        self.card_height + self.gap_y
    }

    fn columns(&self) -> usize {
        self.columns.max(1)
    }

    pub fn rows_for(&self, count: usize) -> usize {
        count.div_ceil(self.columns())
    }

    /// `max(min_height, rows * pitch_y + header_height)`
    pub fn container_height(&self, count: usize) -> f32 {
        let content = self.rows_for(count) as f32 * self.pitch_y() + self.header_height;
        content.max(self.min_height)
    }
}

/// Place `count` cards on the grid
pub fn layout_section(count: usize, spec: &GridSpec) -> GridLayout {
    let columns = spec.columns();
    let cards = (0..count)
        .map(|index| {
            let row = index / columns;
            let col = index % columns;
            CardPlacement {
                index,
                row,
                col,
                x: spec.origin_x + col as f32 * spec.pitch_x(),
                y: spec.origin_y + row as f32 * spec.pitch_y(),
                width: spec.card_width,
                height: spec.card_height,
            }
        })
        .collect();

    GridLayout {
        cards,
        rows: spec.rows_for(count),
        container_height: spec.container_height(count),
    }
}
