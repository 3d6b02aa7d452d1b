//! Pixel geometry of the diagram. Sequences are drawn at one pixel per base.

pub const MARGIN: u32 = 50;
pub const ROW_HEIGHT: u32 = 100;
/// Centerline of the first row
pub const FIRST_ROW_Y: u32 = MARGIN + ROW_HEIGHT / 2;
pub const BOX_HEIGHT: u32 = 25;
pub const INTRON_STROKE: u32 = 5;
pub const LEGEND_ROW_HEIGHT: u32 = 30;
pub const LEGEND_MIN_WIDTH: u32 = 300;
/// Title, exon and intron rows
const LEGEND_FIXED_ROWS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendBox {
    pub xpos: u32,
    pub ypos: u32,
    pub height: u32,
    pub row_height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub xpos: u32,
    /// Centerline of each sequence row
    pub row_ypos: Vec<u32>,
    pub box_height: u32,
    pub intron_stroke: u32,
    pub legend: LegendBox,
    /// Palette index of each motif
    pub motif_colors: Vec<usize>,
}

impl Layout {
    pub fn compute(sequence_lengths: &[usize], motif_count: usize, palette_size: usize) -> Self {
        let row_count = sequence_lengths.len() as u32;
        let longest = sequence_lengths
            .iter()
            .max()
            .map_or(0, |len| u32::try_from(*len).unwrap_or(u32::MAX));

        let row_ypos = (0..row_count)
            .map(|row| FIRST_ROW_Y + row * ROW_HEIGHT)
            .collect();

        let legend_rows = LEGEND_FIXED_ROWS + motif_count as u32;
        let legend = LegendBox {
            xpos: MARGIN,
            ypos: MARGIN + row_count * ROW_HEIGHT,
            height: legend_rows * LEGEND_ROW_HEIGHT,
            row_height: LEGEND_ROW_HEIGHT,
        };

        let palette_size = palette_size.max(1);
        let motif_colors = (0..motif_count).map(|i| i % palette_size).collect();

        Self {
            width: longest.max(LEGEND_MIN_WIDTH).saturating_add(2 * MARGIN),
            height: legend.ypos + legend.height + MARGIN,
            xpos: MARGIN,
            row_ypos,
            box_height: BOX_HEIGHT,
            intron_stroke: INTRON_STROKE,
            legend,
            motif_colors,
        }
    }

    /// Top edge of the feature boxes in a row
    pub fn feature_ypos(&self, row: usize) -> u32 {
        self.row_ypos[row] - self.box_height / 2
    }

    pub fn color_index(&self, motif_index: usize) -> usize {
        self.motif_colors[motif_index]
    }
}
