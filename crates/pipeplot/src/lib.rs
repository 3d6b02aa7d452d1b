/*!
This crate provides functionality to generate the so-called "pipe plots"
consisting of stacked horizontal pipes (bars). Each pipe consists of segments of
specified width, shape, and color, optionally overlaid with translucent bands.
Pipe plots can be annotated with per-pipe labels and a legend. The crate
supports rendering of pipe plots as SVG, PNG, and PDF images.

Pipe plots are useful for drawing gene models to scale: flanking introns as
thin lines, the exon as a solid block, and sequence features as bands.
*/

mod common;
mod image;
mod pdf;
mod pipeplot;
mod png;
mod svg;

pub use image::generate as generate_image;
pub use pipeplot::{
    Band, Color, Legend, LegendEntry, Pipe, PipePlot, Seg, Shape, DEFAULT_FONT_FAMILY,
};
