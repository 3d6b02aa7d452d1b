use super::color::{Color, MOTIF_COLORS};
use super::layout::Layout;
use crate::motif::{MotifDefinition, MotifOccurrence};
use crate::seq::{GeneModel, Sequence, Span};
use pipeplot::{Band, Legend, LegendEntry, Pipe, PipePlot, Seg, Shape, DEFAULT_FONT_FAMILY};

const MOTIF_OPACITY: f64 = 0.6;

/// Everything computed for one sequence that is needed to draw its row
#[derive(Debug, Clone)]
pub struct Track<'a> {
    pub sequence: &'a Sequence,
    pub model: GeneModel,
    pub occurrences: Vec<MotifOccurrence>,
}

pub fn plot_tracks(layout: &Layout, tracks: &[Track], motifs: &[MotifDefinition]) -> PipePlot {
    let pipes = tracks
        .iter()
        .enumerate()
        .map(|(row, track)| get_pipe(layout, row, track))
        .collect();

    PipePlot {
        width: layout.width,
        height: layout.height,
        pipes,
        legend: get_legend(layout, motifs),
        font_family: DEFAULT_FONT_FAMILY.to_string(),
    }
}

fn get_pipe(layout: &Layout, row: usize, track: &Track) -> Pipe {
    let intron = |span: &Span| Seg {
        width: span.len() as u32,
        color: Color::Black.to_string(),
        shape: Shape::HLine(layout.intron_stroke),
    };
    let exon = Seg {
        width: track.model.exon.len() as u32,
        color: Color::Black.to_string(),
        shape: Shape::Rect,
    };
    let segs = vec![
        intron(&track.model.intron_before),
        exon,
        intron(&track.model.intron_after),
    ]
    .into_iter()
    .filter(|seg| seg.width > 0)
    .collect();

    let bands = track
        .occurrences
        .iter()
        .map(|occurrence| Band {
            pos: occurrence.start as u32,
            width: occurrence.len as u32,
            color: motif_color(layout, occurrence.motif_index).to_string(),
            opacity: MOTIF_OPACITY,
        })
        .collect();

    Pipe {
        xpos: layout.xpos,
        ypos: layout.feature_ypos(row),
        height: layout.box_height,
        segs,
        bands,
        label: Some(track.sequence.id.clone()),
    }
}

fn get_legend(layout: &Layout, motifs: &[MotifDefinition]) -> Legend {
    let mut entries = vec![
        LegendEntry {
            label: "exon".to_string(),
            color: Color::Black.to_string(),
            shape: Shape::Rect,
        },
        LegendEntry {
            label: "intron".to_string(),
            color: Color::Black.to_string(),
            shape: Shape::HLine(layout.intron_stroke),
        },
    ];
    for (index, motif) in motifs.iter().enumerate() {
        entries.push(LegendEntry {
            label: motif.raw.clone(),
            color: motif_color(layout, index).to_string(),
            shape: Shape::Rect,
        });
    }

    Legend {
        xpos: layout.legend.xpos,
        ypos: layout.legend.ypos,
        height: layout.legend.row_height,
        title: Some("Legend".to_string()),
        entries,
    }
}

fn motif_color(layout: &Layout, motif_index: usize) -> Color {
    MOTIF_COLORS[layout.color_index(motif_index) % MOTIF_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motif::scan_sequence;
    use crate::seq::segment;

    fn gene_plot(bases: &str, motif: &str) -> PipePlot {
        let sequence = Sequence::new("geneA", bases);
        let motifs = vec![MotifDefinition::new(motif).unwrap()];
        let track = Track {
            sequence: &sequence,
            model: segment(&sequence).unwrap(),
            occurrences: scan_sequence(&motifs, 0, &sequence),
        };
        let layout = Layout::compute(&[sequence.len()], motifs.len(), MOTIF_COLORS.len());
        plot_tracks(&layout, &[track], &motifs)
    }

    #[test]
    fn pipe_draws_introns_around_exon() {
        let plot = gene_plot("aaATGCCCtt", "ATG");
        let pipe = &plot.pipes[0];
        let shapes: Vec<_> = pipe.segs.iter().map(|s| (s.width, s.shape.clone())).collect();
        assert_eq!(
            shapes,
            vec![
                (2, Shape::HLine(5)),
                (6, Shape::Rect),
                (2, Shape::HLine(5)),
            ]
        );
        assert_eq!(pipe.width(), 10);
        assert_eq!(pipe.label.as_deref(), Some("geneA"));
    }

    #[test]
    fn empty_introns_are_not_drawn() {
        let plot = gene_plot("ATGCCCtt", "ATG");
        assert_eq!(plot.pipes[0].segs.len(), 2);
        assert_eq!(plot.pipes[0].segs[0].shape, Shape::Rect);
    }

    #[test]
    fn occurrences_become_bands() {
        let plot = gene_plot("aaATGCCCtt", "ATG");
        assert_eq!(
            plot.pipes[0].bands,
            vec![Band {
                pos: 2,
                width: 3,
                color: Color::Yellow.to_string(),
                opacity: MOTIF_OPACITY,
            }]
        );
    }

    #[test]
    fn legend_lists_exon_intron_and_motifs() {
        let plot = gene_plot("aaATGCCCtt", "atg");
        let labels: Vec<_> = plot.legend.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["exon", "intron", "atg"]);
        assert_eq!(plot.legend.entries[2].color, Color::Yellow.to_string());
    }
}
