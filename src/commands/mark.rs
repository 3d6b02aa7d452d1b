use crate::cli::MarkArgs;
use crate::motif::{load_motifs, scan_sequence, MotifDefinition};
use crate::plot::{plot_tracks, Layout, Track, MOTIF_COLORS};
use crate::seq::{load_sequences, segment, Sequence};
use crate::utils::{Error, Result};
use itertools::Itertools;
use pipeplot::generate_image;
use rayon::{
    iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator},
    ThreadPoolBuilder,
};

pub fn motif_mark(args: &MarkArgs) -> Result<()> {
    let motifs = load_motifs(&args.motifs_path)?;
    let sequences = load_sequences(&args.fasta_path)?;
    log::info!(
        "Loaded {} sequence(s) and {} motif(s): {}",
        sequences.len(),
        motifs.len(),
        motifs.iter().map(|m| m.raw.as_str()).join(", ")
    );

    let pool = initialize_thread_pool(args.num_threads)?;
    let tracks = pool.install(|| mark_sequences(&sequences, &motifs))?;

    let sequence_lens = sequences.iter().map(Sequence::len).collect_vec();
    let layout = Layout::compute(&sequence_lens, motifs.len(), MOTIF_COLORS.len());
    let mut pipe_plot = plot_tracks(&layout, &tracks, &motifs);
    if let Some(font_family) = &args.font_family {
        pipe_plot.set_font_family(font_family);
    }

    let image_path = args.image_path();
    generate_image(&pipe_plot, &image_path).map_err(Error::Render)?;
    log::info!("Wrote {}", image_path.display());
    Ok(())
}

/// Segments every sequence and scans it for every motif. Sequences are processed
/// independently; tracks are returned in input order.
pub fn mark_sequences<'a>(
    sequences: &'a [Sequence],
    motifs: &[MotifDefinition],
) -> Result<Vec<Track<'a>>> {
    sequences
        .par_iter()
        .enumerate()
        .map(|(sequence_index, sequence)| {
            let model = segment(sequence)?;
            log::debug!(
                "{}: exon {}-{} of {} bp",
                sequence.id,
                model.exon.start,
                model.exon.end,
                sequence.len()
            );
            Ok(Track {
                sequence,
                model,
                occurrences: scan_sequence(motifs, sequence_index, sequence),
            })
        })
        .collect()
}

fn initialize_thread_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("motifmark-{}", i))
        .build()
        .map_err(|e| Error::ThreadPool(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::Span;

    fn motifs(raw: &[&str]) -> Vec<MotifDefinition> {
        raw.iter()
            .map(|m| MotifDefinition::new(m).unwrap())
            .collect()
    }

    #[test]
    fn tracks_keep_input_order() {
        let sequences = vec![
            Sequence::new("a", "ccATGcc"),
            Sequence::new("b", "ATGATG"),
            Sequence::new("c", "ttttGGGG"),
        ];
        let pool = initialize_thread_pool(3).unwrap();
        let tracks = pool
            .install(|| mark_sequences(&sequences, &motifs(&["atg"])))
            .unwrap();
        let ids = tracks.iter().map(|t| t.sequence.id.as_str()).collect_vec();
        assert_eq!(ids, vec!["a", "b", "c"]);
        let starts = tracks
            .iter()
            .map(|t| t.occurrences.iter().map(|o| o.start).collect_vec())
            .collect_vec();
        assert_eq!(starts, vec![vec![2], vec![0, 3], vec![]]);
        assert_eq!(tracks[2].model.exon, Span::new(4, 8));
    }

    #[test]
    fn malformed_sequence_aborts_the_run() {
        let sequences = vec![Sequence::new("good", "aATGa"), Sequence::new("bad", "acgt")];
        let result = mark_sequences(&sequences, &motifs(&["ATG"]));
        match result {
            Err(Error::MalformedSequence { id, .. }) => assert_eq!(id, "bad"),
            other => panic!("unexpected result: {:?}", other.map(|t| t.len())),
        }
    }
}
