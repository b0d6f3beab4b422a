//! Report emission — serialize an analysis for downstream consumers.
//!
//! Two writers over the same [`Analysis`] value: a human-readable text
//! summary (what the batch analyzer prints per file) and a JSON document
//! (the data contract for rendering frontends and report tooling).

use std::io::Write;

use crate::analysis::Analysis;
use crate::motif::StairGrade;
use crate::Result;

/// Write the human-readable summary.
pub fn write_text_report<W: Write>(analysis: &Analysis, out: &mut W) -> Result<()> {
    writeln!(out, "// biofabric-rs analysis report")?;
    writeln!(out, "// Nodes: {}", analysis.node_order.len())?;
    writeln!(out, "// Edges: {}", analysis.edge_order.len())?;
    writeln!(out)?;

    writeln!(out, "{}", count_line(analysis.stairs.len(), "stair"))?;
    for (i, quality) in analysis.stair_qualities.iter().enumerate() {
        let grade = match quality.grade {
            StairGrade::Optimal => "optimal",
            StairGrade::SemiOptimal => "semi optimal",
        };
        match quality.score {
            Some(score) => writeln!(out, "  stair {i}: {grade}, score {score:.3}")?,
            None => writeln!(out, "  stair {i}: {grade}, score undefined")?,
        }
    }

    writeln!(out, "{}", count_line(analysis.escalators.len(), "escalator"))?;
    writeln!(out, "{}", count_line(analysis.runways.len(), "runway"))?;

    if let Some(stats) = analysis.span_stats {
        writeln!(out)?;
        writeln!(
            out,
            "Edge spans: min {}, max {}, mean {:.3}",
            stats.min, stats.max, stats.mean
        )?;
    }
    Ok(())
}

/// Write the JSON document.
pub fn write_json_report<W: Write>(analysis: &Analysis, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(out, analysis)?;
    Ok(())
}

fn count_line(count: usize, noun: &str) -> String {
    let shown = if count > 0 { count.to_string() } else { "no".to_string() };
    let plural = if count == 1 { "" } else { "s" };
    format!("Found {shown} {noun}{plural}!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisContext, analyze};
    use crate::model::{Edge, GraphModel, Node};
    use crate::ordering::{EdgeOrdering, NodeOrdering};

    fn star_analysis() -> Analysis {
        let graph = GraphModel::new(
            vec![
                Node::new(0, "hub"),
                Node::new(1, "b"),
                Node::new(2, "c"),
                Node::new(3, "d"),
            ],
            vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(0, 3)],
        );
        let ctx = AnalysisContext::new(NodeOrdering::Degree, EdgeOrdering::NodeOrder);
        analyze(&graph, &ctx).unwrap()
    }

    #[test]
    fn test_text_report_counts_motifs() {
        let mut buffer = Vec::new();
        write_text_report(&star_analysis(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Found 1 stair!"), "got:\n{text}");
        assert!(text.contains("Found no escalators!"), "got:\n{text}");
        assert!(text.contains("Found 1 runway!"), "got:\n{text}");
    }

    #[test]
    fn test_json_report_is_valid_json() {
        let mut buffer = Vec::new();
        write_json_report(&star_analysis(), &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["stairs"].as_array().unwrap().len(), 1);
        assert!(value.get("positions").is_none());
    }
}
